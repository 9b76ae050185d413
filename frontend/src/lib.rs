use leptos::*;
use leptos_meta::{provide_meta_context, Title};

mod components;
pub mod config;
mod pages;
mod state;
mod store;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::PortalPage;
use state::portal::PortalProvider;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", err).into());
    }
    log::info!("Starting Student Leave Portal (wasm)");

    let cfg = config::init();
    log::debug!(
        "Runtime config: login delay {} ms, notification ttl {} ms",
        cfg.login_delay_ms,
        cfg.notification_ttl_ms
    );

    mount_to_body(|| {
        provide_meta_context();
        view! {
            <Title text="Student Leave Portal"/>
            <PortalProvider>
                <PortalPage/>
            </PortalProvider>
        }
    });
}
