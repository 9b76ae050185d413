//! Page-level side effects. Host builds log instead of touching a window.

#[cfg(target_arch = "wasm32")]
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            log::error!("Failed to reload page: {:?}", err);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reload_page() {
    log::debug!("reload_page skipped outside the browser");
}

#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    log::warn!("alert: {}", message);
}
