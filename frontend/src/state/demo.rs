//! Console helpers for driving the approval flow by hand:
//! `demoApprove()`, `demoReject()` and `demoReset()` on `window`.

use std::cell::Cell;

use super::portal::PortalState;

thread_local! {
    static ACTIVE: Cell<Option<PortalState>> = const { Cell::new(None) };
}

pub fn register(state: PortalState) {
    ACTIVE.with(|active| active.set(Some(state)));
}

pub fn active() -> Option<PortalState> {
    ACTIVE.with(|active| active.get())
}

fn with_active(name: &str, f: impl FnOnce(PortalState)) {
    match active() {
        Some(state) => f(state),
        None => log::warn!("{} called before the portal was mounted", name),
    }
}

pub fn approve_latest() {
    with_active("demoApprove", |state| {
        state.demo_approve();
    });
}

pub fn reject_latest() {
    with_active("demoReject", |state| {
        state.demo_reject();
    });
}

pub fn reset() {
    with_active("demoReset", |state| state.demo_reset());
}

#[cfg(target_arch = "wasm32")]
mod exports {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(js_name = demoApprove)]
    pub fn demo_approve() {
        super::approve_latest();
    }

    #[wasm_bindgen(js_name = demoReject)]
    pub fn demo_reject() {
        super::reject_latest();
    }

    #[wasm_bindgen(js_name = demoReset)]
    pub fn demo_reset() {
        super::reset();
    }
}
