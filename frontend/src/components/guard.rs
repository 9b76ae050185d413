use crate::state::portal::use_portal;
use leptos::*;

/// Renders children only while someone is signed in; nothing otherwise.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let portal = use_portal();
    let signed_in = portal.is_signed_in();
    view! {
        <Show when=move || signed_in.get() fallback=|| ()>
            {children()}
        </Show>
    }
}
