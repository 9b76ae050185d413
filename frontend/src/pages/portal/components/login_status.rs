use crate::store::Identity;
use leptos::*;

#[component]
pub fn LoginStatus(user: Signal<Option<Identity>>) -> impl IntoView {
    let email = move || user.get().map(|u| u.email).unwrap_or_default();
    let role = move || {
        user.get()
            .map(|u| u.user_type.label())
            .unwrap_or_default()
    };
    view! {
        <section id="loginStatus" class="bg-status-success-bg border border-status-success-border text-status-success-text rounded-lg px-4 py-3">
            <p class="text-sm">
                {"Signed in as "}
                <strong data-bind="email">{email}</strong>
                <span class="ml-2 text-xs uppercase tracking-wide opacity-75">{role}</span>
            </p>
        </section>
    }
}
