use crate::components::common::{Button, ButtonVariant};
use leptos::*;

/// Stand-in for the faculty side: decides the newest application locally.
#[component]
pub fn DemoControls(
    has_application: Signal<bool>,
    on_approve: Callback<()>,
    on_reject: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let no_application = Signal::derive(move || !has_application.get());
    view! {
        <section id="demoControls" class="bg-surface-muted border border-dashed border-border-strong rounded-lg p-4 space-y-3">
            <div>
                <h3 class="text-base font-semibold text-fg">{"Demo controls"}</h3>
                <p class="text-sm text-fg-muted">
                    {"Simulate a faculty decision on the latest application."}
                </p>
            </div>
            <div class="flex flex-wrap gap-2">
                <Button
                    variant=ButtonVariant::Primary
                    disabled=no_application
                    on:click=move |_| on_approve.call(())
                >
                    {"Approve latest"}
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    disabled=no_application
                    on:click=move |_| on_reject.call(())
                >
                    {"Reject latest"}
                </Button>
                <Button variant=ButtonVariant::Secondary on:click=move |_| on_reset.call(())>
                    {"Reset demo"}
                </Button>
            </div>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(has_application: bool) -> String {
        render_to_string(move || {
            let noop = Callback::new(|_: ()| {});
            view! {
                <DemoControls
                    has_application=Signal::derive(move || has_application)
                    on_approve=noop
                    on_reject=noop
                    on_reset=noop
                />
            }
        })
    }

    #[test]
    fn decision_buttons_follow_latest_application() {
        let without = render(false);
        let with = render(true);
        assert!(without.contains("Approve latest"));
        assert!(with.contains("Reject latest"));
        assert!(with.contains("Reset demo"));
        assert!(without.matches("disabled").count() > with.matches("disabled").count());
    }
}
