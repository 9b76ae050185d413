use crate::components::common::Button;
use crate::components::error::InlineErrorMessage;
use crate::pages::portal::view_model::PortalViewModel;
use crate::store::UserType;
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn LoginForm(vm: PortalViewModel) -> impl IntoView {
    let pending = vm.login_action.pending();
    let email = vm.login_form.email;
    let user_type = vm.login_form.user_type;
    let error = Signal::derive(move || vm.login_message.get().error);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_login();
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-medium text-fg">{"Sign in"}</h2>
                <p class="text-sm text-fg-muted">
                    {"Use your institute email. This demo accepts any address."}
                </p>
            </div>
            <InlineErrorMessage error=error />
            <form id="loginForm" class="space-y-4" on:submit=handle_submit>
                <div>
                    <label for="email" class="block text-sm font-medium text-fg">{"Email"}</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        class="mt-1 block w-full border rounded px-2 py-1"
                        placeholder="you@college.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            let target = event_target::<HtmlInputElement>(&ev);
                            email.set(target.value());
                        }
                    />
                </div>
                <div>
                    <label for="userType" class="block text-sm font-medium text-fg">{"I am a"}</label>
                    <select
                        id="userType"
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || user_type.get().as_str()
                        on:change=move |ev| {
                            if let Some(parsed) = UserType::parse(&event_target_value(&ev)) {
                                user_type.set(parsed);
                            }
                        }
                    >
                        <option value={UserType::Student.as_str()}>{UserType::Student.label()}</option>
                        <option value={UserType::Faculty.as_str()}>{UserType::Faculty.label()}</option>
                    </select>
                </div>
                <Button loading=pending class="w-full">
                    {move || if pending.get() { "Logging in..." } else { "Login" }}
                </Button>
            </form>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::portal::provide_portal;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_form_renders_fields() {
        let html = render_to_string(move || {
            provide_portal();
            let vm = PortalViewModel::new();
            view! { <LoginForm vm=vm /> }
        });
        assert!(html.contains("id=\"loginForm\""));
        assert!(html.contains("id=\"email\""));
        assert!(html.contains("Faculty"));
        assert!(html.contains("Login"));
        assert!(html.contains("w-full"));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn login_form_shows_validation_error() {
        let html = render_to_string(move || {
            provide_portal();
            let vm = PortalViewModel::new();
            vm.login_form.email.set("nobody".into());
            vm.submit_login();
            view! { <LoginForm vm=vm /> }
        });
        assert!(html.contains("Please enter a valid email address"));
    }
}
