use crate::components::notifications::NotificationHost;
use crate::state::portal::use_portal;
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let portal = use_portal();
    let signed_in = portal.is_signed_in();
    let on_logout = move |_| portal.logout();
    view! {
        <header class="site-header bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">
                            "Student Leave Portal"
                        </h1>
                    </div>
                    <Show when=move || signed_in.get()>
                        <button
                            id="logoutButton"
                            on:click=on_logout
                            class="px-4 py-2 rounded-md text-sm font-medium bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                        >
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-5xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
            <NotificationHost/>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::portal::provide_portal;
    use crate::store::UserType;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_hides_logout_when_signed_out() {
        let html = render_to_string(move || {
            provide_portal();
            view! { <Header /> }
        });
        assert!(html.contains("Student Leave Portal"));
        assert!(!html.contains("Logout"));
    }

    #[test]
    fn header_shows_logout_when_signed_in() {
        let html = render_to_string(move || {
            provide_portal().login("a@b.com", UserType::Student).unwrap();
            view! { <Header /> }
        });
        assert!(html.contains("Logout"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_portal();
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }
}
