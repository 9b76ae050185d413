use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn PortalLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{"Leave requests"}</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        {"Sign in, apply for leave and follow the decision on your latest application."}
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
