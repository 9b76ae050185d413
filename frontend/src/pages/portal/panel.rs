use super::{
    components::{
        demo_controls::DemoControls, leave_form::LeaveForm, login_form::LoginForm,
        login_status::LoginStatus, status_panel::StatusPanel,
    },
    layout::PortalLayout,
    view_model::use_portal_view_model,
};
use crate::components::guard::RequireSession;
use leptos::*;

#[component]
pub fn PortalPage() -> impl IntoView {
    view! { <PortalPanel /> }
}

#[component]
pub fn PortalPanel() -> impl IntoView {
    let vm = use_portal_view_model();
    let portal = vm.portal;
    let signed_in = portal.is_signed_in();
    let current_user = portal.current_user();
    let latest = portal.latest_application();
    let has_application = Signal::derive(move || latest.with(Option::is_some));

    view! {
        <PortalLayout>
            <Show
                when=move || signed_in.get()
                fallback=move || view! { <LoginForm vm=vm /> }
            >
                <LoginStatus user=current_user />
            </Show>
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                <LeaveForm vm=vm />
                <RequireSession>
                    <div class="space-y-6">
                        <StatusPanel latest=latest />
                        <DemoControls
                            has_application=has_application
                            on_approve=Callback::new(move |_| {
                                portal.demo_approve();
                            })
                            on_reject=Callback::new(move |_| {
                                portal.demo_reject();
                            })
                            on_reset=Callback::new(move |_| portal.demo_reset())
                        />
                    </div>
                </RequireSession>
            </div>
        </PortalLayout>
    }
}
