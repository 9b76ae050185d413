use crate::state::notifications::Notification;
use crate::state::portal::use_portal;
use leptos::*;

fn banner_class(notification: &Notification) -> String {
    let motion = if notification.leaving {
        "animate-slide-out"
    } else {
        "animate-slide-in"
    };
    format!(
        "{} {} px-6 py-4 rounded-lg shadow-lg text-sm",
        notification.kind.as_class(),
        motion
    )
}

/// Fixed top-right stack of transient banners.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let portal = use_portal();
    let items = portal.notifier.items();
    view! {
        <div class="fixed top-5 right-5 z-[1000] flex flex-col gap-2" aria-live="polite">
            <For
                each=move || items.get()
                key=|item| (item.id, item.leaving)
                children=move |item| {
                    let class = banner_class(&item);
                    view! { <div class=class role="status">{item.message}</div> }
                }
            />
        </div>
    }
}
