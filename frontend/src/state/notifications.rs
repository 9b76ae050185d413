use leptos::*;
use uuid::Uuid;

/// Time between a banner starting its exit animation and leaving the DOM.
pub const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
}

impl NotificationKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Info => "notification info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    pub leaving: bool,
}

/// Banners currently on screen, oldest first. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationStack {
    items: Vec<Notification>,
}

impl NotificationStack {
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            leaving: false,
        });
        id
    }

    pub fn mark_leaving(&mut self, id: Uuid) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.leaving = true;
        }
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct Notifier {
    stack: RwSignal<NotificationStack>,
    ttl_ms: u32,
}

impl Notifier {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            stack: create_rw_signal(NotificationStack::default()),
            ttl_ms,
        }
    }

    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> Uuid {
        let message = message.into();
        log::debug!("notify[{:?}]: {}", kind, message);
        let mut id = Uuid::nil();
        self.stack.update(|stack| id = stack.push(message, kind));
        schedule_dismiss(self.stack, id, self.ttl_ms);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.notify(message, NotificationKind::Success)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.notify(message, NotificationKind::Info)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.stack.update(|stack| {
            stack.dismiss(id);
        });
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        let stack = self.stack;
        Signal::derive(move || stack.with(|stack| stack.items().to_vec()))
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(stack: RwSignal<NotificationStack>, id: Uuid, ttl_ms: u32) {
    use gloo_timers::callback::Timeout;

    Timeout::new(ttl_ms, move || {
        stack.update(|s| s.mark_leaving(id));
        Timeout::new(EXIT_ANIMATION_MS, move || {
            stack.update(|s| {
                s.dismiss(id);
            });
        })
        .forget();
    })
    .forget();
}

// Host builds have no event loop to drive timers; banners stay until dismissed.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_stack: RwSignal<NotificationStack>, _id: Uuid, _ttl_ms: u32) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_keeps_duplicates_in_order() {
        let mut stack = NotificationStack::default();
        let first = stack.push("Login successful!", NotificationKind::Success);
        let second = stack.push("Login successful!", NotificationKind::Success);
        assert_ne!(first, second);
        assert_eq!(stack.items().len(), 2);
        assert_eq!(stack.items()[0].id, first);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut stack = NotificationStack::default();
        let first = stack.push("one", NotificationKind::Info);
        let second = stack.push("two", NotificationKind::Success);
        stack.mark_leaving(first);
        assert!(stack.items()[0].leaving);
        assert!(!stack.items()[1].leaving);

        assert!(stack.dismiss(first));
        assert!(!stack.dismiss(first));
        assert_eq!(stack.items().len(), 1);
        assert_eq!(stack.items()[0].id, second);
        assert!(stack.dismiss(second));
        assert!(stack.is_empty());
    }

    #[test]
    fn kind_maps_to_banner_class() {
        assert_eq!(NotificationKind::Success.as_class(), "notification success");
        assert_eq!(NotificationKind::Info.as_class(), "notification info");
    }
}
