use chrono_tz::Tz;
use leptos::*;

use crate::store::{LeaveApplication, LeaveForm, LeaveStatus, SubmitOptions, UserType};
use crate::utils::time::display_date_in;

pub const NO_REASON_FALLBACK: &str = "No reason provided";

pub const LEAVE_CATEGORIES: [(&str, &str); 5] = [
    ("medical", "Medical"),
    ("personal", "Personal"),
    ("family", "Family Emergency"),
    ("academic", "Academic Event"),
    ("other", "Other"),
];

pub const LEAVE_SCOPES: [&str; 2] = ["College", "Hostel"];

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub user_type: RwSignal<UserType>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            user_type: create_rw_signal(UserType::Student),
        }
    }
}

impl LoginFormState {
    pub fn clear(&self) {
        self.email.set(String::new());
    }
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    category: RwSignal<String>,
    reason: RwSignal<String>,
    document: RwSignal<Option<String>>,
    voice: RwSignal<Option<String>>,
    scope: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            category: create_rw_signal(LEAVE_CATEGORIES[0].0.to_string()),
            reason: create_rw_signal(String::new()),
            document: create_rw_signal(None),
            voice: create_rw_signal(None),
            scope: create_rw_signal(LEAVE_SCOPES[0].to_string()),
        }
    }
}

impl LeaveFormState {
    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn category_signal(&self) -> RwSignal<String> {
        self.category
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn document_signal(&self) -> RwSignal<Option<String>> {
        self.document
    }

    pub fn voice_signal(&self) -> RwSignal<Option<String>> {
        self.voice
    }

    pub fn scope_signal(&self) -> RwSignal<String> {
        self.scope
    }

    pub fn reset(&self) {
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.category.set(LEAVE_CATEGORIES[0].0.to_string());
        self.reason.set(String::new());
        self.document.set(None);
        self.voice.set(None);
        self.scope.set(LEAVE_SCOPES[0].to_string());
    }

    /// Snapshot of the raw field values; validation happens in the reducer.
    pub fn to_form(self) -> (LeaveForm, SubmitOptions) {
        let form = LeaveForm {
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            category: self.category.get_untracked(),
            reason: self.reason.get_untracked().trim().to_string(),
            document: self.document.get_untracked(),
            voice: self.voice.get_untracked(),
        };
        let scope = self.scope.get_untracked();
        let options = SubmitOptions {
            scope: if scope.trim().is_empty() {
                None
            } else {
                Some(scope)
            },
        };
        (form, options)
    }
}

/// Blocking message shown above a form until the next attempt.
#[derive(Clone, Default)]
pub struct MessageState {
    pub error: Option<String>,
}

impl MessageState {
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    pub fn clear(&mut self) {
        self.error = None;
    }
}

/// The three mutually exclusive status blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    Pending,
    Approved { approved_on: String },
    Rejected { reason: String },
}

impl StatusView {
    pub fn from_application(app: &LeaveApplication, tz: Tz) -> Self {
        match app.status {
            LeaveStatus::Pending => StatusView::Pending,
            LeaveStatus::Approved => StatusView::Approved {
                approved_on: app
                    .approved_at
                    .as_ref()
                    .map(|at| display_date_in(at, tz))
                    .unwrap_or_default(),
            },
            LeaveStatus::Rejected => StatusView::Rejected {
                reason: app
                    .rejection_reason
                    .as_deref()
                    .map(str::trim)
                    .filter(|reason| !reason.is_empty())
                    .unwrap_or(NO_REASON_FALLBACK)
                    .to_string(),
            },
        }
    }
}

pub fn category_label(value: &str) -> &str {
    LEAVE_CATEGORIES
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

pub fn date_range_label(app: &LeaveApplication) -> String {
    if app.start_date == app.end_date {
        app.start_date.format("%Y-%m-%d").to_string()
    } else {
        format!(
            "{} to {}",
            app.start_date.format("%Y-%m-%d"),
            app.end_date.format("%Y-%m-%d")
        )
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn leave_form_snapshot_and_reset() {
        with_runtime(|| {
            let state = LeaveFormState::default();
            state.start_signal().set("2024-01-05".into());
            state.end_signal().set("2024-01-10".into());
            state.reason_signal().set("  fever ".into());
            state.document_signal().set(Some("note.pdf".into()));
            state.scope_signal().set("Hostel".into());

            let (form, options) = state.to_form();
            assert_eq!(form.start_date, "2024-01-05");
            assert_eq!(form.reason, "fever");
            assert_eq!(form.category, "medical");
            assert_eq!(form.document.as_deref(), Some("note.pdf"));
            assert_eq!(options.scope.as_deref(), Some("Hostel"));

            state.reset();
            let (form, options) = state.to_form();
            assert!(form.start_date.is_empty());
            assert!(form.document.is_none());
            assert_eq!(options.scope.as_deref(), Some("College"));
        });
    }
}
