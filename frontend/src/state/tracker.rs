//! Pure state transitions for the leave tracker.
//!
//! Nothing here touches the DOM or storage: a [`Command`] is applied to a
//! [`TrackerState`] and yields the next state plus a description of what
//! changed, which the reactive layer uses to decide what to persist.

use chrono::{DateTime, Utc};

use crate::config::DEFAULT_SCOPE;
use crate::store::{
    Identity, LeaveApplication, LeaveForm, LeaveStatus, PortalError, Snapshot, SubmitOptions,
    UserType,
};
use crate::utils::time::parse_form_date;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please login first";
pub const DATE_ORDER_MESSAGE: &str = "End date must be after start date";
pub const INVALID_DATE_MESSAGE: &str = "Please choose both a start date and an end date";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerState {
    pub current_user: Option<Identity>,
    pub applications: Vec<LeaveApplication>,
}

impl TrackerState {
    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn latest(&self) -> Option<&LeaveApplication> {
        self.applications.last()
    }

    pub fn find(&self, id: i64) -> Option<&LeaveApplication> {
        self.applications.iter().find(|app| app.id == id)
    }
}

impl From<Snapshot> for TrackerState {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            current_user: snapshot.current_user,
            applications: snapshot.applications,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login {
        email: String,
        user_type: UserType,
        at: DateTime<Utc>,
    },
    Logout,
    Submit {
        form: LeaveForm,
        options: SubmitOptions,
        at: DateTime<Utc>,
    },
    Approve {
        id: i64,
        at: DateTime<Utc>,
    },
    Reject {
        id: i64,
        reason: Option<String>,
        at: DateTime<Utc>,
    },
    Reset,
}

/// Which persisted keys a transition invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Session,
    Applications,
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TrackerState,
    pub change: Change,
    /// Application created or updated by the command, if any.
    pub touched: Option<i64>,
}

pub fn validate_email(email: &str) -> Result<String, PortalError> {
    let trimmed = email.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        return Err(PortalError::validation(INVALID_EMAIL_MESSAGE));
    }
    Ok(trimmed.to_string())
}

/// Millisecond timestamp id, bumped past the last id so ids stay unique.
fn next_id(applications: &[LeaveApplication], at: &DateTime<Utc>) -> Result<i64, PortalError> {
    let candidate = at.timestamp_millis();
    match applications.last() {
        Some(last) if candidate <= last.id => last
            .id
            .checked_add(1)
            .ok_or_else(|| PortalError::Storage(format!("no id left after {}", last.id))),
        _ => Ok(candidate),
    }
}

fn optional_name(value: Option<String>) -> Option<String> {
    value
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn build_application(
    owner: &Identity,
    existing: &[LeaveApplication],
    form: LeaveForm,
    options: SubmitOptions,
    at: DateTime<Utc>,
) -> Result<LeaveApplication, PortalError> {
    let (start_date, end_date) = match (
        parse_form_date(&form.start_date),
        parse_form_date(&form.end_date),
    ) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(PortalError::validation(INVALID_DATE_MESSAGE)),
    };
    if start_date > end_date {
        return Err(PortalError::validation(DATE_ORDER_MESSAGE));
    }
    let scope = options
        .scope
        .map(|scope| scope.trim().to_string())
        .filter(|scope| !scope.is_empty())
        .unwrap_or_else(|| DEFAULT_SCOPE.to_string());

    Ok(LeaveApplication {
        id: next_id(existing, &at)?,
        email: owner.email.clone(),
        start_date,
        end_date,
        category: form.category,
        reason: form.reason,
        document: optional_name(form.document),
        voice: optional_name(form.voice),
        scope,
        status: LeaveStatus::Pending,
        submitted_at: at,
        approved_at: None,
        rejected_at: None,
        rejection_reason: None,
    })
}

fn decide(
    state: &TrackerState,
    id: i64,
    apply: impl FnOnce(&mut LeaveApplication),
) -> Result<Transition, PortalError> {
    let mut next = state.clone();
    let app = next
        .applications
        .iter_mut()
        .find(|app| app.id == id)
        .ok_or(PortalError::NotFound(id))?;
    if app.status.is_terminal() {
        // Decisions are not guarded; the latest one wins.
        log::info!(
            "Overwriting {} decision on application {}",
            app.status.as_str(),
            id
        );
    }
    apply(app);
    Ok(Transition {
        state: next,
        change: Change::Applications,
        touched: Some(id),
    })
}

pub fn reduce(state: &TrackerState, command: Command) -> Result<Transition, PortalError> {
    match command {
        Command::Login {
            email,
            user_type,
            at,
        } => {
            let email = validate_email(&email)?;
            let mut next = state.clone();
            next.current_user = Some(Identity {
                email,
                user_type,
                login_time: at,
            });
            Ok(Transition {
                state: next,
                change: Change::Session,
                touched: None,
            })
        }
        Command::Logout => {
            let mut next = state.clone();
            next.current_user = None;
            Ok(Transition {
                state: next,
                change: Change::Session,
                touched: None,
            })
        }
        Command::Submit { form, options, at } => {
            let owner = state
                .current_user
                .as_ref()
                .ok_or_else(|| PortalError::validation(LOGIN_REQUIRED_MESSAGE))?;
            let application = build_application(owner, &state.applications, form, options, at)?;
            let id = application.id;
            let mut next = state.clone();
            next.applications.push(application);
            Ok(Transition {
                state: next,
                change: Change::Applications,
                touched: Some(id),
            })
        }
        Command::Approve { id, at } => decide(state, id, |app| {
            app.status = LeaveStatus::Approved;
            app.approved_at = Some(at);
        }),
        Command::Reject { id, reason, at } => decide(state, id, |app| {
            app.status = LeaveStatus::Rejected;
            app.rejected_at = Some(at);
            app.rejection_reason = reason;
        }),
        Command::Reset => Ok(Transition {
            state: TrackerState::default(),
            change: Change::Cleared,
            touched: None,
        }),
    }
}
