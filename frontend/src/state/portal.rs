use leptos::*;

use super::notifications::Notifier;
use super::tracker::{reduce, Change, Command, Transition, TrackerState};
use crate::config::{self, PortalConfig};
use crate::store::{
    Identity, LeaveApplication, LeaveForm, LeaveRepository, PortalError, SubmitOptions, UserType,
};
use crate::utils::{browser, time};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Leave application submitted successfully!";
pub const DEMO_APPROVED_MESSAGE: &str = "Application approved!";
pub const DEMO_REJECTED_MESSAGE: &str = "Application rejected!";
pub const DEMO_REJECTION_REASON: &str = "Demo rejection reason";

/// Application state owned by the root component and shared through context.
/// Every mutation goes through [`PortalState::dispatch`], which applies the
/// reducer, persists the affected keys, then publishes the new state.
#[derive(Clone, Copy)]
pub struct PortalState {
    tracker: RwSignal<TrackerState>,
    repository: StoredValue<LeaveRepository>,
    default_scope: StoredValue<String>,
    pub notifier: Notifier,
}

impl PortalState {
    pub fn new(repository: LeaveRepository, cfg: &PortalConfig) -> Self {
        let snapshot = repository.restore();
        Self {
            tracker: create_rw_signal(TrackerState::from(snapshot)),
            repository: store_value(repository),
            default_scope: store_value(cfg.default_scope.clone()),
            notifier: Notifier::new(cfg.notification_ttl_ms),
        }
    }

    pub fn current_user(&self) -> Signal<Option<Identity>> {
        let tracker = self.tracker;
        Signal::derive(move || tracker.with(|state| state.current_user.clone()))
    }

    pub fn is_signed_in(&self) -> Signal<bool> {
        let tracker = self.tracker;
        Signal::derive(move || tracker.with(|state| state.is_signed_in()))
    }

    pub fn latest_application(&self) -> Signal<Option<LeaveApplication>> {
        let tracker = self.tracker;
        Signal::derive(move || tracker.with(|state| state.latest().cloned()))
    }

    pub fn snapshot(&self) -> TrackerState {
        self.tracker.get_untracked()
    }

    fn persist(&self, transition: &Transition) {
        let result = self.repository.with_value(|repo| match transition.change {
            Change::Session => match &transition.state.current_user {
                Some(user) => repo.save_user(user),
                None => repo.clear_user(),
            },
            Change::Applications => repo.save_applications(&transition.state.applications),
            Change::Cleared => repo.clear_all(),
        });
        if let Err(err) = result {
            log::error!("Failed to persist {:?} ({}): {}", transition.change, err.code(), err);
        }
    }

    pub fn dispatch(&self, command: Command) -> Result<Option<i64>, PortalError> {
        let current = self.tracker.get_untracked();
        let transition = reduce(&current, command)?;
        self.persist(&transition);
        let touched = transition.touched;
        self.tracker.set(transition.state);
        Ok(touched)
    }

    pub fn login(&self, email: &str, user_type: UserType) -> Result<(), PortalError> {
        self.dispatch(Command::Login {
            email: email.to_string(),
            user_type,
            at: time::now(),
        })?;
        log::info!("Signed in as {}", user_type.as_str());
        self.notifier.success(LOGIN_SUCCESS_MESSAGE);
        Ok(())
    }

    /// Clears the session and reloads; applications are rehydrated on the next load.
    pub fn logout(&self) {
        if let Err(err) = self.dispatch(Command::Logout) {
            log::error!("Logout failed: {}", err);
        }
        browser::reload_page();
    }

    pub fn submit(&self, form: LeaveForm, mut options: SubmitOptions) -> Result<i64, PortalError> {
        if options.scope.is_none() {
            options.scope = Some(self.default_scope.get_value());
        }
        let id = self
            .dispatch(Command::Submit {
                form,
                options,
                at: time::now(),
            })?
            .ok_or_else(|| PortalError::validation("Submission produced no application"))?;
        log::info!("Submitted leave application {}", id);
        self.notifier.success(SUBMIT_SUCCESS_MESSAGE);
        Ok(id)
    }

    /// Returns whether an application was updated. Unknown ids are ignored.
    pub fn approve(&self, id: i64) -> bool {
        self.decide(Command::Approve {
            id,
            at: time::now(),
        })
    }

    pub fn reject(&self, id: i64, reason: Option<String>) -> bool {
        self.decide(Command::Reject {
            id,
            reason,
            at: time::now(),
        })
    }

    fn decide(&self, command: Command) -> bool {
        match self.dispatch(command) {
            Ok(_) => true,
            Err(PortalError::NotFound(id)) => {
                log::warn!("Ignoring decision for unknown application {}", id);
                false
            }
            Err(err) => {
                log::error!("Decision failed: {}", err);
                false
            }
        }
    }

    fn latest_id(&self) -> Option<i64> {
        self.tracker.with_untracked(|state| state.latest().map(|app| app.id))
    }

    pub fn demo_approve(&self) -> bool {
        let Some(id) = self.latest_id() else {
            return false;
        };
        let approved = self.approve(id);
        if approved {
            self.notifier.success(DEMO_APPROVED_MESSAGE);
        }
        approved
    }

    pub fn demo_reject(&self) -> bool {
        let Some(id) = self.latest_id() else {
            return false;
        };
        let rejected = self.reject(id, Some(DEMO_REJECTION_REASON.to_string()));
        if rejected {
            self.notifier.info(DEMO_REJECTED_MESSAGE);
        }
        rejected
    }

    pub fn demo_reset(&self) {
        if let Err(err) = self.dispatch(Command::Reset) {
            log::error!("Reset failed: {}", err);
        }
        browser::reload_page();
    }
}

#[cfg(target_arch = "wasm32")]
fn default_repository() -> LeaveRepository {
    LeaveRepository::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_repository() -> LeaveRepository {
    LeaveRepository::new_with_store(std::rc::Rc::new(
        crate::utils::storage::MemoryStorage::new(),
    ))
}

pub fn provide_portal_with(repository: LeaveRepository) -> PortalState {
    let state = PortalState::new(repository, config::current());
    provide_context(state);
    state
}

pub fn provide_portal() -> PortalState {
    provide_portal_with(default_repository())
}

pub fn use_portal() -> PortalState {
    use_context::<PortalState>().unwrap_or_else(provide_portal)
}

#[component]
pub fn PortalProvider(children: Children) -> impl IntoView {
    let state = provide_portal();
    super::demo::register(state);
    view! { <>{children()}</> }
}
