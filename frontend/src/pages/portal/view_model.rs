use leptos::*;

use super::utils::{LeaveFormState, LoginFormState, MessageState};
use crate::config;
use crate::state::portal::{use_portal, PortalState};
use crate::state::tracker::validate_email;
use crate::store::UserType;
use crate::utils::{browser, time};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub user_type: UserType,
}

/// Waits out the cosmetic delay, then signs in.
pub async fn login_request(
    portal: PortalState,
    request: LoginRequest,
    delay_ms: u32,
) -> Result<(), String> {
    time::sleep_ms(delay_ms).await;
    portal
        .login(&request.email, request.user_type)
        .map_err(String::from)
}

fn report_error(target: RwSignal<MessageState>, message: String) {
    browser::alert(&message);
    target.update(|msg| msg.set_error(message));
}

#[derive(Clone, Copy)]
pub struct PortalViewModel {
    pub portal: PortalState,
    pub login_form: LoginFormState,
    pub leave_form: LeaveFormState,
    pub login_message: RwSignal<MessageState>,
    pub leave_message: RwSignal<MessageState>,
    pub login_action: Action<LoginRequest, Result<(), String>>,
}

impl PortalViewModel {
    pub fn new() -> Self {
        let portal = use_portal();
        let delay_ms = config::current().login_delay_ms;
        let login_form = LoginFormState::default();
        let leave_form = LeaveFormState::default();
        let login_message = create_rw_signal(MessageState::default());
        let leave_message = create_rw_signal(MessageState::default());

        let login_action = create_action(move |request: &LoginRequest| {
            let request = request.clone();
            async move { login_request(portal, request, delay_ms).await }
        });

        create_effect(move |_| {
            if let Some(result) = login_action.value().get() {
                match result {
                    Ok(()) => {
                        login_message.update(|msg| msg.clear());
                        login_form.clear();
                    }
                    Err(err) => report_error(login_message, err),
                }
            }
        });

        Self {
            portal,
            login_form,
            leave_form,
            login_message,
            leave_message,
            login_action,
        }
    }

    /// Validates the email up front so a bad address never waits out the delay.
    pub fn submit_login(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        match validate_email(&self.login_form.email.get_untracked()) {
            Ok(email) => {
                self.login_message.update(|msg| msg.clear());
                self.login_action.dispatch(LoginRequest {
                    email,
                    user_type: self.login_form.user_type.get_untracked(),
                });
                true
            }
            Err(err) => {
                report_error(self.login_message, err.to_string());
                false
            }
        }
    }

    pub fn submit_leave(&self) -> Option<i64> {
        let (form, options) = self.leave_form.to_form();
        match self.portal.submit(form, options) {
            Ok(id) => {
                self.leave_message.update(|msg| msg.clear());
                self.leave_form.reset();
                Some(id)
            }
            Err(err) => {
                report_error(self.leave_message, err.to_string());
                None
            }
        }
    }
}

pub fn use_portal_view_model() -> PortalViewModel {
    match use_context::<PortalViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = PortalViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
