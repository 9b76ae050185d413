pub mod demo_controls;
pub mod leave_form;
pub mod login_form;
pub mod login_status;
pub mod status_panel;
