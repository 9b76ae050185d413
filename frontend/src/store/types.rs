use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Student,
    Faculty,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Faculty => "faculty",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserType::Student => "Student",
            UserType::Faculty => "Faculty",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Some(UserType::Student),
            "faculty" => Some(UserType::Faculty),
            _ => None,
        }
    }
}

/// The locally simulated signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub email: String,
    pub user_type: UserType,
    pub login_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    pub id: i64,
    pub email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: String,
    pub reason: String,
    pub document: Option<String>,
    pub voice: Option<String>,
    pub scope: String,
    pub status: LeaveStatus,
    pub submitted_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
}

/// Raw values read from the leave form, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveForm {
    pub start_date: String,
    pub end_date: String,
    pub category: String,
    pub reason: String,
    pub document: Option<String>,
    pub voice: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOptions {
    pub scope: Option<String>,
}

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("{0}")]
    Validation(String),
    #[error("Leave application {0} not found")]
    NotFound(i64),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Failed to decode stored data: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PortalError {
    pub fn validation(msg: impl Into<String>) -> Self {
        PortalError::Validation(msg.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            PortalError::Validation(_) => "VALIDATION_ERROR",
            PortalError::NotFound(_) => "NOT_FOUND",
            PortalError::Storage(_) => "STORAGE_ERROR",
            PortalError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PortalError::Validation(_))
    }
}

impl From<PortalError> for String {
    fn from(error: PortalError) -> Self {
        error.to_string()
    }
}

impl IntoView for PortalError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn portal_error_can_be_converted_to_view() {
        let _: View = PortalError::validation("Please login first").into_view();
    }
}
