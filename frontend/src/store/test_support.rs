use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use super::types::{Identity, LeaveApplication, LeaveForm, LeaveStatus, UserType};

pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 4, 9, 0, 0).unwrap() + Duration::minutes(minutes)
}

pub fn identity(email: &str) -> Identity {
    Identity {
        email: email.into(),
        user_type: UserType::Student,
        login_time: at(0),
    }
}

pub fn form(start: &str, end: &str) -> LeaveForm {
    LeaveForm {
        start_date: start.into(),
        end_date: end.into(),
        category: "medical".into(),
        reason: "fever".into(),
        document: None,
        voice: None,
    }
}

pub fn application(id: i64, email: &str) -> LeaveApplication {
    LeaveApplication {
        id,
        email: email.into(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        category: "medical".into(),
        reason: "fever".into(),
        document: None,
        voice: None,
        scope: "College".into(),
        status: LeaveStatus::Pending,
        submitted_at: at(id),
        approved_at: None,
        rejected_at: None,
        rejection_reason: None,
    }
}
