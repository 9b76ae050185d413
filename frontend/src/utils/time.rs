use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn parse_form_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Date part of `at`, as seen from `tz`, in the form shown on the status panel.
pub fn display_date_in(at: &DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%d %b %Y").to_string()
}

/// Cosmetic pause. Resolves immediately off-browser so host tests never wait.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    if ms > 0 {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(_ms: u32) {}
