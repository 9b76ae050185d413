use chrono_tz::Tz;
use serde::Deserialize;
use std::sync::OnceLock;

pub const DEFAULT_LOGIN_DELAY_MS: u32 = 1_500;
pub const DEFAULT_NOTIFICATION_TTL_MS: u32 = 3_000;
pub const DEFAULT_SCOPE: &str = "College";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub login_delay_ms: u32,
    pub notification_ttl_ms: u32,
    pub default_scope: String,
    pub time_zone: Option<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            default_scope: DEFAULT_SCOPE.to_string(),
            time_zone: None,
        }
    }
}

impl PortalConfig {
    /// Parses a JSON snapshot; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: PortalConfig = serde_json::from_str(raw)?;
        if cfg.default_scope.trim().is_empty() {
            cfg.default_scope = DEFAULT_SCOPE.to_string();
        }
        Ok(cfg)
    }

    /// Zone used for displaying dates. Unknown names fall back to UTC.
    pub fn display_time_zone(&self) -> Tz {
        match self.time_zone.as_deref() {
            Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
                log::warn!("Unknown time zone `{}`, falling back to UTC", name);
                Tz::UTC
            }),
            None => Tz::UTC,
        }
    }
}

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<PortalConfig> {
    // Expect optional global object: window.__LEAVE_PORTAL_CONFIG = { login_delay_ms: 500, ... }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__LEAVE_PORTAL_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let raw = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    match PortalConfig::from_json(&raw) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("Ignoring malformed __LEAVE_PORTAL_CONFIG: {}", err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<PortalConfig> {
    None
}

pub fn init() -> &'static PortalConfig {
    CONFIG.get_or_init(|| snapshot_from_globals().unwrap_or_default())
}

pub fn current() -> &'static PortalConfig {
    init()
}

pub fn current_time_zone() -> Tz {
    current().display_time_zone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_pacing() {
        let cfg = PortalConfig::default();
        assert_eq!(cfg.login_delay_ms, 1_500);
        assert_eq!(cfg.notification_ttl_ms, 3_000);
        assert_eq!(cfg.default_scope, "College");
        assert_eq!(cfg.display_time_zone(), Tz::UTC);
    }

    #[test]
    fn from_json_keeps_defaults_for_missing_fields() {
        let cfg = PortalConfig::from_json(r#"{"login_delay_ms": 0, "time_zone": "Asia/Kolkata"}"#)
            .unwrap();
        assert_eq!(cfg.login_delay_ms, 0);
        assert_eq!(cfg.notification_ttl_ms, DEFAULT_NOTIFICATION_TTL_MS);
        assert_eq!(cfg.display_time_zone(), chrono_tz::Asia::Kolkata);
    }

    #[test]
    fn blank_scope_and_unknown_zone_fall_back() {
        let cfg =
            PortalConfig::from_json(r#"{"default_scope": "  ", "time_zone": "Mars/Olympus"}"#)
                .unwrap();
        assert_eq!(cfg.default_scope, DEFAULT_SCOPE);
        assert_eq!(cfg.display_time_zone(), Tz::UTC);
    }

    #[test]
    fn current_uses_defaults_on_host() {
        assert_eq!(current(), &PortalConfig::default());
    }
}
