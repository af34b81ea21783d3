//! Frontend Configuration
//!
//! Delivered by the page alongside its bootstrap data; every field has a
//! default so an empty object is valid.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncConfig {
    /// Prefix for every request path, empty for same-origin
    pub base_url: String,
    /// How long a success indicator stays visible
    pub flash_delay_ms: u64,
    /// Cookie holding the "hide completed modules" filter
    pub filter_cookie: String,
    /// Lifetime of the filter cookie, `None` for a session cookie
    pub filter_cookie_days: Option<i64>,
    pub log_level: String,
    /// Question asked before a comment is deleted
    pub delete_prompt: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            flash_delay_ms: 3000,
            filter_cookie: "hideDone".to_string(),
            filter_cookie_days: Some(365),
            log_level: "info".to_string(),
            delete_prompt: "Soll das abgegebene Feedback wirklich gelöscht werden?".to_string(),
        }
    }
}

impl SyncConfig {
    pub fn flash_delay(&self) -> Duration {
        Duration::from_millis(self.flash_delay_ms)
    }

    /// Parsed log level, `Info` when unrecognized
    pub fn log_level(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: SyncConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SyncConfig::default());
        assert_eq!(config.flash_delay(), Duration::from_millis(3000));
        assert_eq!(config.filter_cookie, "hideDone");
        assert_eq!(config.delete_prompt, "Soll das abgegebene Feedback wirklich gelöscht werden?");
    }

    #[test]
    fn test_partial_override() {
        let config: SyncConfig =
            serde_json::from_str(r#"{"baseUrl": "/app", "logLevel": "debug", "filterCookieDays": null}"#).unwrap();
        assert_eq!(config.base_url, "/app");
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        assert_eq!(config.filter_cookie_days, None);
        assert_eq!(config.flash_delay_ms, 3000);
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = SyncConfig { log_level: "chatty".into(), ..SyncConfig::default() };
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
