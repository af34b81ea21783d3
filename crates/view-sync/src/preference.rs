//! Preference Store
//!
//! Small client-local preferences kept in site-wide cookies. Keys and
//! values are percent-encoded the way `encodeURIComponent` does it, so
//! reserved characters such as `;` and `=` survive a round trip.

use chrono::{DateTime, Duration, Utc};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Browser cookie access (`document.cookie`)
pub trait CookieJar {
    /// All visible entries as `k1=v1; k2=v2`
    fn cookie_string(&self) -> String;
    /// Store one `Set-Cookie`-style assignment
    fn store(&self, cookie: &str);
}

fn encode(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

fn decode(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}

/// Build the cookie assignment for `key`, scoped to the whole site
pub fn format_cookie(key: &str, value: &str, expires: Option<DateTime<Utc>>) -> String {
    let mut cookie = format!("{}={}", encode(key), encode(value));
    if let Some(at) = expires {
        cookie.push_str(&format!("; expires={}", at.format("%a, %d %b %Y %H:%M:%S GMT")));
    }
    cookie.push_str("; path=/");
    cookie
}

/// First entry of `raw` whose key matches, decoded
pub fn find_cookie(raw: &str, key: &str) -> Option<String> {
    let prefix = format!("{}=", encode(key));
    raw.split(';')
        .map(|entry| entry.trim_start())
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .map(decode)
}

#[derive(Debug, Clone)]
pub struct PreferenceStore<J> {
    jar: J,
    filter_key: String,
    filter_days: Option<i64>,
}

/// Expiry `days` from `now`; out-of-range lifetimes give a session entry
pub fn expires_after(now: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|delta| now.checked_add_signed(delta))
}

impl<J: CookieJar> PreferenceStore<J> {
    pub fn new(jar: J, filter_key: impl Into<String>, filter_days: Option<i64>) -> Self {
        Self {
            jar,
            filter_key: filter_key.into(),
            filter_days,
        }
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }

    /// Persist `value`; without `expiry_days` the entry lives for the session
    pub fn write(&self, key: &str, value: &str, expiry_days: Option<i64>) {
        self.write_at(key, value, expiry_days, Utc::now());
    }

    pub fn write_at(&self, key: &str, value: &str, expiry_days: Option<i64>, now: DateTime<Utc>) {
        let expires = expiry_days.and_then(|days| expires_after(now, days));
        self.jar.store(&format_cookie(key, value, expires));
    }

    pub fn read(&self, key: &str) -> Option<String> {
        find_cookie(&self.jar.cookie_string(), key)
    }

    pub fn erase(&self, key: &str) {
        self.write(key, "", Some(-1));
    }

    /// The "hide completed modules" filter
    pub fn hide_completed(&self) -> bool {
        self.read(&self.filter_key).as_deref() == Some("1")
    }

    pub fn set_hide_completed(&self, hide: bool) {
        self.write(&self.filter_key, if hide { "1" } else { "0" }, self.filter_days);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryJar;
    use chrono::TimeZone;

    fn store() -> PreferenceStore<MemoryJar> {
        PreferenceStore::new(MemoryJar::default(), "hideDone", Some(365))
    }

    #[test]
    fn test_format_with_expiry() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            format_cookie("hideDone", "1", Some(at)),
            "hideDone=1; expires=Sun, 01 Mar 2026 12:00:00 GMT; path=/"
        );
        assert_eq!(format_cookie("hideDone", "0", None), "hideDone=0; path=/");
    }

    #[test]
    fn test_read_matches_whole_key() {
        let raw = "hideDoneOld=1; theme=dark; hideDone=0";
        assert_eq!(find_cookie(raw, "hideDone").as_deref(), Some("0"));
        assert_eq!(find_cookie(raw, "theme").as_deref(), Some("dark"));
        assert_eq!(find_cookie(raw, "missing"), None);
    }

    #[test]
    fn test_round_trip_on_fresh_store() {
        let prefs = store();
        prefs.write("hideDone", "1", Some(30));

        let fresh = PreferenceStore::new(prefs.jar().clone(), "hideDone", Some(365));
        assert_eq!(fresh.read("hideDone").as_deref(), Some("1"));
        assert!(fresh.hide_completed());
    }

    #[test]
    fn test_session_entry_reads_back() {
        let prefs = store();
        prefs.write("hideDone", "0", None);
        assert_eq!(prefs.read("hideDone").as_deref(), Some("0"));
        assert!(!prefs.hide_completed());
    }

    #[test]
    fn test_reserved_characters_survive() {
        let prefs = store();
        prefs.write("a;b=c", "x=1; y=2", None);
        assert_eq!(prefs.read("a;b=c").as_deref(), Some("x=1; y=2"));
        assert!(prefs.jar().cookie_string().contains("a%3Bb%3Dc=x%3D1%3B%20y%3D2"));
    }

    #[test]
    fn test_huge_lifetime_falls_back_to_session() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(expires_after(now, 1), Some(Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap()));
        assert_eq!(expires_after(now, i64::MAX), None);
        assert_eq!(expires_after(now, 100_000_000), None);

        let prefs = PreferenceStore::new(MemoryJar::default(), "hideDone", Some(i64::MAX));
        prefs.set_hide_completed(true);
        assert!(prefs.hide_completed());
    }

    #[test]
    fn test_erase_drops_entry() {
        let prefs = store();
        prefs.set_hide_completed(true);
        assert!(prefs.hide_completed());
        prefs.erase("hideDone");
        assert_eq!(prefs.read("hideDone"), None);
    }
}
