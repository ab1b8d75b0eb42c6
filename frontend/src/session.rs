//! Session token cache.
//!
//! The auth endpoints return an opaque token plus the user profile; both are
//! kept in a [`SessionRecord`] with creation and expiry timestamps. The
//! record lives in session storage for the tab's lifetime and, when the user
//! asked to be remembered, in local storage as well. Reads check session
//! storage first and re-promote a still-valid local record; expired records
//! are purged on sight.
//!
//! Credentials are never stored locally. Only the server-issued token is.

use common::model::user::User;
use gloo_storage::{LocalStorage, SessionStorage, Storage};
use serde::{Deserialize, Serialize};

pub const SESSION_KEY: &str = "crm-session";

/// Tokens are honored for 24 hours from issue.
const TOKEN_TTL_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub user: User,
    pub token: String,
    /// Epoch milliseconds.
    pub created_at: f64,
    pub expires_at: f64,
}

impl SessionRecord {
    pub fn issued(user: User, token: String, now_ms: f64) -> Self {
        Self {
            user,
            token,
            created_at: now_ms,
            expires_at: now_ms + TOKEN_TTL_MS,
        }
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms >= self.expires_at
    }
}

/// The current valid session, if any.
pub fn current() -> Option<SessionRecord> {
    let now = js_sys::Date::now();

    if let Ok(record) = SessionStorage::get::<SessionRecord>(SESSION_KEY) {
        if !record.is_expired(now) {
            return Some(record);
        }
        clear();
        return None;
    }

    match LocalStorage::get::<SessionRecord>(SESSION_KEY) {
        Ok(record) if !record.is_expired(now) => {
            // New tab with a remembered login: promote into session storage.
            let _ = SessionStorage::set(SESSION_KEY, &record);
            Some(record)
        }
        Ok(_) => {
            clear();
            None
        }
        Err(_) => None,
    }
}

/// Persists a freshly issued session. `remember` additionally mirrors it to
/// local storage so it survives the tab.
pub fn store(user: User, token: String, remember: bool) -> SessionRecord {
    let record = SessionRecord::issued(user, token, js_sys::Date::now());
    let _ = SessionStorage::set(SESSION_KEY, &record);
    if remember {
        let _ = LocalStorage::set(SESSION_KEY, &record);
    }
    record
}

/// Logout: drop the record from both tiers.
pub fn clear() {
    SessionStorage::delete(SESSION_KEY);
    LocalStorage::delete(SESSION_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            name: "Ada Lovelace".into(),
            email: "ada@e.x".into(),
            role: "admin".into(),
        }
    }

    #[test]
    fn fresh_record_is_valid_for_the_ttl() {
        let record = SessionRecord::issued(user(), "tok".into(), 1_000.0);
        assert!(!record.is_expired(1_000.0 + TOKEN_TTL_MS - 1.0));
        assert!(record.is_expired(1_000.0 + TOKEN_TTL_MS));
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let record = SessionRecord::issued(user(), "tok".into(), 5.0);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"createdAt\":5.0"));
        assert!(json.contains("\"expiresAt\":"));
        assert!(json.contains("\"token\":\"tok\""));
    }
}
