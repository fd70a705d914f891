//! Durable session store for the access/refresh token pair. All other code
//! depends on this module's interface, never on the storage mechanism, so the
//! backend (browser `localStorage` on wasm, an in-memory map elsewhere) can be
//! swapped without touching callers. Only the HTTP client's refresh path and
//! the validity check below ever write here.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Currently stored access token, if any.
pub(crate) fn access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

/// Currently stored refresh token, if any.
pub(crate) fn refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

/// Persists a fresh token pair after login.
pub(crate) fn store_session(access: &str, refresh: &str) {
    write(ACCESS_TOKEN_KEY, access);
    write(REFRESH_TOKEN_KEY, refresh);
}

/// Replaces only the access token after a successful refresh.
pub(crate) fn store_access(access: &str) {
    write(ACCESS_TOKEN_KEY, access);
}

/// Drops both tokens. Called on logout and on irrecoverable refresh failure.
pub(crate) fn clear() {
    remove(ACCESS_TOKEN_KEY);
    remove(REFRESH_TOKEN_KEY);
}

/// Local session validity check. An absent token is invalid; a present token
/// is decoded (expiry claim only, no signature verification — that is the
/// server's job) and compared against the current time. Expired or malformed
/// tokens are invalid and clear both stored tokens as a side effect.
pub(crate) fn is_valid() -> bool {
    match access_token() {
        None => false,
        Some(token) => {
            if is_live(&token, now_secs()) {
                true
            } else {
                leptos::logging::warn!("stored session is expired or unreadable; clearing it");
                clear();
                false
            }
        }
    }
}

/// True when the token decodes and its `exp` claim lies in the future. A
/// missing or unreadable claim counts as expired.
fn is_live(token: &str, now_secs: f64) -> bool {
    token_expiry(token).map(|exp| exp > now_secs).unwrap_or(false)
}

/// Reads the `exp` claim (seconds since epoch) from a JWT payload.
fn token_expiry(token: &str) -> Option<f64> {
    let payload = token.split('.').nth(1)?;
    // Some encoders pad the segment; strip before the no-pad decode.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_f64()
}

#[cfg(target_arch = "wasm32")]
fn now_secs() -> f64 {
    js_sys::Date::now() / 1000.0
}

#[cfg(not(target_arch = "wasm32"))]
fn now_secs() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok()).flatten()
}

#[cfg(target_arch = "wasm32")]
fn read(key: &str) -> Option<String> {
    storage().and_then(|storage| storage.get_item(key).ok()).flatten()
}

#[cfg(target_arch = "wasm32")]
fn write(key: &str, value: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
fn remove(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub(super) fn read(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub(super) fn write(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub(super) fn remove(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
use memory::{read, remove, write};

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

    fn make_token(claims: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn store_and_read_round_trip() {
        clear();
        store_session("access-value", "refresh-value");
        assert_eq!(access_token().as_deref(), Some("access-value"));
        assert_eq!(refresh_token().as_deref(), Some("refresh-value"));

        store_access("rotated");
        assert_eq!(access_token().as_deref(), Some("rotated"));
        assert_eq!(refresh_token().as_deref(), Some("refresh-value"));

        clear();
        assert_eq!(access_token(), None);
        assert_eq!(refresh_token(), None);
    }

    #[test]
    fn token_one_second_in_the_future_is_live() {
        let token = make_token(serde_json::json!({ "exp": now_secs() + 1.0 }));
        assert!(is_live(&token, now_secs()));
    }

    #[test]
    fn token_one_second_in_the_past_is_expired() {
        let token = make_token(serde_json::json!({ "exp": now_secs() - 1.0 }));
        assert!(!is_live(&token, now_secs()));
    }

    #[test]
    fn token_without_exp_claim_is_expired() {
        let token = make_token(serde_json::json!({ "sub": "42" }));
        assert!(!is_live(&token, now_secs()));
    }

    #[test]
    fn undecodable_token_is_expired() {
        assert!(!is_live("not-a-jwt", now_secs()));
        assert!(!is_live("a.%%%.c", now_secs()));
    }

    #[test]
    fn is_valid_accepts_a_live_session() {
        clear();
        let token = make_token(serde_json::json!({ "exp": now_secs() + 60.0 }));
        store_session(&token, "refresh-value");
        assert!(is_valid());
        assert!(access_token().is_some());
    }

    #[test]
    fn is_valid_clears_an_expired_session() {
        clear();
        let token = make_token(serde_json::json!({ "exp": now_secs() - 60.0 }));
        store_session(&token, "refresh-value");
        assert!(!is_valid());
        assert_eq!(access_token(), None);
        assert_eq!(refresh_token(), None);
    }

    #[test]
    fn is_valid_clears_a_malformed_session() {
        clear();
        store_session("garbage", "refresh-value");
        assert!(!is_valid());
        assert_eq!(access_token(), None);
        assert_eq!(refresh_token(), None);
    }

    #[test]
    fn is_valid_without_a_session_is_false_and_writes_nothing() {
        clear();
        assert!(!is_valid());
        assert_eq!(access_token(), None);
    }

    #[test]
    fn padded_payload_segments_still_decode() {
        let payload = URL_SAFE_NO_PAD.encode(br#"{"exp":4102444800.0}"#);
        let token = format!("header.{payload}==.signature");
        assert!(token_expiry(&token).is_some());
    }
}
