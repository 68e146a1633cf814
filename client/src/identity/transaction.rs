//! Redirect transaction storage.
//!
//! Each redirect gets a fresh `state` value. The app state travels in
//! `sessionStorage` keyed by that value and is consumed exactly once by the
//! callback route.

#[cfg(test)]
#[path = "transaction_test.rs"]
mod transaction_test;

use super::IdentityError;
use super::redirect::RedirectAppState;

const KEY_PREFIX: &str = "compass.tx.";

/// Fresh opaque `state` value for one authorization request.
#[must_use]
pub fn new_state() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[must_use]
pub fn storage_key(state: &str) -> String {
    format!("{KEY_PREFIX}{state}")
}

/// # Errors
///
/// Returns `Storage` if the app state cannot be serialized.
pub fn encode(app_state: &RedirectAppState) -> Result<String, IdentityError> {
    serde_json::to_string(app_state).map_err(|e| IdentityError::Storage(e.to_string()))
}

#[must_use]
pub fn decode(raw: &str) -> Option<RedirectAppState> {
    serde_json::from_str(raw).ok()
}

/// Persist the app state for `state` in `sessionStorage`.
///
/// # Errors
///
/// Returns `BrowserUnavailable` off-browser and `Storage` if the write fails.
pub fn save(state: &str, app_state: &RedirectAppState) -> Result<(), IdentityError> {
    let encoded = encode(app_state)?;
    #[cfg(feature = "hydrate")]
    {
        let storage = session_storage()?;
        storage
            .set_item(&storage_key(state), &encoded)
            .map_err(|e| IdentityError::Storage(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, encoded);
        Err(IdentityError::BrowserUnavailable)
    }
}

/// Remove and return the app state stored for `state`, if any.
#[must_use]
pub fn take(state: &str) -> Option<RedirectAppState> {
    #[cfg(feature = "hydrate")]
    {
        let storage = session_storage().ok()?;
        let key = storage_key(state);
        let raw = storage.get_item(&key).ok()??;
        let _ = storage.remove_item(&key);
        decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
        None
    }
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Result<web_sys::Storage, IdentityError> {
    web_sys::window()
        .ok_or(IdentityError::BrowserUnavailable)?
        .session_storage()
        .map_err(|e| IdentityError::Storage(format!("{e:?}")))?
        .ok_or_else(|| IdentityError::Storage("sessionStorage unavailable".to_owned()))
}
