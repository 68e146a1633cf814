//! REST helpers for the identity gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since the session cookie is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a missing or failing
//! gateway degrades to the signed-out view without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::UserProfile;

/// Normalize a configured userinfo path to a same-origin absolute path.
#[cfg(any(test, feature = "hydrate"))]
fn userinfo_endpoint(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return crate::identity::config::DEFAULT_USERINFO_PATH.to_owned();
    }
    if trimmed.starts_with('/') { trimmed.to_owned() } else { format!("/{trimmed}") }
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_request_failed_message(status: u16) -> String {
    format!("profile request failed: {status}")
}

/// Fetch the signed-in user's profile from the gateway userinfo endpoint.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_user_profile(userinfo_path: &str) -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let url = userinfo_endpoint(userinfo_path);
        let resp = match gloo_net::http::Request::get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::debug!("profile request error: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::debug!("{}", profile_request_failed_message(resp.status()));
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = userinfo_path;
        None
    }
}
