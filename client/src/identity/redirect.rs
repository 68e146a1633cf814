//! Redirect-login options and authorization URL construction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The welcome page asks for a sign-up oriented login with multi-factor
//! policy. This module turns that request into the provider's `/authorize`
//! URL; token exchange happens at the gateway behind `redirect_uri`.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use serde::{Deserialize, Serialize};
use url::Url;

use super::IdentityError;
use super::config::IdentityConfig;

pub const SCREEN_HINT_SIGNUP: &str = "signup";
pub const PROMPT_LOGIN: &str = "login";
pub const MULTI_FACTOR_POLICY: &str = "http://schemas.openid.net/pape/policies/2007/06/multi-factor";
pub const SIGNUP_SCOPES: &str = "openid profile email offline_access";

/// Provider-side parameters forwarded on the authorization request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationParams {
    pub screen_hint: Option<String>,
    pub prompt: Option<String>,
    pub acr_values: Option<String>,
    pub scope: String,
}

/// Client-side state restored after the provider redirects back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectAppState {
    pub return_to: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectLoginOptions {
    pub authorization_params: AuthorizationParams,
    pub app_state: RedirectAppState,
}

impl RedirectLoginOptions {
    /// Sign-up screen, forced login prompt, multi-factor policy, refresh-token scopes.
    #[must_use]
    pub fn signup(return_to: &str) -> Self {
        Self {
            authorization_params: AuthorizationParams {
                screen_hint: Some(SCREEN_HINT_SIGNUP.to_owned()),
                prompt: Some(PROMPT_LOGIN.to_owned()),
                acr_values: Some(MULTI_FACTOR_POLICY.to_owned()),
                scope: SIGNUP_SCOPES.to_owned(),
            },
            app_state: RedirectAppState { return_to: return_to.to_owned() },
        }
    }
}

/// Base `https://{domain}/authorize` endpoint for a configured tenant.
///
/// # Errors
///
/// Returns `NotConfigured` when the domain or client id is blank and
/// `InvalidDomain` when the domain does not form a valid URL.
pub fn authorize_endpoint(config: &IdentityConfig) -> Result<Url, IdentityError> {
    if !config.is_configured() {
        return Err(IdentityError::NotConfigured);
    }
    let domain = config.domain.trim().trim_end_matches('/');
    let base = if domain.starts_with("https://") || domain.starts_with("http://") {
        domain.to_owned()
    } else {
        format!("https://{domain}")
    };
    let mut url = Url::parse(&base).map_err(|e| IdentityError::InvalidDomain(format!("{domain}: {e}")))?;
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(IdentityError::InvalidDomain(domain.to_owned()));
    }
    url.set_path("/authorize");
    Ok(url)
}

/// Full authorization URL for one redirect transaction.
///
/// # Errors
///
/// Propagates [`authorize_endpoint`] failures.
pub fn authorize_url(
    config: &IdentityConfig,
    params: &AuthorizationParams,
    redirect_uri: &str,
    state: &str,
) -> Result<String, IdentityError> {
    let mut url = authorize_endpoint(config)?;
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("response_type", "code")
            .append_pair("client_id", config.client_id.trim())
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("scope", &params.scope)
            .append_pair("state", state);
        if let Some(audience) = config.audience.as_deref().filter(|a| !a.trim().is_empty()) {
            query.append_pair("audience", audience);
        }
        if let Some(hint) = params.screen_hint.as_deref() {
            query.append_pair("screen_hint", hint);
        }
        if let Some(prompt) = params.prompt.as_deref() {
            query.append_pair("prompt", prompt);
        }
        if let Some(acr) = params.acr_values.as_deref() {
            query.append_pair("acr_values", acr);
        }
    }
    Ok(url.into())
}
