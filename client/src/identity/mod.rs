//! Identity provider client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages depend on the `IdentityClient` trait only: a reactive session
//! snapshot plus a redirect-login operation. The browser implementation
//! builds provider URLs and tracks the redirect transaction; credentials and
//! token exchange stay with the provider and its gateway.

pub mod browser;
pub mod config;
pub mod redirect;
pub mod transaction;

use std::sync::Arc;

use crate::state::auth::AuthState;
use redirect::RedirectLoginOptions;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider is not configured (domain and client id required)")]
    NotConfigured,
    #[error("invalid identity provider domain: {0}")]
    InvalidDomain(String),
    #[error("browser APIs are unavailable")]
    BrowserUnavailable,
    #[error("redirect transaction storage failed: {0}")]
    Storage(String),
    #[error("navigation to identity provider failed: {0}")]
    Navigation(String),
}

/// Session status and redirect entry point of an identity provider SDK.
pub trait IdentityClient: Send + Sync {
    /// Current session snapshot. Reactive when backed by a signal.
    fn session(&self) -> AuthState;

    /// Session snapshot for event handlers, without reactive tracking.
    fn session_untracked(&self) -> AuthState {
        self.session()
    }

    /// Leave the page for the provider's hosted login.
    ///
    /// # Errors
    ///
    /// Returns an error if the redirect could not be started; the page stays
    /// where it is.
    fn login_with_redirect(&self, options: &RedirectLoginOptions) -> Result<(), IdentityError>;
}

/// Shared handle provided through Leptos context.
#[derive(Clone)]
pub struct Identity(Arc<dyn IdentityClient>);

impl Identity {
    pub fn new<C: IdentityClient + 'static>(client: C) -> Self {
        Self(Arc::new(client))
    }

    #[must_use]
    pub fn client(&self) -> &dyn IdentityClient {
        self.0.as_ref()
    }
}

/// Log a redirect failure to the browser console.
pub fn report_error(err: &IdentityError) {
    #[cfg(feature = "hydrate")]
    {
        log::error!("identity: {err}");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = err;
    }
}
