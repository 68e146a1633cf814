//! Browser-backed identity client.
//!
//! ERROR HANDLING
//! ==============
//! A failed or absent profile fetch resolves to the signed-out state; the
//! page never blocks on the gateway.

use leptos::prelude::*;

use super::config::IdentityConfig;
use super::redirect::{RedirectLoginOptions, authorize_url};
use super::{IdentityClient, IdentityError, transaction};
use crate::state::auth::AuthState;

pub struct BrowserIdentityClient {
    config: IdentityConfig,
    session: RwSignal<AuthState>,
}

impl BrowserIdentityClient {
    /// Client in the loading state. Call [`Self::load_session`] once mounted.
    #[must_use]
    pub fn new(config: IdentityConfig) -> Self {
        Self { config, session: RwSignal::new(AuthState::loading()) }
    }

    /// Resolve the session from the gateway userinfo endpoint.
    /// No-op on the server, where the view renders the loading state.
    pub fn load_session(&self) {
        #[cfg(feature = "hydrate")]
        {
            let session = self.session;
            let path = self.config.userinfo_path.clone();
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_user_profile(&path).await;
                log::debug!("identity session resolved (authenticated: {})", user.is_some());
                let _ = session.try_set(AuthState::resolved(user));
            });
        }
    }
}

impl IdentityClient for BrowserIdentityClient {
    fn session(&self) -> AuthState {
        self.session.get()
    }

    fn session_untracked(&self) -> AuthState {
        self.session.get_untracked()
    }

    fn login_with_redirect(&self, options: &RedirectLoginOptions) -> Result<(), IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window().ok_or(IdentityError::BrowserUnavailable)?;
            let origin = window.location().origin().map_err(|e| IdentityError::Navigation(format!("{e:?}")))?;
            let redirect_uri = self.config.resolve_redirect_uri(&origin);
            let state = transaction::new_state();
            let url = authorize_url(&self.config, &options.authorization_params, &redirect_uri, &state)?;
            transaction::save(&state, &options.app_state)?;
            log::info!("redirecting to identity provider (return_to: {})", options.app_state.return_to);
            window.location().set_href(&url).map_err(|e| IdentityError::Navigation(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            // Off-browser the configuration is still validated.
            let _ = authorize_url(&self.config, &options.authorization_params, "", &transaction::new_state())?;
            Err(IdentityError::BrowserUnavailable)
        }
    }
}
