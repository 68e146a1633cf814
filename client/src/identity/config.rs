//! Identity provider settings shared by the server and the hydrated client.
//!
//! The server resolves these from its environment and embeds them in the
//! HTML shell as a `<meta>` tag; the browser reads the tag back on hydrate.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_USERINFO_PATH: &str = "/api/auth/me";
pub const DEFAULT_POST_LOGIN_PATH: &str = "/questionnaire";
pub const CALLBACK_PATH: &str = "/callback";

/// `name` attribute of the shell `<meta>` tag carrying the JSON config.
pub const CONFIG_META_NAME: &str = "identity-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Tenant domain, with or without scheme (`tenant.eu.auth0.com`).
    pub domain: String,
    pub client_id: String,
    /// API audience requested alongside the ID token.
    pub audience: Option<String>,
    /// Where the provider sends the browser back. Defaults to
    /// `{origin}/callback` when unset.
    pub redirect_uri: Option<String>,
    /// Same-origin gateway endpoint returning the signed-in user's profile.
    pub userinfo_path: String,
    /// Destination after a completed sign-up or for returning users.
    pub post_login_path: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            client_id: String::new(),
            audience: None,
            redirect_uri: None,
            userinfo_path: DEFAULT_USERINFO_PATH.to_owned(),
            post_login_path: DEFAULT_POST_LOGIN_PATH.to_owned(),
        }
    }
}

impl IdentityConfig {
    /// Whether redirects can be built at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.domain.trim().is_empty() && !self.client_id.trim().is_empty()
    }

    /// Redirect URI, falling back to the callback route under `origin`.
    #[must_use]
    pub fn resolve_redirect_uri(&self, origin: &str) -> String {
        match self.redirect_uri.as_deref().map(str::trim) {
            Some(uri) if !uri.is_empty() => uri.to_owned(),
            _ => format!("{}{CALLBACK_PATH}", origin.trim_end_matches('/')),
        }
    }

    /// Serialized form embedded in the shell `<meta>` tag.
    #[must_use]
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned())
    }

    /// Parse the shell `<meta>` tag content. Missing fields take defaults.
    #[must_use]
    pub fn from_meta_content(content: &str) -> Option<Self> {
        serde_json::from_str(content).ok()
    }

    /// Read the config embedded in the current document.
    /// Returns `None` off-browser or when the tag is absent or malformed.
    #[must_use]
    pub fn from_document() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let document = web_sys::window()?.document()?;
            let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
            let element = document.query_selector(&selector).ok()??;
            let content = element.get_attribute("content")?;
            Self::from_meta_content(&content)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
