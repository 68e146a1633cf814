//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use compass_client::identity::config::{DEFAULT_POST_LOGIN_PATH, DEFAULT_USERINFO_PATH, IdentityConfig};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` when the identity provider is not configured; the site still
    /// renders but sign-up redirects fail with a console error.
    pub identity: Option<IdentityConfig>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `IDENTITY_DOMAIN` + `IDENTITY_CLIENT_ID`: both required to enable identity
    /// - `IDENTITY_AUDIENCE`, `IDENTITY_REDIRECT_URI`
    /// - `IDENTITY_USERINFO_PATH`: default `/api/auth/me`
    /// - `POST_LOGIN_PATH`: default `/questionnaire`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(lookup("PORT").as_deref())?;
        let identity = identity_from_lookup(&lookup);
        Ok(Self { port, identity })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn identity_from_lookup<F>(lookup: &F) -> Option<IdentityConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let domain = non_blank(lookup, "IDENTITY_DOMAIN")?;
    let client_id = non_blank(lookup, "IDENTITY_CLIENT_ID")?;
    Some(IdentityConfig {
        domain,
        client_id,
        audience: non_blank(lookup, "IDENTITY_AUDIENCE"),
        redirect_uri: non_blank(lookup, "IDENTITY_REDIRECT_URI"),
        userinfo_path: non_blank(lookup, "IDENTITY_USERINFO_PATH").unwrap_or_else(|| DEFAULT_USERINFO_PATH.to_owned()),
        post_login_path: non_blank(lookup, "POST_LOGIN_PATH").unwrap_or_else(|| DEFAULT_POST_LOGIN_PATH.to_owned()),
    })
}
