use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key: &str| vars.get(key).cloned()
}

// =============================================================================
// PORT
// =============================================================================

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(ServerConfig::from_lookup(lookup_from(&[])).map(|c| c.port), Ok(DEFAULT_PORT));
    assert_eq!(ServerConfig::from_lookup(lookup_from(&[("PORT", " ")])).map(|c| c.port), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_numeric_value() {
    assert_eq!(ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")])).map(|c| c.port), Ok(8080));
}

#[test]
fn invalid_port_is_an_error() {
    assert_eq!(
        ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])),
        Err(ConfigError::InvalidPort("eighty".to_owned()))
    );
    assert_eq!(
        ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn identity_disabled_without_domain_or_client_id() {
    let only_domain = ServerConfig::from_lookup(lookup_from(&[("IDENTITY_DOMAIN", "t.auth0.com")])).expect("config");
    assert!(only_domain.identity.is_none());

    let only_client = ServerConfig::from_lookup(lookup_from(&[("IDENTITY_CLIENT_ID", "abc")])).expect("config");
    assert!(only_client.identity.is_none());

    let blank = ServerConfig::from_lookup(lookup_from(&[("IDENTITY_DOMAIN", " "), ("IDENTITY_CLIENT_ID", "abc")]))
        .expect("config");
    assert!(blank.identity.is_none());
}

#[test]
fn identity_uses_defaults_for_optional_values() {
    let config =
        ServerConfig::from_lookup(lookup_from(&[("IDENTITY_DOMAIN", "t.auth0.com"), ("IDENTITY_CLIENT_ID", "abc")]))
            .expect("config");
    let identity = config.identity.expect("identity configured");
    assert_eq!(identity.domain, "t.auth0.com");
    assert_eq!(identity.client_id, "abc");
    assert_eq!(identity.audience, None);
    assert_eq!(identity.redirect_uri, None);
    assert_eq!(identity.userinfo_path, "/api/auth/me");
    assert_eq!(identity.post_login_path, "/questionnaire");
    assert!(identity.is_configured());
}

#[test]
fn identity_applies_overrides() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("IDENTITY_DOMAIN", " t.auth0.com "),
        ("IDENTITY_CLIENT_ID", "abc"),
        ("IDENTITY_AUDIENCE", "https://api.example.com"),
        ("IDENTITY_REDIRECT_URI", "https://gw.example.com/callback"),
        ("IDENTITY_USERINFO_PATH", "/gw/me"),
        ("POST_LOGIN_PATH", "/start"),
    ]))
    .expect("config");
    let identity = config.identity.expect("identity configured");
    assert_eq!(identity.domain, "t.auth0.com");
    assert_eq!(identity.audience.as_deref(), Some("https://api.example.com"));
    assert_eq!(identity.redirect_uri.as_deref(), Some("https://gw.example.com/callback"));
    assert_eq!(identity.userinfo_path, "/gw/me");
    assert_eq!(identity.post_login_path, "/start");
}
