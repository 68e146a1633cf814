use super::*;

fn config() -> IdentityConfig {
    IdentityConfig {
        domain: "compass.us.auth0.com".to_owned(),
        client_id: "client-123".to_owned(),
        ..IdentityConfig::default()
    }
}

fn query_of(raw: &str) -> Vec<(String, String)> {
    Url::parse(raw)
        .expect("authorize url should parse")
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn param(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

// =============================================================
// Sign-up options
// =============================================================

#[test]
fn signup_options_request_signup_screen_and_mfa() {
    let opts = RedirectLoginOptions::signup("/questionnaire");
    assert_eq!(opts.authorization_params.screen_hint.as_deref(), Some("signup"));
    assert_eq!(opts.authorization_params.prompt.as_deref(), Some("login"));
    assert_eq!(
        opts.authorization_params.acr_values.as_deref(),
        Some("http://schemas.openid.net/pape/policies/2007/06/multi-factor")
    );
    assert_eq!(opts.authorization_params.scope, "openid profile email offline_access");
    assert_eq!(opts.app_state.return_to, "/questionnaire");
}

// =============================================================
// Endpoint
// =============================================================

#[test]
fn endpoint_adds_https_scheme_to_bare_domain() {
    let url = authorize_endpoint(&config()).expect("endpoint");
    assert_eq!(url.as_str(), "https://compass.us.auth0.com/authorize");
}

#[test]
fn endpoint_keeps_explicit_scheme_and_drops_trailing_slash() {
    let mut cfg = config();
    cfg.domain = "http://localhost:8080/".to_owned();
    let url = authorize_endpoint(&cfg).expect("endpoint");
    assert_eq!(url.as_str(), "http://localhost:8080/authorize");
}

#[test]
fn endpoint_requires_configuration() {
    assert_eq!(authorize_endpoint(&IdentityConfig::default()), Err(IdentityError::NotConfigured));
}

#[test]
fn endpoint_rejects_unparseable_domain() {
    let mut cfg = config();
    cfg.domain = "exa mple.com".to_owned();
    assert!(matches!(authorize_endpoint(&cfg), Err(IdentityError::InvalidDomain(_))));
}

// =============================================================
// Authorization URL
// =============================================================

#[test]
fn authorize_url_carries_signup_parameters() {
    let opts = RedirectLoginOptions::signup("/questionnaire");
    let raw = authorize_url(&config(), &opts.authorization_params, "https://compass.example.com/callback", "st-1")
        .expect("url");
    let pairs = query_of(&raw);
    assert_eq!(param(&pairs, "response_type").as_deref(), Some("code"));
    assert_eq!(param(&pairs, "client_id").as_deref(), Some("client-123"));
    assert_eq!(param(&pairs, "redirect_uri").as_deref(), Some("https://compass.example.com/callback"));
    assert_eq!(param(&pairs, "scope").as_deref(), Some("openid profile email offline_access"));
    assert_eq!(param(&pairs, "state").as_deref(), Some("st-1"));
    assert_eq!(param(&pairs, "screen_hint").as_deref(), Some("signup"));
    assert_eq!(param(&pairs, "prompt").as_deref(), Some("login"));
    assert_eq!(param(&pairs, "acr_values").as_deref(), Some(MULTI_FACTOR_POLICY));
    assert_eq!(param(&pairs, "audience"), None);
}

#[test]
fn authorize_url_percent_encodes_values() {
    let opts = RedirectLoginOptions::signup("/questionnaire");
    let raw = authorize_url(&config(), &opts.authorization_params, "https://compass.example.com/callback", "st-1")
        .expect("url");
    assert!(raw.contains("scope=openid+profile+email+offline_access"));
    assert!(raw.contains("redirect_uri=https%3A%2F%2Fcompass.example.com%2Fcallback"));
}

#[test]
fn authorize_url_includes_audience_when_configured() {
    let mut cfg = config();
    cfg.audience = Some("https://api.compass.example.com".to_owned());
    let params = AuthorizationParams { screen_hint: None, prompt: None, acr_values: None, scope: "openid".to_owned() };
    let pairs = query_of(&authorize_url(&cfg, &params, "https://x/callback", "s").expect("url"));
    assert_eq!(param(&pairs, "audience").as_deref(), Some("https://api.compass.example.com"));
    assert_eq!(param(&pairs, "screen_hint"), None);
    assert_eq!(param(&pairs, "prompt"), None);
}
