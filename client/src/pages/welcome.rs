//! Marketing welcome page: navbar, hero with phone mockup, feature grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public landing route. It owns the screen carousel timer and
//! the call-to-action decision: signed-out viewers are sent to the identity
//! provider's sign-up screen, signed-in viewers go straight to the
//! post-login destination.

#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::feature_grid::FeatureGrid;
use crate::components::navbar::Navbar;
use crate::components::phone_mockup::PhoneMockup;
use crate::content::screen_count;
use crate::identity::config::IdentityConfig;
use crate::identity::redirect::RedirectLoginOptions;
use crate::identity::{Identity, IdentityClient, IdentityError, report_error};
use crate::state::auth::AuthState;
use crate::state::carousel::Carousel;
use crate::util::carousel::install_carousel;
use crate::util::navigation::go_to;

pub const HERO_SIGNUP_LABEL: &str = "Get Started →";
pub const HERO_CONTINUE_LABEL: &str = "Continue →";

/// Outcome of pressing the primary button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CtaAction {
    /// External sign-up redirect through the identity provider.
    SignUp(RedirectLoginOptions),
    /// Local navigation to an already-authorized destination.
    Continue(String),
}

#[must_use]
pub fn cta_action(session: &AuthState, post_login_path: &str) -> CtaAction {
    if session.is_authenticated() {
        CtaAction::Continue(post_login_path.to_owned())
    } else {
        CtaAction::SignUp(RedirectLoginOptions::signup(post_login_path))
    }
}

#[must_use]
pub fn hero_cta_label(session: &AuthState) -> &'static str {
    if session.is_authenticated() { HERO_CONTINUE_LABEL } else { HERO_SIGNUP_LABEL }
}

/// Perform a CTA action against the identity client or the router.
///
/// # Errors
///
/// Returns the identity client's error when the redirect cannot start.
pub fn dispatch_cta<N>(action: CtaAction, client: &dyn IdentityClient, navigate: N) -> Result<(), IdentityError>
where
    N: Fn(&str),
{
    match action {
        CtaAction::SignUp(options) => client.login_with_redirect(&options),
        CtaAction::Continue(path) => {
            navigate(&path);
            Ok(())
        }
    }
}

#[component]
pub fn WelcomePage() -> impl IntoView {
    let identity = expect_context::<Identity>();
    let config = expect_context::<IdentityConfig>();
    let navigate = use_navigate();

    let carousel = RwSignal::new(Carousel::new(screen_count()));
    install_carousel(carousel);

    let cta_identity = identity.clone();
    let post_login_path = config.post_login_path;
    let on_cta = Callback::new(move |()| {
        let client = cta_identity.client();
        let action = cta_action(&client.session_untracked(), &post_login_path);
        if let Err(e) = dispatch_cta(action, client, |path| go_to(&navigate, path, false)) {
            report_error(&e);
        }
    });

    view! {
        <div class="welcome-page">
            <Navbar on_cta=on_cta />

            <main class="hero-section">
                <div class="hero-container">
                    <div class="hero-text motion-enter-left">
                        <h1 class="hero-headline">
                            "Claim Smarter,"
                            <br />
                            "Not Harder!"
                        </h1>
                        <p class="hero-subtitle"></p>
                        <button class="cta-button motion-press" on:click=move |_| on_cta.run(())>
                            {move || hero_cta_label(&identity.client().session())}
                        </button>
                    </div>

                    <div class="hero-image motion-enter-right">
                        <PhoneMockup carousel=carousel />
                    </div>
                </div>
            </main>

            <FeatureGrid />
        </div>
    }
}
