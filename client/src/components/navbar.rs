//! Fixed top navbar with the brand and the session-aware action.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::content::{BRAND_ICON, BRAND_NAME};
use crate::identity::Identity;
use crate::state::auth::AuthState;

/// What the navbar action area shows for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Session still resolving.
    Hidden,
    SignUp,
    Profile,
}

#[must_use]
pub fn nav_action(session: &AuthState) -> NavAction {
    if session.loading {
        NavAction::Hidden
    } else if session.is_authenticated() {
        NavAction::Profile
    } else {
        NavAction::SignUp
    }
}

pub const NAV_SIGNUP_LABEL: &str = "Get Started";

#[component]
pub fn Navbar(on_cta: Callback<()>) -> impl IntoView {
    let identity = expect_context::<Identity>();

    view! {
        <header class="navbar">
            <div class="navbar-container">
                <div class="brand">
                    <span class="brand-icon">{BRAND_ICON}</span>
                    <span class="brand-name">{BRAND_NAME}</span>
                </div>

                <nav class="nav-links">
                    {move || {
                        let session = identity.client().session();
                        match nav_action(&session) {
                            NavAction::Hidden => ().into_any(),
                            NavAction::SignUp => view! {
                                <button class="nav-link" on:click=move |_| on_cta.run(())>
                                    {NAV_SIGNUP_LABEL}
                                </button>
                            }
                            .into_any(),
                            NavAction::Profile => view! { <ProfileButton session=session on_click=on_cta /> }.into_any(),
                        }
                    }}
                </nav>

                <button class="hamburger" aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}

#[component]
fn ProfileButton(session: AuthState, on_click: Callback<()>) -> impl IntoView {
    let greeting = format!("Hi, {}", session.greeting_name());
    let avatar = match session.picture() {
        Some(src) => view! { <img class="nav-avatar" src=src alt="profile" /> }.into_any(),
        None => view! { <span class="nav-avatar nav-avatar--initial">{session.avatar_initial()}</span> }.into_any(),
    };

    view! {
        <button class="nav-profile" title=session.profile_title() on:click=move |_| on_click.run(())>
            <span class="nav-profile__inner">
                <span class="nav-profile__greeting">{greeting}</span>
                {avatar}
            </span>
        </button>
    }
}
