//! Redirect callback route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity gateway lands the browser here after completing the code
//! exchange. The page restores the stored app state and forwards to its
//! `return_to`; provider errors are shown with a way back home.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::identity::redirect::RedirectAppState;
use crate::identity::transaction;
use crate::util::navigation::go_to;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    Redirect(String),
    Failed(String),
}

/// Only same-origin absolute paths are followed.
#[must_use]
pub fn safe_return_path(return_to: &str) -> &str {
    if return_to.starts_with('/') && !return_to.starts_with("//") && !return_to.contains('\\') {
        return_to
    } else {
        "/"
    }
}

#[must_use]
pub fn callback_outcome(
    error: Option<&str>,
    error_description: Option<&str>,
    stored: Option<RedirectAppState>,
) -> CallbackOutcome {
    if let Some(code) = error.filter(|e| !e.is_empty()) {
        let detail = error_description.filter(|d| !d.trim().is_empty()).unwrap_or(code);
        return CallbackOutcome::Failed(format!("Sign-in failed: {detail}"));
    }
    let target = stored.map_or_else(|| "/".to_owned(), |s| safe_return_path(&s.return_to).to_owned());
    CallbackOutcome::Redirect(target)
}

#[component]
pub fn CallbackPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let failure = RwSignal::new(None::<String>);

    Effect::new(move || {
        let params = query.get();
        let stored = params.get("state").and_then(|state| transaction::take(&state));
        let outcome = callback_outcome(
            params.get("error").as_deref(),
            params.get("error_description").as_deref(),
            stored,
        );
        match outcome {
            CallbackOutcome::Redirect(path) => {
                go_to(&navigate, &path, true);
            }
            CallbackOutcome::Failed(message) => failure.set(Some(message)),
        }
    });

    view! {
        <div class="callback-page">
            <Show
                when=move || failure.get().is_some()
                fallback=|| view! { <p class="callback-message">"Signing you in..."</p> }
            >
                <p class="callback-message callback-message--error">{move || failure.get().unwrap_or_default()}</p>
                <a class="cta-button" href="/">"Back to home"</a>
            </Show>
        </div>
    }
}
