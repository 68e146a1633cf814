//! Path navigation across this app and the rest of the site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the welcome and callback routes are rendered here. Post-login
//! destinations such as `/questionnaire` are served by another app on the
//! same origin, so they need a full document load instead of a router
//! navigation.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos_router::NavigateOptions;

use crate::identity::config::CALLBACK_PATH;

/// Paths matched by the router in `app::App`.
pub const LOCAL_ROUTES: &[&str] = &["/", CALLBACK_PATH];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Handled by this app's router.
    Local,
    /// Loaded as a new document.
    Document,
}

/// Whether `path` (query and fragment ignored) is one of [`LOCAL_ROUTES`].
#[must_use]
pub fn is_local_route(path: &str) -> bool {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let route = path[..end].trim_end_matches('/');
    let route = if route.is_empty() { "/" } else { route };
    LOCAL_ROUTES.contains(&route)
}

#[must_use]
pub fn destination(path: &str) -> Destination {
    if is_local_route(path) { Destination::Local } else { Destination::Document }
}

/// Go to `path`, through `navigate` when the route is local and by loading
/// the document otherwise. `replace` keeps the current entry out of history.
pub fn go_to<N>(navigate: &N, path: &str, replace: bool)
where
    N: Fn(&str, NavigateOptions),
{
    match destination(path) {
        Destination::Local => navigate(path, NavigateOptions { replace, ..NavigateOptions::default() }),
        Destination::Document => load_document(path, replace),
    }
}

fn load_document(path: &str, replace: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            log::error!("navigation to {path} failed: no window");
            return;
        };
        let location = window.location();
        let result = if replace { location.replace(path) } else { location.set_href(path) };
        if let Err(e) = result {
            log::error!("navigation to {path} failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, replace);
    }
}
