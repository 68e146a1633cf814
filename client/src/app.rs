//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::identity::Identity;
use crate::identity::browser::BrowserIdentityClient;
use crate::identity::config::{CONFIG_META_NAME, IdentityConfig};
use crate::pages::{callback::CallbackPage, welcome::WelcomePage};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The identity settings are provided to the server render through context
/// and embedded for the browser as a `<meta>` tag.
pub fn shell(options: LeptosOptions, identity: IdentityConfig) -> impl IntoView {
    let identity_meta = identity.to_meta_content();
    provide_context(identity);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=CONFIG_META_NAME content=identity_meta/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Resolves identity settings (server context first, then the shell
/// `<meta>` tag), starts the session lookup, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<IdentityConfig>()
        .or_else(IdentityConfig::from_document)
        .unwrap_or_default();
    let client = BrowserIdentityClient::new(config.clone());
    client.load_session();

    provide_context(config);
    provide_context(Identity::new(client));

    view! {
        <Stylesheet id="leptos" href="/pkg/coverage-compass.css"/>
        <Title text="CoverageCompass"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WelcomePage/>
                <Route path=StaticSegment("callback") view=CallbackPage/>
            </Routes>
        </Router>
    }
}
