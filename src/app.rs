use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::auth::provide_auth_context;
use crate::ui::guest::provide_guest_context;
use crate::ui::pages::{LandingPage, NotFoundPage, TermPage, VerifyPage};
use crate::ui::pwa::use_service_worker;
use crate::ui::theme::provide_theme_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="theme-color" content="#111827"/>
                <link rel="manifest" href="/manifest.json"/>
                <link rel="icon" href="/favicon.svg" type="image/svg+xml"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // App-wide contexts: auth first, the guest counter watches it
    let auth = provide_auth_context();
    let _guest = provide_guest_context(auth);
    let _theme = provide_theme_context();

    // Register the service worker for offline support
    let _sw_ready = use_service_worker();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/aiglossary.css"/>

        // default title, pages override it
        <Title text="AI/ML Glossary Pro"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/term/:slug") view=TermPage />
                <Route path=path!("/verify") view=VerifyPage />
            </Routes>
        </Router>
    }
}
