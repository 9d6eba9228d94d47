//! Progressive Web App shell.
//!
//! Registers the service worker after hydration. This is a thin wrapper over
//! the browser API: registration failure is logged and the app carries on as
//! a plain web page.

use leptos::prelude::*;

/// Register `/sw.js` once the app is mounted. Returns a signal that flips to
/// true when registration succeeds.
pub fn use_service_worker() -> RwSignal<bool> {
    let registered = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::task::spawn_local;
        use wasm_bindgen_futures::JsFuture;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let container = window.navigator().service_worker();
            spawn_local(async move {
                match JsFuture::from(container.register("/sw.js")).await {
                    Ok(_) => registered.set(true),
                    Err(e) => {
                        leptos::logging::warn!("service worker registration failed: {:?}", e);
                    }
                }
            });
        });
    }

    registered
}
