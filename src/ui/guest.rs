//! Reactive wrapper around the guest preview counter.
//!
//! Holds the [`GuestSession`] in a signal, persists every mutation to
//! localStorage, and resets the counter when the visitor authenticates.
//! Analytics emission is fire-and-forget: a failed CTA event costs a console
//! line, nothing else.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;
use serde::Serialize;

use crate::core::guest::GuestSession;
use crate::ui::auth::{AuthContext, AuthState};

#[allow(dead_code)]
const STORAGE_KEY_SESSION: &str = "aiglossary_guest_session";

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct CtaEvent<'a> {
    label: &'a str,
}

/// Guest preview context. Cheap to copy; provided once at the app root.
#[derive(Clone, Copy)]
pub struct GuestPreviewContext {
    pub session: RwSignal<GuestSession>,
}

impl GuestPreviewContext {
    pub fn previews_remaining(&self) -> u32 {
        self.session.get().previews_remaining()
    }

    pub fn has_reached_limit(&self) -> bool {
        self.session.get().has_reached_limit()
    }

    /// Consume one preview (clamped at the limit) and persist.
    pub fn record_view(&self) {
        self.session.update(|s| {
            s.record_view();
        });
        persist(&self.session.get_untracked());
    }

    /// Record a CTA click: remember the label, persist, and emit an
    /// analytics event. Never fails from the caller's point of view.
    pub fn record_cta(&self, label: &str) {
        self.session.update(|s| s.record_cta_label(label));
        persist(&self.session.get_untracked());

        #[cfg(not(feature = "ssr"))]
        {
            let label = label.to_string();
            spawn_local(async move {
                let event = CtaEvent { label: &label };
                if let Err(e) =
                    crate::ui::net::post_json_discard("/api/analytics/cta", &event).await
                {
                    leptos::logging::warn!("cta analytics dropped: {}", e);
                }
            });
        }
    }

    /// Fresh session (used on login and sign-out).
    pub fn reset(&self) {
        self.session.update(|s| s.reset());
        persist(&self.session.get_untracked());
    }
}

fn persist(session: &GuestSession) {
    if let Ok(json) = serde_json::to_string(session) {
        crate::ui::net::storage_set(STORAGE_KEY_SESSION, &json);
    }
}

/// Provide the guest preview context. Restores the persisted session after
/// hydration and resets it whenever the auth state flips to authenticated.
pub fn provide_guest_context(auth: AuthContext) -> GuestPreviewContext {
    let session = RwSignal::new(GuestSession::new());
    let ctx = GuestPreviewContext { session };

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            if let Some(stored) = crate::ui::net::storage_get(STORAGE_KEY_SESSION)
                .and_then(|json| serde_json::from_str::<GuestSession>(&json).ok())
            {
                session.set(stored);
            }
        });

        // Login wipes the guest counter; the account now carries access
        Effect::new(move |_| {
            if matches!(auth.state.get(), AuthState::Authenticated(_)) {
                ctx.reset();
            }
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = auth;
    }

    provide_context(ctx);
    ctx
}

/// Get the guest preview context from the component tree
pub fn use_guest_context() -> GuestPreviewContext {
    expect_context::<GuestPreviewContext>()
}
