//! Auth context for purchase-verified access.
//!
//! There are no passwords here: a visitor "logs in" by proving to the server
//! that their email bought the product on Gumroad. The verified account is
//! persisted to localStorage and broadcast to other tabs, so logging out in
//! one tab logs out all of them.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};

use crate::core::gumroad::VerifiedUser;

/// Authentication state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Initial state, checking localStorage
    #[default]
    Loading,
    /// Visitor has not verified a purchase
    Unauthenticated,
    /// Purchase verified
    Authenticated(VerifiedUser),
}

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
    /// Loading state for the verification call
    pub loading: RwSignal<bool>,
    /// Error message from the last verification attempt
    pub error: RwSignal<Option<String>>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), AuthState::Authenticated(_))
    }

    pub fn user(&self) -> Option<VerifiedUser> {
        match self.state.get() {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[allow(dead_code)]
const STORAGE_KEY_USER: &str = "aiglossary_user";
#[allow(dead_code)]
const AUTH_CHANNEL: &str = "aiglossary-auth";

/// Message published on the cross-tab channel whenever auth state changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[allow(dead_code)]
enum AuthBroadcast {
    Login { user: VerifiedUser },
    Logout,
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start with Unauthenticated on both server and client to avoid hydration mismatch
    let state = RwSignal::new(AuthState::Unauthenticated);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let ctx = AuthContext {
        state,
        loading,
        error,
    };

    // Restore the verified account from localStorage after hydration and
    // start listening for other tabs (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            state.set(AuthState::Loading);

            match crate::ui::net::storage_get(STORAGE_KEY_USER)
                .and_then(|json| serde_json::from_str::<VerifiedUser>(&json).ok())
            {
                Some(user) => state.set(AuthState::Authenticated(user)),
                None => state.set(AuthState::Unauthenticated),
            }
        });

        Effect::new(move |_| {
            let Ok(channel) = web_sys::BroadcastChannel::new(AUTH_CHANNEL) else {
                return;
            };
            let handler = Closure::<dyn Fn(web_sys::MessageEvent)>::new(
                move |e: web_sys::MessageEvent| {
                    match serde_wasm_bindgen::from_value::<AuthBroadcast>(e.data()) {
                        Ok(AuthBroadcast::Login { user }) => {
                            state.set(AuthState::Authenticated(user));
                        }
                        Ok(AuthBroadcast::Logout) => {
                            state.set(AuthState::Unauthenticated);
                        }
                        Err(_) => {}
                    }
                },
            );
            channel.set_onmessage(Some(handler.as_ref().unchecked_ref()));
            // Keep channel and closure alive for the page lifetime
            handler.forget();
            std::mem::forget(channel);
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Publish an auth change to the other tabs. Errors here only cost cross-tab
/// sync, never the local login, so they are swallowed.
#[cfg(not(feature = "ssr"))]
fn broadcast(message: &AuthBroadcast) {
    let Ok(channel) = web_sys::BroadcastChannel::new(AUTH_CHANNEL) else {
        return;
    };
    if let Ok(value) = serde_wasm_bindgen::to_value(message) {
        let _ = channel.post_message(&value);
    }
    channel.close();
}

/// Verify a purchase and authenticate on success.
///
/// On failure the error lands in `ctx.error` for inline display; the caller
/// decides when to retry (there is no automatic retry).
#[cfg(not(feature = "ssr"))]
pub async fn verify_purchase(email: &str) -> Result<VerifiedUser, String> {
    use crate::core::gumroad::{VerifyPurchaseRequest, VerifyPurchaseResponse};

    let ctx = use_auth_context();
    ctx.loading.set(true);
    ctx.error.set(None);

    let request = VerifyPurchaseRequest {
        email: email.trim().to_string(),
    };

    let result = match crate::ui::net::post_json::<_, VerifyPurchaseResponse>(
        "/gumroad/verify-purchase",
        &request,
    )
    .await
    {
        Ok(resp) => match (resp.success, resp.user) {
            (true, Some(user)) => {
                crate::ui::net::storage_set(
                    STORAGE_KEY_USER,
                    &serde_json::to_string(&user).unwrap_or_default(),
                );
                ctx.state.set(AuthState::Authenticated(user.clone()));
                broadcast(&AuthBroadcast::Login { user: user.clone() });
                Ok(user)
            }
            _ => Err(resp.message),
        },
        Err(_) => Err("Could not reach the server. Please try again.".to_string()),
    };

    ctx.loading.set(false);

    if let Err(ref e) = result {
        ctx.error.set(Some(e.clone()));
    }

    result
}

#[cfg(feature = "ssr")]
pub async fn verify_purchase(_email: &str) -> Result<VerifiedUser, String> {
    Err("Verification not available on server".to_string())
}

/// Sign out: clear the stored account and tell the other tabs.
#[cfg(not(feature = "ssr"))]
pub fn logout() {
    let ctx = use_auth_context();
    crate::ui::net::storage_remove(STORAGE_KEY_USER);
    ctx.state.set(AuthState::Unauthenticated);
    broadcast(&AuthBroadcast::Logout);
}

#[cfg(feature = "ssr")]
pub fn logout() {}
