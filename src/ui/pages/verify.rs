//! Purchase verification page.
//!
//! The only "login" the app has: the visitor enters the email they used at
//! Gumroad checkout and the server confirms the sale. Verification failures
//! are shown inline and retried only when the visitor submits again.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::auth::{AuthState, use_auth_context};
use crate::ui::common::{ErrorMessage, LoadingButton};
use crate::ui::icon::{Icon, icons};

/// Verify page component
#[component]
pub fn VerifyPage() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <Title text="Verify your purchase | AI/ML Glossary Pro" />

        <div class="min-h-screen bg-theme-primary flex items-center justify-center px-4 py-12">
            <div class="max-w-md w-full">
                <A
                    href="/"
                    attr:class="inline-flex items-center gap-2 text-sm text-theme-secondary
                           hover:text-theme-primary transition-colors mb-8"
                >
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4 rotate-180" />
                    "Back to the glossary"
                </A>

                {move || match auth.state.get() {
                    AuthState::Authenticated(user) => view! {
                        <AccountCard email=user.email.clone() purchase_date=user.purchase_date.clone() />
                    }.into_any(),
                    _ => view! { <VerifyForm /> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Email form shown to unverified visitors
#[component]
fn VerifyForm() -> impl IntoView {
    let auth = use_auth_context();
    let (email, set_email) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let address = email.get().trim().to_string();
        if address.is_empty() || !address.contains('@') {
            auth.error
                .set(Some("Please enter the email you used at checkout.".to_string()));
            return;
        }

        #[cfg(not(feature = "ssr"))]
        leptos::task::spawn_local(async move {
            // verify_purchase records success and failure in the auth context
            let _ = crate::ui::auth::verify_purchase(&address).await;
        });
    };

    view! {
        <div class="bg-theme-primary border border-theme rounded-2xl shadow-lg p-8">
            <div class="w-12 h-12 mx-auto mb-4 rounded-full bg-accent-primary/10 flex items-center justify-center">
                <Icon name=icons::USER class="w-6 h-6 text-accent-primary" />
            </div>
            <h1 class="text-2xl font-bold text-theme-primary text-center mb-2">
                "Verify your purchase"
            </h1>
            <p class="text-sm text-theme-secondary text-center mb-6">
                "Enter the email you used on Gumroad and we'll unlock your lifetime access on this device."
            </p>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label for="email" class="block text-sm font-medium text-theme-secondary mb-1">
                        "Purchase email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="input-field w-full"
                        placeholder="you@example.com"
                        autocomplete="email"
                        required
                        prop:value=email
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                            auth.clear_error();
                        }
                    />
                </div>

                <ErrorMessage error=auth.error />

                <LoadingButton label="Verify purchase" loading=auth.loading class="w-full".to_string() />
            </form>

            <p class="text-xs text-theme-tertiary text-center mt-6">
                "Haven't bought it yet? "
                <A href="/#pricing" attr:class="text-accent-primary hover:underline">
                    "See pricing"
                </A>
            </p>
        </div>
    }
}

/// Account summary shown once the purchase is verified
#[component]
fn AccountCard(email: String, purchase_date: String) -> impl IntoView {
    view! {
        <div class="bg-theme-primary border border-theme rounded-2xl shadow-lg p-8 text-center">
            <div class="w-12 h-12 mx-auto mb-4 rounded-full bg-green-500/10 flex items-center justify-center">
                <Icon name=icons::CHECK class="w-6 h-6 text-green-500" />
            </div>
            <h1 class="text-2xl font-bold text-theme-primary mb-2">"You're all set"</h1>
            <p class="text-sm text-theme-secondary mb-6">
                "Lifetime access is active on this device."
            </p>

            <dl class="text-left text-sm space-y-3 mb-8">
                <div class="flex justify-between gap-4">
                    <dt class="text-theme-tertiary">"Account"</dt>
                    <dd class="text-theme-primary font-medium truncate">{email}</dd>
                </div>
                <div class="flex justify-between gap-4">
                    <dt class="text-theme-tertiary">"Plan"</dt>
                    <dd class="text-theme-primary font-medium">"Lifetime"</dd>
                </div>
                <div class="flex justify-between gap-4">
                    <dt class="text-theme-tertiary">"Purchased"</dt>
                    <dd class="text-theme-primary font-medium">{purchase_date}</dd>
                </div>
            </dl>

            <div class="flex flex-col gap-3">
                <A href="/" attr:class="btn-primary">"Start reading"</A>
                <button
                    class="text-sm font-medium text-red-500 hover:underline inline-flex items-center justify-center gap-1"
                    on:click=move |_| crate::ui::auth::logout()
                >
                    <Icon name=icons::LOGOUT class="w-4 h-4" />
                    "Sign out on all tabs"
                </button>
            </div>
        </div>
    }
}
