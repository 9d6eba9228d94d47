//! Conversion banner components.
//!
//! `core::banner::select_banner` decides *which* banner a page shows; this
//! module owns everything impure about showing it: rendering, dismissal
//! persistence (sessionStorage, per variant), and CTA analytics.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::banner::BannerVariant;
use crate::ui::guest::use_guest_context;
use crate::ui::icon::{Icon, icons};

fn dismissal_key(variant: BannerVariant) -> String {
    format!("aiglossary_banner_dismissed:{}", variant.key())
}

/// Render the given conversion banner. Dismissible variants stay hidden for
/// the rest of the tab session once closed; the paywall modal cannot be
/// dismissed.
#[component]
pub fn ConversionBanner(variant: BannerVariant) -> impl IntoView {
    let guest = use_guest_context();
    let dismissed = RwSignal::new(false);

    // Restore this variant's dismissal after hydration
    #[cfg(not(feature = "ssr"))]
    {
        let key = dismissal_key(variant);
        Effect::new(move |_| {
            if crate::ui::net::session_get(&key).is_some() {
                dismissed.set(true);
            }
        });
    }

    let dismiss = move |_| {
        if variant.dismissible() {
            crate::ui::net::session_set(&dismissal_key(variant), "1");
            dismissed.set(true);
        }
    };

    let on_cta = move |_| {
        guest.record_cta(&format!("{}-upgrade", variant.key()));
    };

    let remaining = move || guest.previews_remaining();

    view! {
        <Show when=move || !dismissed.get()>
            {move || match variant {
                BannerVariant::TopBar => view! {
                    <div class="banner-top-bar fixed top-0 left-0 right-0 z-40 bg-accent-primary text-white text-sm
                                flex items-center justify-center gap-3 px-4 py-2">
                        <span>"Free preview: " {remaining} " terms left. Lifetime access never expires."</span>
                        <A href="/verify" attr:class="underline font-semibold" on:click=on_cta>
                            "Unlock everything"
                        </A>
                        <button class="absolute right-3 opacity-80 hover:opacity-100" on:click=dismiss aria-label="Dismiss">
                            <Icon name=icons::X class="w-4 h-4" />
                        </button>
                    </div>
                }.into_any(),

                BannerVariant::Sticky => view! {
                    <div class="banner-sticky fixed bottom-0 left-0 right-0 z-40 bg-theme-primary border-t border-theme
                                shadow-lg px-4 py-3 flex flex-col sm:flex-row items-center justify-center gap-3">
                        <span class="text-sm text-theme-primary font-medium">
                            "This is your last free preview."
                        </span>
                        <A href="/verify" attr:class="btn-primary text-sm" on:click=on_cta>
                            "Get lifetime access"
                        </A>
                        <button class="absolute right-3 text-theme-tertiary hover:text-theme-primary" on:click=dismiss aria-label="Dismiss">
                            <Icon name=icons::X class="w-4 h-4" />
                        </button>
                    </div>
                }.into_any(),

                BannerVariant::Inline => view! {
                    <div class="banner-inline my-8 p-6 rounded-xl border border-accent-primary/30 bg-accent-primary/5
                                flex flex-col sm:flex-row items-center justify-between gap-4">
                        <div>
                            <h3 class="font-semibold text-theme-primary">"10,000+ AI/ML terms, one payment"</h3>
                            <p class="text-sm text-theme-secondary mt-1">
                                "Regional pricing applies automatically at checkout."
                            </p>
                        </div>
                        <A href="/#pricing" attr:class="btn-primary whitespace-nowrap" on:click=on_cta>
                            "See pricing"
                        </A>
                    </div>
                }.into_any(),

                BannerVariant::Modal => view! {
                    // Paywall: blocking and not dismissible
                    <div class="banner-modal fixed inset-0 z-50 flex items-center justify-center bg-black/60 px-4">
                        <div class="bg-theme-primary rounded-2xl border border-theme shadow-2xl max-w-md w-full p-8 text-center">
                            <div class="w-12 h-12 mx-auto mb-4 rounded-full bg-accent-primary/10 flex items-center justify-center">
                                <Icon name=icons::LOCK class="w-6 h-6 text-accent-primary" />
                            </div>
                            <h2 class="text-xl font-bold text-theme-primary mb-2">
                                "You've used your free previews"
                            </h2>
                            <p class="text-sm text-theme-secondary mb-6">
                                "Verify your purchase to keep reading, or grab lifetime access: every term, every update, one payment."
                            </p>
                            <div class="flex flex-col gap-3">
                                <A href="/#pricing" attr:class="btn-primary" on:click=on_cta>
                                    "Get lifetime access"
                                </A>
                                <A href="/verify" attr:class="btn-secondary" on:click=move |_| {
                                    guest.record_cta("modal-verify");
                                }>
                                    "I already bought it"
                                </A>
                            </div>
                        </div>
                    </div>
                }.into_any(),

                BannerVariant::Compact => view! {
                    <div class="banner-compact fixed bottom-4 right-4 z-40 max-w-xs bg-theme-primary border border-theme
                                rounded-xl shadow-lg p-4">
                        <button class="absolute top-2 right-2 text-theme-tertiary hover:text-theme-primary" on:click=dismiss aria-label="Dismiss">
                            <Icon name=icons::X class="w-4 h-4" />
                        </button>
                        <p class="text-sm text-theme-primary pr-4">
                            {remaining} " free previews left"
                        </p>
                        <A href="/verify" attr:class="text-sm font-semibold text-accent-primary hover:underline" on:click=on_cta>
                            "Create your account"
                        </A>
                    </div>
                }.into_any(),

                BannerVariant::Fab => view! {
                    <div class="banner-fab fixed bottom-5 right-5 z-40">
                        <A
                            href="/#pricing"
                            attr:class="flex items-center gap-2 px-4 py-3 rounded-full bg-accent-primary text-white
                                   font-semibold shadow-xl hover:bg-accent-primary-hover transition-colors"
                            on:click=on_cta
                        >
                            <Icon name=icons::SPARKLES class="w-5 h-5" />
                            "Upgrade"
                        </A>
                        <button
                            class="absolute -top-2 -right-2 w-5 h-5 rounded-full bg-theme-secondary text-theme-primary text-xs"
                            on:click=dismiss
                            aria-label="Dismiss"
                        >
                            "×"
                        </button>
                    </div>
                }.into_any(),
            }}
        </Show>
    }
}
