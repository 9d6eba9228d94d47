//! Localized pricing section.
//!
//! On mount the component issues two independent fetches, geolocation and
//! launch-slot status, and folds each into local state. Neither is on the
//! critical path: a failed fetch leaves US pricing and an inactive promotion
//! in place, logged to the console and otherwise invisible.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;

use crate::core::pricing::{CountryPricing, LaunchSlotState};
use crate::ui::common::{Badge, BadgeVariant};
use crate::ui::guest::use_guest_context;
use crate::ui::icon::{Icon, icons};

/// Fetch geolocation and resolve pricing once per page load.
fn use_country_pricing() -> RwSignal<CountryPricing> {
    let pricing = RwSignal::new(CountryPricing::default());

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::pricing::{LocationResponse, resolve};

        Effect::new(move |_| {
            spawn_local(async move {
                match crate::ui::net::get_json::<LocationResponse>("/api/location").await {
                    Ok(loc) => {
                        pricing.set(resolve(&loc.country_code, &loc.country_name));
                    }
                    Err(e) => {
                        // Default US pricing stays in place
                        leptos::logging::log!("location lookup failed: {}", e);
                    }
                }
            });
        });
    }

    pricing
}

/// Fetch launch-slot state once per page load; inactive on any failure.
fn use_launch_slots() -> RwSignal<LaunchSlotState> {
    let slots = RwSignal::new(LaunchSlotState::INACTIVE);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::pricing::{EarlyBirdStatusResponse, LAUNCH_TOTAL_SLOTS};

        Effect::new(move |_| {
            spawn_local(async move {
                match crate::ui::net::get_json::<EarlyBirdStatusResponse>("/api/early-bird-status")
                    .await
                {
                    Ok(resp) => slots.set(resp.into_state(LAUNCH_TOTAL_SLOTS)),
                    Err(e) => {
                        leptos::logging::log!("early-bird status unavailable: {}", e);
                    }
                }
            });
        });
    }

    slots
}

/// Pricing section with PPP-localized price and launch-slot counter
#[component]
pub fn PricingSection() -> impl IntoView {
    let guest = use_guest_context();
    let pricing = use_country_pricing();
    let slots = use_launch_slots();

    let on_checkout = move |_| {
        guest.record_cta("pricing-checkout");
    };

    view! {
        <section id="pricing" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-3xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "One Payment. Lifetime Access."
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "Every term, every example, every future update. No subscription."
                    </p>
                </div>

                <div class="bg-theme-primary p-8 rounded-2xl border-2 border-accent-primary shadow-xl text-center">
                    {move || {
                        slots.get().is_active.then(|| {
                            let remaining = slots.get().slots_remaining();
                            view! {
                                <div class="mb-4">
                                    <Badge variant=BadgeVariant::Warning>
                                        "Launch pricing: " {remaining} " of " {slots.get().total_slots} " slots left"
                                    </Badge>
                                </div>
                            }
                        })
                    }}

                    <div class="flex items-baseline justify-center gap-2 mb-2">
                        {move || {
                            let p = pricing.get();
                            if p.has_discount() {
                                view! {
                                    <span class="text-2xl text-theme-tertiary line-through">
                                        "$" {p.base_price}
                                    </span>
                                    <span class="text-5xl font-bold text-theme-primary">
                                        "$" {p.local_price}
                                    </span>
                                }.into_any()
                            } else {
                                view! {
                                    <span class="text-5xl font-bold text-theme-primary">
                                        "$" {p.local_price}
                                    </span>
                                }.into_any()
                            }
                        }}
                        <span class="text-theme-secondary">"USD, once"</span>
                    </div>

                    {move || {
                        pricing.get().discount_badge().map(|badge| view! {
                            <div class="mb-4">
                                <Badge variant=BadgeVariant::Success>{badge}</Badge>
                            </div>
                        })
                    }}

                    <p class="text-sm text-theme-tertiary mb-6">
                        {move || format!("Compare: {}", pricing.get().competitor)}
                    </p>

                    <ul class="text-left max-w-sm mx-auto space-y-3 mb-8">
                        <PricingFeature text="10,000+ AI/ML terms with examples" />
                        <PricingFeature text="Code snippets and diagrams" />
                        <PricingFeature text="Learning paths and progress tracking" />
                        <PricingFeature text="Lifetime updates included" />
                    </ul>

                    // External checkout, the transaction happens on Gumroad
                    <a
                        href=move || pricing.get().checkout_href()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="block w-full text-center py-3 px-6 bg-accent-primary hover:bg-accent-primary-hover
                               text-white font-semibold rounded-xl transition-colors"
                        on:click=on_checkout
                    >
                        {move || format!("Get lifetime access for ${}", pricing.get().local_price)}
                    </a>

                    <p class="text-xs text-theme-tertiary mt-4">
                        "Already purchased? " <a href="/verify" class="underline">"Verify your email"</a>
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingFeature(text: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-center gap-3">
            <Icon name=icons::CHECK class="w-5 h-5 text-green-500 flex-shrink-0" />
            <span class="text-theme-primary">{text}</span>
        </li>
    }
}
