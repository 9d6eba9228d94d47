//! Glossary term page.
//!
//! This is where the guest preview gate lives. The lock decision is made
//! once per slug, before the view is spent: a guest who still has allowance
//! gets the full definition and one preview deducted; a guest already at the
//! limit gets the teaser plus the paywall modal. Authenticated readers are
//! never gated.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::banner::{BannerVariant, RecommendedCta, select_banner};
use crate::core::terms::find_term;
use crate::ui::auth::use_auth_context;
use crate::ui::banners::ConversionBanner;
use crate::ui::guest::use_guest_context;
use crate::ui::icon::{Icon, icons};

/// Term page component
#[component]
pub fn TermPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    view! {
        {move || {
            match find_term(&slug()) {
                Some(term) => view! { <TermView slug=term.slug /> }.into_any(),
                None => view! { <TermNotFound /> }.into_any(),
            }
        }}
    }
}

#[component]
fn TermView(slug: &'static str) -> impl IntoView {
    let auth = use_auth_context();
    let guest = use_guest_context();

    // None until the gate decision for this slug has been made. The decision
    // waits for hydration so the restored session counter is the one charged.
    let locked = RwSignal::new(None::<bool>);
    let charged_slug = RwSignal::new(None::<&'static str>);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if charged_slug.get_untracked() == Some(slug) {
            return;
        }
        if auth.is_authenticated() {
            charged_slug.set(Some(slug));
            locked.set(Some(false));
        } else if guest.session.get().has_reached_limit() {
            charged_slug.set(Some(slug));
            locked.set(Some(true));
        } else {
            guest.record_view();
            charged_slug.set(Some(slug));
            locked.set(Some(false));
        }
    });

    // Gate already resolved to unlocked, so the modal would contradict what
    // the reader sees; fall back to the low-pressure corner prompt.
    let banner = move || {
        if locked.get() == Some(true) {
            return None;
        }
        match select_banner(
            auth.is_authenticated(),
            &guest.session.get(),
            RecommendedCta::Signup,
        ) {
            Some(BannerVariant::Modal) => Some(BannerVariant::Compact),
            other => other,
        }
    };

    // Slug is validated by the caller
    let term = move || find_term(slug);

    view! {
        {move || term().map(|term| view! {
            <Title text=format!("{} | AI/ML Glossary Pro", term.title) />

            <div class="min-h-screen bg-theme-primary">
                {move || banner().map(|variant| view! { <ConversionBanner variant=variant /> })}
                {move || (locked.get() == Some(true))
                    .then(|| view! { <ConversionBanner variant=BannerVariant::Modal /> })}

                <div class="max-w-3xl mx-auto px-4 py-12">
                    <A
                        href="/"
                        attr:class="inline-flex items-center gap-2 text-sm text-theme-secondary
                               hover:text-theme-primary transition-colors mb-8"
                    >
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4 rotate-180" />
                        "All terms"
                    </A>

                    <p class="text-xs uppercase tracking-wide text-accent-primary font-semibold mb-2">
                        {term.category}
                    </p>
                    <h1 class="text-4xl font-bold text-theme-primary mb-4">{term.title}</h1>
                    <p class="text-lg text-theme-secondary mb-8">{term.summary}</p>

                    {move || match locked.get() {
                        // Pre-hydration and pre-decision: render the teaser only,
                        // so the full body never flashes for a gated guest
                        None | Some(true) => view! {
                            <div class="relative">
                                <p class="text-theme-secondary leading-relaxed">
                                    {teaser(term.definition)}
                                </p>
                                <div class="absolute inset-0 bg-gradient-to-b from-transparent to-theme-primary"></div>
                            </div>
                        }.into_any(),
                        Some(false) => view! {
                            <div class="prose-theme">
                                <p class="text-theme-primary leading-relaxed">{term.definition}</p>
                            </div>
                        }.into_any(),
                    }}
                </div>
            </div>
        })}
    }
}

/// First sentence of the definition, shown under the paywall blur.
fn teaser(definition: &str) -> String {
    match definition.find(". ") {
        Some(idx) => format!("{}.", &definition[..idx]),
        None => definition.to_string(),
    }
}

#[component]
fn TermNotFound() -> impl IntoView {
    view! {
        <Title text="Term not found | AI/ML Glossary Pro" />
        <div class="min-h-screen bg-theme-primary flex items-center justify-center px-4">
            <div class="text-center">
                <h1 class="text-3xl font-bold text-theme-primary mb-2">"Term not found"</h1>
                <p class="text-theme-secondary mb-6">
                    "That entry is not in the preview catalog."
                </p>
                <A href="/" attr:class="btn-primary">"Back to the glossary"</A>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::teaser;

    #[test]
    fn test_teaser_cuts_at_first_sentence() {
        let t = teaser("First sentence. Second sentence. Third.");
        assert_eq!(t, "First sentence.");
    }

    #[test]
    fn test_teaser_keeps_single_sentence() {
        assert_eq!(teaser("Only one sentence"), "Only one sentence");
    }
}
