//! Landing page component
//!
//! The marketing surface of the glossary:
//! - SEO meta tags
//! - Hero section with an A/B-tested background
//! - Social-proof strip
//! - Feature grid
//! - Popular-terms teaser (entry point into the guest preview flow)
//! - PPP-localized pricing section with the launch-slot counter
//! - FAQ accordion, CTA, footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::core::ab::HeroBackground;
use crate::core::banner::{BannerVariant, RecommendedCta, select_banner};
use crate::core::terms::TERMS;
use crate::ui::auth::{AuthState, use_auth_context};
use crate::ui::banners::ConversionBanner;
use crate::ui::guest::use_guest_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::pricing::PricingSection;
use crate::ui::theme::use_theme_context;

#[allow(dead_code)]
const STORAGE_KEY_AB: &str = "aiglossary_ab_background";

/// Load or assign this browser's hero background arm. Sticky: assigned once,
/// persisted, reported back through the analytics label space.
fn use_hero_background() -> RwSignal<HeroBackground> {
    let background = RwSignal::new(HeroBackground::default());

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        match crate::ui::net::storage_get(STORAGE_KEY_AB) {
            Some(stored) => background.set(HeroBackground::from_str(&stored)),
            None => {
                let assigned = HeroBackground::assign(js_sys::Math::random());
                crate::ui::net::storage_set(STORAGE_KEY_AB, assigned.as_str());
                background.set(assigned);
            }
        }
    });

    background
}

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth_context();
    let guest = use_guest_context();
    let background = use_hero_background();

    // The paywall modal belongs on term pages; on the marketing page the
    // limit-reached visitor gets the sticky bar instead.
    let banner = move || {
        match select_banner(
            auth.is_authenticated(),
            &guest.session.get(),
            RecommendedCta::Pricing,
        ) {
            Some(BannerVariant::Modal) => Some(BannerVariant::Sticky),
            other => other,
        }
    };

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header />

            {move || banner().map(|variant| view! { <ConversionBanner variant=variant /> })}

            // Hero
            <section class="min-h-screen flex items-center justify-center relative pt-16">
                <div class="text-center px-4 max-w-4xl mx-auto relative z-10">
                    <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-theme-primary mb-6 tracking-tight">
                        "AI/ML Glossary Pro"
                    </h1>
                    <p class="text-xl sm:text-2xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed">
                        "10,000+ AI and machine learning terms, explained with examples and code. One payment, lifetime access."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <a
                            href="#pricing"
                            class="landing-btn-primary"
                            on:click=move |_| guest.record_cta("hero-pricing")
                        >
                            "Get Lifetime Access"
                        </a>
                        <A
                            href="/term/transformer"
                            attr:class="landing-btn-secondary"
                            attr:aria-label="Preview a glossary term"
                        >
                            "Preview a Term"
                        </A>
                    </div>

                    <div class="absolute -bottom-16 left-1/2 -translate-x-1/2 animate-bounce">
                        <Icon name=icons::CHEVRON_DOWN class="w-6 h-6 text-theme-tertiary" />
                    </div>
                </div>

                <HeroBackdrop background=background />
            </section>

            // Social proof
            <section class="py-12 px-4 border-y border-theme/50 bg-theme-secondary/10">
                <div class="max-w-4xl mx-auto grid grid-cols-2 sm:grid-cols-4 gap-8 text-center">
                    <SocialProofStat value="10,000+" label="terms covered" />
                    <SocialProofStat value="42" label="categories" />
                    <SocialProofStat value="1,200+" label="code examples" />
                    <SocialProofStat value="4.9/5" label="reader rating" />
                </div>
            </section>

            // Features
            <section class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Why AI/ML Glossary Pro?"
                        </h2>
                        <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                            "A reference you actually reach for, not another course you abandon."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon=icons::BOOK
                            title="Depth Without Jargon"
                            description="Every term gets a plain-language definition, a worked example, and the math when it matters."
                        />
                        <FeatureCard
                            icon=icons::GLOBE
                            title="Fair Regional Pricing"
                            description="Purchasing-power-parity discounts apply automatically based on where you are."
                        />
                        <FeatureCard
                            icon=icons::SPARKLES
                            title="Always Current"
                            description="New terms and revisions land continuously. Lifetime access means you get all of them."
                        />
                        <FeatureCard
                            icon=icons::TAG
                            title="One Payment"
                            description="No subscription, no renewal emails. Buy once, own it."
                        />
                        <FeatureCard
                            icon=icons::CHECK
                            title="Track Your Progress"
                            description="Mark terms as learned and pick up where you left off across devices."
                        />
                        <FeatureCard
                            icon=icons::LOCK
                            title="Works Offline"
                            description="Installable as an app; recently read terms stay available without a connection."
                        />
                    </div>
                </div>
            </section>

            // Popular terms teaser
            <section class="py-20 px-4 bg-theme-secondary/10">
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl font-bold text-theme-primary mb-4">"Start Reading"</h2>
                        <p class="text-theme-secondary">
                            "Preview a couple of terms free, no account needed."
                        </p>
                    </div>
                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                        {TERMS.iter().map(|term| view! {
                            <A
                                href=format!("/term/{}", term.slug)
                                attr:class="block p-5 bg-theme-primary rounded-xl border border-theme
                                       hover:border-accent-primary/50 transition-colors"
                            >
                                <p class="text-xs uppercase tracking-wide text-theme-tertiary mb-1">
                                    {term.category}
                                </p>
                                <h3 class="font-semibold text-theme-primary mb-1">{term.title}</h3>
                                <p class="text-sm text-theme-secondary">{term.summary}</p>
                            </A>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <PricingSection />

            <FaqSection />

            // CTA
            <section class="py-24 px-4 bg-gradient-to-b from-transparent to-theme-secondary/30">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Stop re-googling the same terms"
                    </h2>
                    <p class="text-lg text-theme-secondary mb-8 max-w-xl mx-auto">
                        "Join thousands of engineers and researchers who keep the glossary one tab away."
                    </p>
                    <a
                        href="#pricing"
                        class="landing-btn-primary"
                        on:click=move |_| guest.record_cta("footer-pricing")
                    >
                        "Get Lifetime Access"
                    </a>
                </div>
            </section>

            <Footer />
        </div>
    }
}

/// Hero backdrop, one markup block per experiment arm
#[component]
fn HeroBackdrop(background: RwSignal<HeroBackground>) -> impl IntoView {
    view! {
        <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
            {move || match background.get() {
                HeroBackground::Gradient => view! {
                    <div>
                        <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-accent-primary/5 rounded-full blur-3xl"></div>
                        <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl"></div>
                    </div>
                }.into_any(),
                HeroBackground::Grid => view! {
                    <div class="absolute inset-0 landing-grid-bg opacity-20">
                        <div class="absolute top-1/3 left-1/2 -translate-x-1/2 w-[40rem] h-[40rem]
                                    bg-accent-primary/10 rounded-full blur-3xl"></div>
                    </div>
                }.into_any(),
                HeroBackground::Aurora => view! {
                    <div class="absolute inset-0 landing-aurora-bg opacity-30"></div>
                }.into_any(),
            }}
        </div>
    }
}

/// Header with navigation, auth state, and theme toggle
#[component]
fn Header() -> impl IntoView {
    let theme = use_theme_context();
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-30 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center text-white font-bold">
                            "A"
                        </div>
                        <span class="text-xl font-bold text-theme-primary">"AI/ML Glossary Pro"</span>
                    </A>

                    // Desktop navigation
                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-4">
                            <a href="#pricing" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "Pricing"
                            </a>
                            <a href="#faq" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "FAQ"
                            </a>
                            <AccountControls />
                        </nav>
                        <button
                            class="p-2 rounded-lg hover:bg-theme-secondary transition-colors text-theme-secondary"
                            on:click=move |_| theme.toggle()
                            aria-label="Toggle theme"
                        >
                            {move || {
                                if theme.is_dark.get() {
                                    view! { <Icon name=icons::SUN class="w-5 h-5" /> }.into_any()
                                } else {
                                    view! { <Icon name=icons::MOON class="w-5 h-5" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-theme-secondary transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6 text-theme-primary" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6 text-theme-primary" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <div class="py-4 space-y-2 border-t border-theme/50">
                        <a
                            href="#pricing"
                            class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary rounded-lg"
                            on:click=move |_| set_mobile_menu_open.set(false)
                        >
                            "Pricing"
                        </a>
                        <a
                            href="#faq"
                            class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary rounded-lg"
                            on:click=move |_| set_mobile_menu_open.set(false)
                        >
                            "FAQ"
                        </a>
                        <div class="px-4 py-2">
                            <AccountControls />
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Sign-in link or account summary, depending on auth state
#[component]
fn AccountControls() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        {move || {
            match auth.state.get() {
                AuthState::Authenticated(user) => {
                    view! {
                        <div class="flex items-center gap-3">
                            <span class="text-sm text-theme-secondary truncate max-w-[12rem]" title=user.email.clone()>
                                {user.email.clone()}
                            </span>
                            <button
                                class="text-sm font-medium text-red-500 hover:underline flex items-center gap-1"
                                on:click=move |_| crate::ui::auth::logout()
                            >
                                <Icon name=icons::LOGOUT class="w-4 h-4" />
                                "Sign Out"
                            </button>
                        </div>
                    }.into_any()
                }
                _ => {
                    view! {
                        <A
                            href="/verify"
                            attr:class="px-4 py-2 text-sm font-medium text-white bg-accent-primary
                                   hover:bg-accent-primary-hover rounded-lg transition-colors shadow-md"
                        >
                            "Verify Purchase"
                        </A>
                    }.into_any()
                }
            }
        }}
    }
}

#[component]
fn SocialProofStat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div>
            <p class="text-3xl font-bold text-theme-primary">{value}</p>
            <p class="text-sm text-theme-tertiary">{label}</p>
        </div>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50
                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6 text-accent-primary" />
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{description}</p>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="AI/ML Glossary Pro: Every AI Term, Explained" />

        <Meta name="description" content="10,000+ AI and machine learning terms with plain-language definitions, examples, and code. One payment, lifetime access, fair regional pricing." />
        <Meta name="keywords" content="AI glossary, machine learning glossary, ML terms, deep learning definitions, AI reference" />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="AI/ML Glossary Pro: Every AI Term, Explained" />
        <Meta property="og:description" content="10,000+ AI and machine learning terms with plain-language definitions, examples, and code. One payment, lifetime access." />

        <Link rel="canonical" href="https://aiglossarypro.com/" />
    }
}

/// FAQ section component
#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="py-20 px-4">
            <div class="max-w-3xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Frequently Asked Questions"
                    </h2>
                </div>

                <div class="space-y-4">
                    <FaqItem
                        question="Is this a subscription?"
                        answer="No. One payment buys lifetime access, including every term and revision we add later. There is nothing to cancel because nothing renews."
                    />
                    <FaqItem
                        question="How does regional pricing work?"
                        answer="We apply purchasing-power-parity discounts automatically based on your location, up to 60% off in some regions. The discount you see on this page is carried through to checkout."
                    />
                    <FaqItem
                        question="How do the free previews work?"
                        answer="You can read a couple of full term pages without an account. After that, the glossary asks you to purchase or verify an existing purchase."
                    />
                    <FaqItem
                        question="I already bought it. How do I sign in?"
                        answer="Go to the verify page and enter the email you used at checkout. We confirm the purchase with the payment processor and unlock your access on this device."
                    />
                    <FaqItem
                        question="Where does payment happen?"
                        answer="Checkout is handled entirely by Gumroad. We never see your card details; we only confirm afterwards that your email bought the product."
                    />
                    <FaqItem
                        question="Does it work offline?"
                        answer="The glossary installs as a Progressive Web App. Terms you have read recently stay available without a connection."
                    />
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="border border-theme rounded-xl overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-theme-secondary/30 transition-colors"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-expanded=move || is_open.get()
            >
                <span class="font-semibold text-theme-primary">{question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 text-theme-tertiary flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-300 max-h-0"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <div class="px-6 pb-4 text-theme-secondary leading-relaxed">
                    {answer}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 px-4 border-t border-theme">
            <div class="max-w-6xl mx-auto flex flex-col sm:flex-row items-center justify-between gap-4">
                <p class="text-sm text-theme-tertiary">
                    "© 2026 AI/ML Glossary Pro"
                </p>
                <nav class="flex items-center gap-6 text-sm text-theme-secondary">
                    <a href="#pricing" class="hover:text-theme-primary transition-colors">"Pricing"</a>
                    <a href="#faq" class="hover:text-theme-primary transition-colors">"FAQ"</a>
                    <A href="/verify" attr:class="hover:text-theme-primary transition-colors">"Verify Purchase"</A>
                </nav>
            </div>
        </footer>
    }
}
