//! 404 page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not-found fallback for unmatched routes
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found | AI/ML Glossary Pro" />
        <div class="min-h-screen bg-theme-primary flex items-center justify-center px-4">
            <div class="text-center">
                <p class="text-6xl font-bold text-accent-primary mb-4">"404"</p>
                <h1 class="text-2xl font-bold text-theme-primary mb-2">"Page not found"</h1>
                <p class="text-theme-secondary mb-8">
                    "The page you're looking for doesn't exist or has moved."
                </p>
                <A href="/" attr:class="btn-primary">"Back to the glossary"</A>
            </div>
        </div>
    }
}
