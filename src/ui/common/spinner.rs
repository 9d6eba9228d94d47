//! Loading indicators.

use leptos::prelude::*;

/// Spinning loading indicator
#[component]
pub fn Spinner(
    /// CSS classes for sizing
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=format!("animate-spin {}", class) viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"/>
            <path class="opacity-75" fill="currentColor"
                  d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"/>
        </svg>
    }
}

/// Submit button that swaps its label for a spinner while busy
#[component]
pub fn LoadingButton(
    /// Button label when idle
    label: &'static str,
    /// Whether the operation is in flight
    #[prop(into)]
    loading: Signal<bool>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "btn-primary".to_string()
    } else {
        format!("btn-primary {}", class)
    };

    view! {
        <button type="submit" class=full_classes disabled=move || loading.get()>
            {move || {
                if loading.get() {
                    view! {
                        <span class="inline-flex items-center gap-2">
                            <Spinner class="w-4 h-4"/>
                            "Verifying..."
                        </span>
                    }.into_any()
                } else {
                    view! { <span>{label}</span> }.into_any()
                }
            }}
        </button>
    }
}
