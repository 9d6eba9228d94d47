use leptos::prelude::*;

/// Badge variant types for different use cases
#[derive(Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    /// Default neutral badge
    Default,
    /// Success/positive badge (green), used for the PPP discount
    Success,
    /// Warning badge (amber), used for the launch-slot counter
    Warning,
    /// Info badge (blue)
    Info,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge-default",
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Warning => "badge-warning",
            BadgeVariant::Info => "badge-info",
        }
    }
}

/// Badge component for labels and status indicators
#[component]
pub fn Badge(
    /// Badge content
    children: Children,
    /// Visual variant
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        format!("badge {}", variant.class())
    } else {
        format!("badge {} {}", variant.class(), class)
    };

    view! {
        <span class=full_classes>
            {children()}
        </span>
    }
}
