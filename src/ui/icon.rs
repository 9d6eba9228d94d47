use leptos::prelude::*;

/// Inline SVG icon referenced by name (icons ship in `public/icons/`).
#[component]
pub fn Icon(
    /// Icon name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names used across the app
#[allow(dead_code)]
pub mod icons {
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const MENU: &str = "menu";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOCK: &str = "lock";
    pub const BOOK: &str = "book";
    pub const GLOBE: &str = "globe";
    pub const TAG: &str = "tag";
    pub const SPARKLES: &str = "sparkles";
    pub const USER: &str = "user";
    pub const LOGOUT: &str = "logout";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const ARROW_RIGHT: &str = "arrow-right";
}
