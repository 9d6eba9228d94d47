//! UI layer: Leptos components, contexts, and pages.

pub mod auth;
pub mod banners;
pub mod common;
pub mod guest;
pub mod icon;
pub mod net;
pub mod pages;
pub mod pricing;
pub mod pwa;
pub mod theme;
