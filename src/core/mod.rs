//! Core domain logic: localized pricing, guest gating, and purchase
//! verification. Everything here is DOM-free; the reactive wrappers live in
//! `crate::ui`.

pub mod ab;
pub mod banner;
pub mod guest;
pub mod gumroad;
pub mod pricing;
pub mod terms;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
