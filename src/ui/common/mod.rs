//! Common reusable UI components shared across pages.

pub mod badge;
pub mod message;
pub mod spinner;

pub use badge::{Badge, BadgeVariant};
pub use message::ErrorMessage;
pub use spinner::{LoadingButton, Spinner};
