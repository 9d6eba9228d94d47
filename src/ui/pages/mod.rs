//! Application pages:
//! - Landing page (home)
//! - Term page (glossary previews)
//! - Verify page (purchase verification)
//! - Not-found page

mod landing;
mod not_found;
mod term;
mod verify;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use term::TermPage;
pub use verify::VerifyPage;
