//! Conversion banner selection.
//!
//! Pure decision table mapping guest-session state to the banner a page
//! should show. Rendering, dismissal persistence, and analytics all live in
//! `ui::banners`; this module never touches the DOM.

use crate::core::guest::GuestSession;

/// The banner shapes the UI knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerVariant {
    /// Slim bar pinned above the header.
    TopBar,
    /// Bottom-sticky bar, used when the visitor is on their last preview.
    Sticky,
    /// In-content card between sections.
    Inline,
    /// Blocking dialog once the preview allowance is spent.
    Modal,
    /// Small dismissible card in the corner.
    Compact,
    /// Floating action button.
    Fab,
}

impl BannerVariant {
    /// Stable key for analytics labels and per-variant dismissal storage.
    pub fn key(&self) -> &'static str {
        match self {
            BannerVariant::TopBar => "top-bar",
            BannerVariant::Sticky => "sticky",
            BannerVariant::Inline => "inline",
            BannerVariant::Modal => "modal",
            BannerVariant::Compact => "compact",
            BannerVariant::Fab => "fab",
        }
    }

    /// The paywall modal must not be dismissible; everything else is.
    pub fn dismissible(&self) -> bool {
        !matches!(self, BannerVariant::Modal)
    }
}

/// What the page would like the visitor to do next. Influences which of the
/// softer banner shapes is chosen before the limit bites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecommendedCta {
    #[default]
    Signup,
    Pricing,
}

/// Pick the banner for the current visitor, or `None` when no banner should
/// render at all (authenticated users never see conversion prompts).
///
/// Deterministic: same inputs, same variant.
pub fn select_banner(
    is_authenticated: bool,
    session: &GuestSession,
    recommended: RecommendedCta,
) -> Option<BannerVariant> {
    if is_authenticated {
        return None;
    }
    if session.has_reached_limit() {
        return Some(BannerVariant::Modal);
    }
    if session.previews_remaining() == 1 {
        return Some(BannerVariant::Sticky);
    }
    if session.previews_used == 0 {
        return Some(match recommended {
            RecommendedCta::Pricing => BannerVariant::Inline,
            RecommendedCta::Signup => BannerVariant::TopBar,
        });
    }
    // Mid-session with more than one preview left (larger allowances)
    Some(match recommended {
        RecommendedCta::Signup => BannerVariant::Compact,
        RecommendedCta::Pricing => BannerVariant::Fab,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::guest::GuestSession;

    fn session_with_used(used: u32) -> GuestSession {
        let mut session = GuestSession::new();
        for _ in 0..used {
            session.record_view();
        }
        session
    }

    #[test]
    fn test_authenticated_never_gets_a_banner() {
        for used in 0..=3 {
            let session = session_with_used(used);
            assert_eq!(
                select_banner(true, &session, RecommendedCta::Signup),
                None
            );
            assert_eq!(
                select_banner(true, &session, RecommendedCta::Pricing),
                None
            );
        }
    }

    #[test]
    fn test_limit_reached_selects_modal() {
        let session = session_with_used(2);
        assert_eq!(
            select_banner(false, &session, RecommendedCta::Signup),
            Some(BannerVariant::Modal)
        );
    }

    #[test]
    fn test_last_preview_selects_sticky() {
        let session = session_with_used(1);
        assert_eq!(
            select_banner(false, &session, RecommendedCta::Pricing),
            Some(BannerVariant::Sticky)
        );
    }

    #[test]
    fn test_fresh_visitor_follows_recommended_cta() {
        let session = GuestSession::new();
        assert_eq!(
            select_banner(false, &session, RecommendedCta::Signup),
            Some(BannerVariant::TopBar)
        );
        assert_eq!(
            select_banner(false, &session, RecommendedCta::Pricing),
            Some(BannerVariant::Inline)
        );
    }

    #[test]
    fn test_mid_session_with_larger_allowance() {
        let mut session = GuestSession::new();
        session.previews_limit = 5;
        session.record_view();
        session.record_view();
        assert_eq!(
            select_banner(false, &session, RecommendedCta::Signup),
            Some(BannerVariant::Compact)
        );
        assert_eq!(
            select_banner(false, &session, RecommendedCta::Pricing),
            Some(BannerVariant::Fab)
        );
    }

    #[test]
    fn test_selection_is_deterministic() {
        let session = session_with_used(1);
        let first = select_banner(false, &session, RecommendedCta::Signup);
        let second = select_banner(false, &session, RecommendedCta::Signup);
        assert_eq!(first, second);
    }

    #[test]
    fn test_modal_is_the_only_non_dismissible_variant() {
        assert!(!BannerVariant::Modal.dismissible());
        for variant in [
            BannerVariant::TopBar,
            BannerVariant::Sticky,
            BannerVariant::Inline,
            BannerVariant::Compact,
            BannerVariant::Fab,
        ] {
            assert!(variant.dismissible(), "{}", variant.key());
        }
    }
}
