//! Guest preview counting.
//!
//! Unauthenticated visitors may open a small number of glossary terms before
//! the paywall closes. The counter lives entirely in the browser (localStorage
//! via the UI context); this module is the pure model so the clamping rules
//! stay testable without a DOM.

use serde::{Deserialize, Serialize};

/// How many term previews an unauthenticated visitor gets.
pub const PREVIEW_LIMIT: u32 = 2;

/// Per-browser guest session. Serialized as JSON into localStorage; the
/// client is the only authority over this state (a visitor clearing storage
/// resets it; accepted tradeoff of the client-trusting design).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSession {
    pub previews_used: u32,
    pub previews_limit: u32,
    /// Label of the last CTA the visitor clicked, if any.
    pub last_cta_recorded: Option<String>,
}

impl GuestSession {
    pub fn new() -> Self {
        Self {
            previews_used: 0,
            previews_limit: PREVIEW_LIMIT,
            last_cta_recorded: None,
        }
    }

    /// Consume one preview. Clamped: a visitor already at the limit stays at
    /// the limit. Returns whether the call actually consumed a preview.
    pub fn record_view(&mut self) -> bool {
        if self.previews_used >= self.previews_limit {
            self.previews_used = self.previews_limit;
            return false;
        }
        self.previews_used += 1;
        true
    }

    /// Remember the CTA label for analytics attribution.
    pub fn record_cta_label(&mut self, label: &str) {
        self.last_cta_recorded = Some(label.to_string());
    }

    pub fn previews_remaining(&self) -> u32 {
        self.previews_limit.saturating_sub(self.previews_used)
    }

    pub fn has_reached_limit(&self) -> bool {
        self.previews_used >= self.previews_limit
    }

    /// Back to a fresh session. Called on login and explicit sign-out.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GuestSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_has_full_allowance() {
        let session = GuestSession::new();
        assert_eq!(session.previews_used, 0);
        assert_eq!(session.previews_remaining(), PREVIEW_LIMIT);
        assert!(!session.has_reached_limit());
    }

    #[test]
    fn test_record_view_clamps_at_limit() {
        let mut session = GuestSession::new();
        // Three views against a limit of two
        assert!(session.record_view());
        assert!(session.record_view());
        assert!(!session.record_view());
        assert_eq!(session.previews_used, session.previews_limit);
        assert_eq!(session.previews_remaining(), 0);
        assert!(session.has_reached_limit());
    }

    #[test]
    fn test_limit_sticks_until_reset() {
        let mut session = GuestSession::new();
        for _ in 0..10 {
            session.record_view();
        }
        assert!(session.has_reached_limit());
        session.record_cta_label("pricing-cta");
        assert!(session.has_reached_limit());

        session.reset();
        assert!(!session.has_reached_limit());
        assert_eq!(session.previews_used, 0);
        assert!(session.last_cta_recorded.is_none());
    }

    #[test]
    fn test_cta_label_is_remembered() {
        let mut session = GuestSession::new();
        assert!(session.last_cta_recorded.is_none());
        session.record_cta_label("hero-signup");
        assert_eq!(session.last_cta_recorded.as_deref(), Some("hero-signup"));
        session.record_cta_label("sticky-upgrade");
        assert_eq!(session.last_cta_recorded.as_deref(), Some("sticky-upgrade"));
    }

    #[test]
    fn test_storage_roundtrip() {
        let mut session = GuestSession::new();
        session.record_view();
        session.record_cta_label("inline-cta");

        let json = serde_json::to_string(&session).unwrap();
        let restored: GuestSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_oversized_stored_count_reads_as_limit_reached() {
        // A stale payload from an older build with a higher limit
        let json = r#"{"previews_used":5,"previews_limit":2,"last_cta_recorded":null}"#;
        let session: GuestSession = serde_json::from_str(json).unwrap();
        assert!(session.has_reached_limit());
        assert_eq!(session.previews_remaining(), 0);
    }
}
