//! Hero background A/B test.
//!
//! Each browser is assigned one background variant on first visit and keeps
//! it (persisted in localStorage) so the experiment arms stay stable. The
//! variant is a tagged enum with an exhaustive match at the render site, not
//! a stringly-typed class name.

/// Background treatments under test on the landing hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroBackground {
    /// Soft radial gradient blobs (control).
    #[default]
    Gradient,
    /// Dot-grid with a spotlight.
    Grid,
    /// Animated aurora sweep.
    Aurora,
}

impl HeroBackground {
    pub const ALL: [HeroBackground; 3] = [
        HeroBackground::Gradient,
        HeroBackground::Grid,
        HeroBackground::Aurora,
    ];

    /// Storage/analytics key.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeroBackground::Gradient => "gradient",
            HeroBackground::Grid => "grid",
            HeroBackground::Aurora => "aurora",
        }
    }

    /// Unrecognized stored values fall back to the control arm.
    pub fn from_str(s: &str) -> Self {
        match s {
            "grid" => HeroBackground::Grid,
            "aurora" => HeroBackground::Aurora,
            _ => HeroBackground::Gradient,
        }
    }

    /// Map a uniform sample in [0, 1) to an arm. Out-of-range input clamps
    /// into the last arm rather than panicking.
    pub fn assign(sample: f64) -> Self {
        let arms = Self::ALL.len();
        let index = ((sample.clamp(0.0, 1.0) * arms as f64) as usize).min(arms - 1);
        Self::ALL[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_roundtrip() {
        for variant in HeroBackground::ALL {
            assert_eq!(HeroBackground::from_str(variant.as_str()), variant);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_control() {
        assert_eq!(HeroBackground::from_str("confetti"), HeroBackground::Gradient);
        assert_eq!(HeroBackground::from_str(""), HeroBackground::Gradient);
    }

    #[test]
    fn test_assignment_covers_all_arms() {
        assert_eq!(HeroBackground::assign(0.0), HeroBackground::Gradient);
        assert_eq!(HeroBackground::assign(0.34), HeroBackground::Grid);
        assert_eq!(HeroBackground::assign(0.99), HeroBackground::Aurora);
        // Degenerate samples clamp instead of indexing out of bounds
        assert_eq!(HeroBackground::assign(1.0), HeroBackground::Aurora);
        assert_eq!(HeroBackground::assign(-3.0), HeroBackground::Gradient);
    }
}
