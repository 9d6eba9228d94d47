//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::pricing::{CHECKOUT_URL, LAUNCH_TOTAL_SLOTS};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gumroad API access token used to verify purchases.
    /// Without it, purchase verification answers with a service-unavailable
    /// message instead of calling out.
    pub gumroad_access_token: Option<String>,

    /// Gumroad product permalink the verifier checks sales against.
    pub gumroad_product_id: String,

    /// External checkout URL the pricing CTA redirects to.
    pub checkout_url: String,

    /// Total launch-pricing slots ("first N customers").
    pub early_bird_total_slots: u32,

    /// Country assumed when no geolocation header is present.
    pub default_country: String,
}

pub const DEFAULT_CHECKOUT_URL: &str = CHECKOUT_URL;
pub const DEFAULT_PRODUCT_ID: &str = "aiml-glossary";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            gumroad_access_token: std::env::var("GUMROAD_ACCESS_TOKEN").ok(),
            gumroad_product_id: std::env::var("GUMROAD_PRODUCT_ID")
                .unwrap_or_else(|_| DEFAULT_PRODUCT_ID.to_string()),
            checkout_url: std::env::var("GUMROAD_CHECKOUT_URL")
                .unwrap_or_else(|_| DEFAULT_CHECKOUT_URL.to_string()),
            early_bird_total_slots: std::env::var("EARLY_BIRD_TOTAL_SLOTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(LAUNCH_TOTAL_SLOTS),
            default_country: std::env::var("DEFAULT_COUNTRY")
                .unwrap_or_else(|_| "US".to_string()),
        }
    }

    /// Check if the Gumroad token is configured (verification can call out)
    pub fn has_gumroad_token(&self) -> bool {
        self.gumroad_access_token.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_env() -> Config {
        Config {
            gumroad_access_token: None,
            gumroad_product_id: DEFAULT_PRODUCT_ID.to_string(),
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            early_bird_total_slots: LAUNCH_TOTAL_SLOTS,
            default_country: "US".to_string(),
        }
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            gumroad_access_token: Some("gr-token-123".to_string()),
            gumroad_product_id: "aiml-glossary".to_string(),
            checkout_url: "https://gumroad.com/l/test".to_string(),
            early_bird_total_slots: 250,
            default_country: "IN".to_string(),
        };

        assert!(config.has_gumroad_token());
        assert_eq!(config.early_bird_total_slots, 250);
        assert_eq!(config.default_country, "IN");
    }

    #[test]
    fn test_has_gumroad_token() {
        let mut config = config_without_env();
        assert!(!config.has_gumroad_token());

        config.gumroad_access_token = Some("token".to_string());
        assert!(config.has_gumroad_token());
    }

    #[test]
    fn test_defaults_are_sane() {
        let config = config_without_env();
        assert_eq!(config.checkout_url, DEFAULT_CHECKOUT_URL);
        assert_eq!(config.gumroad_product_id, DEFAULT_PRODUCT_ID);
        assert_eq!(config.early_bird_total_slots, LAUNCH_TOTAL_SLOTS);
        assert_eq!(config.default_country, "US");
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so only exercise the accessors
        let config = Config::from_env();
        let _ = config.has_gumroad_token();
        assert!(!config.checkout_url.is_empty());
        assert!(!config.default_country.is_empty());
    }

    #[test]
    fn test_config_clone() {
        let config = config_without_env();
        let cloned = config.clone();
        assert_eq!(config.checkout_url, cloned.checkout_url);
        assert_eq!(config.early_bird_total_slots, cloned.early_bird_total_slots);
    }

    #[test]
    fn test_config_debug_does_not_need_token() {
        let config = config_without_env();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("checkout_url"));
    }
}
