//! Purchasing-power-parity pricing for the glossary.
//!
//! A static lookup table maps country codes to regional discounts. Resolution
//! is pure and deterministic; the only I/O in this subsystem (geolocation and
//! launch-slot lookups) lives in the UI layer and falls back to the defaults
//! here when the network is unavailable.

use serde::{Deserialize, Serialize};

/// Base price of lifetime access, in whole USD.
pub const BASE_PRICE_USD: u32 = 249;

/// External checkout page. The transaction itself is Gumroad's; this app
/// only redirects and later verifies.
pub const CHECKOUT_URL: &str = "https://pranaysuyash.gumroad.com/l/aiml-glossary";

/// One row of the PPP table.
pub struct PricingEntry {
    pub country_code: &'static str,
    pub country_name: &'static str,
    /// Regional discount in percent, 0..=100.
    pub discount_percent: u8,
    /// Currency the local price is displayed next to (charge stays in USD).
    pub currency: &'static str,
    /// What a comparable subscription costs locally, for the comparison row.
    pub competitor: &'static str,
}

/// Countries with a regional discount. Everyone else gets the US default.
pub static PRICING_TABLE: &[PricingEntry] = &[
    PricingEntry { country_code: "IN", country_name: "India", discount_percent: 60, currency: "INR", competitor: "DataCamp ~₹25,000/yr" },
    PricingEntry { country_code: "BR", country_name: "Brazil", discount_percent: 55, currency: "BRL", competitor: "Alura ~R$1,200/yr" },
    PricingEntry { country_code: "ID", country_name: "Indonesia", discount_percent: 55, currency: "IDR", competitor: "Dicoding ~Rp2,500,000/yr" },
    PricingEntry { country_code: "PK", country_name: "Pakistan", discount_percent: 60, currency: "PKR", competitor: "Coursera ~$399/yr" },
    PricingEntry { country_code: "BD", country_name: "Bangladesh", discount_percent: 60, currency: "BDT", competitor: "Coursera ~$399/yr" },
    PricingEntry { country_code: "NG", country_name: "Nigeria", discount_percent: 60, currency: "NGN", competitor: "Coursera ~$399/yr" },
    PricingEntry { country_code: "EG", country_name: "Egypt", discount_percent: 55, currency: "EGP", competitor: "Coursera ~$399/yr" },
    PricingEntry { country_code: "VN", country_name: "Vietnam", discount_percent: 55, currency: "VND", competitor: "Coursera ~$399/yr" },
    PricingEntry { country_code: "PH", country_name: "Philippines", discount_percent: 50, currency: "PHP", competitor: "DataCamp ~$300/yr" },
    PricingEntry { country_code: "UA", country_name: "Ukraine", discount_percent: 50, currency: "UAH", competitor: "DataCamp ~$300/yr" },
    PricingEntry { country_code: "TR", country_name: "Turkey", discount_percent: 50, currency: "TRY", competitor: "Udacity ~$399/yr" },
    PricingEntry { country_code: "MX", country_name: "Mexico", discount_percent: 45, currency: "MXN", competitor: "Platzi ~MX$7,000/yr" },
    PricingEntry { country_code: "CO", country_name: "Colombia", discount_percent: 45, currency: "COP", competitor: "Platzi ~$299/yr" },
    PricingEntry { country_code: "AR", country_name: "Argentina", discount_percent: 55, currency: "ARS", competitor: "Platzi ~$299/yr" },
    PricingEntry { country_code: "PE", country_name: "Peru", discount_percent: 45, currency: "PEN", competitor: "Platzi ~$299/yr" },
    PricingEntry { country_code: "TH", country_name: "Thailand", discount_percent: 45, currency: "THB", competitor: "DataCamp ~$300/yr" },
    PricingEntry { country_code: "MY", country_name: "Malaysia", discount_percent: 40, currency: "MYR", competitor: "DataCamp ~$300/yr" },
    PricingEntry { country_code: "ZA", country_name: "South Africa", discount_percent: 45, currency: "ZAR", competitor: "DataCamp ~$300/yr" },
    PricingEntry { country_code: "KE", country_name: "Kenya", discount_percent: 55, currency: "KES", competitor: "Coursera ~$399/yr" },
    PricingEntry { country_code: "PL", country_name: "Poland", discount_percent: 35, currency: "PLN", competitor: "DataCamp ~$300/yr" },
    PricingEntry { country_code: "RO", country_name: "Romania", discount_percent: 35, currency: "RON", competitor: "DataCamp ~$300/yr" },
    PricingEntry { country_code: "PT", country_name: "Portugal", discount_percent: 30, currency: "EUR", competitor: "DataCamp ~€280/yr" },
    PricingEntry { country_code: "GR", country_name: "Greece", discount_percent: 30, currency: "EUR", competitor: "DataCamp ~€280/yr" },
    PricingEntry { country_code: "CN", country_name: "China", discount_percent: 40, currency: "CNY", competitor: "Coursera ~$399/yr" },
    PricingEntry { country_code: "RU", country_name: "Russia", discount_percent: 45, currency: "RUB", competitor: "Coursera ~$399/yr" },
];

/// Table entry used when the visitor's country carries no regional discount.
pub const DEFAULT_ENTRY: PricingEntry = PricingEntry {
    country_code: "US",
    country_name: "United States",
    discount_percent: 0,
    currency: "USD",
    competitor: "DataCamp ~$300/yr",
};

/// Pricing resolved for one visitor. Built once per page load from the
/// geolocation lookup and immutable for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryPricing {
    pub country_code: String,
    pub country_name: String,
    pub base_price: u32,
    pub discount_percent: u8,
    /// `base_price` with the discount applied, rounded half away from zero.
    pub local_price: u32,
    pub currency: String,
    pub competitor: String,
}

impl CountryPricing {
    fn from_entry(entry: &PricingEntry, display_name: &str) -> Self {
        Self {
            country_code: entry.country_code.to_string(),
            country_name: display_name.to_string(),
            base_price: BASE_PRICE_USD,
            discount_percent: entry.discount_percent,
            local_price: discounted_price(BASE_PRICE_USD, entry.discount_percent),
            currency: entry.currency.to_string(),
            competitor: entry.competitor.to_string(),
        }
    }

    /// Whether a regional discount applies.
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }

    /// Badge text for the pricing card, e.g. "60% off for India".
    pub fn discount_badge(&self) -> Option<String> {
        if self.has_discount() {
            Some(format!(
                "{}% off for {}",
                self.discount_percent, self.country_name
            ))
        } else {
            None
        }
    }

    /// Checkout link carrying the resolved country and discount, so the
    /// Gumroad page can mirror what the visitor was shown.
    pub fn checkout_href(&self) -> String {
        format!(
            "{}?country={}&discount={}",
            CHECKOUT_URL, self.country_code, self.discount_percent
        )
    }
}

impl Default for CountryPricing {
    fn default() -> Self {
        Self::from_entry(&DEFAULT_ENTRY, DEFAULT_ENTRY.country_name)
    }
}

/// Apply `discount_percent` to `base`, rounding half away from zero.
fn discounted_price(base: u32, discount_percent: u8) -> u32 {
    let discount = u32::from(discount_percent.min(100));
    let factor = f64::from(100 - discount) / 100.0;
    (f64::from(base) * factor).round() as u32
}

/// Resolve pricing for a visitor. Pure lookup over [`PRICING_TABLE`];
/// unknown codes fall back to the US default with no discount. The reported
/// name (from geolocation) wins over the table name when non-empty, so
/// localized names survive the lookup.
pub fn resolve(country_code: &str, country_name: &str) -> CountryPricing {
    let code = country_code.trim().to_ascii_uppercase();
    match PRICING_TABLE.iter().find(|e| e.country_code == code) {
        Some(entry) => {
            let name = if country_name.trim().is_empty() {
                entry.country_name
            } else {
                country_name.trim()
            };
            CountryPricing::from_entry(entry, name)
        }
        None => CountryPricing::default(),
    }
}

/// Geolocation payload from `GET /api/location`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationResponse {
    pub country_code: String,
    pub country_name: String,
}

/// Launch ("early bird") promotion state, owned entirely by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchSlotState {
    pub claimed_slots: u32,
    pub total_slots: u32,
    pub is_active: bool,
}

impl LaunchSlotState {
    /// Conservative default used when the status fetch fails: promotion off.
    pub const INACTIVE: LaunchSlotState = LaunchSlotState {
        claimed_slots: 0,
        total_slots: 0,
        is_active: false,
    };

    pub fn slots_remaining(&self) -> u32 {
        self.total_slots.saturating_sub(self.claimed_slots)
    }
}

impl Default for LaunchSlotState {
    fn default() -> Self {
        Self::INACTIVE
    }
}

/// Wire format of `GET /api/early-bird-status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarlyBirdStatusResponse {
    pub data: EarlyBirdStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlyBirdStatus {
    pub total_purchased: u32,
    pub is_active: bool,
}

impl EarlyBirdStatusResponse {
    /// Fold the wire payload into client state against a known slot total.
    pub fn into_state(self, total_slots: u32) -> LaunchSlotState {
        LaunchSlotState {
            claimed_slots: self.data.total_purchased.min(total_slots),
            total_slots,
            is_active: self.data.is_active,
        }
    }
}

/// Slot total the client assumes when rendering the launch counter.
pub const LAUNCH_TOTAL_SLOTS: u32 = 500;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_rounds_and_never_exceeds_base() {
        for entry in PRICING_TABLE {
            let pricing = resolve(entry.country_code, "");
            let expected = (f64::from(BASE_PRICE_USD)
                * (1.0 - f64::from(entry.discount_percent) / 100.0))
                .round() as u32;
            assert_eq!(pricing.local_price, expected, "{}", entry.country_code);
            assert!(
                pricing.local_price <= pricing.base_price,
                "{} local price above base",
                entry.country_code
            );
            assert!(entry.discount_percent <= 100);
        }
    }

    #[test]
    fn test_unknown_country_gets_us_default() {
        let pricing = resolve("XX", "Atlantis");
        assert_eq!(pricing.country_code, "US");
        assert_eq!(pricing.country_name, "United States");
        assert_eq!(pricing.discount_percent, 0);
        assert_eq!(pricing.local_price, BASE_PRICE_USD);
        assert!(pricing.discount_badge().is_none());
    }

    #[test]
    fn test_india_scenario() {
        // 249 * 0.40 = 99.6, rounds up to 100
        let pricing = resolve("IN", "India");
        assert_eq!(pricing.discount_percent, 60);
        assert_eq!(pricing.local_price, 100);
        assert_eq!(pricing.discount_badge().as_deref(), Some("60% off for India"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(resolve("in", ""), resolve("IN", ""));
        assert_eq!(resolve(" br ", ""), resolve("BR", ""));
    }

    #[test]
    fn test_reported_name_wins_over_table_name() {
        let pricing = resolve("BR", "Brasil");
        assert_eq!(pricing.country_name, "Brasil");
        assert_eq!(pricing.discount_badge().as_deref(), Some("55% off for Brasil"));
    }

    #[test]
    fn test_checkout_href_carries_country_and_discount() {
        let pricing = resolve("IN", "India");
        let href = pricing.checkout_href();
        assert!(href.starts_with(CHECKOUT_URL));
        assert!(href.contains("country=IN"));
        assert!(href.contains("discount=60"));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        assert_eq!(resolve("TR", ""), resolve("TR", ""));
    }

    #[test]
    fn test_launch_state_defaults_inactive() {
        let state = LaunchSlotState::default();
        assert!(!state.is_active);
        assert_eq!(state.slots_remaining(), 0);
    }

    #[test]
    fn test_early_bird_payload_folds_into_state() {
        let resp = EarlyBirdStatusResponse {
            data: EarlyBirdStatus {
                total_purchased: 137,
                is_active: true,
            },
        };
        let state = resp.into_state(LAUNCH_TOTAL_SLOTS);
        assert_eq!(state.claimed_slots, 137);
        assert_eq!(state.slots_remaining(), 363);
        assert!(state.is_active);
    }

    #[test]
    fn test_early_bird_claims_clamped_to_total() {
        let resp = EarlyBirdStatusResponse {
            data: EarlyBirdStatus {
                total_purchased: 900,
                is_active: true,
            },
        };
        let state = resp.into_state(LAUNCH_TOTAL_SLOTS);
        assert_eq!(state.claimed_slots, LAUNCH_TOTAL_SLOTS);
        assert_eq!(state.slots_remaining(), 0);
    }

    #[test]
    fn test_early_bird_wire_format() {
        let json = r#"{"data":{"totalPurchased":42,"isActive":true}}"#;
        let resp: EarlyBirdStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.total_purchased, 42);
        assert!(resp.data.is_active);
    }
}
