//! Gumroad purchase verification.
//!
//! The actual transaction happens entirely on Gumroad; this module only
//! checks, after the fact, whether an email address bought the product. Wire
//! types are shared with the client; the outbound API client is server-only.

use serde::{Deserialize, Serialize};

/// Body of `POST /gumroad/verify-purchase`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPurchaseRequest {
    pub email: String,
}

/// Response of the verification endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPurchaseResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<VerifiedUser>,
}

impl VerifyPurchaseResponse {
    pub fn ok(user: VerifiedUser) -> Self {
        Self {
            success: true,
            message: "Purchase verified".to_string(),
            user: Some(user),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user: None,
        }
    }
}

/// Access level attached to a verified purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Lifetime,
}

/// The account payload the client persists after a successful verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedUser {
    pub email: String,
    pub subscription_tier: SubscriptionTier,
    pub lifetime_access: bool,
    /// ISO date of the underlying sale.
    pub purchase_date: String,
}

/// One sale record from the Gumroad sales API. Only the fields the verifier
/// reads; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GumroadSale {
    pub email: String,
    #[serde(default)]
    pub product_permalink: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub refunded: bool,
}

/// Envelope of `GET https://api.gumroad.com/v2/sales`.
#[derive(Debug, Clone, Deserialize)]
pub struct GumroadSalesPage {
    pub success: bool,
    #[serde(default)]
    pub sales: Vec<GumroadSale>,
}

/// Whether `sale` is a live purchase of `product_id` by `email`.
/// Email comparison is case-insensitive; a sale without a permalink (older
/// API payloads) is accepted on email alone.
pub fn sale_matches(sale: &GumroadSale, email: &str, product_id: &str) -> bool {
    if sale.refunded {
        return false;
    }
    if !sale.email.eq_ignore_ascii_case(email.trim()) {
        return false;
    }
    match sale.product_permalink.as_deref() {
        Some(permalink) => permalink == product_id,
        None => true,
    }
}

/// Pick the sale that grants access, preferring the earliest purchase.
pub fn find_matching_sale<'a>(
    sales: &'a [GumroadSale],
    email: &str,
    product_id: &str,
) -> Option<&'a GumroadSale> {
    sales
        .iter()
        .filter(|s| sale_matches(s, email, product_id))
        .min_by(|a, b| a.created_at.cmp(&b.created_at))
}

#[cfg(feature = "ssr")]
pub use server::{GumroadClient, GumroadError};

#[cfg(feature = "ssr")]
mod server {
    use super::{
        GumroadSalesPage, SubscriptionTier, VerifiedUser, find_matching_sale,
    };
    use chrono::{DateTime, Utc};

    const SALES_ENDPOINT: &str = "https://api.gumroad.com/v2/sales";

    #[derive(Debug, thiserror::Error)]
    pub enum GumroadError {
        #[error("Gumroad verification is not configured")]
        NotConfigured,
        #[error("Gumroad request failed: {0}")]
        Http(#[from] reqwest::Error),
        #[error("Gumroad rejected the request")]
        Api,
        #[error("no purchase found for this email")]
        NoPurchase,
    }

    /// Thin client over the Gumroad sales API.
    #[derive(Clone)]
    pub struct GumroadClient {
        http: reqwest::Client,
        access_token: String,
        product_id: String,
    }

    impl GumroadClient {
        pub fn new(access_token: String, product_id: String) -> Self {
            Self {
                http: reqwest::Client::new(),
                access_token,
                product_id,
            }
        }

        /// Look the email up in the product's sales. One outbound call, no
        /// retries; the HTTP route decides how failures are presented.
        pub async fn verify_purchase(&self, email: &str) -> Result<VerifiedUser, GumroadError> {
            let page: GumroadSalesPage = self
                .http
                .get(SALES_ENDPOINT)
                .query(&[
                    ("access_token", self.access_token.as_str()),
                    ("email", email.trim()),
                ])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            if !page.success {
                return Err(GumroadError::Api);
            }

            let sale = find_matching_sale(&page.sales, email, &self.product_id)
                .ok_or(GumroadError::NoPurchase)?;

            Ok(VerifiedUser {
                email: sale.email.clone(),
                subscription_tier: SubscriptionTier::Lifetime,
                lifetime_access: true,
                purchase_date: normalize_purchase_date(&sale.created_at),
            })
        }
    }

    /// Gumroad timestamps arrive as RFC 3339; reduce them to a date for
    /// display. Unparseable values pass through untouched.
    pub(super) fn normalize_purchase_date(created_at: &str) -> String {
        match created_at.parse::<DateTime<Utc>>() {
            Ok(ts) => ts.format("%Y-%m-%d").to_string(),
            Err(_) => created_at.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(email: &str, permalink: Option<&str>, created_at: &str, refunded: bool) -> GumroadSale {
        GumroadSale {
            email: email.to_string(),
            product_permalink: permalink.map(str::to_string),
            created_at: created_at.to_string(),
            refunded,
        }
    }

    #[test]
    fn test_sale_matching_is_email_case_insensitive() {
        let s = sale("Buyer@Example.com", Some("aiml-glossary"), "2025-01-01T00:00:00Z", false);
        assert!(sale_matches(&s, "buyer@example.com", "aiml-glossary"));
        assert!(sale_matches(&s, "  BUYER@EXAMPLE.COM ", "aiml-glossary"));
        assert!(!sale_matches(&s, "other@example.com", "aiml-glossary"));
    }

    #[test]
    fn test_refunded_sales_do_not_grant_access() {
        let s = sale("buyer@example.com", Some("aiml-glossary"), "2025-01-01T00:00:00Z", true);
        assert!(!sale_matches(&s, "buyer@example.com", "aiml-glossary"));
    }

    #[test]
    fn test_other_products_are_ignored() {
        let s = sale("buyer@example.com", Some("other-product"), "2025-01-01T00:00:00Z", false);
        assert!(!sale_matches(&s, "buyer@example.com", "aiml-glossary"));
    }

    #[test]
    fn test_sale_without_permalink_matches_on_email() {
        let s = sale("buyer@example.com", None, "2025-01-01T00:00:00Z", false);
        assert!(sale_matches(&s, "buyer@example.com", "aiml-glossary"));
    }

    #[test]
    fn test_earliest_sale_wins() {
        let sales = vec![
            sale("buyer@example.com", Some("aiml-glossary"), "2025-03-10T12:00:00Z", false),
            sale("buyer@example.com", Some("aiml-glossary"), "2025-01-05T09:30:00Z", false),
            sale("buyer@example.com", Some("aiml-glossary"), "2025-02-01T00:00:00Z", true),
        ];
        let found = find_matching_sale(&sales, "buyer@example.com", "aiml-glossary").unwrap();
        assert_eq!(found.created_at, "2025-01-05T09:30:00Z");
    }

    #[test]
    fn test_sales_page_parses_gumroad_payload() {
        let json = r#"{
            "success": true,
            "sales": [
                {
                    "id": "abc123",
                    "email": "buyer@example.com",
                    "product_permalink": "aiml-glossary",
                    "created_at": "2025-01-05T09:30:00Z",
                    "refunded": false,
                    "price": 24900
                }
            ]
        }"#;
        let page: GumroadSalesPage = serde_json::from_str(json).unwrap();
        assert!(page.success);
        assert_eq!(page.sales.len(), 1);
        assert_eq!(page.sales[0].email, "buyer@example.com");
    }

    #[test]
    fn test_verify_response_wire_format_is_camel_case() {
        let resp = VerifyPurchaseResponse::ok(VerifiedUser {
            email: "buyer@example.com".to_string(),
            subscription_tier: SubscriptionTier::Lifetime,
            lifetime_access: true,
            purchase_date: "2025-01-05".to_string(),
        });
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"subscriptionTier\":\"lifetime\""));
        assert!(json.contains("\"lifetimeAccess\":true"));
        assert!(json.contains("\"purchaseDate\":\"2025-01-05\""));
    }

    #[test]
    fn test_failure_response_has_no_user() {
        let resp = VerifyPurchaseResponse::failure("no purchase found");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("user"));
        assert!(json.contains("\"success\":false"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_purchase_date_normalization() {
        use super::server::normalize_purchase_date;
        assert_eq!(normalize_purchase_date("2025-01-05T09:30:00Z"), "2025-01-05");
        assert_eq!(normalize_purchase_date("yesterday"), "yesterday");
    }
}
