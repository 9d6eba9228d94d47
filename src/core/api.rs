//! REST API handlers backing the client.
//!
//! This module provides the HTTP endpoints the pages call:
//! - GET  /api/location          - visitor country for PPP pricing
//! - GET  /api/early-bird-status - launch-pricing slot state
//! - POST /api/analytics/cta     - fire-and-forget CTA click events
//! - POST /gumroad/verify-purchase - purchase verification against Gumroad
//! - POST /gumroad/test-purchase - debug builds only
//!
//! All of these are best-effort from the client's point of view: the pages
//! render fine when any of them fail.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;

use crate::core::config::Config;
use crate::core::gumroad::{
    GumroadClient, GumroadError, VerifyPurchaseRequest, VerifyPurchaseResponse,
};
use crate::core::pricing::{
    DEFAULT_ENTRY, EarlyBirdStatus, EarlyBirdStatusResponse, LocationResponse, PRICING_TABLE,
};

// ============================================================================
// Application State
// ============================================================================

/// Shared state for the glossary API.
#[derive(Clone)]
pub struct ApiState {
    config: Arc<Config>,
    gumroad: Option<GumroadClient>,
    /// Emails that verified successfully this process lifetime; their count
    /// drives the launch-slot display. The server owns this number; the
    /// client only renders it.
    verified: Arc<Mutex<HashSet<String>>>,
}

impl ApiState {
    pub fn new(config: Config) -> Self {
        let gumroad = config.gumroad_access_token.clone().map(|token| {
            GumroadClient::new(token, config.gumroad_product_id.clone())
        });
        Self {
            config: Arc::new(config),
            gumroad,
            verified: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    fn claimed_slots(&self) -> u32 {
        self.verified.lock().map(|set| set.len() as u32).unwrap_or(0)
    }

    fn mark_verified(&self, email: &str) {
        if let Ok(mut set) = self.verified.lock() {
            set.insert(email.to_ascii_lowercase());
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Create the API router. Merged into the main axum app next to the Leptos
/// routes.
pub fn api_router(state: ApiState) -> Router {
    let router = Router::new()
        .route("/api/location", get(get_location))
        .route("/api/early-bird-status", get(get_early_bird_status))
        .route("/api/analytics/cta", post(post_analytics_cta))
        .route("/gumroad/verify-purchase", post(post_verify_purchase));

    // Development convenience only; release builds have no such route
    #[cfg(debug_assertions)]
    let router = router.route("/gumroad/test-purchase", post(post_test_purchase));

    router.with_state(state)
}

// ============================================================================
// API Handlers
// ============================================================================

/// Visitor geolocation for the pricing resolver.
///
/// GET /api/location
///
/// Reads the country code the edge proxy injects (`cf-ipcountry`); falls
/// back to the configured default when absent. Always answers 200; pricing
/// display must not block on this.
async fn get_location(State(state): State<ApiState>, headers: HeaderMap) -> impl IntoResponse {
    let code = headers
        .get("cf-ipcountry")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_ascii_uppercase())
        .filter(|v| v.len() == 2 && v != "XX")
        .unwrap_or_else(|| state.config.default_country.clone());

    let name = PRICING_TABLE
        .iter()
        .find(|e| e.country_code == code)
        .map(|e| e.country_name)
        .unwrap_or(DEFAULT_ENTRY.country_name);

    Json(LocationResponse {
        country_code: code,
        country_name: name.to_string(),
    })
}

/// Launch-pricing slot state.
///
/// GET /api/early-bird-status
async fn get_early_bird_status(State(state): State<ApiState>) -> impl IntoResponse {
    let claimed = state.claimed_slots();
    let total = state.config.early_bird_total_slots;
    Json(EarlyBirdStatusResponse {
        data: EarlyBirdStatus {
            total_purchased: claimed.min(total),
            is_active: claimed < total,
        },
    })
}

#[derive(Debug, Deserialize)]
struct CtaEvent {
    label: String,
}

/// CTA click analytics.
///
/// POST /api/analytics/cta
///
/// Logged and dropped; there is deliberately no persistence here and the
/// client never waits on the outcome.
async fn post_analytics_cta(Json(event): Json<CtaEvent>) -> impl IntoResponse {
    tracing::info!(label = %event.label, "cta click");
    StatusCode::NO_CONTENT
}

/// Verify a purchase against Gumroad.
///
/// POST /gumroad/verify-purchase
///
/// Request body: VerifyPurchaseRequest
/// Response: VerifyPurchaseResponse with `success: false` and a message for
/// "no purchase" so the client can render it inline; transport-level
/// failures map to 502.
async fn post_verify_purchase(
    State(state): State<ApiState>,
    Json(request): Json<VerifyPurchaseRequest>,
) -> impl IntoResponse {
    let email = request.email.trim().to_string();
    if email.is_empty() || !email.contains('@') {
        return (
            StatusCode::BAD_REQUEST,
            Json(VerifyPurchaseResponse::failure(
                "Please enter the email you purchased with",
            )),
        );
    }

    let Some(client) = state.gumroad.as_ref() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(VerifyPurchaseResponse::failure(
                "Purchase verification is not configured on this server",
            )),
        );
    };

    match client.verify_purchase(&email).await {
        Ok(user) => {
            state.mark_verified(&user.email);
            tracing::info!(email = %user.email, "purchase verified");
            (StatusCode::OK, Json(VerifyPurchaseResponse::ok(user)))
        }
        Err(GumroadError::NoPurchase) => (
            StatusCode::OK,
            Json(VerifyPurchaseResponse::failure(
                "No purchase found for this email. Double-check the address you used at checkout.",
            )),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "gumroad verification failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(VerifyPurchaseResponse::failure(
                    "Could not reach the payment processor. Please try again.",
                )),
            )
        }
    }
}

/// Fake a successful purchase for local development.
///
/// POST /gumroad/test-purchase
#[cfg(debug_assertions)]
async fn post_test_purchase(
    State(state): State<ApiState>,
    Json(request): Json<VerifyPurchaseRequest>,
) -> impl IntoResponse {
    use crate::core::gumroad::{SubscriptionTier, VerifiedUser};

    let email = request.email.trim().to_string();
    if email.is_empty() || !email.contains('@') {
        return (
            StatusCode::BAD_REQUEST,
            Json(VerifyPurchaseResponse::failure("Please enter an email")),
        );
    }

    state.mark_verified(&email);
    let user = VerifiedUser {
        email,
        subscription_tier: SubscriptionTier::Lifetime,
        lifetime_access: true,
        purchase_date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
    };
    (StatusCode::OK, Json(VerifyPurchaseResponse::ok(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{DEFAULT_CHECKOUT_URL, DEFAULT_PRODUCT_ID};
    use crate::core::pricing::LAUNCH_TOTAL_SLOTS;

    fn test_state() -> ApiState {
        ApiState::new(Config {
            gumroad_access_token: None,
            gumroad_product_id: DEFAULT_PRODUCT_ID.to_string(),
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            early_bird_total_slots: LAUNCH_TOTAL_SLOTS,
            default_country: "US".to_string(),
        })
    }

    #[test]
    fn test_state_without_token_has_no_client() {
        let state = test_state();
        assert!(state.gumroad.is_none());
    }

    #[test]
    fn test_verified_emails_are_deduplicated() {
        let state = test_state();
        assert_eq!(state.claimed_slots(), 0);

        state.mark_verified("buyer@example.com");
        state.mark_verified("Buyer@Example.com");
        state.mark_verified("second@example.com");
        assert_eq!(state.claimed_slots(), 2);
    }

    #[tokio::test]
    async fn test_early_bird_status_reflects_claims() {
        let state = test_state();
        state.mark_verified("buyer@example.com");

        let response = get_early_bird_status(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: EarlyBirdStatusResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.data.total_purchased, 1);
        assert!(parsed.data.is_active);
    }

    #[tokio::test]
    async fn test_location_falls_back_to_default_country() {
        let state = test_state();
        let response = get_location(State(state), HeaderMap::new())
            .await
            .into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: LocationResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.country_code, "US");
        assert_eq!(parsed.country_name, "United States");
    }

    #[tokio::test]
    async fn test_location_reads_edge_header() {
        let state = test_state();
        let mut headers = HeaderMap::new();
        headers.insert("cf-ipcountry", "IN".parse().unwrap());

        let response = get_location(State(state), headers).await.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: LocationResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.country_code, "IN");
        assert_eq!(parsed.country_name, "India");
    }

    #[tokio::test]
    async fn test_verify_without_token_is_unavailable() {
        let state = test_state();
        let response = post_verify_purchase(
            State(state),
            Json(VerifyPurchaseRequest {
                email: "buyer@example.com".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_verify_rejects_malformed_email() {
        let state = test_state();
        let response = post_verify_purchase(
            State(state),
            Json(VerifyPurchaseRequest {
                email: "not-an-email".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
