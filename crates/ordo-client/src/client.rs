//! # Order Client - HTTP Integration with the Order Service
//!
//! This module provides the client both consuming components use to
//! create orders on the remote order service.
//!
//! ## Call Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Submission Flow                            │
//! │                                                                         │
//! │  OrderRequest                                                           │
//! │       │ serde_json (clientId / items / sku / quantity / priceCents)    │
//! │       ▼                                                                 │
//! │  POST {base_url}/orders                                                 │
//! │  Content-Type: application/json                                         │
//! │       │                                                                 │
//! │       ├── 2xx + body with "id"  ──► OrderOutcome::Created(id)          │
//! │       ├── 2xx, empty / no "id"  ──► OrderOutcome::Incomplete           │
//! │       ├── non-2xx               ──► OrderOutcome::Rejected { status }  │
//! │       └── transport / JSON err  ──► OrderOutcome::Unreachable          │
//! │                                                                         │
//! │  create_order() collapses everything but Created to None - the         │
//! │  contract existing consumers were built against.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Resource Discipline
//! One `reqwest::Client` is built per `OrderClient` and reused across
//! calls; its connection pool is released when the `OrderClient` is
//! dropped, on every exit path. No manual cleanup exists anywhere.

use ordo_core::types::{OrderId, OrderRequest};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

// =============================================================================
// Outcome Type
// =============================================================================

/// Typed result of one order submission.
///
/// Callers that only care about "did I get an id" collapse this with
/// [`OrderOutcome::into_created`]; callers that need to distinguish a
/// definite rejection from an unknown-state failure match on it.
#[derive(Debug)]
pub enum OrderOutcome {
    /// The remote created the order and returned its identifier.
    Created(OrderId),

    /// Success status, but the response had no parseable `id` field
    /// (empty body, or body lacking `id`). The order may or may not
    /// exist remotely.
    Incomplete { status: u16 },

    /// The remote answered outside the 2xx range. The order was not
    /// created.
    Rejected { status: u16 },

    /// The request never completed: connection failure, timeout,
    /// payload serialization error, or a malformed response body.
    /// Whether the order was created is unknown.
    Unreachable(ClientError),
}

impl OrderOutcome {
    /// True iff the order was definitely created.
    pub fn is_created(&self) -> bool {
        matches!(self, OrderOutcome::Created(_))
    }

    /// Collapses the outcome to the historical nullable contract:
    /// `Created(id)` becomes `Some(id)`, everything else `None`.
    pub fn into_created(self) -> Option<OrderId> {
        match self {
            OrderOutcome::Created(id) => Some(id),
            _ => None,
        }
    }
}

// =============================================================================
// Order Client
// =============================================================================

/// HTTP client for the remote order service.
///
/// One instance is safe to share across tasks (`reqwest::Client` is
/// internally reference-counted); the library adds no locking of its
/// own because no call touches shared mutable state.
pub struct OrderClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl OrderClient {
    /// Builds a client from a config, reusing one HTTP transport for
    /// the client's lifetime.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { config, http })
    }

    /// Convenience constructor: default timeouts, given base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::new(ClientConfig::new(base_url))
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Submits an order and reports the typed outcome.
    ///
    /// Exactly one POST per invocation; no retry. Remote rejections and
    /// transport failures are reported, never raised - the only way to
    /// get an error out of this crate is [`OrderClient::new`].
    pub async fn submit_order(&self, order: &OrderRequest) -> OrderOutcome {
        let request_id = Uuid::new_v4();
        match self.try_submit(request_id, order).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(request_id = %request_id, error = %err, "Order submission unreachable");
                OrderOutcome::Unreachable(err)
            }
        }
    }

    /// Submits an order under the historical collapsed contract.
    ///
    /// Returns the created order id, or `None` for EVERY other outcome:
    /// remote rejection, success response without an `id`, and
    /// transport failure all look identical here. Callers that need to
    /// tell those apart use [`OrderClient::submit_order`].
    pub async fn create_order(&self, order: &OrderRequest) -> Option<OrderId> {
        self.submit_order(order).await.into_created()
    }

    async fn try_submit(&self, request_id: Uuid, order: &OrderRequest) -> ClientResult<OrderOutcome> {
        let url = format!("{}/orders", self.config.base_url);
        let payload = serde_json::to_string(order)?;

        debug!(
            request_id = %request_id,
            url = %url,
            client_id = %order.client_id,
            item_count = order.items.len(),
            "Submitting order"
        );

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status().as_u16();

        if !(200..300).contains(&status) {
            warn!(request_id = %request_id, status, "Order rejected by remote service");
            return Ok(OrderOutcome::Rejected { status });
        }

        let body = response.text().await?;
        if body.is_empty() {
            debug!(request_id = %request_id, status, "Success response with empty body");
            return Ok(OrderOutcome::Incomplete { status });
        }

        // Optimistic parse: only the `id` field matters, everything
        // else in the body is ignored.
        let node: serde_json::Value = serde_json::from_str(&body)?;
        match node.get("id").and_then(|v| v.as_str()) {
            Some(id) => {
                info!(request_id = %request_id, order_id = %id, "Order created");
                Ok(OrderOutcome::Created(OrderId::new(id)))
            }
            None => {
                debug!(request_id = %request_id, status, "Success response without id field");
                Ok(OrderOutcome::Incomplete { status })
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
// Wire-level behavior (stub server scenarios) lives in
// tests/create_order_tests.rs; these cover the pure pieces.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(OrderClient::with_base_url("").is_err());
        assert!(OrderClient::with_base_url("not-a-url").is_err());
    }

    #[test]
    fn test_new_accepts_http_urls() {
        let client = OrderClient::with_base_url("http://svc").unwrap();
        assert_eq!(client.base_url(), "http://svc");
    }

    #[test]
    fn test_outcome_collapse() {
        assert_eq!(
            OrderOutcome::Created(OrderId::new("ord-1")).into_created(),
            Some(OrderId::new("ord-1"))
        );
        assert_eq!(OrderOutcome::Rejected { status: 404 }.into_created(), None);
        assert_eq!(OrderOutcome::Incomplete { status: 200 }.into_created(), None);
    }

    #[test]
    fn test_is_created() {
        assert!(OrderOutcome::Created(OrderId::new("x")).is_created());
        assert!(!OrderOutcome::Rejected { status: 500 }.is_created());
    }
}
