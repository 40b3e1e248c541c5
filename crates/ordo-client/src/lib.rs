//! # ordo-client: Order Service Integration for Ordo
//!
//! This crate owns the one outbound network call of the workspace:
//! creating an order on the remote order service via a synchronous
//! (from the caller's perspective: one awaited round trip) HTTP POST.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Client Architecture                          │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      OrderClient                                 │  │
//! │  │                                                                  │  │
//! │  │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐   │  │
//! │  │  │ ClientConfig │  │ reqwest pool │  │ OrderOutcome         │   │  │
//! │  │  │              │  │              │  │                      │   │  │
//! │  │  │ base_url     │  │ built once,  │  │ Created/Incomplete/  │   │  │
//! │  │  │ timeouts     │  │ dropped with │  │ Rejected/Unreachable │   │  │
//! │  │  │              │  │ the client   │  │                      │   │  │
//! │  │  └──────────────┘  └──────────────┘  └──────────────────────┘   │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │ HTTP/1.1 + JSON                        │
//! │                               ▼                                        │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 Remote Order Service (black box)                 │  │
//! │  │                                                                  │  │
//! │  │  POST /orders  →  2xx {"id": "..."} on success                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`client`] - `OrderClient`, `OrderOutcome`
//! - [`config`] - `ClientConfig` (base URL, timeouts)
//! - [`error`] - `ClientError`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ordo_client::{ClientConfig, OrderClient};
//! use ordo_core::types::{LineItem, OrderRequest};
//!
//! let client = OrderClient::new(ClientConfig::new("http://svc"))?;
//! let order = OrderRequest::new("c1", vec![LineItem::new("X1", 2, 500)]);
//!
//! // Collapsed contract: id or nothing.
//! if let Some(id) = client.create_order(&order).await {
//!     println!("created {id}");
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{OrderClient, OrderOutcome};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
