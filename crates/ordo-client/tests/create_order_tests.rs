//! Wire-level tests for `OrderClient` against a local stub order
//! service. Each stub answers `POST /orders` with a fixed status/body
//! and records what the client actually sent.

use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use ordo_client::{ClientConfig, OrderClient, OrderOutcome};
use ordo_core::types::{LineItem, OrderRequest};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// What the stub saw for one request: headers plus the raw body.
struct SeenRequest {
    headers: HeaderMap,
    body: String,
}

#[derive(Clone)]
struct StubResponse {
    status: StatusCode,
    body: &'static str,
    seen: mpsc::UnboundedSender<SeenRequest>,
}

async fn orders_handler(
    State(stub): State<StubResponse>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    stub.seen
        .send(SeenRequest { headers, body })
        .expect("test receiver alive");
    (stub.status, stub.body)
}

/// Spawns a stub order service on an ephemeral port. Returns the base
/// URL and a receiver yielding every request the stub handled.
async fn spawn_stub(
    status: StatusCode,
    body: &'static str,
) -> (String, mpsc::UnboundedReceiver<SeenRequest>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let app: Router = Router::new()
        .route("/orders", post(orders_handler))
        .with_state(StubResponse {
            status,
            body,
            seen: tx,
        });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), rx)
}

fn sample_order() -> OrderRequest {
    OrderRequest::new("c1", vec![LineItem::new("X1", 2, 500)])
}

#[tokio::test]
async fn created_order_returns_id() {
    let (base, mut seen) = spawn_stub(StatusCode::CREATED, r#"{"id":"ord-123"}"#).await;
    let client = OrderClient::with_base_url(&base).unwrap();

    let id = client.create_order(&sample_order()).await;
    assert_eq!(id.unwrap().as_str(), "ord-123");

    // Pin the wire contract: exact field names and the JSON media type.
    let request = seen.recv().await.unwrap();
    assert_eq!(
        request.headers.get("content-type").unwrap(),
        "application/json"
    );
    let payload: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(
        payload,
        json!({
            "clientId": "c1",
            "items": [{"sku": "X1", "quantity": 2, "priceCents": 500}]
        })
    );
}

#[tokio::test]
async fn extra_response_fields_are_ignored() {
    let (base, _seen) = spawn_stub(
        StatusCode::CREATED,
        r#"{"id":"ord-9","status":"NEW","totalCents":1000}"#,
    )
    .await;
    let client = OrderClient::with_base_url(&base).unwrap();

    let id = client.create_order(&sample_order()).await;
    assert_eq!(id.unwrap().as_str(), "ord-9");
}

#[tokio::test]
async fn rejection_collapses_to_none() {
    let (base, _seen) = spawn_stub(StatusCode::NOT_FOUND, "").await;
    let client = OrderClient::with_base_url(&base).unwrap();

    assert!(client.create_order(&sample_order()).await.is_none());

    match client.submit_order(&sample_order()).await {
        OrderOutcome::Rejected { status } => assert_eq!(status, 404),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn success_without_id_collapses_to_none() {
    let (base, _seen) = spawn_stub(StatusCode::OK, "{}").await;
    let client = OrderClient::with_base_url(&base).unwrap();

    assert!(client.create_order(&sample_order()).await.is_none());

    match client.submit_order(&sample_order()).await {
        OrderOutcome::Incomplete { status } => assert_eq!(status, 200),
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_success_body_collapses_to_none() {
    let (base, _seen) = spawn_stub(StatusCode::OK, "").await;
    let client = OrderClient::with_base_url(&base).unwrap();

    match client.submit_order(&sample_order()).await {
        OrderOutcome::Incomplete { status } => assert_eq!(status, 200),
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_unreachable() {
    let (base, _seen) = spawn_stub(StatusCode::OK, "definitely not json").await;
    let client = OrderClient::with_base_url(&base).unwrap();

    assert!(client.create_order(&sample_order()).await.is_none());

    match client.submit_order(&sample_order()).await {
        OrderOutcome::Unreachable(_) => {}
        other => panic!("expected Unreachable, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_is_unreachable() {
    // Bind an ephemeral port, then drop the listener so nothing answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig {
        base_url: format!("http://{}", addr),
        connect_timeout: Duration::from_millis(500),
        request_timeout: Duration::from_secs(1),
    };
    let client = OrderClient::new(config).unwrap();

    assert!(client.create_order(&sample_order()).await.is_none());

    match client.submit_order(&sample_order()).await {
        OrderOutcome::Unreachable(_) => {}
        other => panic!("expected Unreachable, got {other:?}"),
    }
}

#[tokio::test]
async fn client_is_reusable_across_calls() {
    let (base, mut seen) = spawn_stub(StatusCode::CREATED, r#"{"id":"ord-1"}"#).await;
    let client = OrderClient::with_base_url(&base).unwrap();

    for _ in 0..3 {
        assert!(client.create_order(&sample_order()).await.is_some());
    }

    let mut handled = 0;
    while seen.try_recv().is_ok() {
        handled += 1;
    }
    assert_eq!(handled, 3);
}
