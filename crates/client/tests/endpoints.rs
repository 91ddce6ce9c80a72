//! Integration tests for ApiClient against an in-process fixture backend.
//!
//! Each test spins up an axum router on an ephemeral port serving canned
//! responses, then exercises the client end to end: query encoding, both
//! badge payload shapes, and the error taxonomy.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use labdash_client::{ApiClient, ClientError};
use labdash_core::badge::SeverityClass;

/// Serve a router on an ephemeral localhost port, returning its address.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve fixture");
    });
    addr
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn suggestions_decode_null_and_present_samples() {
    let router = Router::new().route(
        "/autocomplete",
        get(|| async {
            Json(json!([
                { "ws": "24-1234", "sample": null, "run": "RUN1" },
                { "ws": "24-1234", "sample": "S1", "run": "RUN1" },
            ]))
        }),
    );
    let addr = serve(router).await;

    let client = ApiClient::new();
    let items = client
        .suggestions(&format!("http://{addr}/autocomplete"), "24-1234")
        .await
        .expect("suggestions should decode");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].ws, "24-1234");
    assert_eq!(items[0].sample, None);
    assert_eq!(items[1].sample.as_deref(), Some("S1"));
    assert_eq!(items[1].run, "RUN1");
}

#[tokio::test]
async fn suggestions_send_full_query_as_term() {
    let router = Router::new().route(
        "/autocomplete",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            // echo the term back so the test can see what arrived
            let term = params.get("term").cloned().unwrap_or_default();
            Json(json!([{ "ws": term, "sample": null, "run": "RUN1" }]))
        }),
    );
    let addr = serve(router).await;

    let client = ApiClient::new();
    let items = client
        .suggestions(&format!("http://{addr}/autocomplete"), "24-1234 extra words")
        .await
        .expect("suggestions should decode");

    assert_eq!(items[0].ws, "24-1234 extra words");
}

#[tokio::test]
async fn suggestion_failure_is_contained_to_an_error() {
    let router = Router::new().route(
        "/autocomplete",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = serve(router).await;

    let client = ApiClient::new();
    let err = client
        .suggestions(&format!("http://{addr}/autocomplete"), "24-1234")
        .await
        .expect_err("500 should surface as an error");

    match err {
        ClientError::Status { status, .. } => {
            assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Badges
// ---------------------------------------------------------------------------

#[tokio::test]
async fn badge_decodes_num_checks_shape() {
    let router = Router::new().route(
        "/num_assigned",
        get(|| async { Json(json!({ "num_checks": 7, "css_class": "warning" })) }),
    );
    let addr = serve(router).await;

    let client = ApiClient::new();
    let payload = client
        .badge(&format!("http://{addr}/num_assigned"))
        .await
        .expect("badge should decode");

    assert_eq!(payload.count, 7);
    assert_eq!(payload.css_class, SeverityClass::Warning);
}

#[tokio::test]
async fn badge_decodes_num_pending_shape() {
    let router = Router::new().route(
        "/num_pending",
        get(|| async { Json(json!({ "num_pending": 0, "css_class": "success" })) }),
    );
    let addr = serve(router).await;

    let client = ApiClient::new();
    let payload = client
        .badge(&format!("http://{addr}/num_pending"))
        .await
        .expect("badge should decode");

    assert_eq!(payload.count, 0);
    assert_eq!(payload.css_class, SeverityClass::Success);
}

#[tokio::test]
async fn badge_relays_unknown_severity_tokens() {
    let router = Router::new().route(
        "/num_qc",
        get(|| async { Json(json!({ "num_pending": 2, "css_class": "secondary" })) }),
    );
    let addr = serve(router).await;

    let client = ApiClient::new();
    let payload = client
        .badge(&format!("http://{addr}/num_qc"))
        .await
        .expect("badge should decode");

    assert_eq!(payload.css_class.badge_class(), "badge-secondary");
}

#[tokio::test]
async fn malformed_badge_body_is_a_decode_error() {
    let router = Router::new().route(
        "/num_assigned",
        get(|| async { Json(Value::String("not a badge".to_string())) }),
    );
    let addr = serve(router).await;

    let client = ApiClient::new();
    let err = client
        .badge(&format!("http://{addr}/num_assigned"))
        .await
        .expect_err("wrong shape should fail to decode");

    assert!(matches!(err, ClientError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // nothing listens on port 1
    let client = ApiClient::new();
    let err = client
        .badge("http://127.0.0.1:1/num_assigned")
        .await
        .expect_err("connection refused should surface as an error");

    assert!(matches!(err, ClientError::Transport { .. }), "got {err:?}");
}

// ---------------------------------------------------------------------------
// Independence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn badge_fetches_are_independent_across_outcomes() {
    let router = Router::new()
        .route(
            "/num_assigned",
            get(|| async { Json(json!({ "num_checks": 3, "css_class": "warning" })) }),
        )
        .route(
            "/num_pending",
            get(|| async { (StatusCode::BAD_GATEWAY, "down") }),
        )
        .route(
            "/num_qc",
            get(|| async { Json(json!({ "num_pending": 0, "css_class": "success" })) }),
        );
    let addr = serve(router).await;

    let client = ApiClient::new();
    let assigned_url = format!("http://{addr}/num_assigned");
    let pending_url = format!("http://{addr}/num_pending");
    let qc_url = format!("http://{addr}/num_qc");
    let (assigned, pending, qc) = tokio::join!(
        client.badge(&assigned_url),
        client.badge(&pending_url),
        client.badge(&qc_url),
    );

    // one failing endpoint leaves the other two untouched
    assert_eq!(assigned.expect("assigned should decode").count, 3);
    assert!(matches!(pending, Err(ClientError::Status { .. })));
    assert_eq!(qc.expect("qc should decode").count, 0);
}
