//! Integration tests for the HTTP request boundary.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use telegraph::{
    http::build_router,
    sms::{
        adapters::{memory::InMemoryTransport, reference::FixedReferenceAllocator},
        services::DispatchService,
        validation::DefaultMessageValidator,
    },
};
use tower::ServiceExt;

const LONG_REQUEST: &str = r#"{"recipient":"+31612345678","originator":"MessageBird","message":"text of more then 160 caracters that needs to be splitted in multiple messages and should be prepended by User Data Header, more random text END OF FIRST here starts second message asdiy doi asdoi asd hoiasd oiasd hoiasdh husaudg asdoiha oiasd oiasd oihsad ihasd oiasdi asdoi doiasdi asdi asd END OF SECOND third final part."}"#;

fn app(transport: InMemoryTransport) -> (Router, Arc<InMemoryTransport>) {
    let transport = Arc::new(transport);
    let service = DispatchService::new(
        Arc::clone(&transport),
        Arc::new(FixedReferenceAllocator::new(0xA7)),
        Arc::new(DefaultMessageValidator::new()),
    );
    (build_router(service), transport)
}

async fn post_send(app: Router, json: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/send")
        .header("content-type", "application/json")
        .body(Body::from(json.to_owned()))
        .expect("request builds");
    let response = app.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body readable")
        .to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[rstest]
#[case::empty_body("", StatusCode::BAD_REQUEST, false)]
#[case::invalid_json(
    r#"{recipient:"+31612345678","originator":"MessageBird","message":"This is a test message."}"#,
    StatusCode::BAD_REQUEST,
    false
)]
#[case::invalid_recipient(
    r#"{"recipient":"","originator":"MessageBird","message":"This is a test message."}"#,
    StatusCode::BAD_REQUEST,
    false
)]
#[case::ok(
    r#"{"recipient":"+31612345678","originator":"MessageBird","message":"This is a test message."}"#,
    StatusCode::OK,
    false
)]
#[case::concatenated_ok(LONG_REQUEST, StatusCode::OK, false)]
#[case::client_error(
    r#"{"recipient":"+31612345678","originator":"MessageBird","message":"This is a test message."}"#,
    StatusCode::INTERNAL_SERVER_ERROR,
    true
)]
#[tokio::test]
async fn send_responds_with_status(
    #[case] json: &str,
    #[case] expected: StatusCode,
    #[case] transport_fails: bool,
) {
    let transport = if transport_fails {
        InMemoryTransport::failing_on(1)
    } else {
        InMemoryTransport::new()
    };
    let (app, _transport) = app(transport);

    let (status, body) = post_send(app, json).await;

    assert_eq!(status, expected);
    if status == StatusCode::OK {
        assert!(body.is_empty());
    } else {
        assert!(!body.is_empty());
    }
}

#[tokio::test]
async fn concatenated_request_sends_three_segments() {
    let (app, transport) = app(InMemoryTransport::new());

    let (status, _) = post_send(app, LONG_REQUEST).await;

    assert_eq!(status, StatusCode::OK);
    let sent = transport.sent().expect("readable");
    assert_eq!(sent.len(), 3);
    assert!(sent.iter().all(|m| m.is_segment()));
}

#[tokio::test]
async fn every_validation_problem_is_reported() {
    let (app, transport) = app(InMemoryTransport::new());

    let (status, body) =
        post_send(app, r#"{"recipient":"0612345678","originator":"","message":""}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("not a valid recipient number"));
    assert!(body.contains("originator can not be empty"));
    assert!(body.contains("message can not be empty"));
    assert_eq!(transport.attempts().expect("readable"), 0);
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _transport) = app(InMemoryTransport::new());
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request builds");

    let response = app.oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body readable")
        .to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(value, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn get_on_send_is_not_allowed() {
    let (app, _transport) = app(InMemoryTransport::new());
    let request = Request::builder()
        .uri("/send")
        .body(Body::empty())
        .expect("request builds");

    let response = app.oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
