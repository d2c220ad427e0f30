use crate::server::test::fixture::{body_json, multipart_request, Fixture, Part};
use crate::species_classifier::test::fixture::{jpeg, Fixture as ClassifierFixture};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tower::ServiceExt;

fn data_url(bytes: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes))
}

#[tokio::test]
async fn test_capture_trout() {
    let f = Fixture::new(ClassifierFixture::scores(8, 0.92));
    let image = data_url(&jpeg(3000, 2000));

    let response = f
        .router
        .oneshot(multipart_request(
            "/capture",
            &[Part::Text {
                name: "image",
                value: &image,
            }],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"predicted_class": "Trout", "confidence": "92.0"})
    );
    assert_eq!(f.model.calls(), 1);
}

#[tokio::test]
async fn test_capture_unreadable_image() {
    let f = Fixture::new(ClassifierFixture::scores(8, 0.92));
    let image = data_url(b"this is not a jpeg");

    let response = f
        .router
        .oneshot(multipart_request(
            "/capture",
            &[Part::Text {
                name: "image",
                value: &image,
            }],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"predicted_class": "Unknown Fish", "confidence": "0.0"})
    );
    assert_eq!(f.model.calls(), 0);
}

#[tokio::test]
async fn test_capture_invalid_base64_is_unknown() {
    let f = Fixture::new(ClassifierFixture::scores(8, 0.92));

    let response = f
        .router
        .oneshot(multipart_request(
            "/capture",
            &[Part::Text {
                name: "image",
                value: "data:image/jpeg;base64,%%%",
            }],
        ))
        .await
        .unwrap();

    assert_eq!(
        body_json(response).await,
        serde_json::json!({"predicted_class": "Unknown Fish", "confidence": "0.0"})
    );
    assert_eq!(f.model.calls(), 0);
}

#[tokio::test]
async fn test_capture_low_confidence() {
    let f = Fixture::new(ClassifierFixture::scores(1, 0.5));
    let image = data_url(&jpeg(640, 480));

    let response = f
        .router
        .oneshot(multipart_request(
            "/capture",
            &[Part::Text {
                name: "image",
                value: &image,
            }],
        ))
        .await
        .unwrap();

    assert_eq!(
        body_json(response).await,
        serde_json::json!({"predicted_class": "Unknown Fish", "confidence": "50.0"})
    );
}

#[tokio::test]
async fn test_capture_missing_field() {
    let f = Fixture::new(ClassifierFixture::scores(8, 0.92));

    let response = f
        .router
        .oneshot(multipart_request(
            "/capture",
            &[Part::Text {
                name: "photo",
                value: "x",
            }],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "missing form field \"image\""})
    );
}

#[tokio::test]
async fn test_capture_model_failure_is_server_error() {
    let f = Fixture::new(vec![0.9, 0.1]);
    let image = data_url(&jpeg(32, 32));

    let response = f
        .router
        .oneshot(multipart_request(
            "/capture",
            &[Part::Text {
                name: "image",
                value: &image,
            }],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_health() {
    let f = Fixture::new(ClassifierFixture::scores(8, 0.92));

    let response = f
        .router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"status": "OK"}));
}
