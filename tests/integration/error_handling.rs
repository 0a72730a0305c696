//! Integration tests for failure containment: every failure comes back as a record

use crate::integration::mock_server::MockServerFixture;
use halal_detector::HalalDetector;
use std::time::Duration;

#[tokio::test]
async fn test_service_unavailable_becomes_error_record() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_response(503, r#"{"error": "model overloaded"}"#)
        .await;

    let detector = fixture.detector();
    let ingredient = detector.detect_ingredient("gelatin").await;
    assert_eq!(ingredient.status, "Error");
    assert_eq!(ingredient.confidence, "Low");
    assert_eq!(ingredient.explanation, "HTTP 503");
    assert!(ingredient.concerns.contains(&"API Error".to_string()));

    let food = detector.detect_food_item("pizza").await;
    assert_eq!(food.status, "Error");
    assert!(food.concerns.contains(&"API Error".to_string()));
}

#[tokio::test]
async fn test_http_status_codes_map_to_api_error() {
    for status in [400usize, 401, 429, 500, 502] {
        let fixture = MockServerFixture::new().await;
        let _mock = fixture.mock_response(status, "").await;
        let result = fixture.detector().detect_ingredient("rice").await;
        assert_eq!(result.status, "Error", "status {status}");
        assert_eq!(result.explanation, format!("HTTP {}", status));
        assert_eq!(result.concerns, vec!["API Error"]);
    }
}

#[tokio::test]
async fn test_plain_text_answer_is_unknown() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_response(
            200,
            "Gelatin is usually derived from pork.\n\nSupport our mission https://pollinations.ai",
        )
        .await;

    let result = fixture.detector().detect_ingredient("gelatin").await;
    assert_eq!(result.status, "Unknown");
    assert_eq!(result.explanation, "Gelatin is usually derived from pork.");
    assert_eq!(result.confidence, "Low");
    assert_eq!(result.concerns, vec!["Invalid JSON response"]);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let detector = HalalDetector::builder()
        .base_url("http://127.0.0.1:1/")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let result = detector.detect_ingredient("rice").await;
    assert_eq!(result.status, "Error");
    assert_eq!(result.confidence, "Low");
    assert_eq!(result.concerns, vec!["Network Error"]);
    assert!(!result.explanation.is_empty());

    let detailed = detector.analyze_ingredient_detailed("rice").await;
    assert_eq!(detailed.classification.concerns, vec!["Network Error"]);
    assert!(detailed.certification_required);
}

#[tokio::test]
async fn test_restaurant_on_failure_keeps_identity() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_response(500, "").await;

    let r = fixture.detector().check_restaurant("Kebab House", "Leeds").await;
    assert_eq!(r.restaurant, "Kebab House");
    assert_eq!(r.location, "Leeds");
    assert!(!r.is_halal);
    assert_eq!(r.certification_body, "Unknown");
    assert_eq!(r.last_verified, "Unknown");
    assert_eq!(r.notes, "HTTP 500");
}
