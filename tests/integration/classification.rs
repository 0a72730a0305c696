//! Integration tests for single-item classification over HTTP

use crate::integration::mock_server::{verdict, MockServerFixture};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_detect_ingredient_over_http() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({"model": "openai", "private": true})),
                Matcher::Regex(r#""role":"system""#.to_string()),
                Matcher::Regex(r#""role":"user""#.to_string()),
                Matcher::Regex("'gelatin'".to_string()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"status": "Questionable", "explanation": "depends on the animal source",
                    "confidence": "Medium", "concerns": ["porcine gelatin"]}

Powered by Pollinations.AI"#,
            )
            .expect(1)
            .create_async()
            .await
    };

    let result = fixture.detector().detect_ingredient("gelatin").await;

    mock.assert_async().await;
    assert_eq!(result.subject, "gelatin");
    assert_eq!(result.status, "Questionable");
    assert_eq!(result.explanation, "depends on the animal source");
    assert_eq!(result.confidence, "Medium");
    assert_eq!(result.concerns, vec!["porcine gelatin"]);
}

#[tokio::test]
async fn test_api_key_is_not_sent() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(verdict("Halal"))
            .expect(1)
            .create_async()
            .await
    };

    let detector = halal_detector::HalalDetector::builder()
        .base_url(&fixture.base_url)
        .api_key("sk-unused")
        .build()
        .unwrap();
    let result = detector.detect_food_item("falafel").await;

    mock.assert_async().await;
    assert_eq!(result.status, "Halal");
}

#[tokio::test]
async fn test_certification_over_http() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_response(
            200,
            r#"{"has_certification": true, "certifying_body": "IFANCA", "reliability": "High"}"#,
        )
        .await;

    let cert = fixture
        .detector()
        .verify_certification("Acme", "Chicken Nuggets")
        .await;

    assert_eq!(cert.brand, "Acme");
    assert_eq!(cert.product, "Chicken Nuggets");
    assert!(cert.has_certification);
    assert_eq!(cert.certifying_body, "IFANCA");
    assert_eq!(cert.details, "No details available");
}

#[tokio::test]
async fn test_alternatives_over_http() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_response(
            200,
            r#"{"alternatives": ["a", "b", "c", "d", "e", "f"]}"#,
        )
        .await;

    let alts = fixture.detector().halal_alternatives("pork").await;
    assert_eq!(alts, vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn test_listed_meat_sends_nothing() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(verdict("Halal"))
            .expect(0)
            .create_async()
            .await
    };

    let detector = fixture.detector();
    assert!(!detector.check_meat_type("Pepperoni").await);
    assert!(detector.check_meat_type("Chicken").await);

    mock.assert_async().await;
}
