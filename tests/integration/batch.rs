//! Integration tests for list operations

use crate::integration::mock_server::{verdict, MockServerFixture};
use halal_detector::{BatchStrategy, ItemKind};
use mockito::Matcher;

#[tokio::test]
async fn test_batch_execution_order_preserving() {
    let fixture = MockServerFixture::new().await;
    let _beef = fixture.mock_for_subject("beef", &verdict("Halal")).await;
    let _pork = fixture.mock_for_subject("pork", &verdict("Haram")).await;
    let _gelatin = fixture.mock_for_subject("gelatin", &verdict("Questionable")).await;

    let items = ["beef", "pork", "gelatin"];
    for strategy in [
        BatchStrategy::Sequential,
        BatchStrategy::Concurrent { max_concurrency: 3 },
    ] {
        let results = fixture
            .detector_with(strategy)
            .batch_detect(&items, ItemKind::Ingredient)
            .await;
        let statuses: Vec<&str> = results.iter().map(|r| r.status.as_str()).collect();
        assert_eq!(statuses, vec!["Halal", "Haram", "Questionable"], "{strategy:?}");
        let subjects: Vec<&str> = results.iter().map(|r| r.subject.as_str()).collect();
        assert_eq!(subjects, items.to_vec());
    }
}

#[tokio::test]
async fn test_recipe_analysis_over_http() {
    let fixture = MockServerFixture::new().await;
    let flour = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/")
            .match_body(Matcher::Regex("'flour'".to_string()))
            .with_status(200)
            .with_body(verdict("Halal"))
            .expect(3)
            .create_async()
            .await
    };
    let _butter = fixture.mock_for_subject("butter", &verdict("Halal")).await;
    let _rum = fixture.mock_for_subject("rum", &verdict("Haram")).await;
    let _e471 = fixture.mock_for_subject("e471", &verdict("Questionable")).await;

    let analysis = fixture
        .detector()
        .analyze_recipe("Rum cake", &["flour", "butter", "rum", "e471"])
        .await;

    assert_eq!(analysis.overall_status, "Haram");
    assert_eq!(analysis.haram_ingredients, vec!["rum"]);
    assert_eq!(analysis.questionable_ingredients, vec!["e471"]);
    assert_eq!(analysis.safe_ingredients, vec!["flour", "butter"]);
    assert_eq!(analysis.total_ingredients, 4);
    assert_eq!(analysis.halal_percentage, 50.0);
    // Once per filter.
    flour.assert_async().await;
}

#[tokio::test]
async fn test_failed_items_land_in_no_partition() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_response(503, "").await;

    let items = ["flour", "sugar"];
    let detector = fixture.detector();
    assert!(detector.safe_ingredients(&items).await.is_empty());
    assert!(detector.haram_ingredients(&items).await.is_empty());
    assert!(detector.questionable_ingredients(&items).await.is_empty());

    let analysis = detector.analyze_recipe("Bread", &items).await;
    assert_eq!(analysis.overall_status, "Halal");
    assert_eq!(analysis.halal_percentage, 0.0);
}
