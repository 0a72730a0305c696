//! Mock HTTP endpoint setup for integration tests

use halal_detector::{BatchStrategy, HalalDetector};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Test fixture that manages a mock text-generation endpoint
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = format!("{}/", server.url());
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Create a detector pointed at the mock server
    pub fn detector(&self) -> HalalDetector {
        self.detector_with(BatchStrategy::Sequential)
    }

    pub fn detector_with(&self, strategy: BatchStrategy) -> HalalDetector {
        HalalDetector::builder()
            .base_url(&self.base_url)
            .model("openai")
            .timeout(Duration::from_secs(5))
            .batch_strategy(strategy)
            .build()
            .expect("Failed to build detector")
    }

    /// Respond to every POST with the given status and body
    pub async fn mock_response(&self, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", "/")
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }

    /// Respond with `body` to requests whose user prompt mentions `subject`
    pub async fn mock_for_subject(&self, subject: &str, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", "/")
            .match_body(Matcher::Regex(format!("'{}'", subject)))
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body(body)
            .create_async()
            .await
    }
}

/// JSON verdict body as the model would return it
pub fn verdict(status: &str) -> String {
    format!(
        r#"{{"status": "{}", "explanation": "test", "confidence": "High", "concerns": []}}"#,
        status
    )
}
