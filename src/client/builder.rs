use crate::batch::{BatchExecutor, BatchStrategy};
use crate::client::core::HalalDetector;
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;

/// Public text-generation endpoint used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://text.pollinations.ai/";
/// Model identifier sent with every request.
pub const DEFAULT_MODEL: &str = "openai";
/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for [`HalalDetector`].
///
/// Explicit settings win over environment variables, which win over defaults:
/// - `HALAL_DETECTOR_BASE_URL`
/// - `HALAL_DETECTOR_MODEL`
/// - `HALAL_DETECTOR_API_KEY`
/// - `HALAL_HTTP_TIMEOUT_SECS`
/// - `HALAL_MAX_CONCURRENCY` (a value above 1 enables concurrent batches)
/// - `HALAL_PROXY_URL` (read by the HTTP transport)
pub struct HalalDetectorBuilder {
    base_url: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    batch_strategy: Option<BatchStrategy>,
    transport: Option<Arc<dyn Transport>>,
}

impl HalalDetectorBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            model: None,
            api_key: None,
            timeout: None,
            batch_strategy: None,
            transport: None,
        }
    }

    /// Override the endpoint URL (primarily for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Store an API key. The endpoint needs none, and the key is never sent.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn batch_strategy(mut self, strategy: BatchStrategy) -> Self {
        self.batch_strategy = Some(strategy);
        self
    }

    /// Inject a transport. Default is an [`HttpTransport`] to the configured endpoint.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<HalalDetector> {
        let base_url = self
            .base_url
            .or_else(|| std::env::var("HALAL_DETECTOR_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_endpoint(&base_url)?;

        let model = self
            .model
            .or_else(|| std::env::var("HALAL_DETECTOR_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_key = self
            .api_key
            .or_else(|| std::env::var("HALAL_DETECTOR_API_KEY").ok());

        let timeout = self
            .timeout
            .or_else(|| {
                std::env::var("HALAL_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
            })
            .unwrap_or(DEFAULT_TIMEOUT);

        let strategy = self
            .batch_strategy
            .or_else(|| {
                std::env::var("HALAL_MAX_CONCURRENCY")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .map(BatchStrategy::with_max_concurrency)
            })
            .unwrap_or_default();

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(base_url.clone(), timeout).map_err(|e| {
                Error::configuration_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    ErrorContext::new().with_source("builder"),
                )
            })?),
        };

        Ok(HalalDetector {
            transport,
            endpoint: base_url,
            model,
            api_key,
            timeout,
            batch: BatchExecutor::new(strategy),
        })
    }
}

impl Default for HalalDetectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_endpoint(base_url: &str) -> Result<()> {
    let parsed = url::Url::parse(base_url).map_err(|e| {
        Error::configuration_with_context(
            "Invalid endpoint URL",
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details(format!("{}: {}", base_url, e))
                .with_source("builder"),
        )
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::configuration_with_context(
            "Endpoint URL must use http or https",
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details(format!("scheme: {}", other))
                .with_source("builder"),
        )),
    }
}
