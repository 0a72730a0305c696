//! Outbound transport to the text-generation endpoint.

mod http;

pub use http::HttpTransport;

use crate::types::ChatRequest;
use async_trait::async_trait;

/// Status and body of a completed HTTP exchange. Any status counts as completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Sends one chat request and returns the raw response.
///
/// Implementations return `Err` only when no response was obtained; HTTP error
/// statuses are reported through [`RawResponse::status`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_chat(&self, request: &ChatRequest) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
