use crate::client::core::HalalDetector;
use crate::prompts::ResponseSchema;
use crate::response::{sanitize_response, FallbackReason, UpstreamAnswer};
use crate::types::ChatRequest;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

impl HalalDetector {
    /// Send one prompt and return the model's answer.
    ///
    /// Never fails: transport errors, non-200 statuses and non-JSON bodies all
    /// become [`UpstreamAnswer::Fallback`]. No retries.
    pub(crate) async fn generate(
        &self,
        prompt: &str,
        context: Option<&str>,
        schema: ResponseSchema,
    ) -> UpstreamAnswer {
        let request = ChatRequest::conversation(schema.persona(), prompt, context, &self.model);
        let request_id = Uuid::new_v4().to_string();
        let start = Instant::now();
        debug!(
            request_id = request_id.as_str(),
            endpoint = self.endpoint.as_str(),
            model = self.model.as_str(),
            "halal-detector request started"
        );

        let (answer, http_status) = match self.transport.post_chat(&request).await {
            Err(e) => {
                warn!(
                    request_id = request_id.as_str(),
                    error = %e,
                    "halal-detector request failed"
                );
                let answer = UpstreamAnswer::Fallback {
                    raw: String::new(),
                    reason: FallbackReason::Network(e.to_string()),
                };
                (answer, None)
            }
            Ok(response) if !response.is_ok() => {
                warn!(
                    request_id = request_id.as_str(),
                    http_status = response.status,
                    "halal-detector request rejected"
                );
                let answer = UpstreamAnswer::Fallback {
                    raw: response.body,
                    reason: FallbackReason::Http(response.status),
                };
                (answer, Some(response.status))
            }
            Ok(response) => {
                let answer = UpstreamAnswer::from_body(sanitize_response(&response.body));
                if !answer.is_parsed() {
                    warn!(
                        request_id = request_id.as_str(),
                        body_len = response.body.len(),
                        "halal-detector answer was not a JSON object"
                    );
                }
                (answer, Some(response.status))
            }
        };

        info!(
            request_id = request_id.as_str(),
            http_status,
            outcome = answer.outcome(),
            duration_ms = start.elapsed().as_millis(),
            "halal-detector request finished"
        );
        answer
    }
}
