//! The model's answer, either parsed or replaced by a fixed fallback.

use crate::prompts::ResponseSchema;
use crate::types::status;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Most alternatives returned by [`extract_alternatives`].
pub const MAX_ALTERNATIVES: usize = 5;

/// Why the dispatch routine substituted a fallback answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// HTTP 200, but the sanitized body was not a JSON object.
    InvalidJson,
    /// Endpoint answered with a non-200 status.
    Http(u16),
    /// The request never produced a response (connect, timeout, TLS, body read).
    Network(String),
}

impl FallbackReason {
    /// Concern reported for this failure kind.
    pub fn concern(&self) -> &'static str {
        match self {
            FallbackReason::InvalidJson => "Invalid JSON response",
            FallbackReason::Http(_) => "API Error",
            FallbackReason::Network(_) => "Network Error",
        }
    }

    fn recommendations(&self) -> Vec<String> {
        let recs: &[&str] = match self {
            FallbackReason::InvalidJson => &["Verify with Islamic scholar"],
            FallbackReason::Http(_) => &["Try again later", "Consult a local Islamic authority"],
            FallbackReason::Network(_) => &["Check your internet connection", "Try again later"],
        };
        recs.iter().map(|s| s.to_string()).collect()
    }
}

/// Answer produced by one dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamAnswer {
    /// Sanitized body parsed as a JSON object. Keys are not validated.
    Parsed(Map<String, Value>),
    /// `raw` is the sanitized body for [`FallbackReason::InvalidJson`], the
    /// response body for [`FallbackReason::Http`], and empty otherwise.
    Fallback { raw: String, reason: FallbackReason },
}

impl UpstreamAnswer {
    /// Interpret a sanitized HTTP 200 body.
    pub fn from_body(sanitized: String) -> Self {
        match serde_json::from_str::<Value>(&sanitized) {
            Ok(Value::Object(map)) => UpstreamAnswer::Parsed(map),
            _ => UpstreamAnswer::Fallback {
                raw: sanitized,
                reason: FallbackReason::InvalidJson,
            },
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, UpstreamAnswer::Parsed(_))
    }

    /// Short label for logs: `parsed`, `invalid_json`, `http` or `network`.
    pub fn outcome(&self) -> &'static str {
        match self {
            UpstreamAnswer::Parsed(_) => "parsed",
            UpstreamAnswer::Fallback { reason, .. } => match reason {
                FallbackReason::InvalidJson => "invalid_json",
                FallbackReason::Http(_) => "http",
                FallbackReason::Network(_) => "network",
            },
        }
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            UpstreamAnswer::Parsed(_) => None,
            UpstreamAnswer::Fallback { reason, .. } => Some(reason),
        }
    }

    /// Resolve the answer into typed fields.
    ///
    /// A parsed answer is read leniently. A fallback materializes the fixed
    /// mapping for its reason; `schema` decides whether the extended fields are set.
    pub fn fields(&self, schema: ResponseSchema) -> UpstreamFields {
        match self {
            UpstreamAnswer::Parsed(map) => UpstreamFields::from_map(map),
            UpstreamAnswer::Fallback { raw, reason } => {
                let (status, explanation) = match reason {
                    FallbackReason::InvalidJson => (status::UNKNOWN, raw.clone()),
                    FallbackReason::Http(code) => (status::ERROR, format!("HTTP {}", code)),
                    FallbackReason::Network(message) => (status::ERROR, message.clone()),
                };
                let mut fields = UpstreamFields {
                    status: Some(status.to_string()),
                    explanation: Some(explanation),
                    confidence: Some("Low".to_string()),
                    concerns: Some(vec![reason.concern().to_string()]),
                    ..Default::default()
                };
                if schema == ResponseSchema::Extended {
                    fields.recommendations = Some(reason.recommendations());
                    fields.certification_required = Some(true);
                    fields.alternatives = Some(Vec::new());
                }
                fields
            }
        }
    }
}

/// Every key any result mapper reads from an answer.
///
/// A key that is absent, `null`, or of the wrong JSON type is `None`; the
/// mappers apply their documented defaults from there.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpstreamFields {
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub explanation: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub confidence: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub concerns: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub recommendations: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub certification_required: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub alternatives: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub has_certification: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub certifying_body: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub reliability: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub details: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_halal: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub certification_body: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_verified: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_valid: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub issued_to: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub expiry_date: Option<String>,
}

impl UpstreamFields {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        // Every field is lenient and defaulted, so this only fails on a non-object.
        serde_json::from_value(Value::Object(map.clone())).unwrap_or_default()
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Pull up to [`MAX_ALTERNATIVES`] alternatives out of an answer.
///
/// Prefers the `alternatives` list. Without one, each line of `explanation`
/// becomes a candidate after trimming; blank lines and lines starting with
/// `Error` are dropped.
pub fn extract_alternatives(fields: &UpstreamFields) -> Vec<String> {
    if let Some(alternatives) = &fields.alternatives {
        return alternatives.iter().take(MAX_ALTERNATIVES).cloned().collect();
    }
    fields
        .explanation
        .as_deref()
        .unwrap_or("")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("Error"))
        .take(MAX_ALTERNATIVES)
        .map(String::from)
        .collect()
}
