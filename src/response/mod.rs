//! Response handling: boilerplate removal, JSON parsing, and the fixed
//! fallback shapes substituted when the model's answer is unusable.

mod answer;
mod sanitize;

pub use answer::{
    extract_alternatives, FallbackReason, UpstreamAnswer, UpstreamFields, MAX_ALTERNATIVES,
};
pub use sanitize::{sanitize_response, BOILERPLATE};
