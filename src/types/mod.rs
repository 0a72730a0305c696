//! Core data types.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`message`] | Chat messages and the request body posted to the endpoint |
//! | [`result`] | Fixed-shape result records returned to callers |

pub mod message;
pub mod result;

pub use message::{ChatRequest, Message, MessageRole};
pub use result::{
    status, CertificateVerification, CertificationResult, ClassificationResult,
    DetailedClassification, ItemKind, RecipeAnalysis, RestaurantResult,
};
