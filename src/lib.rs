//! # halal-detector
//!
//! Client for classifying food ingredients, dishes, brands and restaurants as
//! halal, haram or questionable by asking a hosted large language model.
//!
//! ## Overview
//!
//! Every operation follows the same path: render a task-specific prompt, send
//! it as one HTTP POST, strip known vendor boilerplate from the answer, parse it
//! as JSON, and shape it into a fixed result record. Derived operations (boolean
//! checks, ingredient filters, recipe analysis, meat lookups) are built on top of
//! single-ingredient classification.
//!
//! Failures never surface as errors. A network failure, a non-200 status or an
//! answer that is not a JSON object produces a record with status `Error` or
//! `Unknown` and a concern naming the failure kind.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use halal_detector::HalalDetector;
//!
//! #[tokio::main]
//! async fn main() -> halal_detector::Result<()> {
//!     let detector = HalalDetector::new(None)?;
//!
//!     let result = detector.detect_ingredient("gelatin").await;
//!     println!("{}: {} ({})", result.subject, result.status, result.confidence);
//!
//!     let recipe = detector
//!         .analyze_recipe("Panna cotta", &["cream", "sugar", "gelatin"])
//!         .await;
//!     println!("{} ({:.0}% halal)", recipe.overall_status, recipe.halal_percentage);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`HalalDetector`] and its builder |
//! | [`prompts`] | Prompt builders and response schemas |
//! | [`response`] | Boilerplate removal, parsing, fallback shapes |
//! | [`transport`] | HTTP transport and the transport trait |
//! | [`types`] | Messages and result records |
//! | [`batch`] | Sequential or bounded-concurrency list execution |
//! | [`lookup`] | Static meat tables and the status score |

pub mod batch;
pub mod client;
pub mod lookup;
pub mod prompts;
pub mod response;
pub mod transport;
pub mod types;

pub use batch::BatchStrategy;
pub use client::{HalalDetector, HalalDetectorBuilder};
pub use lookup::status_score;
pub use response::{extract_alternatives, sanitize_response};
pub use types::{
    CertificateVerification, CertificationResult, ClassificationResult, DetailedClassification,
    ItemKind, RecipeAnalysis, RestaurantResult,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
