//! Classifier client.
//!
//! Implementation details are split into submodules under `src/client/`:
//! construction in `builder`, the shared request routine in `dispatch`, the
//! network-backed operations in `core`, and the locally derived ones in `derived`.

pub mod builder;
pub mod core;
mod derived;
mod dispatch;


pub use builder::{HalalDetectorBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
pub use core::HalalDetector;
