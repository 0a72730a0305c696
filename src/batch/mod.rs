//! Batch execution for list operations.
//!
//! Batch classification and the ingredient filters classify one item per
//! request. [`BatchExecutor`] decides how many of those requests are in flight
//! at once; output order always matches input order.
//!
//! ## Strategies
//!
//! - **Sequential**: one request at a time (default)
//! - **Concurrent**: up to N requests at a time

mod executor;

pub use executor::{BatchExecutor, BatchStrategy};
