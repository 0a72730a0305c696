//! Integration tests with mock HTTP server

pub mod batch;
pub mod classification;
pub mod error_handling;
pub mod mock_server;
