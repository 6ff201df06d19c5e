//! Apiprobe Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: the reqwest-backed HTTP client and the console
//! reporter.

pub mod adapters;
pub mod reporting;

pub use adapters::ReqwestHttpClient;
pub use reporting::ConsoleReporter;
