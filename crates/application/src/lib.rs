//! Apiprobe Application - Scenario runners and ports
//!
//! This crate holds the verification logic: the `HttpClient` and
//! `Reporter` ports, the seven scenario runners, and the fixed-order
//! suite that aggregates their results.

pub mod ports;
pub mod scenarios;
pub mod suite;

#[cfg(test)]
pub(crate) mod test_support;

pub use suite::run_suite;
