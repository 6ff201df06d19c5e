//! Apiprobe Domain - Core verification types
//!
//! This crate defines the domain model for the apiprobe contract
//! verifier. All types here are pure Rust with no I/O dependencies.

pub mod check;
pub mod contact;
pub mod error;
pub mod report;
pub mod request;
pub mod response;
pub mod target;

pub use contact::{CONTACT_RECORD_KEYS, ContactForm};
pub use error::{DomainError, DomainResult};
pub use report::{RunReport, ScenarioResult};
pub use request::{DEFAULT_TIMEOUT_MS, HttpMethod, RequestSpec};
pub use response::{ResponseSpec, StatusCode};
pub use target::Target;
