//! Restcheck Domain - Core business types
//!
//! This crate defines the domain model for the restcheck API test runner.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod expect;
pub mod plan;
pub mod request;
pub mod response;
pub mod result;

pub use auth::{ApiKeyLocation, AuthConfig, AuthError, AuthResolution};
pub use error::{DomainError, DomainResult};
pub use expect::Expect;
pub use plan::{TestCase, TestPlan};
pub use request::{HttpMethod, RequestSpec, ResolvedRequest};
pub use response::{ResponseSpec, StatusCode};
pub use result::{RunReport, TestResult};
