//! Restcheck Application - Test execution and validation engine
//!
//! This crate turns declared test cases into executed HTTP exchanges and
//! multi-criteria verdicts. It is pure apart from the [`ports::HttpClient`]
//! port: it performs no file or console I/O and emits no logging; verdicts
//! are observable only through the returned [`restcheck_domain::TestResult`]
//! values.

pub mod matching;
pub mod ports;
pub mod runner;
pub mod substitution;
pub mod validation;

pub use matching::{MatchOptions, matches, matches_with};
pub use ports::{HttpClient, HttpClientError};
pub use runner::{SuiteRunner, resolve_request};
pub use substitution::substitute;
pub use validation::{ValidationPipeline, Validator, Verdict};
