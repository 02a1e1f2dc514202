//! Restcheck Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: the reqwest-based HTTP executor, the YAML/JSON
//! spec-file loaders, and the result reporters.

pub mod adapters;
pub mod loading;
pub mod reporting;

pub use adapters::ReqwestHttpClient;
pub use loading::{LoadError, load_plan};
pub use reporting::{ConsoleReporter, render_html, render_markdown};
