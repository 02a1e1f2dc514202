//! Result reporting
//!
//! Renders a finished [`restcheck_domain::RunReport`] for humans. All
//! console output of the tool lives here; the engine itself only returns
//! data.

mod console;
mod html;
mod markdown;

pub use console::ConsoleReporter;
pub use html::render_html;
pub use markdown::render_markdown;
