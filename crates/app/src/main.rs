//! restcheck - declarative HTTP API test runner
//!
//! Loads a YAML/JSON test specification, executes each declared test case
//! sequentially against the live endpoint, and reports pass/fail verdicts.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use restcheck_application::SuiteRunner;
use restcheck_infrastructure::{
    ConsoleReporter, ReqwestHttpClient, load_plan, render_html, render_markdown,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Declarative HTTP API test runner.
#[derive(Debug, Parser)]
#[command(name = "restcheck", version, about)]
struct Cli {
    /// Path to the test specification file (.yaml, .yml or .json)
    spec: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value = "console")]
    format: OutputFormat,

    /// Per-request timeout in milliseconds (no timeout when omitted)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Disable colored console output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Console,
    Markdown,
    Html,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let plan = match load_plan(&cli.spec).await {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(tests = plan.len(), "loaded test plan");

    let client = match ReqwestHttpClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut runner = SuiteRunner::new(Arc::new(client));
    if let Some(timeout_ms) = cli.timeout_ms {
        runner = runner.with_timeout_ms(timeout_ms);
    }

    let report = runner.run(&plan).await;

    match cli.format {
        OutputFormat::Console => {
            if let Err(e) = ConsoleReporter::new(!cli.no_color).report(&report) {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
        OutputFormat::Markdown => print!("{}", render_markdown(&report)),
        OutputFormat::Html => print!("{}", render_html(&report)),
    }

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
