//! Console reporter
//!
//! One line per test case plus a run summary, colored when the terminal
//! supports it.

use std::io::Write;

use restcheck_domain::{RunReport, StatusCode, TestResult};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes per-test lines and a summary to standard output.
pub struct ConsoleReporter {
    color: ColorChoice,
}

impl ConsoleReporter {
    /// Creates a reporter. With `color_enabled`, colors are still only
    /// emitted when stdout is a terminal.
    #[must_use]
    pub const fn new(color_enabled: bool) -> Self {
        let color = if color_enabled {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self { color }
    }

    /// Reports the whole run to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn report(&self, report: &RunReport) -> std::io::Result<()> {
        let mut out = StandardStream::stdout(self.color);
        self.write_report(&mut out, report)
    }

    /// Reports the whole run to the given stream.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the stream fails.
    pub fn write_report<W: WriteColor>(
        &self,
        out: &mut W,
        report: &RunReport,
    ) -> std::io::Result<()> {
        for result in &report.results {
            self.write_result(out, result)?;
        }

        writeln!(out)?;
        let summary_color = if report.all_passed() {
            Color::Green
        } else {
            Color::Red
        };
        out.set_color(ColorSpec::new().set_fg(Some(summary_color)).set_bold(true))?;
        write!(out, "{} passed, {} failed", report.passed, report.failed)?;
        out.reset()?;
        writeln!(out, " ({} total, {:.1}%)", report.total, report.pass_rate())?;
        Ok(())
    }

    fn write_result<W: WriteColor>(
        &self,
        out: &mut W,
        result: &TestResult,
    ) -> std::io::Result<()> {
        if result.passed {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(out, "PASS")?;
            out.reset()?;
            writeln!(
                out,
                " {} ({}, {} ms)",
                result.test_name,
                StatusCode::new(result.status_code),
                result.response_time_ms
            )?;
        } else {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(out, "FAIL")?;
            out.reset()?;
            writeln!(
                out,
                " {} (status {} expected {}, {} ms)",
                result.test_name,
                result.status_code,
                result.expected_status_code,
                result.response_time_ms
            )?;
            if let Some(error) = &result.error {
                writeln!(out, "     error: {error}")?;
            }
            for reason in &result.failures {
                writeln!(out, "     - {reason}")?;
            }
        }
        Ok(())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}
