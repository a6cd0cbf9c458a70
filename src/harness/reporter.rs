//! Result reporting.
//!
//! The harness feeds results through the [`Reporter`] trait so the run loop never formats output itself. Three
//! reporters ship with the crate:
//!
//! - [`ConsoleReporter`] - the classic two-line `Actual:` / `Expected:` output of a single run
//! - [`SuiteReporter`] - one line per fixture plus a summary (pytest-style)
//! - [`JsonReporter`] - run records as JSON, one object for a single run or `{"results": [...]}` for a suite
//!
//! Diagnostics for failed runs are rendered with miette and always go to the error stream.

use std::io::{self, Write};

use countpos_core::Fixture;
use miette::{GraphicalReportHandler, GraphicalTheme};
use serde_json::{Value, json};

use super::{HarnessConfig, HarnessError, OutputFormat, RunResult, Summary};

/// Trait for reporting harness results.
pub trait Reporter {
    /// Called before the first fixture runs
    fn on_start(&mut self, _target: &str, _fixture_count: usize) -> io::Result<()> {
        Ok(())
    }

    /// Called after each fixture has run
    fn on_result(&mut self, fixture: &Fixture, result: &RunResult) -> io::Result<()>;

    /// Called once all fixtures have run
    fn on_complete(&mut self, _summary: &Summary) -> io::Result<()> {
        Ok(())
    }
}

/// Build the reporter matching `config`.
///
/// `suite` selects the multi-fixture layout for console output and the `{"results": [...]}` wrapper for JSON.
pub fn reporter_for<'a, O, E>(config: &HarnessConfig, suite: bool, out: O, err: E) -> Box<dyn Reporter + 'a>
where
    O: Write + 'a,
    E: Write + 'a,
{
    match (config.format, suite) {
        (OutputFormat::Text, false) => Box::new(ConsoleReporter::new(out, err, config.color)),
        (OutputFormat::Text, true) => Box::new(SuiteReporter::new(out, err, config.color)),
        (OutputFormat::Json, suite) => Box::new(JsonReporter::new(out, suite)),
    }
}

/// Render a harness error as a miette diagnostic.
pub fn render_diagnostic(error: &HarnessError, color: bool) -> String {
    let theme = if color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let mut rendered = String::new();
    match GraphicalReportHandler::new_themed(theme).render_report(&mut rendered, error) {
        Ok(()) => rendered,
        Err(_) => format!("Error: {error}"),
    }
}

/// Build the JSON run record for one fixture.
///
/// `actual_output` carries the error message when the run failed.
pub fn run_record(fixture: &Fixture, result: &RunResult) -> Value {
    let (actual_output, passed, error) = match result {
        Ok(outcome) => (outcome.actual.to_string(), outcome.passed(), Value::Null),
        Err(e) => (e.to_string(), false, Value::from(e.kind())),
    };
    json!({
        "fixture": fixture.name,
        "input": fixture.input,
        "expected_output": fixture.expected.to_string(),
        "actual_output": actual_output,
        "passed": passed,
        "error": error,
    })
}

/// Two-line console output of a single run
pub struct ConsoleReporter<O, E> {
    out: O,
    err: E,
    color: bool,
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self { out, err, color }
    }
}

impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn on_result(&mut self, fixture: &Fixture, result: &RunResult) -> io::Result<()> {
        match result {
            Ok(outcome) => {
                writeln!(self.out, "Actual: {}", outcome.actual)?;
                writeln!(self.out, "Expected: {}", fixture.expected)?;
            }
            Err(e) => {
                write!(self.err, "{}", render_diagnostic(e, self.color))?;
            }
        }
        self.out.flush()
    }
}

/// Per-fixture console output of a suite run
pub struct SuiteReporter<O, E> {
    out: O,
    err: E,
    color: bool,
    target: String,
}

impl<O: Write, E: Write> SuiteReporter<O, E> {
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self {
            out,
            err,
            color,
            target: String::new(),
        }
    }
}

fn paint(color: bool, code: &str, text: &str) -> String {
    if color {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

impl<O: Write, E: Write> Reporter for SuiteReporter<O, E> {
    fn on_start(&mut self, target: &str, fixture_count: usize) -> io::Result<()> {
        self.target = target.to_string();
        writeln!(
            self.out,
            "{}",
            paint(self.color, "1", "=================== harness session starts ===================")
        )?;
        writeln!(self.out, "target: {target}")?;
        writeln!(self.out, "collected {fixture_count} fixture(s)")?;
        writeln!(self.out)
    }

    fn on_result(&mut self, fixture: &Fixture, result: &RunResult) -> io::Result<()> {
        match result {
            Ok(outcome) if outcome.passed() => {
                writeln!(self.out, "{}::{} {}", self.target, fixture.name, paint(self.color, "32", "PASSED"))?;
            }
            Ok(outcome) => {
                writeln!(self.out, "{}::{} {}", self.target, fixture.name, paint(self.color, "31", "FAILED"))?;
                writeln!(self.out, "    input:    {:?}", fixture.input)?;
                writeln!(self.out, "    Actual:   {}", outcome.actual)?;
                writeln!(self.out, "    Expected: {}", fixture.expected)?;
            }
            Err(e) => {
                writeln!(self.out, "{}::{} {}", self.target, fixture.name, paint(self.color, "31", "ERROR"))?;
                write!(self.err, "{}", render_diagnostic(e, self.color))?;
            }
        }
        Ok(())
    }

    fn on_complete(&mut self, summary: &Summary) -> io::Result<()> {
        let mut parts = Vec::new();
        if summary.passed > 0 {
            parts.push(format!("{} passed", summary.passed));
        }
        if summary.failed > 0 {
            parts.push(format!("{} failed", summary.failed));
        }
        if parts.is_empty() {
            parts.push("no fixtures ran".to_string());
        }
        let line = format!(
            "=================== {} in {:.2}s ===================",
            parts.join(", "),
            summary.duration.as_secs_f64()
        );
        let code = if summary.failed > 0 { "1;31" } else { "1;32" };

        writeln!(self.out)?;
        writeln!(self.out, "{}", paint(self.color, code, &line))?;
        self.out.flush()
    }
}

/// JSON run records
pub struct JsonReporter<O> {
    out: O,
    suite: bool,
    records: Vec<Value>,
}

impl<O: Write> JsonReporter<O> {
    pub fn new(out: O, suite: bool) -> Self {
        Self {
            out,
            suite,
            records: Vec::new(),
        }
    }
}

impl<O: Write> Reporter for JsonReporter<O> {
    fn on_result(&mut self, fixture: &Fixture, result: &RunResult) -> io::Result<()> {
        self.records.push(run_record(fixture, result));
        Ok(())
    }

    fn on_complete(&mut self, _summary: &Summary) -> io::Result<()> {
        let document = if self.suite || self.records.len() != 1 {
            json!({ "results": std::mem::take(&mut self.records) })
        } else {
            self.records.pop().unwrap_or(Value::Null)
        };
        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
