//! Harness run configuration.
//!
//! Plain values with builder-style setters. The CLI is the only place that overrides the defaults; logging is
//! configured separately through `RUST_LOG`.

use countpos_core::Fixture;
use countpos_core::fixtures::DEFAULT_FIXTURE;

/// Target resolved when none is named.
pub const DEFAULT_TARGET: &str = "Main";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `Actual: <int>` / `Expected: <int>` lines
    #[default]
    Text,
    /// One JSON run record (or `{"results": [...]}` for the suite)
    Json,
}

/// Configuration for a harness run
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Registry spelling of the target to run
    pub target: String,
    /// Fixture used by single runs
    pub fixture: Fixture,
    /// Output format
    pub format: OutputFormat,
    /// Whether console output may use ANSI colors
    pub color: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            fixture: DEFAULT_FIXTURE,
            format: OutputFormat::Text,
            color: false,
        }
    }
}

impl HarnessConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target name
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the fixture for single runs
    pub fn with_fixture(mut self, fixture: Fixture) -> Self {
        self.fixture = fixture;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable colored console output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countpos_core::fixtures;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.target, "Main");
        assert_eq!(config.fixture, DEFAULT_FIXTURE);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.color);
    }

    #[test]
    fn test_builder_chaining() {
        let zeros = *fixtures::from_str("zeros").unwrap();
        let config = HarnessConfig::new()
            .with_target("count_positive")
            .with_fixture(zeros)
            .with_format(OutputFormat::Json)
            .with_color(true);
        assert_eq!(config.target, "count_positive");
        assert_eq!(config.fixture.name, "zeros");
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.color);
    }
}
