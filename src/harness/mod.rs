//! Harness: resolve a `count_positive` target, run it against a fixture, and report actual vs expected.
//!
//! ## Flow
//!
//! 1. Resolve the target name in a [`TargetRegistry`].
//! 2. Build an instance through the registered constructor.
//! 3. Invoke `count_positive` with the fixture input. A panic inside the target is contained here.
//! 4. Check that the returned value is a 32-bit int and compare it with the fixture's expected value.
//!
//! Every failure along the way is a [`HarnessError`] value. Nothing escapes [`run_target`] as a panic, and callers
//! decide once, at the top level, what to print.
//!
//! ## Modules
//!
//! - `config` - Run configuration
//! - `errors` - Error kinds of the run chain
//! - `reporter` - Console and JSON reporting
//! - `suite` - Property suite over every builtin fixture
//! - `verdict` - Pass/fail from captured harness output

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod errors;
pub mod reporter;
pub mod suite;
pub mod verdict;

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use countpos_core::{CountPositive, Fixture, TargetRegistry};
use tracing::{debug, info};

pub use config::{DEFAULT_TARGET, HarnessConfig, OutputFormat};
pub use errors::HarnessError;
pub use reporter::Reporter;

/// A completed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Canonical name of the target that ran
    pub target: &'static str,
    pub fixture: Fixture,
    /// Value returned by the target
    pub actual: i32,
}

impl RunOutcome {
    /// Whether the target returned the fixture's expected value.
    pub fn passed(&self) -> bool {
        self.fixture.accepts(i64::from(self.actual))
    }
}

/// Result of running one fixture.
pub type RunResult = Result<RunOutcome, HarnessError>;

/// Counts for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration: Duration,
}

/// Resolve `name`, construct the target, and run it against `fixture`.
#[tracing::instrument(skip(registry, fixture), fields(fixture = fixture.name))]
pub fn run_target(registry: &TargetRegistry, name: &str, fixture: &Fixture) -> RunResult {
    let entry = registry
        .resolve(name)
        .ok_or_else(|| HarnessError::target_not_found(name, &registry.names()))?;
    debug!(canonical = entry.canonical, "resolved target");

    let instance = (entry.construct)().map_err(|reason| HarnessError::Instantiation {
        target: entry.canonical.to_string(),
        reason,
    })?;

    let returned = invoke(entry.canonical, instance.as_ref(), fixture.input)?;
    debug!(returned, "target returned");

    let actual = i32::try_from(returned).map_err(|_| HarnessError::ReturnType {
        target: entry.canonical.to_string(),
        value: returned,
    })?;

    Ok(RunOutcome {
        target: entry.canonical,
        fixture: *fixture,
        actual,
    })
}

/// Run each fixture in order against the target named `name`, feeding results to `reporter`.
///
/// Only reporter I/O errors are returned; run failures are counted and reported.
pub fn run_fixtures(
    registry: &TargetRegistry,
    name: &str,
    fixtures: &[Fixture],
    reporter: &mut dyn Reporter,
) -> io::Result<Summary> {
    let start = Instant::now();
    let mut summary = Summary {
        total: fixtures.len(),
        ..Summary::default()
    };

    reporter.on_start(name, fixtures.len())?;
    for fixture in fixtures {
        let result = run_target(registry, name, fixture);
        match &result {
            Ok(outcome) if outcome.passed() => summary.passed += 1,
            Ok(_) => summary.failed += 1,
            Err(e) => {
                info!(kind = e.kind(), error = %e, "harness run failed");
                summary.failed += 1;
            }
        }
        reporter.on_result(fixture, &result)?;
    }

    summary.duration = start.elapsed();
    reporter.on_complete(&summary)?;
    Ok(summary)
}

fn invoke(target: &str, instance: &dyn CountPositive, input: &[i32]) -> Result<i64, HarnessError> {
    panic::catch_unwind(AssertUnwindSafe(|| instance.count_positive(input))).map_err(|payload| {
        HarnessError::Invocation {
            target: target.to_string(),
            message: panic_message(payload.as_ref()),
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use countpos_core::TargetEntry;
    use countpos_core::fixtures::{self, DEFAULT_FIXTURE};

    struct CountsZero;

    impl CountPositive for CountsZero {
        fn count_positive(&self, values: &[i32]) -> i64 {
            values.iter().filter(|&&v| v >= 0).count() as i64
        }
    }

    struct Panics;

    impl CountPositive for Panics {
        fn count_positive(&self, _values: &[i32]) -> i64 {
            panic!("index out of bounds: the len is 10 but the index is 10")
        }
    }

    struct Overflows;

    impl CountPositive for Overflows {
        fn count_positive(&self, _values: &[i32]) -> i64 {
            i64::from(i32::MAX) + 1
        }
    }

    fn entry(canonical: &'static str, construct: countpos_core::registry::Constructor) -> TargetEntry {
        TargetEntry {
            canonical,
            aliases: &[],
            description: "test target",
            construct,
        }
    }

    fn counts_zero() -> Result<Box<dyn CountPositive>, String> {
        Ok(Box::new(CountsZero))
    }

    fn panics() -> Result<Box<dyn CountPositive>, String> {
        Ok(Box::new(Panics))
    }

    fn overflows() -> Result<Box<dyn CountPositive>, String> {
        Ok(Box::new(Overflows))
    }

    fn no_default() -> Result<Box<dyn CountPositive>, String> {
        Err("constructor requires a seed".to_string())
    }

    fn registry() -> TargetRegistry {
        let mut registry = TargetRegistry::with_builtins();
        registry.register(entry("CountsZero", counts_zero)).unwrap();
        registry.register(entry("Panics", panics)).unwrap();
        registry.register(entry("Overflows", overflows)).unwrap();
        registry.register(entry("NoDefault", no_default)).unwrap();
        registry
    }

    #[test]
    fn test_reference_target_passes_default_fixture() {
        let outcome = run_target(&registry(), "Main", &DEFAULT_FIXTURE).unwrap();
        assert_eq!(outcome.target, "Main");
        assert_eq!(outcome.actual, 6);
        assert!(outcome.passed());
    }

    #[test]
    fn test_alias_reports_canonical_name() {
        let outcome = run_target(&registry(), "count_positive", &DEFAULT_FIXTURE).unwrap();
        assert_eq!(outcome.target, "Main");
    }

    #[test]
    fn test_wrong_answer_is_an_outcome_not_an_error() {
        let outcome = run_target(&registry(), "CountsZero", &DEFAULT_FIXTURE).unwrap();
        assert_eq!(outcome.actual, 7);
        assert!(!outcome.passed());
    }

    #[test]
    fn test_missing_target() {
        let err = run_target(&registry(), "Missing", &DEFAULT_FIXTURE).unwrap_err();
        assert_eq!(err.kind(), "target_not_found");
        assert_eq!(err.to_string(), "target `Missing` is not registered");
        match err {
            HarnessError::TargetNotFound { known, .. } => {
                assert_eq!(known, "registered targets: Main, CountsZero, Panics, Overflows, NoDefault");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_target_in_empty_registry() {
        let err = run_target(&TargetRegistry::new(), "Main", &DEFAULT_FIXTURE).unwrap_err();
        assert!(matches!(err, HarnessError::TargetNotFound { ref known, .. } if known == "no targets are registered"));
    }

    #[test]
    fn test_constructor_failure() {
        let err = run_target(&registry(), "NoDefault", &DEFAULT_FIXTURE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "target `NoDefault` could not be constructed: constructor requires a seed"
        );
    }

    #[test]
    fn test_panic_is_contained() {
        let err = run_target(&registry(), "Panics", &DEFAULT_FIXTURE).unwrap_err();
        assert_eq!(err.kind(), "invocation");
        assert!(err.to_string().contains("index out of bounds"));
    }

    #[test]
    fn test_out_of_range_return() {
        let err = run_target(&registry(), "Overflows", &DEFAULT_FIXTURE).unwrap_err();
        assert!(matches!(err, HarnessError::ReturnType { value, .. } if value == 2_147_483_648));
    }

    #[test]
    fn test_panic_message_payloads() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42_u8), "non-string panic payload");
    }

    #[test]
    fn test_property_fixtures_with_reference_target() {
        for fixture in fixtures::PROPERTY_FIXTURES {
            let outcome = run_target(&registry(), "Main", fixture).unwrap();
            assert!(outcome.passed(), "fixture {} failed", fixture.name);
        }
    }
}
