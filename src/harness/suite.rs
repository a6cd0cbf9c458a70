//! Property suite: run every builtin fixture against one target.

use std::io;

use countpos_core::TargetRegistry;
use countpos_core::fixtures::PROPERTY_FIXTURES;

use super::{Reporter, Summary, run_fixtures};

/// Run [`PROPERTY_FIXTURES`] in order against the target named `name`.
pub fn run_suite(registry: &TargetRegistry, name: &str, reporter: &mut dyn Reporter) -> io::Result<Summary> {
    tracing::debug!(target_name = name, fixtures = PROPERTY_FIXTURES.len(), "running property suite");
    run_fixtures(registry, name, PROPERTY_FIXTURES, reporter)
}
