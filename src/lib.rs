#![forbid(unsafe_code)]
//! countpos: run a `count_positive` target against a fixed vector and report actual vs expected.
//!
//! Targets are registered by name in a [`countpos_core::TargetRegistry`]. The harness resolves one, builds it,
//! invokes it, and prints the returned value next to the expected one.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `harness` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Targets**: A panic inside a target is contained by the harness and reported as
//!   [`harness::HarnessError::Invocation`].

pub mod cli;
pub mod harness;
pub mod version;

pub use harness::{HarnessConfig, HarnessError, OutputFormat, RunOutcome, run_target};
