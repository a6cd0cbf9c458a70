//! Provide the fixtures, the `count_positive` target contract, and the target registry used by the `countpos`
//! harness.
//!
//! This crate is intentionally small and dependency-free. It contains everything the harness needs to know about
//! *what* it runs, while the root crate decides *how* runs are reported.
//!
//! ## Notes
//!
//! - No IO and no global state: registries are plain values built by the caller.
//! - Targets are bound statically through the [`CountPositive`] trait and found by name through a
//!   [`TargetRegistry`], which replaces runtime name lookup with an explicit registration step.
//!
//! ## Examples
//! ```rust
//! use countpos_core::{TargetRegistry, fixtures};
//!
//! let registry = TargetRegistry::with_builtins();
//! let entry = registry.resolve("Main").unwrap();
//! let target = (entry.construct)().unwrap();
//! assert_eq!(target.count_positive(fixtures::FIXED_INPUT), fixtures::EXPECTED);
//! ```

pub mod fixtures;
pub mod registry;
pub mod targets;

pub use fixtures::Fixture;
pub use registry::{RegistryError, TargetEntry, TargetRegistry};
pub use targets::{CountPositive, ReferenceCounter};
