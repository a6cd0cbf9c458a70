//! Name → constructor registry for `count_positive` targets.
//!
//! The harness never references a target type directly. Callers register entries up front and the harness
//! resolves one by name at run time, which keeps "which target runs" a data decision rather than a code change.
//!
//! ## Notes
//! - Lookup via [`TargetRegistry::resolve`] is **case-sensitive**.
//! - Canonical spellings win over aliases, mirroring how builtin vocabularies resolve names.
//! - Every spelling (canonical or alias) is unique across the registry; [`TargetRegistry::register`] enforces it.
//!
//! ## Examples
//! ```rust
//! use countpos_core::TargetRegistry;
//!
//! let registry = TargetRegistry::with_builtins();
//! assert_eq!(registry.resolve("count_positive").map(|e| e.canonical), Some("Main"));
//! assert!(registry.resolve("main").is_none());
//! ```

use std::fmt;

use crate::targets::{CountPositive, ReferenceCounter};

/// Build a fresh target instance, or describe why it could not be built.
pub type Constructor = fn() -> Result<Box<dyn CountPositive>, String>;

/// A registered target.
#[derive(Debug, Clone, Copy)]
pub struct TargetEntry {
    /// Name used in docs, listings and diagnostics.
    pub canonical: &'static str,
    /// Additional accepted spellings.
    pub aliases: &'static [&'static str],
    /// One-line description shown by `--list`.
    pub description: &'static str,
    pub construct: Constructor,
}

impl TargetEntry {
    /// Iterate over every spelling of this entry, canonical first.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.canonical).chain(self.aliases.iter().copied())
    }
}

/// Errors raised while building a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// `spelling` is already used by the entry named `owner`.
    DuplicateSpelling { spelling: &'static str, owner: &'static str },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateSpelling { spelling, owner } => {
                write!(f, "target name `{spelling}` is already registered by `{owner}`")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered collection of [`TargetEntry`] values.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    entries: Vec<TargetEntry>,
}

/// Entries registered by [`TargetRegistry::with_builtins`].
pub const BUILTIN_TARGETS: &[TargetEntry] = &[TargetEntry {
    canonical: "Main",
    aliases: &["count_positive"],
    description: "Reference target: counts elements strictly greater than zero.",
    construct: construct_reference,
}];

fn construct_reference() -> Result<Box<dyn CountPositive>, String> {
    Ok(Box::new(ReferenceCounter))
}

impl TargetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding [`BUILTIN_TARGETS`].
    pub fn with_builtins() -> Self {
        // spellings covered by tests/registry_guardrails.rs
        Self {
            entries: BUILTIN_TARGETS.to_vec(),
        }
    }

    /// Add an entry.
    ///
    /// ## Errors
    /// - [`RegistryError::DuplicateSpelling`] if any spelling of `entry` is already taken. The registry is left
    ///   unchanged in that case.
    pub fn register(&mut self, entry: TargetEntry) -> Result<(), RegistryError> {
        for spelling in entry.spellings() {
            if let Some(owner) = self.entries.iter().find(|e| e.spellings().any(|s| s == spelling)) {
                return Err(RegistryError::DuplicateSpelling {
                    spelling,
                    owner: owner.canonical,
                });
            }
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, entry: TargetEntry) -> Result<Self, RegistryError> {
        self.register(entry)?;
        Ok(self)
    }

    /// Resolve a spelling to its entry.
    ///
    /// ## Returns
    /// - `Some(&TargetEntry)` if `name` matches a canonical spelling or alias.
    /// - `None` otherwise.
    pub fn resolve(&self, name: &str) -> Option<&TargetEntry> {
        if let Some(entry) = self.entries.iter().find(|e| e.canonical == name) {
            return Some(entry);
        }
        self.entries.iter().find(|e| {
            let aliases: &[&str] = e.aliases;
            aliases.contains(&name)
        })
    }

    /// Canonical names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.canonical).collect()
    }

    pub fn entries(&self) -> &[TargetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
