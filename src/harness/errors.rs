//! Errors produced by the lookup → construct → invoke chain.

use miette::Diagnostic;
use thiserror::Error;

/// A failed harness run.
///
/// Every variant is reported, never propagated past the top level: a failed run still ends the process normally.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("target `{name}` is not registered")]
    #[diagnostic(code(countpos::target_not_found))]
    TargetNotFound {
        name: String,
        /// "registered targets: ..." line
        #[help]
        known: String,
    },

    #[error("target `{target}` could not be constructed: {reason}")]
    #[diagnostic(
        code(countpos::instantiation),
        help("the registered constructor must build a target without arguments")
    )]
    Instantiation { target: String, reason: String },

    #[error("target `{target}` panicked during count_positive: {message}")]
    #[diagnostic(code(countpos::invocation))]
    Invocation { target: String, message: String },

    #[error("target `{target}` returned {value}, which is not a 32-bit int")]
    #[diagnostic(
        code(countpos::return_type),
        help("count_positive must return a value between -2147483648 and 2147483647")
    )]
    ReturnType { target: String, value: i64 },
}

impl HarnessError {
    /// Build a [`HarnessError::TargetNotFound`] listing the registered canonical names.
    pub fn target_not_found(name: &str, registered: &[&str]) -> Self {
        let known = if registered.is_empty() {
            "no targets are registered".to_string()
        } else {
            format!("registered targets: {}", registered.join(", "))
        };
        HarnessError::TargetNotFound {
            name: name.to_string(),
            known,
        }
    }

    /// Short stable name of the error kind, used in logs and JSON records.
    pub fn kind(&self) -> &'static str {
        match self {
            HarnessError::TargetNotFound { .. } => "target_not_found",
            HarnessError::Instantiation { .. } => "instantiation",
            HarnessError::Invocation { .. } => "invocation",
            HarnessError::ReturnType { .. } => "return_type",
        }
    }
}
