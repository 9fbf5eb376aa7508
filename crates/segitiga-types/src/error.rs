//! Error type shared by the Segitiga crates.
//!
//! Invalid user input and impossible triangles are *not* errors: they are
//! ordinary outcomes ([`crate::ValidationResult::Invalid`],
//! [`crate::CalculationOutcome::Failure`]) shown to the user. `SegitigaError`
//! covers faults in wiring and configuration.

use thiserror::Error;

/// Error type for registry, wiring and configuration faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegitigaError {
    /// No calculator is registered under the requested name.
    #[error("calculator '{name}' not found")]
    UnknownCalculator {
        /// Requested calculator name.
        name: String,
    },

    /// A calculator was invoked without one of its required validated inputs.
    #[error("calculator '{calculator}' is missing validated input '{field}'")]
    MissingInput {
        /// Calculator that was invoked.
        calculator: String,
        /// Wire name of the absent field.
        field: String,
    },

    /// A field name that none of the forms know.
    #[error("unknown field '{name}'")]
    UnknownField {
        /// Name as received.
        name: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// What went wrong.
        message: String,
        /// Offending setting, when known.
        setting: Option<String>,
    },
}

impl SegitigaError {
    /// Short category name for structured logs.
    pub const fn category(&self) -> &'static str {
        match self {
            SegitigaError::UnknownCalculator { .. } => "unknown_calculator",
            SegitigaError::MissingInput { .. } => "missing_input",
            SegitigaError::UnknownField { .. } => "unknown_field",
            SegitigaError::Configuration { .. } => "configuration",
        }
    }

    /// Whether the fault was caused by the caller's request rather than the deployment.
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            SegitigaError::UnknownCalculator { .. } | SegitigaError::UnknownField { .. }
        )
    }
}

/// Result alias used across the workspace.
pub type SegitigaResult<T> = Result<T, SegitigaError>;
