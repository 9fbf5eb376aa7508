//! Segitiga Types
//!
//! This crate defines the data model shared by the Segitiga crates
//! (`segitiga-calculator`, `segitiga-core` and `segitiga-web`): validated
//! numbers, validation and calculation outcomes, field and feature names,
//! result presentation, localized messages and the common error type.

#![deny(missing_docs)]

mod error;
mod locale;
mod types;

pub use error::{SegitigaError, SegitigaResult};
pub use locale::{Locale, Messages, format_number};
pub use types::{
    CalculationOutcome, Feature, FieldBinding, FieldName, PositiveNumber, ResultDisplay,
    ResultState, ValidationResult,
};
