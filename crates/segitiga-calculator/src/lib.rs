//! The calculator ecosystem for Segitiga.
//!
//! This crate turns raw field text into validated numbers ([`InputValidator`])
//! and provides the [`CalculatorPlugin`] trait with the two built-in triangle
//! calculators, reachable by name through [`Calculator`].

pub mod built_in;
pub mod calculator;
pub mod plugin;
pub mod plugin_manager;
pub mod validator;

pub use built_in::area::{AreaCalculator, compute_area};
pub use built_in::perimeter::{PerimeterCalculator, compute_perimeter, is_valid_triangle};
pub use calculator::Calculator;
pub use plugin::{CalculationResult, CalculatorPlugin, ValidatedInputs};
pub use validator::{InputValidator, parse_decimal, validate};
