//! Form controllers for the Segitiga triangle calculator.
//!
//! This crate wires input validation and the calculators to a rendering
//! surface. It holds one [`FormController`] per feature (area and
//! perimeter), the [`FormSurface`] trait through which a controller reads and
//! writes the form, and [`FormState`], an in-memory surface.

/// Submit, reset and edit handling per feature
pub mod controller;
/// Outcome to result-slot mapping
pub mod presentation;
/// Injected form read/write capabilities
pub mod surface;

pub use controller::{Evaluation, FormController, FormSet, SubmitOutcome};
pub use presentation::present;
pub use surface::{FormState, FormSurface};

pub use segitiga_calculator::Calculator;
pub use segitiga_types::{Feature, FieldName, Locale, ResultDisplay, ResultState};
