//! Built-in calculators provided by Segitiga.

pub mod area;
pub mod perimeter;

use segitiga_types::{CalculationOutcome, Messages};

/// Finite inputs can still overflow to infinity; such results are failures.
fn finite_or_out_of_range(value: f64, messages: &Messages) -> CalculationOutcome {
    if value.is_finite() {
        CalculationOutcome::success(value)
    } else {
        CalculationOutcome::failure(messages.result_out_of_range)
    }
}
