//! Perimeter Calculator
//!
//! perimeter = a + b + c, provided the sides satisfy the strict triangle
//! inequality. A degenerate triangle (one side equal to the sum of the other
//! two) is rejected, as is a sum too large to represent as a finite number.
//!
//! Inputs: `sideA`, `sideB`, `sideC`.

use segitiga_types::{CalculationOutcome, FieldName, Locale, Messages, PositiveNumber};

use crate::built_in::finite_or_out_of_range;
use crate::plugin::{CalculationResult, CalculatorPlugin, ValidatedInputs};

/// Whether `a`, `b` and `c` bound a non-degenerate triangle.
pub fn is_valid_triangle(a: f64, b: f64, c: f64) -> bool {
    a + b > c && a + c > b && b + c > a
}

/// Perimeter with the failure message in the default locale.
pub fn compute_perimeter(a: PositiveNumber, b: PositiveNumber, c: PositiveNumber) -> CalculationOutcome {
    PerimeterCalculator::default().compute(a, b, c)
}

#[derive(Debug, Clone, Copy)]
pub struct PerimeterCalculator {
    messages: &'static Messages,
}

impl Default for PerimeterCalculator {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl PerimeterCalculator {
    pub const fn new(locale: Locale) -> Self {
        Self { messages: locale.messages() }
    }

    pub fn compute(
        &self,
        a: PositiveNumber,
        b: PositiveNumber,
        c: PositiveNumber,
    ) -> CalculationOutcome {
        let (a, b, c) = (a.get(), b.get(), c.get());
        if is_valid_triangle(a, b, c) {
            finite_or_out_of_range(a + b + c, self.messages)
        } else {
            CalculationOutcome::failure(self.messages.invalid_triangle)
        }
    }
}

impl CalculatorPlugin for PerimeterCalculator {
    fn name(&self) -> &str {
        "perimeter"
    }

    fn required_fields(&self) -> &'static [FieldName] {
        &[FieldName::SideA, FieldName::SideB, FieldName::SideC]
    }

    fn calculate(&self, inputs: &ValidatedInputs) -> CalculationResult {
        let a = inputs.require(self.name(), FieldName::SideA)?;
        let b = inputs.require(self.name(), FieldName::SideB)?;
        let c = inputs.require(self.name(), FieldName::SideC)?;
        Ok(self.compute(a, b, c))
    }
}
