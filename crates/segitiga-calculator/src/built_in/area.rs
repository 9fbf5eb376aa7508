//! Area Calculator
//!
//! area = 0.5 * base * height
//!
//! Inputs: `base`, `height`. Every pair of positive numbers has an area; the
//! only failure is a product too large to represent as a finite number.

use segitiga_types::{CalculationOutcome, FieldName, Locale, Messages, PositiveNumber};

use crate::built_in::finite_or_out_of_range;
use crate::plugin::{CalculationResult, CalculatorPlugin, ValidatedInputs};

/// Triangle area from base and height, failure message in the default locale.
pub fn compute_area(base: PositiveNumber, height: PositiveNumber) -> CalculationOutcome {
    AreaCalculator::default().compute(base, height)
}

#[derive(Debug, Clone, Copy)]
pub struct AreaCalculator {
    messages: &'static Messages,
}

impl Default for AreaCalculator {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl AreaCalculator {
    pub const fn new(locale: Locale) -> Self {
        Self { messages: locale.messages() }
    }

    pub fn compute(&self, base: PositiveNumber, height: PositiveNumber) -> CalculationOutcome {
        finite_or_out_of_range(0.5 * base.get() * height.get(), self.messages)
    }
}

impl CalculatorPlugin for AreaCalculator {
    fn name(&self) -> &str {
        "area"
    }

    fn required_fields(&self) -> &'static [FieldName] {
        &[FieldName::Base, FieldName::Height]
    }

    fn calculate(&self, inputs: &ValidatedInputs) -> CalculationResult {
        let base = inputs.require(self.name(), FieldName::Base)?;
        let height = inputs.require(self.name(), FieldName::Height)?;
        Ok(self.compute(base, height))
    }
}
