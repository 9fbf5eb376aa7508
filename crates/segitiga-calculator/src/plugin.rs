use segitiga_types::{CalculationOutcome, FieldName, PositiveNumber, SegitigaError, SegitigaResult};
use std::collections::BTreeMap;

pub type CalculationResult = SegitigaResult<CalculationOutcome>;

/// Validated calculator inputs, keyed by field.
///
/// Values can only be inserted as [`PositiveNumber`], so everything a plugin
/// reads from here has already passed input validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedInputs {
    fields: BTreeMap<FieldName, PositiveNumber>,
}

impl ValidatedInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, value: PositiveNumber) {
        self.fields.insert(field, value);
    }

    pub fn get(&self, field: FieldName) -> Option<PositiveNumber> {
        self.fields.get(&field).copied()
    }

    /// Fetches `field` or reports which calculator needed it.
    pub fn require(&self, calculator: &str, field: FieldName) -> SegitigaResult<PositiveNumber> {
        self.get(field).ok_or_else(|| SegitigaError::MissingInput {
            calculator: calculator.to_string(),
            field: field.as_str().to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(FieldName, PositiveNumber)> for ValidatedInputs {
    fn from_iter<I: IntoIterator<Item = (FieldName, PositiveNumber)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}

/// A trait for calculator plugins.
pub trait CalculatorPlugin: Send + Sync {
    /// The name of the calculator.
    fn name(&self) -> &str;

    /// Fields that must be present in the inputs, in display order.
    fn required_fields(&self) -> &'static [FieldName];

    /// Performs the calculation.
    fn calculate(&self, inputs: &ValidatedInputs) -> CalculationResult;
}
