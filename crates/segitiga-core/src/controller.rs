//! Per-feature form controller.
//!
//! A [`FormController`] reacts to the three form triggers (submit, reset and
//! edit) and reports everything through a [`FormSurface`]. Bad input and
//! impossible triangles end up as text on the surface; only wiring faults in
//! the calculator registry come back as `Err`.

use segitiga_calculator::{Calculator, InputValidator, ValidatedInputs};
use segitiga_types::{
    CalculationOutcome, Feature, FieldName, Messages, ResultDisplay, SegitigaResult,
    ValidationResult,
};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

use crate::presentation::present;
use crate::surface::FormSurface;

/// What a submit ended in.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// All fields valid and the calculator produced a value.
    Computed {
        /// The calculated area or perimeter.
        value: f64,
    },
    /// All fields valid but the calculator refused them.
    Rejected {
        /// Calculator's user-facing explanation.
        reason: String,
    },
    /// At least one field failed validation; the calculator was not run.
    InvalidInput {
        /// Every invalid field with its message, in display order.
        field_errors: Vec<(FieldName, String)>,
    },
}

impl SubmitOutcome {
    /// `true` for [`SubmitOutcome::Computed`].
    pub fn is_computed(&self) -> bool {
        matches!(self, SubmitOutcome::Computed { .. })
    }
}

/// Per-field validation plus the resulting outcome, without any surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Validation result of each of the feature's fields, in display order.
    pub validations: Vec<(FieldName, ValidationResult)>,
    /// What a submit with these fields ends in.
    pub outcome: SubmitOutcome,
}

#[derive(Clone)]
pub struct FormController {
    feature: Feature,
    validator: InputValidator,
    calculator: Arc<Calculator>,
    messages: &'static Messages,
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("feature", &self.feature)
            .field("locale", &self.calculator.locale())
            .finish()
    }
}

impl FormController {
    /// Controller for `feature`, speaking the calculator's locale.
    pub fn new(feature: Feature, calculator: Arc<Calculator>) -> Self {
        let locale = calculator.locale();
        Self {
            feature,
            validator: InputValidator::new(locale),
            calculator,
            messages: locale.messages(),
        }
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    /// Validates every field of the feature (no short-circuit) and, if all
    /// pass, runs the feature's calculator.
    #[instrument(skip_all, fields(feature = %self.feature))]
    pub fn evaluate<F>(&self, read_field: F) -> SegitigaResult<Evaluation>
    where
        F: Fn(FieldName) -> String,
    {
        let validations: Vec<(FieldName, ValidationResult)> = self
            .feature
            .fields()
            .iter()
            .map(|&field| (field, self.validator.validate(&read_field(field))))
            .collect();

        let field_errors: Vec<(FieldName, String)> = validations
            .iter()
            .filter_map(|(field, result)| result.reason().map(|r| (*field, r.to_string())))
            .collect();

        let outcome = if field_errors.is_empty() {
            let inputs: ValidatedInputs = validations
                .iter()
                .filter_map(|(field, result)| result.value().map(|v| (*field, v)))
                .collect();
            match self.calculator.calculate(self.feature.calculator_name(), &inputs)? {
                CalculationOutcome::Success { value } => SubmitOutcome::Computed { value },
                CalculationOutcome::Failure { reason } => SubmitOutcome::Rejected { reason },
            }
        } else {
            debug!(invalid_fields = field_errors.len(), "Submission has invalid input");
            SubmitOutcome::InvalidInput { field_errors }
        };

        Ok(Evaluation { validations, outcome })
    }

    /// Submit trigger: clear, validate, calculate, display.
    pub fn submit<S>(&self, surface: &mut S) -> SegitigaResult<SubmitOutcome>
    where
        S: FormSurface + ?Sized,
    {
        surface.show_result(self.feature, &ResultDisplay::default());
        for &field in self.feature.fields() {
            surface.clear_field_error(field);
        }

        let evaluation = self.evaluate(|field| surface.read_field(field))?;
        for (field, result) in &evaluation.validations {
            if let Some(reason) = result.reason() {
                surface.show_field_error(*field, reason);
            }
        }

        let display = present(self.feature, &evaluation.outcome, self.messages);
        surface.show_result(self.feature, &display);
        debug!(feature = %self.feature, computed = evaluation.outcome.is_computed(), "Form submitted");
        Ok(evaluation.outcome)
    }

    /// Reset trigger: empty every field, error and the result.
    pub fn reset<S>(&self, surface: &mut S)
    where
        S: FormSurface + ?Sized,
    {
        for &field in self.feature.fields() {
            surface.write_field(field, "");
            surface.clear_field_error(field);
        }
        surface.show_result(self.feature, &ResultDisplay::default());
        debug!(feature = %self.feature, "Form reset");
    }

    /// Edit trigger: the user changed `field`, so its stale error goes away.
    pub fn edit<S>(&self, surface: &mut S, field: FieldName)
    where
        S: FormSurface + ?Sized,
    {
        if !self.feature.contains(field) {
            trace!(feature = %self.feature, %field, "Ignoring edit of foreign field");
            return;
        }
        surface.clear_field_error(field);
    }
}

/// The two controllers of the page, sharing one calculator.
#[derive(Debug, Clone)]
pub struct FormSet {
    area: FormController,
    perimeter: FormController,
}

impl FormSet {
    pub fn new(calculator: Arc<Calculator>) -> Self {
        Self {
            area: FormController::new(Feature::Area, Arc::clone(&calculator)),
            perimeter: FormController::new(Feature::Perimeter, calculator),
        }
    }

    pub fn controller(&self, feature: Feature) -> &FormController {
        match feature {
            Feature::Area => &self.area,
            Feature::Perimeter => &self.perimeter,
        }
    }

    /// Routes an edit to the controller owning `field`.
    pub fn edit<S>(&self, surface: &mut S, field: FieldName)
    where
        S: FormSurface + ?Sized,
    {
        self.controller(field.feature()).edit(surface, field);
    }
}
