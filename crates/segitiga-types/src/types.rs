use serde::{Deserialize, Serialize};
use std::fmt;

/// A finite number strictly greater than zero.
///
/// Calculators only accept this type, so a value that has not passed input
/// validation can never reach them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PositiveNumber(f64);

impl PositiveNumber {
    /// Wraps `value` if it is finite and `> 0`.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// The wrapped value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for PositiveNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PositiveNumber> for f64 {
    fn from(value: PositiveNumber) -> Self {
        value.0
    }
}

/// Outcome of validating one raw field value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// The text parsed to a positive finite number.
    Valid(PositiveNumber),
    /// The text was rejected; `reason` is the user-facing message.
    Invalid {
        /// Message shown next to the field.
        reason: String,
    },
}

impl ValidationResult {
    /// Returns the validated number, if any.
    pub const fn value(&self) -> Option<PositiveNumber> {
        match self {
            ValidationResult::Valid(value) => Some(*value),
            ValidationResult::Invalid { .. } => None,
        }
    }

    /// Returns the rejection message, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid { reason } => Some(reason),
        }
    }

    /// `true` for [`ValidationResult::Valid`].
    pub const fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

/// Outcome of running a calculator over validated inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalculationOutcome {
    /// The computed value.
    Success {
        /// Result of the calculation.
        value: f64,
    },
    /// The inputs were individually valid but cannot be combined.
    Failure {
        /// User-facing explanation.
        reason: String,
    },
}

impl CalculationOutcome {
    /// Shorthand for a successful outcome.
    pub const fn success(value: f64) -> Self {
        CalculationOutcome::Success { value }
    }

    /// Shorthand for a failed outcome.
    pub fn failure(reason: impl Into<String>) -> Self {
        CalculationOutcome::Failure { reason: reason.into() }
    }

    /// The computed value on success.
    pub const fn value(&self) -> Option<f64> {
        match self {
            CalculationOutcome::Success { value } => Some(*value),
            CalculationOutcome::Failure { .. } => None,
        }
    }

    /// `true` for [`CalculationOutcome::Success`].
    pub const fn is_success(&self) -> bool {
        matches!(self, CalculationOutcome::Success { .. })
    }
}

/// Every input field known to the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldName {
    /// Triangle base (area form).
    #[serde(rename = "base")]
    Base,
    /// Triangle height (area form).
    #[serde(rename = "height")]
    Height,
    /// First side (perimeter form).
    #[serde(rename = "sideA")]
    SideA,
    /// Second side (perimeter form).
    #[serde(rename = "sideB")]
    SideB,
    /// Third side (perimeter form).
    #[serde(rename = "sideC")]
    SideC,
}

impl FieldName {
    /// All fields, area form first.
    pub const ALL: [FieldName; 5] =
        [FieldName::Base, FieldName::Height, FieldName::SideA, FieldName::SideB, FieldName::SideC];

    /// Name used in markup and request payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::Base => "base",
            FieldName::Height => "height",
            FieldName::SideA => "sideA",
            FieldName::SideB => "sideB",
            FieldName::SideC => "sideC",
        }
    }

    /// Id of the element holding this field's error message.
    pub const fn error_slot_id(self) -> &'static str {
        match self {
            FieldName::Base => "base-error",
            FieldName::Height => "height-error",
            FieldName::SideA => "sideA-error",
            FieldName::SideB => "sideB-error",
            FieldName::SideC => "sideC-error",
        }
    }

    /// Looks a field up by its wire name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// The feature this field belongs to.
    pub const fn feature(self) -> Feature {
        match self {
            FieldName::Base | FieldName::Height => Feature::Area,
            FieldName::SideA | FieldName::SideB | FieldName::SideC => Feature::Perimeter,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two independent calculator forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Area from base and height.
    Area,
    /// Perimeter from three sides.
    Perimeter,
}

impl Feature {
    /// Both features, in page order.
    pub const ALL: [Feature; 2] = [Feature::Area, Feature::Perimeter];

    /// Fields the feature reads on submit, in display order.
    pub const fn fields(self) -> &'static [FieldName] {
        match self {
            Feature::Area => &[FieldName::Base, FieldName::Height],
            Feature::Perimeter => &[FieldName::SideA, FieldName::SideB, FieldName::SideC],
        }
    }

    /// Registry name of the calculator backing this feature.
    pub const fn calculator_name(self) -> &'static str {
        match self {
            Feature::Area => "area",
            Feature::Perimeter => "perimeter",
        }
    }

    /// Whether `field` is one of this feature's inputs.
    pub fn contains(self, field: FieldName) -> bool {
        field.feature() == self
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.calculator_name())
    }
}

/// Current text and displayed error of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldBinding {
    /// Which field this is.
    pub name: FieldName,
    /// Raw text as typed.
    pub raw: String,
    /// Error message currently shown, if any.
    pub error: Option<String>,
}

impl FieldBinding {
    /// An empty field with no error.
    pub const fn new(name: FieldName) -> Self {
        Self { name, raw: String::new(), error: None }
    }

    /// A field pre-filled with `raw`.
    pub fn with_raw(name: FieldName, raw: impl Into<String>) -> Self {
        Self { name, raw: raw.into(), error: None }
    }

    /// Whether an error message is visible.
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Presentation flag of the result slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultState {
    /// Neutral/success presentation.
    #[default]
    Ok,
    /// Error presentation.
    Error,
}

impl ResultState {
    /// Text color used for this state.
    pub const fn color(self) -> &'static str {
        match self {
            ResultState::Ok => "#2e7d32",
            ResultState::Error => "#e74c3c",
        }
    }
}

/// What the result slot shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResultDisplay {
    /// Result or summary text; empty when cleared.
    pub text: String,
    /// Presentation flag.
    pub state: ResultState,
}

impl ResultDisplay {
    /// A success/neutral message.
    pub fn ok(text: impl Into<String>) -> Self {
        Self { text: text.into(), state: ResultState::Ok }
    }

    /// An error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), state: ResultState::Error }
    }

    /// Whether nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
