use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{FieldName, SegitigaError};

/// Language of user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Bahasa Indonesia.
    #[default]
    Id,
    /// English.
    En,
}

impl Locale {
    /// Message table for this locale.
    pub const fn messages(self) -> &'static Messages {
        match self {
            Locale::Id => &Messages::INDONESIAN,
            Locale::En => &Messages::ENGLISH,
        }
    }

    /// BCP 47 tag, used for the page `lang` attribute.
    pub const fn tag(self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = SegitigaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "id-id" | "indonesian" => Ok(Locale::Id),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            other => Err(SegitigaError::Configuration {
                message: format!("unsupported locale '{other}'"),
                setting: Some("locale".to_string()),
            }),
        }
    }
}

/// Every user-facing string the forms can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Per-field message for text that is not a positive number.
    pub invalid_input: &'static str,
    /// Summary shown in the result slot when any field is invalid.
    pub correct_invalid_input: &'static str,
    /// Perimeter failure when the sides violate the triangle inequality.
    pub invalid_triangle: &'static str,
    /// Failure when valid inputs produce a result too large to represent.
    pub result_out_of_range: &'static str,
    /// Label preceding the computed area.
    pub area_label: &'static str,
    /// Label preceding the computed perimeter.
    pub perimeter_label: &'static str,
    /// Page heading.
    pub title: &'static str,
    /// Submit button caption for the area form.
    pub calculate_area: &'static str,
    /// Submit button caption for the perimeter form.
    pub calculate_perimeter: &'static str,
    /// Reset button caption.
    pub reset: &'static str,
    /// Label of the base field.
    pub base_label: &'static str,
    /// Label of the height field.
    pub height_label: &'static str,
    /// Label prefix of the side fields.
    pub side_label: &'static str,
}

impl Messages {
    /// Indonesian table.
    pub const INDONESIAN: Messages = Messages {
        invalid_input: "Input harus angka positif.",
        correct_invalid_input: "Harap perbaiki input yang salah.",
        invalid_triangle: "Sisi-sisi ini tidak dapat membentuk segitiga yang valid.",
        result_out_of_range: "Hasil terlalu besar untuk dihitung.",
        area_label: "Luas Segitiga",
        perimeter_label: "Keliling Segitiga",
        title: "Kalkulator Segitiga",
        calculate_area: "Hitung Luas",
        calculate_perimeter: "Hitung Keliling",
        reset: "Reset",
        base_label: "Alas",
        height_label: "Tinggi",
        side_label: "Sisi",
    };

    /// English table.
    pub const ENGLISH: Messages = Messages {
        invalid_input: "Input must be a positive number.",
        correct_invalid_input: "Please correct the invalid input.",
        invalid_triangle: "These sides cannot form a valid triangle.",
        result_out_of_range: "The result is too large to calculate.",
        area_label: "Triangle area",
        perimeter_label: "Triangle perimeter",
        title: "Triangle Calculator",
        calculate_area: "Calculate Area",
        calculate_perimeter: "Calculate Perimeter",
        reset: "Reset",
        base_label: "Base",
        height_label: "Height",
        side_label: "Side",
    };

    /// `"<label>: <value>"` for the area result.
    pub fn area_result(&self, value: f64) -> String {
        format!("{}: {}", self.area_label, format_number(value))
    }

    /// `"<label>: <value>"` for the perimeter result.
    pub fn perimeter_result(&self, value: f64) -> String {
        format!("{}: {}", self.perimeter_label, format_number(value))
    }

    /// Human label of an input field.
    pub fn field_label(&self, field: FieldName) -> String {
        match field {
            FieldName::Base => self.base_label.to_string(),
            FieldName::Height => self.height_label.to_string(),
            FieldName::SideA => format!("{} A", self.side_label),
            FieldName::SideB => format!("{} B", self.side_label),
            FieldName::SideC => format!("{} C", self.side_label),
        }
    }
}

/// Formats `value` the way JavaScript's `Number#toString` does.
///
/// Integral values print without a fraction, magnitudes below `1e-6` or at
/// least `1e21` switch to exponent notation (`5e-7`, `1e+21`).
pub fn format_number(value: f64) -> String {
    ryu_js::Buffer::new().format(value).to_string()
}
