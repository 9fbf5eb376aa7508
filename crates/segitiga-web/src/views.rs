//! Askama view models for the calculator page.
//!
//! Besides the visible inputs, the page carries hidden inputs with each
//! field's shown error and rendered text and each feature's result, so a POST
//! for one feature leaves the other feature's page state intact.

use askama::Template;
use segitiga_core::{Feature, FieldName, FormState, ResultState};
use segitiga_types::{Locale, Messages};

pub struct FieldView {
    pub name: &'static str,
    pub label: String,
    pub value: String,
    pub error_id: &'static str,
    pub has_error: bool,
    pub error: String,
    pub error_input: String,
    pub shown_input: String,
}

pub struct FeatureView {
    pub id: &'static str,
    pub heading: &'static str,
    pub fields: Vec<FieldView>,
    pub submit_action: String,
    pub submit_label: &'static str,
    pub reset_action: String,
    pub reset_label: &'static str,
    pub result_id: String,
    pub result_text: String,
    pub result_color: &'static str,
    pub result_is_error: bool,
    pub result_input: String,
    pub result_error_input: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub lang: &'static str,
    pub title: &'static str,
    pub features: Vec<FeatureView>,
}

impl IndexTemplate {
    pub fn render_state(state: &FormState, locale: Locale) -> Self {
        let messages = locale.messages();
        Self {
            lang: locale.tag(),
            title: messages.title,
            features: Feature::ALL.iter().map(|&f| feature_view(state, f, messages)).collect(),
        }
    }
}

fn feature_view(state: &FormState, feature: Feature, messages: &'static Messages) -> FeatureView {
    let (heading, submit_label) = match feature {
        Feature::Area => (messages.area_label, messages.calculate_area),
        Feature::Perimeter => (messages.perimeter_label, messages.calculate_perimeter),
    };
    let result = state.result(feature);
    let id = feature.calculator_name();

    FeatureView {
        id,
        heading,
        fields: state
            .fields_of(feature)
            .map(|binding| field_view(binding.name, state, messages))
            .collect(),
        submit_action: format!("{id}_submit"),
        submit_label,
        reset_action: format!("{id}_reset"),
        reset_label: messages.reset,
        result_id: format!("{id}Result"),
        result_text: result.text.clone(),
        result_color: result.state.color(),
        result_is_error: result.state == ResultState::Error,
        result_input: result_input_name(feature),
        result_error_input: result_error_input_name(feature),
    }
}

fn field_view(field: FieldName, state: &FormState, messages: &Messages) -> FieldView {
    let binding = state.field(field);
    FieldView {
        name: field.as_str(),
        label: messages.field_label(field),
        value: binding.raw.clone(),
        error_id: field.error_slot_id(),
        has_error: binding.has_error(),
        error: binding.error.clone().unwrap_or_default(),
        error_input: error_input_name(field),
        shown_input: shown_input_name(field),
    }
}

/// Hidden input carrying the error currently shown for `field`.
pub fn error_input_name(field: FieldName) -> String {
    format!("{field}_error")
}

/// Hidden input carrying the text `field` had when the page was rendered.
pub fn shown_input_name(field: FieldName) -> String {
    format!("{field}_shown")
}

/// Hidden input carrying the result text of `feature`.
pub fn result_input_name(feature: Feature) -> String {
    format!("{feature}_result")
}

/// Hidden input carrying whether the result of `feature` is an error.
pub fn result_error_input_name(feature: Feature) -> String {
    format!("{feature}_result_error")
}
