use axum::{
    Form, Json,
    extract::{Path, State},
};
use segitiga_core::{
    Feature, FieldName, FormSet, FormState, FormSurface, ResultDisplay, SubmitOutcome, present,
};
use segitiga_types::SegitigaError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use tracing::{debug, instrument};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::views::{
    IndexTemplate, error_input_name, result_error_input_name, result_input_name, shown_input_name,
};

/// Button pressed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit(Feature),
    Reset(Feature),
}

impl FromStr for FormAction {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (feature, trigger) = s.rsplit_once('_').ok_or_else(|| unknown_action(s))?;
        let feature = Feature::ALL
            .into_iter()
            .find(|f| f.calculator_name() == feature)
            .ok_or_else(|| unknown_action(s))?;
        match trigger {
            "submit" => Ok(FormAction::Submit(feature)),
            "reset" => Ok(FormAction::Reset(feature)),
            _ => Err(unknown_action(s)),
        }
    }
}

fn unknown_action(action: &str) -> ApiError {
    ApiError::Validation {
        message: format!("unknown form action '{action}'"),
        field: Some("action".to_string()),
    }
}

pub async fn index(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate::render_state(&FormState::new(), state.locale)
}

/// Rebuilds the page as it was rendered, then applies the edit trigger to
/// every field whose text changed since.
fn restore_page(form: &HashMap<String, String>, forms: &FormSet) -> FormState {
    let mut page = FormState::new();

    for feature in Feature::ALL {
        let text = posted(form, &result_input_name(feature));
        let display = if posted(form, &result_error_input_name(feature)) == "true" {
            ResultDisplay::error(text)
        } else {
            ResultDisplay::ok(text)
        };
        page.show_result(feature, &display);
    }

    for field in FieldName::ALL {
        page.type_text(field, posted(form, field.as_str()));
        let error = posted(form, &error_input_name(field));
        if !error.is_empty() {
            page.show_field_error(field, error);
        }
        let edited =
            form.get(&shown_input_name(field)).is_some_and(|shown| *shown != page.read_field(field));
        if edited {
            forms.edit(&mut page, field);
        }
    }

    page
}

fn posted<'a>(form: &'a HashMap<String, String>, name: &str) -> &'a str {
    form.get(name).map(String::as_str).unwrap_or_default()
}

/// Runs the pressed button's trigger against the posted page.
#[instrument(skip_all)]
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> ApiResult<IndexTemplate> {
    let action: FormAction = form
        .get("action")
        .ok_or_else(|| ApiError::Validation {
            message: "missing form action".to_string(),
            field: Some("action".to_string()),
        })?
        .parse()?;

    let mut page = restore_page(&form, &state.forms);

    debug!(?action, "Handling form action");
    match action {
        FormAction::Submit(feature) => {
            state.forms.controller(feature).submit(&mut page)?;
        }
        FormAction::Reset(feature) => state.forms.controller(feature).reset(&mut page),
    }

    Ok(IndexTemplate::render_state(&page, state.locale))
}

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// Raw field text keyed by wire name; numbers are accepted as well.
    #[serde(default)]
    pub fields: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CalculateResponse {
    pub calculator: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub message: String,
    pub field_errors: BTreeMap<String, String>,
}

/// JSON counterpart of a form submit.
#[instrument(skip_all, fields(calculator = %calculator))]
pub async fn calculate(
    State(state): State<AppState>,
    Path(calculator): Path<String>,
    Json(request): Json<CalculateRequest>,
) -> ApiResult<Json<CalculateResponse>> {
    let feature = Feature::ALL
        .into_iter()
        .find(|f| f.calculator_name() == calculator)
        .ok_or_else(|| SegitigaError::UnknownCalculator { name: calculator.clone() })?;

    let mut raw = HashMap::new();
    for (name, value) in &request.fields {
        let field = FieldName::parse(name)
            .filter(|field| feature.contains(*field))
            .ok_or_else(|| SegitigaError::UnknownField { name: name.clone() })?;
        raw.insert(field, json_to_raw(value));
    }

    let controller = state.forms.controller(feature);
    let evaluation = controller.evaluate(|field| raw.get(&field).cloned().unwrap_or_default())?;
    let display = present(feature, &evaluation.outcome, controller.messages());

    let (status, value, field_errors) = match evaluation.outcome {
        SubmitOutcome::Computed { value } => ("success", Some(value), BTreeMap::new()),
        SubmitOutcome::Rejected { .. } => ("failure", None, BTreeMap::new()),
        SubmitOutcome::InvalidInput { field_errors } => (
            "invalid",
            None,
            field_errors.into_iter().map(|(f, reason)| (f.as_str().to_string(), reason)).collect(),
        ),
    };

    Ok(Json(CalculateResponse {
        calculator,
        status,
        value,
        message: display.text,
        field_errors,
    }))
}

fn json_to_raw(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

pub async fn health() -> &'static str {
    "OK"
}
