//! Submit, reset and edit behaviour of the per-feature form controllers.

use segitiga_core::{
    Calculator, Feature, FieldName, FormController, FormSet, FormState, FormSurface, Locale,
    ResultDisplay, ResultState, SubmitOutcome,
};
use std::sync::Arc;

const INVALID_INPUT: &str = "Input harus angka positif.";
const CORRECT_INPUT: &str = "Harap perbaiki input yang salah.";

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn controller(feature: Feature) -> FormController {
    init_tracing();
    FormController::new(feature, Arc::new(Calculator::new()))
}

#[test]
fn area_submit_shows_result() {
    let area = controller(Feature::Area);
    let mut state =
        FormState::new().with_raw(FieldName::Base, "4").with_raw(FieldName::Height, "5");

    let outcome = area.submit(&mut state).unwrap();

    assert_eq!(outcome, SubmitOutcome::Computed { value: 10.0 });
    assert_eq!(state.result(Feature::Area), &ResultDisplay::ok("Luas Segitiga: 10"));
    assert_eq!(state.error(FieldName::Base), None);
    assert_eq!(state.error(FieldName::Height), None);
}

#[test]
fn tiny_area_is_printed_in_exponent_notation() {
    let area = controller(Feature::Area);
    let mut state =
        FormState::new().with_raw(FieldName::Base, "0.001").with_raw(FieldName::Height, "0.001");

    area.submit(&mut state).unwrap();

    assert_eq!(state.result(Feature::Area), &ResultDisplay::ok("Luas Segitiga: 5e-7"));
}

#[test]
fn overflowing_area_is_rejected_in_error_state() {
    let area = controller(Feature::Area);
    let mut state =
        FormState::new().with_raw(FieldName::Base, "1e200").with_raw(FieldName::Height, "1e200");

    let outcome = area.submit(&mut state).unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected { reason: "Hasil terlalu besar untuk dihitung.".to_string() }
    );
    assert_eq!(state.result(Feature::Area).state, ResultState::Error);
    assert_eq!(state.error(FieldName::Base), None);
}

#[test]
fn one_invalid_field_shows_generic_error_and_only_that_field_error() {
    let area = controller(Feature::Area);
    let mut state =
        FormState::new().with_raw(FieldName::Base, "-1").with_raw(FieldName::Height, "5");
    state.show_field_error(FieldName::Height, "stale");

    let outcome = area.submit(&mut state).unwrap();

    assert!(matches!(outcome, SubmitOutcome::InvalidInput { .. }));
    assert_eq!(state.result(Feature::Area), &ResultDisplay::error(CORRECT_INPUT));
    assert_eq!(state.error(FieldName::Base), Some(INVALID_INPUT));
    assert_eq!(state.error(FieldName::Height), None);
}

#[test]
fn every_invalid_field_gets_its_own_error() {
    let perimeter = controller(Feature::Perimeter);
    let mut state = FormState::new()
        .with_raw(FieldName::SideA, "abc")
        .with_raw(FieldName::SideB, "3")
        .with_raw(FieldName::SideC, "0");

    let outcome = perimeter.submit(&mut state).unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::InvalidInput {
            field_errors: vec![
                (FieldName::SideA, INVALID_INPUT.to_string()),
                (FieldName::SideC, INVALID_INPUT.to_string()),
            ]
        }
    );
    assert_eq!(state.error(FieldName::SideB), None);
}

#[test]
fn perimeter_submit_with_valid_triangle() {
    let perimeter = controller(Feature::Perimeter);
    let mut state = FormState::new()
        .with_raw(FieldName::SideA, "3")
        .with_raw(FieldName::SideB, "4")
        .with_raw(FieldName::SideC, "5");

    assert!(perimeter.submit(&mut state).unwrap().is_computed());
    assert_eq!(state.result(Feature::Perimeter), &ResultDisplay::ok("Keliling Segitiga: 12"));
}

#[test]
fn degenerate_triangle_is_reported_in_result_slot() {
    let perimeter = controller(Feature::Perimeter);
    let mut state = FormState::new()
        .with_raw(FieldName::SideA, "2")
        .with_raw(FieldName::SideB, "2")
        .with_raw(FieldName::SideC, "4");

    let outcome = perimeter.submit(&mut state).unwrap();

    assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
    let result = state.result(Feature::Perimeter);
    assert_eq!(result.text, "Sisi-sisi ini tidak dapat membentuk segitiga yang valid.");
    assert_eq!(result.state, ResultState::Error);
    for field in Feature::Perimeter.fields() {
        assert_eq!(state.error(*field), None);
    }
}

#[test]
fn success_after_error_restores_ok_state() {
    let area = controller(Feature::Area);
    let mut state = FormState::new().with_raw(FieldName::Base, "x");
    area.submit(&mut state).unwrap();
    assert_eq!(state.result(Feature::Area).state, ResultState::Error);

    state.type_text(FieldName::Base, "2");
    state.type_text(FieldName::Height, "3");
    area.submit(&mut state).unwrap();
    assert_eq!(state.result(Feature::Area), &ResultDisplay::ok("Luas Segitiga: 3"));
}

#[test]
fn reset_clears_everything_and_is_idempotent() {
    let area = controller(Feature::Area);
    let mut state =
        FormState::new().with_raw(FieldName::Base, "-1").with_raw(FieldName::Height, "5");
    area.submit(&mut state).unwrap();

    area.reset(&mut state);
    let once = state.clone();
    area.reset(&mut state);

    assert_eq!(state, once);
    assert_eq!(state, FormState::new());
}

#[test]
fn reset_leaves_the_other_feature_alone() {
    let forms = FormSet::new(Arc::new(Calculator::new()));
    let mut state = FormState::new()
        .with_raw(FieldName::SideA, "3")
        .with_raw(FieldName::SideB, "4")
        .with_raw(FieldName::SideC, "5")
        .with_raw(FieldName::Base, "9");
    forms.controller(Feature::Perimeter).submit(&mut state).unwrap();

    forms.controller(Feature::Area).reset(&mut state);

    assert_eq!(state.read_field(FieldName::Base), "");
    assert_eq!(state.read_field(FieldName::SideA), "3");
    assert_eq!(state.result(Feature::Perimeter).text, "Keliling Segitiga: 12");
}

#[test]
fn edit_clears_only_the_edited_field_error() {
    let forms = FormSet::new(Arc::new(Calculator::new()));
    let mut state = FormState::new();
    forms.controller(Feature::Area).submit(&mut state).unwrap();
    assert_eq!(state.error(FieldName::Base), Some(INVALID_INPUT));
    assert_eq!(state.error(FieldName::Height), Some(INVALID_INPUT));

    state.type_text(FieldName::Base, "4");
    forms.edit(&mut state, FieldName::Base);

    assert_eq!(state.error(FieldName::Base), None);
    assert_eq!(state.error(FieldName::Height), Some(INVALID_INPUT));
    assert_eq!(state.result(Feature::Area), &ResultDisplay::error(CORRECT_INPUT));
}

#[test]
fn edit_of_foreign_field_is_ignored() {
    let area = controller(Feature::Area);
    let mut state = FormState::new();
    state.show_field_error(FieldName::SideA, "keep");

    area.edit(&mut state, FieldName::SideA);

    assert_eq!(state.error(FieldName::SideA), Some("keep"));
}

#[test]
fn english_locale_follows_calculator() {
    let area = FormController::new(Feature::Area, Arc::new(Calculator::with_locale(Locale::En)));
    let mut state = FormState::new().with_raw(FieldName::Base, "1").with_raw(FieldName::Height, "");

    area.submit(&mut state).unwrap();

    assert_eq!(state.error(FieldName::Height), Some("Input must be a positive number."));
    assert_eq!(state.result(Feature::Area).text, "Please correct the invalid input.");
}

/// Records every call so the order of surface writes can be checked.
#[derive(Default)]
struct RecordingSurface {
    calls: Vec<String>,
}

impl FormSurface for RecordingSurface {
    fn read_field(&self, field: FieldName) -> String {
        match field {
            FieldName::Base => "4".to_string(),
            _ => "5".to_string(),
        }
    }

    fn write_field(&mut self, field: FieldName, text: &str) {
        self.calls.push(format!("write {field} {text:?}"));
    }

    fn show_field_error(&mut self, field: FieldName, message: &str) {
        self.calls.push(format!("error {field} {message}"));
    }

    fn clear_field_error(&mut self, field: FieldName) {
        self.calls.push(format!("clear {field}"));
    }

    fn show_result(&mut self, feature: Feature, display: &ResultDisplay) {
        self.calls.push(format!("result {feature} {:?}", display.text));
    }
}

#[test]
fn submit_clears_slots_before_showing_result() {
    let area = controller(Feature::Area);
    let mut surface = RecordingSurface::default();

    area.submit(&mut surface).unwrap();

    assert_eq!(
        surface.calls,
        vec![
            "result area \"\"",
            "clear base",
            "clear height",
            "result area \"Luas Segitiga: 10\"",
        ]
    );
}

#[test]
fn controller_works_through_trait_object() {
    let area = controller(Feature::Area);
    let mut surface = RecordingSurface::default();
    let dynamic: &mut dyn FormSurface = &mut surface;

    area.reset(dynamic);

    assert_eq!(surface.calls.last().map(String::as_str), Some("result area \"\""));
    assert!(surface.calls.contains(&"write base \"\"".to_string()));
}
