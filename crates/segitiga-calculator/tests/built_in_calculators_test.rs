use segitiga_calculator::built_in::area::AreaCalculator;
use segitiga_calculator::built_in::perimeter::PerimeterCalculator;
use segitiga_calculator::plugin::CalculatorPlugin;
use segitiga_calculator::{Calculator, ValidatedInputs, compute_area, compute_perimeter};
use segitiga_types::{CalculationOutcome, FieldName, Locale, PositiveNumber, SegitigaError};

fn pos(value: f64) -> PositiveNumber {
    PositiveNumber::new(value).unwrap()
}

fn calculate_with<C: CalculatorPlugin>(
    calculator: C,
    inputs: &[(FieldName, f64)],
) -> CalculationOutcome {
    let inputs: ValidatedInputs = inputs.iter().map(|(k, v)| (*k, pos(*v))).collect();
    calculator.calculate(&inputs).unwrap()
}

#[test]
fn area_is_half_base_times_height() {
    assert_eq!(compute_area(pos(4.0), pos(5.0)), CalculationOutcome::success(10.0));
    assert_eq!(compute_area(pos(3.0), pos(3.0)), CalculationOutcome::success(4.5));
}

#[test]
fn area_plugin_reads_base_and_height() {
    let outcome = calculate_with(
        AreaCalculator::default(),
        &[(FieldName::Base, 6.0), (FieldName::Height, 2.5)],
    );
    assert_eq!(outcome.value(), Some(7.5));
}

#[test]
fn area_overflow_is_reported_as_failure() {
    let outcome = compute_area(pos(1e200), pos(1e200));
    assert_eq!(outcome, CalculationOutcome::failure("Hasil terlalu besar untuk dihitung."));
    assert_eq!(outcome.value(), None);
}

#[test]
fn area_keeps_tiny_and_huge_finite_results() {
    assert_eq!(compute_area(pos(0.001), pos(0.001)).value(), Some(5e-7));
    assert_eq!(compute_area(pos(2e21), pos(1.0)).value(), Some(1e21));
}

#[test]
fn area_overflow_message_follows_locale() {
    let outcome = calculate_with(
        AreaCalculator::new(Locale::En),
        &[(FieldName::Base, 1e200), (FieldName::Height, 1e200)],
    );
    assert_eq!(outcome, CalculationOutcome::failure("The result is too large to calculate."));
}

#[test]
fn perimeter_overflow_is_reported_as_failure() {
    let outcome = compute_perimeter(pos(1e308), pos(1e308), pos(1e308));
    assert_eq!(outcome, CalculationOutcome::failure("Hasil terlalu besar untuk dihitung."));
}

#[test]
fn perimeter_of_valid_triangle_is_sum_of_sides() {
    assert_eq!(compute_perimeter(pos(3.0), pos(4.0), pos(5.0)), CalculationOutcome::success(12.0));
}

#[test]
fn perimeter_rejects_impossible_triangle() {
    let outcome = compute_perimeter(pos(1.0), pos(1.0), pos(5.0));
    assert_eq!(
        outcome,
        CalculationOutcome::failure("Sisi-sisi ini tidak dapat membentuk segitiga yang valid.")
    );
}

#[test]
fn perimeter_rejects_degenerate_triangle() {
    assert!(!compute_perimeter(pos(2.0), pos(2.0), pos(4.0)).is_success());
    assert!(!compute_perimeter(pos(4.0), pos(2.0), pos(2.0)).is_success());
}

#[test]
fn perimeter_failure_follows_locale() {
    let outcome = calculate_with(
        PerimeterCalculator::new(Locale::En),
        &[(FieldName::SideA, 1.0), (FieldName::SideB, 2.0), (FieldName::SideC, 3.0)],
    );
    assert_eq!(outcome, CalculationOutcome::failure("These sides cannot form a valid triangle."));
}

#[test]
fn plugin_reports_missing_input() {
    let inputs: ValidatedInputs = [(FieldName::Base, pos(4.0))].into_iter().collect();
    let err = AreaCalculator::default().calculate(&inputs).unwrap_err();
    assert_eq!(
        err,
        SegitigaError::MissingInput { calculator: "area".to_string(), field: "height".to_string() }
    );
}

#[test]
fn calculator_dispatches_by_name() {
    let calculator = Calculator::new();
    assert_eq!(calculator.names(), vec!["area", "perimeter"]);
    assert_eq!(
        calculator.required_fields("perimeter").unwrap(),
        &[FieldName::SideA, FieldName::SideB, FieldName::SideC]
    );

    let inputs: ValidatedInputs =
        [(FieldName::Base, pos(4.0)), (FieldName::Height, pos(5.0))].into_iter().collect();
    assert_eq!(calculator.calculate("area", &inputs).unwrap().value(), Some(10.0));
}

#[test]
fn calculator_rejects_unknown_name() {
    let err = Calculator::new().calculate("volume", &ValidatedInputs::new()).unwrap_err();
    assert_eq!(err, SegitigaError::UnknownCalculator { name: "volume".to_string() });
}
