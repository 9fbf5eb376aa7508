use segitiga_types::{Feature, Messages, ResultDisplay};

use crate::controller::SubmitOutcome;

/// Maps a submit outcome to what the feature's result slot shows.
pub fn present(feature: Feature, outcome: &SubmitOutcome, messages: &Messages) -> ResultDisplay {
    match outcome {
        SubmitOutcome::Computed { value } => ResultDisplay::ok(match feature {
            Feature::Area => messages.area_result(*value),
            Feature::Perimeter => messages.perimeter_result(*value),
        }),
        SubmitOutcome::Rejected { reason } => ResultDisplay::error(reason.as_str()),
        SubmitOutcome::InvalidInput { .. } => ResultDisplay::error(messages.correct_invalid_input),
    }
}
