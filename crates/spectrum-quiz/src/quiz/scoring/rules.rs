use super::super::domain::{Axis, LikertValue, RawScores};
use super::super::questions::{QuestionItem, QuestionSet};
use super::super::responses::ResponseLog;
use tracing::debug;

/// Signed contribution of one answered question; reverse-keyed items flip the sign.
pub(crate) fn contribution(item: &QuestionItem, value: LikertValue) -> i32 {
    let score = value.score();
    if item.reverse {
        -score
    } else {
        score
    }
}

/// Sum of contributions for one axis. Unanswered questions add nothing.
pub(crate) fn axis_total(set: &QuestionSet, log: &ResponseLog, axis: Axis) -> i32 {
    set.items_for_axis(axis)
        .filter_map(|item| log.get(item.id).map(|value| contribution(item, value)))
        .sum()
}

pub(crate) fn raw_scores(set: &QuestionSet, log: &ResponseLog) -> RawScores {
    let stray = log
        .iter()
        .filter(|response| set.get(response.question_id).is_none())
        .count();
    if stray > 0 {
        debug!(
            version = %set.version(),
            stray,
            "ignoring responses for questions outside the active set"
        );
    }

    RawScores::new(
        axis_total(set, log, Axis::X),
        axis_total(set, log, Axis::Y),
        axis_total(set, log, Axis::Z),
    )
}
