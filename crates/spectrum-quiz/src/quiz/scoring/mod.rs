mod rules;

use super::domain::{Coordinate, QuizVersion, RawScores, CANONICAL_MAX};
use super::questions::QuestionSet;
use super::responses::ResponseLog;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer bound to the active question set.
pub struct ScoringEngine<'a> {
    set: &'a QuestionSet,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(set: &'a QuestionSet) -> Self {
        Self { set }
    }

    pub fn version(&self) -> QuizVersion {
        self.set.version()
    }

    pub fn raw_scores(&self, log: &ResponseLog) -> RawScores {
        rules::raw_scores(self.set, log)
    }

    pub fn normalize(&self, raw: RawScores) -> Coordinate {
        normalize(raw, self.set)
    }

    pub fn score(&self, log: &ResponseLog) -> ScoreCard {
        let raw = self.raw_scores(log);
        let normalized = self.normalize(raw);
        debug!(
            version = %self.version(),
            answered = log.len(),
            raw_x = raw.x,
            raw_y = raw.y,
            raw_z = raw.z,
            "scored response log"
        );

        ScoreCard {
            version: self.version(),
            raw,
            normalized,
        }
    }
}

/// Raw and canonical scores for one scoring pass, tagged with the version that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub version: QuizVersion,
    pub raw: RawScores,
    pub normalized: Coordinate,
}

pub fn compute_raw_scores(log: &ResponseLog, set: &QuestionSet) -> RawScores {
    rules::raw_scores(set, log)
}

/// Rescale raw scores onto the canonical +-24 range using the set's per-axis maximum.
pub fn normalize(raw: RawScores, set: &QuestionSet) -> Coordinate {
    let divisor = f64::from(set.max_per_axis());
    raw.map(|_, score| f64::from(score) / divisor * CANONICAL_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::domain::{Axis, LikertValue, QuestionId};
    use crate::quiz::questions::QuestionItem;

    fn set() -> QuestionSet {
        let items = vec![
            QuestionItem {
                id: QuestionId(1),
                text: "x forward".to_string(),
                axis: Axis::X,
                reverse: false,
            },
            QuestionItem {
                id: QuestionId(2),
                text: "x reversed".to_string(),
                axis: Axis::X,
                reverse: true,
            },
            QuestionItem {
                id: QuestionId(3),
                text: "y forward".to_string(),
                axis: Axis::Y,
                reverse: false,
            },
        ];
        QuestionSet::new(QuizVersion::Demo, items).expect("valid set")
    }

    fn likert(value: i64) -> LikertValue {
        LikertValue::new(value).expect("valid likert")
    }

    #[test]
    fn reverse_keyed_strong_agreement_subtracts_two() {
        let set = set();
        let mut log = ResponseLog::new();
        log.record(QuestionId(2), likert(5));

        let raw = compute_raw_scores(&log, &set);
        assert_eq!(raw, RawScores::new(-2, 0, 0));
    }

    #[test]
    fn neutral_answers_contribute_nothing_either_way() {
        let set = set();
        let mut log = ResponseLog::new();
        log.record(QuestionId(1), LikertValue::NEUTRAL);
        log.record(QuestionId(2), LikertValue::NEUTRAL);

        assert_eq!(compute_raw_scores(&log, &set), RawScores::new(0, 0, 0));
    }

    #[test]
    fn partial_logs_score_only_answered_questions() {
        let set = set();
        let mut log = ResponseLog::new();
        log.record(QuestionId(1), likert(4));
        log.record(QuestionId(3), likert(1));
        log.record(QuestionId(99), likert(5));

        assert_eq!(compute_raw_scores(&log, &set), RawScores::new(1, -2, 0));
    }

    #[test]
    fn normalization_uses_the_set_divisor() {
        let set = set();
        let normalized = normalize(RawScores::new(6, -3, 0), &set);

        assert_eq!(normalized, Coordinate::new(24.0, -12.0, 0.0));
    }

    #[test]
    fn score_card_is_reproducible() {
        let set = set();
        let mut log = ResponseLog::new();
        log.record(QuestionId(1), likert(5));
        log.record(QuestionId(2), likert(2));
        log.record(QuestionId(3), likert(4));
        let engine = ScoringEngine::new(&set);

        let first = engine.score(&log);
        let second = engine.score(&log);

        assert_eq!(first.raw, second.raw);
        assert_eq!(first.normalized.x.to_bits(), second.normalized.x.to_bits());
        assert_eq!(first.normalized.y.to_bits(), second.normalized.y.to_bits());
        assert_eq!(first.normalized.z.to_bits(), second.normalized.z.to_bits());
        assert_eq!(first.version, QuizVersion::Demo);
    }
}
