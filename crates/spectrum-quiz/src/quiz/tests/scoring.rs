use super::common::*;
use crate::quiz::archetypes::{classify, ArchetypeKey, AxisCategory};
use crate::quiz::domain::{Coordinate, QuestionId, QuizVersion, RawScores};
use crate::quiz::responses::ResponseLog;
use crate::quiz::scoring::{compute_raw_scores, normalize, ScoringEngine};
use crate::quiz::session::QuizSession;

#[test]
fn strongly_agreeing_with_every_forward_x_item_reaches_the_canonical_max() {
    let set = forward_x_middle_set();
    let mut log = ResponseLog::new();
    for id in 1..=12 {
        log.record(QuestionId(id), likert(5));
    }

    let card = ScoringEngine::new(&set).score(&log);

    assert_eq!(card.raw, RawScores::new(24, 0, 0));
    assert_eq!(card.normalized, Coordinate::new(24.0, 0.0, 0.0));
    let archetype = classify(&card.normalized).expect("catalog match");
    assert_eq!(
        archetype.key,
        ArchetypeKey::new(AxisCategory::High, AxisCategory::Balanced, AxisCategory::Balanced)
    );
    assert_eq!(archetype.name, "The Balanced Feminine");
}

#[test]
fn bundled_demo_set_scores_keyed_answers_per_axis() {
    let mut session = QuizSession::new(embedded_set(QuizVersion::Demo));
    answer_keyed(&mut session, 5);

    let card = session.score();

    // Demo carries three X, three Y, and two Z statements over a divisor of six.
    assert_eq!(card.raw, RawScores::new(6, 6, 4));
    assert_eq!(card.normalized.x, 24.0);
    assert_eq!(card.normalized.y, 24.0);
    assert!((card.normalized.z - 16.0).abs() < 1e-9);
    assert_eq!(classify(&card.normalized).expect("match").name, "The Sensual Flame");
}

#[test]
fn proportional_patterns_normalize_identically_across_versions() {
    let mut middle = QuizSession::new(embedded_set(QuizVersion::Middle));
    let mut comprehensive = QuizSession::new(embedded_set(QuizVersion::Comprehensive));
    answer_keyed(&mut middle, 4);
    answer_keyed(&mut comprehensive, 4);

    let middle_card = middle.score();
    let comprehensive_card = comprehensive.score();

    assert_ne!(middle_card.raw, comprehensive_card.raw);
    assert_eq!(middle_card.normalized, comprehensive_card.normalized);
    assert_eq!(middle_card.normalized, Coordinate::new(12.0, 12.0, 12.0));
    assert_eq!(
        classify(&middle_card.normalized).expect("match").key,
        classify(&comprehensive_card.normalized).expect("match").key
    );
}

#[test]
fn equal_normalized_scores_from_different_divisors_classify_the_same() {
    let demo = embedded_set(QuizVersion::Demo);
    let comprehensive = embedded_set(QuizVersion::Comprehensive);

    // 3 / 6 and 20 / 40 both land on 12.
    let from_demo = normalize(RawScores::new(3, -3, 0), &demo);
    let from_comprehensive = normalize(RawScores::new(20, -20, 0), &comprehensive);

    assert_eq!(from_demo, from_comprehensive);
    assert_eq!(
        classify(&from_demo).expect("match").name,
        classify(&from_comprehensive).expect("match").name
    );
}

#[test]
fn neutral_answers_land_on_the_origin() {
    let mut session = QuizSession::new(embedded_set(QuizVersion::Middle));
    answer_keyed(&mut session, 3);

    let card = session.score();
    assert_eq!(card.raw, RawScores::new(0, 0, 0));
    assert_eq!(classify(&card.normalized).expect("match").name, "The Harmonious Soul");
}

#[test]
fn raw_scores_ignore_answers_for_other_versions() {
    let demo = embedded_set(QuizVersion::Demo);
    let mut log = ResponseLog::new();
    log.record(QuestionId(1), likert(5));
    log.record(QuestionId(40), likert(5));

    assert_eq!(compute_raw_scores(&log, &demo), RawScores::new(2, 0, 0));
}
