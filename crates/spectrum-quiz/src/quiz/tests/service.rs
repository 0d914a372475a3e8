use super::common::*;
use crate::quiz::domain::{QuestionId, QuizVersion, RawScores};
use crate::quiz::error::QuizError;
use crate::quiz::results::{QuizStore, SavedResult, StoreError};
use crate::quiz::service::{QuizService, QuizServiceError};
use crate::quiz::session::SessionSnapshot;
use crate::quiz::responses::ResponseLog;
use chrono::Utc;
use std::sync::Arc;

#[test]
fn answers_persist_progress_that_resume_picks_up() {
    let (service, store) = service();
    let mut session = service.start(QuizVersion::Middle).expect("session starts");

    service
        .answer(&mut session, QuestionId(1), 4)
        .expect("answer recorded");
    service
        .answer(&mut session, QuestionId(2), 2)
        .expect("answer recorded");

    let saved = store.progress().expect("progress persisted");
    assert_eq!(saved.version, QuizVersion::Middle);
    assert_eq!(saved.responses.len(), 2);

    let resumed = service
        .resume()
        .expect("resume succeeds")
        .expect("progress available");
    assert_eq!(resumed.version(), QuizVersion::Middle);
    assert_eq!(resumed.responses(), session.responses());
}

#[test]
fn start_discards_previous_progress() {
    let (service, store) = service();
    let mut session = service.start(QuizVersion::Demo).expect("session starts");
    service
        .answer(&mut session, QuestionId(1), 5)
        .expect("answer recorded");

    service.start(QuizVersion::Demo).expect("session restarts");

    assert!(store.progress().is_none());
    assert!(service.resume().expect("resume succeeds").is_none());
}

#[test]
fn submit_saves_the_report_and_clears_progress() {
    let (service, store) = service();
    let mut session = service.start(QuizVersion::Demo).expect("session starts");
    answer_keyed(&mut session, 5);
    store
        .save_progress(session.snapshot())
        .expect("progress saved");

    let report = service.submit(&session).expect("submit succeeds");

    assert_eq!(report.archetype.name, "The Sensual Flame");
    assert!(store.progress().is_none());
    let saved = store.saved(QuizVersion::Demo).expect("result saved");
    assert_eq!(saved.raw_scores, RawScores::new(6, 6, 4));
    assert_eq!(
        service
            .saved_report(QuizVersion::Demo)
            .expect("load succeeds"),
        Some(report)
    );
    assert!(store.saved(QuizVersion::Middle).is_none());
}

#[test]
fn submit_propagates_incomplete_quiz() {
    let (service, store) = service();
    let mut session = service.start(QuizVersion::Demo).expect("session starts");
    service
        .answer(&mut session, QuestionId(1), 3)
        .expect("answer recorded");

    match service.submit(&session) {
        Err(QuizServiceError::Quiz(QuizError::IncompleteQuiz { answered, total })) => {
            assert_eq!((answered, total), (1, 8));
        }
        other => panic!("expected incomplete quiz, got {other:?}"),
    }
    assert!(store.saved(QuizVersion::Demo).is_none());
}

#[test]
fn legacy_results_are_regenerated_and_stored_back() {
    let (service, store) = service();
    store
        .save_result(SavedResult {
            version: QuizVersion::Middle,
            raw_scores: RawScores::new(-18, 0, 9),
            report: None,
            saved_at: Utc::now(),
        })
        .expect("legacy result saved");

    let report = service
        .saved_report(QuizVersion::Middle)
        .expect("load succeeds")
        .expect("report regenerated");

    assert_eq!(report.normalized_scores.x, -18.0);
    assert_eq!(report.normalized_scores.z, 9.0);
    assert_eq!(report.archetype.name, "The Passionate Masculine");
    let stored = store.saved(QuizVersion::Middle).expect("result kept");
    assert_eq!(stored.report, Some(report));
}

#[test]
fn missing_results_yield_none() {
    let (service, _store) = service();
    assert!(service
        .saved_report(QuizVersion::Comprehensive)
        .expect("load succeeds")
        .is_none());
}

#[test]
fn unusable_progress_is_cleared_on_resume() {
    let (service, store) = service();
    store
        .save_progress(SessionSnapshot {
            version: QuizVersion::Demo,
            current_question: 40,
            responses: ResponseLog::new(),
            saved_at: Utc::now(),
        })
        .expect("progress saved");

    assert!(service.resume().expect("resume succeeds").is_none());
    assert!(store.progress().is_none());
}

#[test]
fn store_failures_surface_as_service_errors() {
    let service = QuizService::new(bank(), Arc::new(UnavailableStore));

    match service.start(QuizVersion::Demo) {
        Err(QuizServiceError::Store(StoreError::Unavailable(reason))) => {
            assert_eq!(reason, "disk offline");
        }
        other => panic!("expected store failure, got {other:?}"),
    }
}

#[test]
fn saving_an_external_report_keeps_unrelated_progress() {
    let (service, store) = service();
    let mut live = service.start(QuizVersion::Middle).expect("session starts");
    service
        .answer(&mut live, QuestionId(1), 4)
        .expect("answer recorded");

    let mut scored = crate::quiz::session::QuizSession::new(embedded_set(QuizVersion::Demo));
    answer_keyed(&mut scored, 5);
    let report = scored.submit().expect("demo session complete");
    service.save_report(&report).expect("report saved");

    let progress = store.progress().expect("middle progress kept");
    assert_eq!(progress.version, QuizVersion::Middle);
    assert_eq!(progress.responses.len(), 1);
    let saved = store.saved(QuizVersion::Demo).expect("result saved");
    assert_eq!(saved.report, Some(report));
}
