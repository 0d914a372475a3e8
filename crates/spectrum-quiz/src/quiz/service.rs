use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{LikertValue, QuestionId, QuizVersion};
use super::error::QuizError;
use super::questions::QuestionBank;
use super::report::QuizReport;
use super::results::{QuizStore, SavedResult, StoreError};
use super::session::QuizSession;

/// Service composing the question bank with result and progress storage.
pub struct QuizService<S> {
    bank: Arc<QuestionBank>,
    store: Arc<S>,
}

impl<S> QuizService<S>
where
    S: QuizStore + 'static,
{
    pub fn new(bank: Arc<QuestionBank>, store: Arc<S>) -> Self {
        Self { bank, store }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Begin a fresh session, discarding any saved progress.
    pub fn start(&self, version: QuizVersion) -> Result<QuizSession, QuizServiceError> {
        let set = self.bank.set(version)?;
        self.store.clear_progress()?;
        info!(%version, questions = set.len(), "quiz session started");
        Ok(QuizSession::new(set))
    }

    /// Pick up saved progress, if there is any that still matches its question set.
    pub fn resume(&self) -> Result<Option<QuizSession>, QuizServiceError> {
        let Some(snapshot) = self.store.load_progress()? else {
            return Ok(None);
        };
        let set = self.bank.set(snapshot.version)?;
        let session = QuizSession::restore(snapshot, set);
        match &session {
            Some(session) => info!(
                version = %session.version(),
                answered = session.answered(),
                "quiz session resumed"
            ),
            None => self.store.clear_progress()?,
        }
        Ok(session)
    }

    /// Record an answer and persist progress.
    pub fn answer(
        &self,
        session: &mut QuizSession,
        question_id: QuestionId,
        raw_value: i64,
    ) -> Result<LikertValue, QuizServiceError> {
        let value = session.answer(question_id, raw_value)?;
        self.store.save_progress(session.snapshot())?;
        debug!(question = %question_id, value = value.value(), "answer recorded");
        Ok(value)
    }

    /// Persist the session's position without recording an answer.
    pub fn checkpoint(&self, session: &QuizSession) -> Result<(), QuizServiceError> {
        self.store.save_progress(session.snapshot())?;
        Ok(())
    }

    /// Score a completed session, save the result, and drop the saved progress.
    pub fn submit(&self, session: &QuizSession) -> Result<QuizReport, QuizServiceError> {
        let report = session.submit()?;
        self.store.save_result(SavedResult::from_report(report.clone()))?;
        self.store.clear_progress()?;
        info!(
            version = %report.version,
            archetype = %report.archetype.name,
            "quiz result saved"
        );
        Ok(report)
    }

    /// Store a report scored outside the live session. Saved progress is left alone.
    pub fn save_report(&self, report: &QuizReport) -> Result<(), QuizServiceError> {
        self.store.save_result(SavedResult::from_report(report.clone()))?;
        info!(
            version = %report.version,
            archetype = %report.archetype.name,
            "quiz result saved"
        );
        Ok(())
    }

    /// Saved report for a version, regenerating it from raw scores for older records.
    pub fn saved_report(&self, version: QuizVersion) -> Result<Option<QuizReport>, QuizServiceError> {
        let Some(saved) = self.store.load_result(version)? else {
            return Ok(None);
        };
        if let Some(report) = saved.report {
            return Ok(Some(report));
        }

        let set = self.bank.set(saved.version)?;
        let report = QuizReport::from_raw(saved.raw_scores, &set)?;
        info!(%version, "regenerated report from stored raw scores");
        self.store.save_result(SavedResult {
            report: Some(report.clone()),
            ..saved
        })?;
        Ok(Some(report))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
