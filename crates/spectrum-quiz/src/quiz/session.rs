use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{LikertValue, QuestionId, QuizVersion};
use super::error::QuizError;
use super::questions::{QuestionItem, QuestionSet};
use super::report::QuizReport;
use super::responses::ResponseLog;
use super::scoring::{ScoreCard, ScoringEngine};

/// One user's walk through a question set.
///
/// The session owns its version explicitly through the shared set, so scoring never
/// depends on ambient state. The cursor always points at an existing question.
#[derive(Debug, Clone)]
pub struct QuizSession {
    set: Arc<QuestionSet>,
    cursor: usize,
    log: ResponseLog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    /// 1-based position of the current question.
    pub position: usize,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 / self.total as f64 * 100.0
    }
}

/// Persistable state for resuming a session later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub version: QuizVersion,
    pub current_question: usize,
    pub responses: ResponseLog,
    pub saved_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(set: Arc<QuestionSet>) -> Self {
        Self {
            set,
            cursor: 0,
            log: ResponseLog::new(),
        }
    }

    pub fn version(&self) -> QuizVersion {
        self.set.version()
    }

    pub fn question_set(&self) -> &QuestionSet {
        &self.set
    }

    pub fn responses(&self) -> &ResponseLog {
        &self.log
    }

    pub fn current(&self) -> &QuestionItem {
        &self.set.items()[self.cursor]
    }

    pub fn current_answer(&self) -> Option<LikertValue> {
        self.log.get(self.current().id)
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.set.len()
    }

    /// Record an answer for any question of the active set.
    pub fn answer(&mut self, question_id: QuestionId, raw_value: i64) -> Result<LikertValue, QuizError> {
        let value = LikertValue::new(raw_value)?;
        if self.set.get(question_id).is_none() {
            return Err(QuizError::UnknownQuestion(question_id));
        }
        self.log.record(question_id, value);
        Ok(value)
    }

    pub fn answer_current(&mut self, raw_value: i64) -> Result<LikertValue, QuizError> {
        let id = self.current().id;
        self.answer(id, raw_value)
    }

    /// Move to the next question. Returns `false` when already on the last one.
    pub fn advance(&mut self) -> Result<bool, QuizError> {
        let current = self.current().id;
        if !self.log.contains(current) {
            return Err(QuizError::Unanswered(current));
        }
        if self.is_last() {
            return Ok(false);
        }
        self.cursor += 1;
        Ok(true)
    }

    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn answered(&self) -> usize {
        self.set
            .items()
            .iter()
            .filter(|item| self.log.contains(item.id))
            .count()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.answered(),
            total: self.set.len(),
            position: self.cursor + 1,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == self.set.len()
    }

    pub fn restart(&mut self) {
        self.cursor = 0;
        self.log.clear();
    }

    /// Scores whatever has been answered so far.
    pub fn score(&self) -> ScoreCard {
        ScoringEngine::new(&self.set).score(&self.log)
    }

    /// Final scoring; only a fully answered quiz produces a report.
    pub fn submit(&self) -> Result<QuizReport, QuizError> {
        let progress = self.progress();
        if progress.answered < progress.total {
            return Err(QuizError::IncompleteQuiz {
                answered: progress.answered,
                total: progress.total,
            });
        }
        QuizReport::from_score_card(&self.score())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            version: self.version(),
            current_question: self.cursor,
            responses: self.log.clone(),
            saved_at: Utc::now(),
        }
    }

    /// Resume from a snapshot taken against `set`. Snapshots from another version or with
    /// a cursor past the end are discarded so the caller starts fresh.
    pub fn restore(snapshot: SessionSnapshot, set: Arc<QuestionSet>) -> Option<Self> {
        if snapshot.version != set.version() {
            warn!(
                saved = %snapshot.version,
                active = %set.version(),
                "discarding progress saved for another question set"
            );
            return None;
        }
        if snapshot.current_question >= set.len() {
            warn!(
                cursor = snapshot.current_question,
                total = set.len(),
                "discarding progress with out-of-range cursor"
            );
            return None;
        }

        let log = snapshot
            .responses
            .iter()
            .filter(|response| set.get(response.question_id).is_some())
            .copied()
            .collect();

        Some(Self {
            set,
            cursor: snapshot.current_question,
            log,
        })
    }
}
