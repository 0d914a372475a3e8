use super::archetypes::ArchetypeKey;
use super::domain::QuestionId;

/// Failures raised by the scoring, classification, and session operations.
///
/// Every variant is fatal to the call that produced it; no partial results are returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuizError {
    #[error("likert value {0} is outside the 1-5 scale")]
    InvalidResponseValue(i64),
    #[error("unknown question set version '{0}'")]
    UnknownQuestionSetVersion(String),
    #[error("no archetype registered for category triple {0}")]
    UnknownArchetypeKey(ArchetypeKey),
    #[error("question {0} is not part of the active question set")]
    UnknownQuestion(QuestionId),
    #[error("question {0} has not been answered")]
    Unanswered(QuestionId),
    #[error("quiz incomplete: {answered} of {total} questions answered")]
    IncompleteQuiz { answered: usize, total: usize },
}
