//! Quiz scoring, archetype classification, and compatibility.
//!
//! Responses are scored per axis, rescaled onto the canonical +-24 range, bucketed into one
//! of 27 archetypes, and compared against every archetype position. Everything below the
//! service layer is pure and synchronous; storage is reached only through [`QuizStore`].

pub mod archetypes;
pub mod compatibility;
pub mod domain;
pub mod error;
pub mod interpretation;
pub mod questions;
pub mod report;
pub mod responses;
pub mod results;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use archetypes::{
    catalog, classify, lookup, Archetype, ArchetypeKey, ArchetypeRecord, AxisCategory,
    CoordinateRange,
};
pub use compatibility::{
    band_color, compatibility, compatibility_breakdown, compatibility_map, shortlist,
    CompatibilityBand, CompatibilityBreakdown, CompatibilityZone, Rgb,
};
pub use domain::{
    Axis, AxisTriple, Coordinate, LikertValue, QuestionId, QuizVersion, RawScores,
    CANONICAL_MAX, CATEGORY_THRESHOLD,
};
pub use error::QuizError;
pub use interpretation::{interpret_axis, interpretation_bins, InterpretationBin};
pub use questions::{QuestionBank, QuestionBankError, QuestionItem, QuestionSet};
pub use report::QuizReport;
pub use responses::{Response, ResponseLog};
pub use results::{QuizStore, SavedResult, StoreError};
pub use scoring::{compute_raw_scores, normalize, ScoreCard, ScoringEngine};
pub use service::{QuizService, QuizServiceError};
pub use session::{Progress, QuizSession, SessionSnapshot};
