//! Scoring, archetype classification, and compatibility engine for the spectrum quiz.

pub mod config;
pub mod error;
pub mod quiz;
pub mod telemetry;
