use serde::{Deserialize, Serialize};

use super::archetypes::{classify, Archetype, ArchetypeKey, ArchetypeRecord, AxisCategory};
use super::compatibility::shortlist;
use super::domain::{Axis, AxisTriple, Coordinate, QuizVersion, RawScores};
use super::error::QuizError;
use super::interpretation::interpret_axis;
use super::questions::QuestionSet;
use super::scoring::{normalize, ScoreCard};

/// Everything the presentation layer needs to render a finished quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizReport {
    pub version: QuizVersion,
    pub raw_scores: RawScores,
    pub normalized_scores: Coordinate,
    pub archetype: ArchetypeRecord,
    pub compatible_archetypes: Vec<ArchetypeRecord>,
    pub interpretations: AxisTriple<String>,
}

impl QuizReport {
    pub fn from_score_card(card: &ScoreCard) -> Result<Self, QuizError> {
        let archetype = classify(&card.normalized)?;
        let compatible_archetypes = shortlist(&card.normalized)?
            .into_iter()
            .map(Archetype::record)
            .collect();
        let interpretations = card
            .normalized
            .map(|axis, score| interpret_axis(axis, score).to_string());

        Ok(Self {
            version: card.version,
            raw_scores: card.raw,
            normalized_scores: card.normalized,
            archetype: archetype.record(),
            compatible_archetypes,
            interpretations,
        })
    }

    /// Rebuild a report from stored raw scores, e.g. results saved before reports were kept.
    pub fn from_raw(raw: RawScores, set: &QuestionSet) -> Result<Self, QuizError> {
        let card = ScoreCard {
            version: set.version(),
            raw,
            normalized: normalize(raw, set),
        };
        Self::from_score_card(&card)
    }

    pub fn key(&self) -> ArchetypeKey {
        self.archetype.key
    }

    /// Pole summary such as `Feminine • Switch • Romantic`.
    pub fn subtitle(&self) -> String {
        Axis::ALL
            .iter()
            .map(|&axis| {
                AxisCategory::from_score(*self.normalized_scores.get(axis)).short_label(axis)
            })
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::domain::QuestionId;
    use crate::quiz::questions::QuestionItem;

    fn middle_set() -> QuestionSet {
        let items = (1..=36)
            .map(|id| QuestionItem {
                id: QuestionId(id),
                text: format!("statement {id}"),
                axis: Axis::ALL[((id - 1) % 3) as usize],
                reverse: false,
            })
            .collect();
        QuestionSet::new(QuizVersion::Middle, items).expect("valid set")
    }

    #[test]
    fn report_combines_classification_shortlist_and_text() {
        let report =
            QuizReport::from_raw(RawScores::new(15, 0, -15), &middle_set()).expect("report");

        assert_eq!(report.normalized_scores, Coordinate::new(15.0, 0.0, -15.0));
        assert_eq!(report.archetype.name, "The Romantic Feminine");
        assert_eq!(report.subtitle(), "Feminine • Switch • Romantic");
        assert_eq!(report.interpretations.x, "Moderately feminine-leaning");
        assert_eq!(report.interpretations.y, "Balanced/Switch");
        assert_eq!(report.interpretations.z, "Moderately romantic-leaning");
        assert_eq!(report.compatible_archetypes.len(), 3);
        assert_eq!(report.archetype.ranges.x.to_string(), "[6, 24]");
    }

    #[test]
    fn report_serializes_with_camel_case_fields() {
        let report = QuizReport::from_raw(RawScores::new(0, 0, 0), &middle_set()).expect("report");
        let value = serde_json::to_value(&report).expect("report serializes");

        assert!(value.get("rawScores").is_some());
        assert!(value.get("compatibleArchetypes").is_some());
        let restored: QuizReport = serde_json::from_value(value).expect("report parses");
        assert_eq!(restored, report);
    }
}
