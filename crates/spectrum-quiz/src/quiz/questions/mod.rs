mod parser;

use crate::quiz::domain::{Axis, AxisTriple, QuestionId, QuizVersion};
use crate::quiz::error::QuizError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

const EMBEDDED_DEMO: &str = include_str!("../../../data/questions-demo.json");
const EMBEDDED_MIDDLE: &str = include_str!("../../../data/questions-middle.json");
const EMBEDDED_COMPREHENSIVE: &str = include_str!("../../../data/questions-comprehensive.json");

/// Single scored survey statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub id: QuestionId,
    pub text: String,
    pub axis: Axis,
    #[serde(default)]
    pub reverse: bool,
}

/// Ordered, immutable question list for one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    version: QuizVersion,
    items_per_axis: u32,
    items: Vec<QuestionItem>,
}

impl QuestionSet {
    pub fn new(version: QuizVersion, items: Vec<QuestionItem>) -> Result<Self, QuestionBankError> {
        if items.is_empty() {
            return Err(QuestionBankError::Empty { version });
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(QuestionBankError::DuplicateQuestion {
                    version,
                    id: item.id,
                });
            }
        }

        let items_per_axis = version.items_per_axis();
        for axis in Axis::ALL {
            let count = items.iter().filter(|item| item.axis == axis).count();
            if count > items_per_axis as usize {
                return Err(QuestionBankError::AxisOverflow {
                    version,
                    axis,
                    count,
                    limit: items_per_axis,
                });
            }
        }

        Ok(Self {
            version,
            items_per_axis,
            items,
        })
    }

    pub fn from_json_reader<R: Read>(
        version: QuizVersion,
        reader: R,
    ) -> Result<Self, QuestionBankError> {
        let items = parser::parse_json(reader)?;
        Self::new(version, items)
    }

    pub fn from_csv_reader<R: Read>(
        version: QuizVersion,
        reader: R,
    ) -> Result<Self, QuestionBankError> {
        let items = parser::parse_csv(reader)?;
        Self::new(version, items)
    }

    /// Load a set from disk, picking the parser from the file extension.
    pub fn from_path<P: AsRef<Path>>(
        version: QuizVersion,
        path: P,
    ) -> Result<Self, QuestionBankError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let file = std::fs::File::open(path)?;

        match extension.as_deref() {
            Some("json") => Self::from_json_reader(version, file),
            Some("csv") => Self::from_csv_reader(version, file),
            _ => Err(QuestionBankError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn version(&self) -> QuizVersion {
        self.version
    }

    pub fn items(&self) -> &[QuestionItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&QuestionItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items_for_axis(&self, axis: Axis) -> impl Iterator<Item = &QuestionItem> {
        self.items.iter().filter(move |item| item.axis == axis)
    }

    /// Questions carried per axis in this set.
    pub fn axis_counts(&self) -> AxisTriple<usize> {
        AxisTriple::new(
            self.items_for_axis(Axis::X).count(),
            self.items_for_axis(Axis::Y).count(),
            self.items_for_axis(Axis::Z).count(),
        )
    }

    /// Theoretical maximum of a raw axis score; the normalization divisor.
    pub fn max_per_axis(&self) -> i32 {
        2 * self.items_per_axis as i32
    }
}

/// All question sets, loaded once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    sets: BTreeMap<QuizVersion, Arc<QuestionSet>>,
}

impl QuestionBank {
    /// Question sets bundled with the crate.
    pub fn embedded() -> Result<Self, QuestionBankError> {
        let sets = QuizVersion::ALL
            .into_iter()
            .map(|version| {
                QuestionSet::from_json_reader(version, Cursor::new(embedded_source(version)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_sets(sets))
    }

    /// Load `questions-<tag>.json` files from `dir`, falling back to the bundled
    /// set for any version without a file.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, QuestionBankError> {
        let dir = dir.as_ref();
        let mut sets = Vec::with_capacity(QuizVersion::ALL.len());

        for version in QuizVersion::ALL {
            let path = dir.join(version.file_name());
            let set = if path.is_file() {
                info!(%version, path = %path.display(), "loading question set override");
                QuestionSet::from_path(version, &path)?
            } else {
                debug!(%version, "no override found, using bundled question set");
                QuestionSet::from_json_reader(version, Cursor::new(embedded_source(version)))?
            };
            sets.push(set);
        }

        Ok(Self::from_sets(sets))
    }

    pub fn from_sets(sets: impl IntoIterator<Item = QuestionSet>) -> Self {
        let sets = sets
            .into_iter()
            .map(|set| (set.version(), Arc::new(set)))
            .collect();
        Self { sets }
    }

    pub fn set(&self, version: QuizVersion) -> Result<Arc<QuestionSet>, QuizError> {
        self.sets
            .get(&version)
            .cloned()
            .ok_or_else(|| QuizError::UnknownQuestionSetVersion(version.tag().to_string()))
    }
}

fn embedded_source(version: QuizVersion) -> &'static str {
    match version {
        QuizVersion::Demo => EMBEDDED_DEMO,
        QuizVersion::Middle => EMBEDDED_MIDDLE,
        QuizVersion::Comprehensive => EMBEDDED_COMPREHENSIVE,
    }
}

#[derive(Debug)]
pub enum QuestionBankError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    UnsupportedFormat(String),
    Empty {
        version: QuizVersion,
    },
    DuplicateQuestion {
        version: QuizVersion,
        id: QuestionId,
    },
    AxisOverflow {
        version: QuizVersion,
        axis: Axis,
        count: usize,
        limit: u32,
    },
}

impl std::fmt::Display for QuestionBankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionBankError::Io(err) => write!(f, "failed to read question set: {}", err),
            QuestionBankError::Json(err) => write!(f, "invalid question set JSON: {}", err),
            QuestionBankError::Csv(err) => write!(f, "invalid question set CSV: {}", err),
            QuestionBankError::UnsupportedFormat(path) => {
                write!(f, "unsupported question set format: {}", path)
            }
            QuestionBankError::Empty { version } => {
                write!(f, "question set '{}' contains no questions", version)
            }
            QuestionBankError::DuplicateQuestion { version, id } => {
                write!(f, "question set '{}' repeats question id {}", version, id)
            }
            QuestionBankError::AxisOverflow {
                version,
                axis,
                count,
                limit,
            } => write!(
                f,
                "question set '{}' has {} questions on axis {} (limit {})",
                version, count, axis, limit
            ),
        }
    }
}

impl std::error::Error for QuestionBankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuestionBankError::Io(err) => Some(err),
            QuestionBankError::Json(err) => Some(err),
            QuestionBankError::Csv(err) => Some(err),
            QuestionBankError::UnsupportedFormat(_)
            | QuestionBankError::Empty { .. }
            | QuestionBankError::DuplicateQuestion { .. }
            | QuestionBankError::AxisOverflow { .. } => None,
        }
    }
}

impl From<std::io::Error> for QuestionBankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for QuestionBankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for QuestionBankError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
