use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use spectrum_quiz::config::AppConfig;
use spectrum_quiz::error::AppError;
use spectrum_quiz::quiz::{
    Coordinate, LikertValue, QuestionBank, QuestionId, QuizStore, QuizVersion, ResponseLog,
    SavedResult, SessionSnapshot, StoreError, CANONICAL_MAX,
};
use tracing::debug;

const PROGRESS_FILE: &str = "quizProgress.json";

/// Results and progress kept as JSON documents under the configured data directory.
#[derive(Debug, Clone)]
pub(crate) struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn result_path(&self, version: QuizVersion) -> PathBuf {
        self.dir.join(format!("quizResults_{}.json", version.tag()))
    }

    fn progress_path(&self) -> PathBuf {
        self.dir.join(PROGRESS_FILE)
    }

    fn write<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(value)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        fs::create_dir_all(&self.dir).map_err(unavailable)?;
        fs::write(path, body).map_err(unavailable)?;
        debug!(path = %path.display(), "stored quiz document");
        Ok(())
    }

    fn read<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, StoreError> {
        let body = match fs::read_to_string(path) {
            Ok(body) => body,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(unavailable(err)),
        };
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|err| StoreError::Serialization(format!("{}: {err}", path.display())))
    }
}

fn unavailable(err: io::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

impl QuizStore for JsonFileStore {
    fn save_result(&self, result: SavedResult) -> Result<(), StoreError> {
        self.write(&self.result_path(result.version), &result)
    }

    fn load_result(&self, version: QuizVersion) -> Result<Option<SavedResult>, StoreError> {
        self.read(&self.result_path(version))
    }

    fn save_progress(&self, snapshot: SessionSnapshot) -> Result<(), StoreError> {
        self.write(&self.progress_path(), &snapshot)
    }

    fn load_progress(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        self.read(&self.progress_path())
    }

    fn clear_progress(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.progress_path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(unavailable(err)),
        }
    }
}

/// Throwaway store for the scripted demo.
#[derive(Default, Clone)]
pub(crate) struct InMemoryQuizStore {
    results: Arc<Mutex<HashMap<QuizVersion, SavedResult>>>,
    progress: Arc<Mutex<Option<SessionSnapshot>>>,
}

impl QuizStore for InMemoryQuizStore {
    fn save_result(&self, result: SavedResult) -> Result<(), StoreError> {
        let mut guard = self.results.lock().expect("results mutex poisoned");
        guard.insert(result.version, result);
        Ok(())
    }

    fn load_result(&self, version: QuizVersion) -> Result<Option<SavedResult>, StoreError> {
        let guard = self.results.lock().expect("results mutex poisoned");
        Ok(guard.get(&version).cloned())
    }

    fn save_progress(&self, snapshot: SessionSnapshot) -> Result<(), StoreError> {
        *self.progress.lock().expect("progress mutex poisoned") = Some(snapshot);
        Ok(())
    }

    fn load_progress(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        Ok(self.progress.lock().expect("progress mutex poisoned").clone())
    }

    fn clear_progress(&self) -> Result<(), StoreError> {
        *self.progress.lock().expect("progress mutex poisoned") = None;
        Ok(())
    }
}

pub(crate) fn load_bank(config: &AppConfig) -> Result<QuestionBank, AppError> {
    let bank = match &config.quiz.question_dir {
        Some(dir) => QuestionBank::from_dir(dir)?,
        None => QuestionBank::embedded()?,
    };
    Ok(bank)
}

pub(crate) fn parse_version(raw: &str) -> Result<QuizVersion, String> {
    raw.parse::<QuizVersion>().map_err(|err| err.to_string())
}

/// Parse `x,y,z` on the canonical scale.
pub(crate) fn parse_coordinate(raw: &str) -> Result<Coordinate, String> {
    let parts = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|err| format!("'{}' is not a number ({err})", part.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let [x, y, z] = parts[..] else {
        return Err(format!("expected three comma-separated values, got '{raw}'"));
    };
    let coordinate = Coordinate::new(x, y, z);
    for value in [x, y, z] {
        if !value.is_finite() || value.abs() > CANONICAL_MAX {
            return Err(format!("{value} is outside the -24..24 scale"));
        }
    }
    Ok(coordinate)
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    #[serde(alias = "questionId", alias = "question")]
    question_id: u32,
    value: i64,
}

/// Read answers from a JSON array of `{questionId, value}` objects or a CSV with
/// `question_id,value` columns.
pub(crate) fn read_responses(path: &Path) -> Result<ResponseLog, AppError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let file = fs::File::open(path)?;

    match extension.as_deref() {
        Some("json") => serde_json::from_reader(file)
            .map_err(|err| AppError::Input(format!("{}: {err}", path.display()))),
        Some("csv") => responses_from_csv(file)
            .map_err(|err| AppError::Input(format!("{}: {err}", path.display()))),
        _ => Err(AppError::Input(format!(
            "{}: responses must be a .json or .csv file",
            path.display()
        ))),
    }
}

fn responses_from_csv<R: io::Read>(reader: R) -> Result<ResponseLog, String> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut log = ResponseLog::new();

    for row in csv_reader.deserialize::<ResponseRow>() {
        let row = row.map_err(|err| err.to_string())?;
        let value = LikertValue::new(row.value).map_err(|err| err.to_string())?;
        log.record(QuestionId(row.question_id), value);
    }

    Ok(log)
}
