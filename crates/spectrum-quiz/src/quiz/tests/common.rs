use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::quiz::domain::{Axis, LikertValue, QuestionId, QuizVersion};
use crate::quiz::questions::{QuestionBank, QuestionItem, QuestionSet};
use crate::quiz::results::{QuizStore, SavedResult, StoreError};
use crate::quiz::service::QuizService;
use crate::quiz::session::{QuizSession, SessionSnapshot};

pub(super) fn likert(value: i64) -> LikertValue {
    LikertValue::new(value).expect("valid likert")
}

pub(super) fn bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::embedded().expect("bundled question sets load"))
}

pub(super) fn embedded_set(version: QuizVersion) -> Arc<QuestionSet> {
    bank().set(version).expect("bundled version present")
}

/// Middle-sized set whose twelve X statements are all forward-keyed.
pub(super) fn forward_x_middle_set() -> QuestionSet {
    let items = (1..=36u32)
        .map(|id| {
            let axis = Axis::ALL[((id - 1) / 12) as usize];
            QuestionItem {
                id: QuestionId(id),
                text: format!("{axis} statement {id}"),
                axis,
                reverse: axis != Axis::X && id % 2 == 0,
            }
        })
        .collect();
    QuestionSet::new(QuizVersion::Middle, items).expect("valid middle set")
}

/// Answer every question, giving forward items `forward` and reversed items its mirror.
pub(super) fn answer_keyed(session: &mut QuizSession, forward: i64) {
    let items: Vec<QuestionItem> = session.question_set().items().to_vec();
    for item in items {
        let value = if item.reverse { 6 - forward } else { forward };
        session.answer(item.id, value).expect("answer accepted");
    }
}

pub(super) fn service() -> (QuizService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = QuizService::new(bank(), store.clone());
    (service, store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) results: Arc<Mutex<HashMap<QuizVersion, SavedResult>>>,
    pub(super) progress: Arc<Mutex<Option<SessionSnapshot>>>,
}

impl MemoryStore {
    pub(super) fn saved(&self, version: QuizVersion) -> Option<SavedResult> {
        self.results
            .lock()
            .expect("results mutex poisoned")
            .get(&version)
            .cloned()
    }

    pub(super) fn progress(&self) -> Option<SessionSnapshot> {
        self.progress
            .lock()
            .expect("progress mutex poisoned")
            .clone()
    }
}

impl QuizStore for MemoryStore {
    fn save_result(&self, result: SavedResult) -> Result<(), StoreError> {
        let mut guard = self.results.lock().expect("results mutex poisoned");
        guard.insert(result.version, result);
        Ok(())
    }

    fn load_result(&self, version: QuizVersion) -> Result<Option<SavedResult>, StoreError> {
        Ok(self.saved(version))
    }

    fn save_progress(&self, snapshot: SessionSnapshot) -> Result<(), StoreError> {
        *self.progress.lock().expect("progress mutex poisoned") = Some(snapshot);
        Ok(())
    }

    fn load_progress(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        Ok(self.progress())
    }

    fn clear_progress(&self) -> Result<(), StoreError> {
        *self.progress.lock().expect("progress mutex poisoned") = None;
        Ok(())
    }
}

/// Store whose every call fails, for error propagation checks.
pub(super) struct UnavailableStore;

impl QuizStore for UnavailableStore {
    fn save_result(&self, _result: SavedResult) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn load_result(&self, _version: QuizVersion) -> Result<Option<SavedResult>, StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn save_progress(&self, _snapshot: SessionSnapshot) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn load_progress(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn clear_progress(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }
}
