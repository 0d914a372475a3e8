use super::domain::{LikertValue, QuestionId};
use serde::{Deserialize, Serialize};

/// Answer recorded for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "questionId", alias = "question_id")]
    pub question_id: QuestionId,
    pub value: LikertValue,
}

/// Answers collected during a quiz session, at most one per question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Response>", into = "Vec<Response>")]
pub struct ResponseLog {
    entries: Vec<Response>,
}

impl ResponseLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer; a later answer for the same question replaces the earlier one
    /// and moves to the end of the log.
    pub fn record(&mut self, question_id: QuestionId, value: LikertValue) {
        self.entries.retain(|entry| entry.question_id != question_id);
        self.entries.push(Response { question_id, value });
    }

    pub fn get(&self, question_id: QuestionId) -> Option<LikertValue> {
        self.entries
            .iter()
            .find(|entry| entry.question_id == question_id)
            .map(|entry| entry.value)
    }

    pub fn contains(&self, question_id: QuestionId) -> bool {
        self.get(question_id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl From<Vec<Response>> for ResponseLog {
    fn from(entries: Vec<Response>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<ResponseLog> for Vec<Response> {
    fn from(log: ResponseLog) -> Self {
        log.entries
    }
}

impl FromIterator<Response> for ResponseLog {
    fn from_iter<I: IntoIterator<Item = Response>>(iter: I) -> Self {
        let mut log = ResponseLog::new();
        for response in iter {
            log.record(response.question_id, response.value);
        }
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn likert(value: i64) -> LikertValue {
        LikertValue::new(value).expect("valid likert")
    }

    #[test]
    fn later_answer_replaces_earlier_one() {
        let mut log = ResponseLog::new();
        log.record(QuestionId(1), likert(2));
        log.record(QuestionId(2), likert(4));
        log.record(QuestionId(1), likert(5));

        assert_eq!(log.len(), 2);
        assert_eq!(log.get(QuestionId(1)), Some(likert(5)));
        let order: Vec<QuestionId> = log.iter().map(|entry| entry.question_id).collect();
        assert_eq!(order, vec![QuestionId(2), QuestionId(1)]);
    }

    #[test]
    fn deserializes_question_id_value_pairs() {
        let log: ResponseLog = serde_json::from_str(
            r#"[{"questionId": 3, "value": 1}, {"question_id": 4, "value": 5}]"#,
        )
        .expect("log parses");

        assert_eq!(log.get(QuestionId(3)), Some(likert(1)));
        assert_eq!(log.get(QuestionId(4)), Some(likert(5)));
    }

    #[test]
    fn deserialized_duplicates_keep_the_last_answer() {
        let log: ResponseLog = serde_json::from_str(
            r#"[{"questionId": 3, "value": 1}, {"questionId": 3, "value": 4}]"#,
        )
        .expect("log parses");

        assert_eq!(log.len(), 1);
        assert_eq!(log.get(QuestionId(3)), Some(likert(4)));
    }

    #[test]
    fn rejects_out_of_scale_values_at_the_boundary() {
        let error = serde_json::from_str::<ResponseLog>(r#"[{"questionId": 3, "value": 9}]"#)
            .expect_err("9 is not a likert value");
        assert!(error.to_string().contains("outside the 1-5 scale"));
    }
}
