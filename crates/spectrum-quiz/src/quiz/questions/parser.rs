use super::QuestionItem;
use crate::quiz::domain::{Axis, QuestionId};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<QuestionItem>, serde_json::Error> {
    let rows: Vec<QuestionRow> = serde_json::from_reader(reader)?;
    Ok(rows.into_iter().map(QuestionRow::into_item).collect())
}

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<QuestionItem>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut items = Vec::new();

    for record in csv_reader.deserialize::<QuestionRow>() {
        items.push(record?.into_item());
    }

    Ok(items)
}

/// Row shape shared by the JSON and CSV sources.
#[derive(Debug, Deserialize)]
struct QuestionRow {
    id: u32,
    text: String,
    #[serde(deserialize_with = "lenient_axis")]
    axis: Axis,
    #[serde(default, deserialize_with = "lenient_bool")]
    reverse: bool,
}

impl QuestionRow {
    fn into_item(self) -> QuestionItem {
        QuestionItem {
            id: QuestionId(self.id),
            text: self.text.split_whitespace().collect::<Vec<_>>().join(" "),
            axis: self.axis,
            reverse: self.reverse,
        }
    }
}

fn lenient_axis<'de, D>(deserializer: D) -> Result<Axis, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Axis::parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("unknown axis '{raw}'")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Number(i64),
    Text(String),
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match BoolLike::deserialize(deserializer)? {
        BoolLike::Bool(value) => Ok(value),
        BoolLike::Number(0) => Ok(false),
        BoolLike::Number(1) => Ok(true),
        BoolLike::Number(other) => Err(serde::de::Error::custom(format!(
            "reverse flag must be 0 or 1, got {other}"
        ))),
        BoolLike::Text(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "" | "false" | "no" | "0" => Ok(false),
            "true" | "yes" | "1" => Ok(true),
            other => Err(serde::de::Error::custom(format!(
                "reverse flag must be true or false, got '{other}'"
            ))),
        },
    }
}
