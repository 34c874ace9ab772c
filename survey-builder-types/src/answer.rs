use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use crate::QuestionTypeTag;

/// Client-side metadata of an uploaded file. File content is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl FileMeta {
    /// Create file metadata without a MIME type.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: None,
        }
    }

    /// Lowercased extension without the dot, if the name has one.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// A single raw answer value, as submitted by the answering form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Number, scale, likert and rating answers.
    Number(f64),

    /// Text-like answers: text, email, phone, single choices, dates and times.
    Text(String),

    /// A `[low, high]` slider range.
    Range(f64, f64),

    /// Ticked checkbox labels.
    Choices(Vec<String>),

    /// Uploaded files.
    Files(Vec<FileMeta>),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a number. Numeric text is accepted, since
    /// browser inputs submit strings.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Try to get this value as a `(low, high)` pair.
    pub fn as_range(&self) -> Option<(f64, f64)> {
        match self {
            Self::Range(low, high) => Some((*low, *high)),
            _ => None,
        }
    }

    /// Try to get this value as a list of choice labels.
    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            Self::Choices(choices) => Some(choices),
            _ => None,
        }
    }

    /// Try to get this value as a list of files.
    pub fn as_files(&self) -> Option<&[FileMeta]> {
        match self {
            Self::Files(files) => Some(files),
            _ => None,
        }
    }

    /// Whether the respondent effectively left the field blank.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Choices(choices) => choices.is_empty(),
            Self::Files(files) => files.is_empty(),
            Self::Number(_) | Self::Range(..) => false,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Range(..) => "range",
            Self::Choices(_) => "choice list",
            Self::Files(_) => "file list",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for AnswerValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for AnswerValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<(f64, f64)> for AnswerValue {
    fn from((low, high): (f64, f64)) -> Self {
        Self::Range(low, high)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(choices: Vec<String>) -> Self {
        Self::Choices(choices)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(choices: Vec<&str>) -> Self {
        Self::Choices(choices.into_iter().map(String::from).collect())
    }
}

impl From<Vec<FileMeta>> for AnswerValue {
    fn from(files: Vec<FileMeta>) -> Self {
        Self::Files(files)
    }
}

/// A stored answer, as returned by the API.
///
/// Exactly one payload field is meaningful, depending on the question type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: String,
    pub question_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub answer_text: Option<String>,
    #[serde(default)]
    pub answer_number: Option<f64>,
    #[serde(default)]
    pub answer_json: Option<Value>,
}

impl Answer {
    /// Store `value` in the payload field that matches its shape.
    pub fn from_value(
        id: impl Into<String>,
        question_id: impl Into<String>,
        created_at: OffsetDateTime,
        value: &AnswerValue,
    ) -> Self {
        let mut answer = Self {
            id: id.into(),
            question_id: question_id.into(),
            created_at,
            answer_text: None,
            answer_number: None,
            answer_json: None,
        };
        match value {
            AnswerValue::Number(n) => answer.answer_number = Some(*n),
            AnswerValue::Text(s) => answer.answer_text = Some(s.clone()),
            AnswerValue::Range(..) | AnswerValue::Choices(_) | AnswerValue::Files(_) => {
                answer.answer_json = serde_json::to_value(value).ok();
            }
        }
        answer
    }

    /// Recover the typed value for a question of type `tag`.
    ///
    /// Returns `None` if the payload field active for that type is empty.
    pub fn value_for(&self, tag: QuestionTypeTag) -> Option<AnswerValue> {
        match tag {
            QuestionTypeTag::Slider => self
                .json_value()
                .filter(|value| matches!(value, AnswerValue::Range(..)))
                .or_else(|| self.number_value()),
            tag if tag.is_numeric() => self.number_value(),
            QuestionTypeTag::Checkbox => match self.json_value() {
                Some(value @ AnswerValue::Choices(_)) => Some(value),
                _ => self
                    .answer_text
                    .as_ref()
                    .map(|text| AnswerValue::Choices(vec![text.clone()])),
            },
            QuestionTypeTag::File => {
                let json = self.answer_json.clone()?;
                if json.is_object() {
                    return serde_json::from_value::<FileMeta>(json)
                        .ok()
                        .map(|file| AnswerValue::Files(vec![file]));
                }
                match serde_json::from_value(json).ok()? {
                    AnswerValue::Files(files) => Some(AnswerValue::Files(files)),
                    // An empty JSON array decodes as an empty choice list.
                    AnswerValue::Choices(choices) if choices.is_empty() => {
                        Some(AnswerValue::Files(Vec::new()))
                    }
                    _ => None,
                }
            }
            _ => self
                .answer_text
                .clone()
                .map(AnswerValue::Text)
                .or_else(|| self.answer_number.map(|n| AnswerValue::Text(n.to_string()))),
        }
    }

    fn number_value(&self) -> Option<AnswerValue> {
        self.answer_number
            .map(AnswerValue::Number)
            .or_else(|| {
                self.answer_text
                    .as_deref()
                    .and_then(|text| text.trim().parse::<f64>().ok())
                    .map(AnswerValue::Number)
            })
    }

    fn json_value(&self) -> Option<AnswerValue> {
        serde_json::from_value(self.answer_json.clone()?).ok()
    }
}
