use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ConfigurationError, Question, QuestionTypeTag, SurveyError};

/// A survey and its ordered question list.
///
/// Presentation-agnostic: the same survey drives the answering form, the
/// response review and the analytics page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: String,

    pub account_id: String,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Respondents must be signed in to answer.
    #[serde(default)]
    pub requires_sign_in: bool,

    #[serde(default)]
    pub show_progress_bar: bool,

    /// Offer a "submit another response" link after submitting.
    #[serde(default)]
    pub show_link_to_submit_another: bool,

    #[serde(default)]
    pub is_published: bool,

    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Survey {
    /// Create an unpublished survey without questions.
    pub fn new(
        id: impl Into<String>,
        account_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            account_id: account_id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a question.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get a mutable reference to the questions.
    pub fn questions_mut(&mut self) -> &mut Vec<Question> {
        &mut self.questions
    }

    /// Find a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Decode a survey as returned by the API.
    ///
    /// An unknown `questionType` is reported as a configuration error naming
    /// the question, rather than as an opaque decode failure.
    pub fn from_json(json: &str) -> Result<Self, SurveyError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decode a survey from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, SurveyError> {
        if let Some(questions) = value.get("questions").and_then(Value::as_array) {
            for question in questions {
                let Some(tag) = question.get("questionType").and_then(Value::as_str) else {
                    continue;
                };
                if QuestionTypeTag::from_str(tag).is_err() {
                    return Err(ConfigurationError::UnknownQuestionType {
                        question_id: question
                            .get("id")
                            .and_then(Value::as_str)
                            .map(String::from),
                        tag: tag.to_string(),
                    }
                    .into());
                }
            }
        }
        Ok(serde_json::from_value(value)?)
    }
}
