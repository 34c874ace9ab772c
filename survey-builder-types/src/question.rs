use serde::{Deserialize, Serialize};

use crate::{OptionSet, QuestionOptions, QuestionTypeTag};

/// A single question in a survey.
///
/// The question type is carried by the options: a question can never hold
/// options of a different type than its tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Opaque identity, assigned by the server or generated by the client.
    id: String,

    /// The prompt text shown to the respondent.
    question_text: String,

    /// Whether an answer must be submitted.
    #[serde(default)]
    required: bool,

    /// Position in the answering sequence, starting at 1.
    #[serde(default)]
    order_number: u32,

    /// Type tag plus the type's option record.
    #[serde(flatten)]
    options: QuestionOptions,
}

impl Question {
    /// Create a new optional question with order number 0.
    pub fn new(
        id: impl Into<String>,
        question_text: impl Into<String>,
        options: impl Into<QuestionOptions>,
    ) -> Self {
        Self {
            id: id.into(),
            question_text: question_text.into(),
            required: false,
            order_number: 0,
            options: options.into(),
        }
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the order number.
    pub fn with_order(mut self, order_number: u32) -> Self {
        self.order_number = order_number;
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the prompt text.
    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    /// Check whether an answer is mandatory.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the order number.
    pub fn order_number(&self) -> u32 {
        self.order_number
    }

    /// Get the question type.
    pub fn question_type(&self) -> QuestionTypeTag {
        self.options.tag()
    }

    /// Get the options.
    pub fn options(&self) -> &QuestionOptions {
        &self.options
    }

    /// Borrow the options as the concrete record for type `T`.
    pub fn options_as<T: OptionSet>(&self) -> Option<&T> {
        T::from_options(&self.options)
    }

    /// Replace the whole options record. This may change the question type.
    pub fn set_options(&mut self, options: impl Into<QuestionOptions>) {
        self.options = options.into();
    }

    /// Set whether an answer is mandatory.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Replace the prompt text.
    pub fn set_question_text(&mut self, text: impl Into<String>) {
        self.question_text = text.into();
    }

    /// Set the order number.
    pub fn set_order_number(&mut self, order_number: u32) {
        self.order_number = order_number;
    }

    /// Replace the id, e.g. once the server assigned a permanent one.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{NumberOptions, TextOptions};

    #[test]
    fn decodes_api_shape() {
        let question: Question = serde_json::from_value(json!({
            "id": "q-age",
            "questionType": "number",
            "questionText": "How old are you?",
            "required": true,
            "orderNumber": 2,
            "options": {"min": 0, "max": 120, "allowDecimal": false}
        }))
        .unwrap();

        assert_eq!(question.id(), "q-age");
        assert_eq!(question.question_type(), QuestionTypeTag::Number);
        assert!(question.is_required());
        assert_eq!(question.order_number(), 2);
        let options = question.options_as::<NumberOptions>().unwrap();
        assert_eq!(options.min, Some(0.0));
        assert!(!options.allow_decimal);
    }

    #[test]
    fn encodes_type_next_to_options() {
        let question = Question::new("q1", "Name?", TextOptions::default()).with_order(1);
        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["questionType"], "text");
        assert_eq!(value["questionText"], "Name?");
        assert_eq!(value["options"]["isMultiline"], false);
    }

    #[test]
    fn replacing_options_changes_the_type() {
        let mut question = Question::new("q1", "Name?", TextOptions::default());
        question.set_options(NumberOptions::default());
        assert_eq!(question.question_type(), QuestionTypeTag::Number);
    }
}
