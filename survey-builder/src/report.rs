use serde::Serialize;

use crate::rule::{ValidationErrorKind, Violation};

/// What is wrong with one entry of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A required question has no answer at all.
    MissingRequiredAnswer,
    /// The answer failed the question's rule.
    Invalid(ValidationErrorKind),
    /// The submission answers a question the survey does not have.
    UnknownQuestion,
}

/// One problem in a submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub question_id: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub(crate) fn missing(question_id: &str) -> Self {
        Self {
            question_id: question_id.to_string(),
            kind: FieldErrorKind::MissingRequiredAnswer,
            message: "This question requires an answer".to_string(),
        }
    }

    pub(crate) fn invalid(question_id: &str, violation: Violation) -> Self {
        Self {
            question_id: question_id.to_string(),
            kind: FieldErrorKind::Invalid(violation.kind),
            message: violation.message,
        }
    }

    pub(crate) fn unknown(question_id: &str) -> Self {
        Self {
            question_id: question_id.to_string(),
            kind: FieldErrorKind::UnknownQuestion,
            message: format!("The survey has no question '{question_id}'"),
        }
    }

    /// The rule violation, for answers that failed their rule.
    pub fn validation_kind(&self) -> Option<ValidationErrorKind> {
        match self.kind {
            FieldErrorKind::Invalid(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Every problem found in a submission, in render order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub(crate) fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Whether the submission can be sent.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors about one question.
    pub fn errors_for<'a>(&'a self, question_id: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.errors
            .iter()
            .filter(move |error| error.question_id == question_id)
    }

    /// `Ok` for a clean report, the report itself otherwise.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }
}

impl IntoIterator for ValidationReport {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
