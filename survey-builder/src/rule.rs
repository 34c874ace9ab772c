use std::fmt;

use serde::Serialize;
use survey_builder_types::{AnswerValue, DateFormat, DatetimeFormat, TimeFormat};

use crate::rules::{
    CheckboxRule, EmailRule, FileRule, NumberRule, PhoneRule, ScaleRule, SingleChoiceRule,
    TemporalRule, TextRule,
};

/// Why a single answer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// A required question was answered with a blank value.
    Empty,
    /// The value has the wrong shape for the question, e.g. a list for a text question.
    TypeMismatch,
    LengthOutOfBounds,
    InvalidEmail,
    DomainNotAllowed,
    DomainDisallowed,
    NotANumber,
    OutOfRange,
    DecimalNotAllowed,
    StepMismatch,
    /// A slider range whose low end is above its high end.
    InvalidRange,
    InvalidPhone,
    NotInChoices,
    OtherTooLong,
    DuplicateSelection,
    TooFewSelections,
    TooManySelections,
    FormatMismatch,
    TooManyFiles,
    FileTooLarge,
    FileTypeNotAccepted,
}

/// A rejected answer: what went wrong and a message for the respondent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(ValidationErrorKind::Empty, "This question requires an answer")
    }

    pub(crate) fn type_mismatch(expected: &str, value: &AnswerValue) -> Self {
        Self::new(
            ValidationErrorKind::TypeMismatch,
            format!("Expected {expected}, got {}", value.type_name()),
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The type-specific part of a [`ValidationRule`].
#[derive(Debug, Clone)]
pub enum RuleKind {
    Text(TextRule),
    Email(EmailRule),
    Number(NumberRule),
    Phone(PhoneRule),
    /// Multiple choice and dropdown.
    SingleChoice(SingleChoiceRule),
    Checkbox(CheckboxRule),
    /// Linear scale, slider, likert and rating.
    Scale(ScaleRule),
    Date(TemporalRule<DateFormat>),
    Time(TemporalRule<TimeFormat>),
    Datetime(TemporalRule<DatetimeFormat>),
    File(FileRule),
}

impl RuleKind {
    fn check(&self, value: &AnswerValue) -> Result<(), Violation> {
        match self {
            Self::Text(rule) => rule.check(value),
            Self::Email(rule) => rule.check(value),
            Self::Number(rule) => rule.check(value),
            Self::Phone(rule) => rule.check(value),
            Self::SingleChoice(rule) => rule.check(value),
            Self::Checkbox(rule) => rule.check(value),
            Self::Scale(rule) => rule.check(value),
            Self::Date(rule) => rule.check(value),
            Self::Time(rule) => rule.check(value),
            Self::Datetime(rule) => rule.check(value),
            Self::File(rule) => rule.check(value),
        }
    }

    fn check_blank(&self) -> Result<(), Violation> {
        match self {
            Self::Checkbox(rule) => rule.check_count(0),
            _ => Ok(()),
        }
    }
}

/// The validation rule for one question, built from its options.
///
/// Pure and immutable: checking the same value always gives the same result.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    required: bool,
    kind: RuleKind,
}

impl ValidationRule {
    pub fn new(kind: RuleKind, required: bool) -> Self {
        Self { required, kind }
    }

    /// Whether a blank answer is rejected.
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Check a single answer.
    ///
    /// A blank value (empty text, no selection, no files) first has to meet
    /// any minimum number of selections, which reports
    /// [`ValidationErrorKind::TooFewSelections`]. Past that it is rejected with
    /// [`ValidationErrorKind::Empty`] on required questions and accepted
    /// otherwise.
    pub fn check(&self, value: &AnswerValue) -> Result<(), Violation> {
        if value.is_empty() {
            self.kind.check_blank()?;
            if self.required {
                return Err(Violation::empty());
            }
            return Ok(());
        }
        self.kind.check(value)
    }
}

#[cfg(test)]
mod tests {
    use survey_builder_types::{CheckboxOptions, TextOptions};

    use super::*;
    use crate::rules::BuildRule;

    fn checkbox(min_selections: usize, required: bool) -> ValidationRule {
        let options = CheckboxOptions {
            choices: vec!["a".into(), "b".into(), "c".into()],
            min_selections,
            ..CheckboxOptions::default()
        };
        ValidationRule::new(options.build_rule("q").unwrap(), required)
    }

    fn kind(rule: &ValidationRule, value: AnswerValue) -> Option<ValidationErrorKind> {
        rule.check(&value).err().map(|violation| violation.kind)
    }

    #[test]
    fn no_selection_below_the_minimum_is_too_few() {
        let none = || AnswerValue::Choices(Vec::new());
        assert_eq!(
            kind(&checkbox(1, true), none()),
            Some(ValidationErrorKind::TooFewSelections)
        );
        assert_eq!(
            kind(&checkbox(2, false), none()),
            Some(ValidationErrorKind::TooFewSelections)
        );
        assert_eq!(kind(&checkbox(0, true), none()), Some(ValidationErrorKind::Empty));
        assert_eq!(kind(&checkbox(0, false), none()), None);
    }

    #[test]
    fn blank_text_depends_on_required() {
        let kind_of = TextOptions::default().build_rule("q").unwrap();
        let required = ValidationRule::new(kind_of.clone(), true);
        let optional = ValidationRule::new(kind_of, false);
        assert_eq!(kind(&required, "  ".into()), Some(ValidationErrorKind::Empty));
        assert_eq!(kind(&optional, "".into()), None);
    }
}
