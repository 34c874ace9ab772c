//! Per-type validation rules and the builders that derive them from options.
//!
//! Builders check the options themselves first: an inconsistent record
//! (min above max, an empty choice list, ...) is a [`ConfigurationError`]
//! for the author, never a rule that silently rejects every answer.

use std::collections::HashSet;
use std::fmt::Display;

use survey_builder_types::{AnswerValue, ConfigurationError, OptionSet};

use crate::rule::{RuleKind, ValidationErrorKind, Violation};

mod choice;
pub use choice::{CheckboxRule, SingleChoiceRule};

mod file;
pub use file::FileRule;

mod numeric;
pub use numeric::{NumberRule, ScaleRule};

mod temporal;
pub use temporal::{Bound, TemporalFormat, TemporalRule};

mod text;
pub use text::{EmailRule, PhoneRule, TextRule};

/// An option record that can produce the validation rule for its type.
pub trait BuildRule: OptionSet {
    /// Derive the type-specific rule, or report why the options are unusable.
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError>;
}

/// Reject `min > max` when both bounds are present.
pub(crate) fn check_bounds<T: PartialOrd + Display>(
    question_id: &str,
    (min_field, min): (&'static str, Option<T>),
    (max_field, max): (&'static str, Option<T>),
) -> Result<(), ConfigurationError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(ConfigurationError::invalid_bounds(
            question_id,
            min_field,
            max_field,
            min,
            max,
        )),
        _ => Ok(()),
    }
}

pub(crate) fn check_finite(
    question_id: &str,
    field: &'static str,
    value: f64,
) -> Result<(), ConfigurationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::invalid_option(
            question_id,
            field,
            "must be a finite number",
        ))
    }
}

/// Choice lists must be non-empty, without blank or repeated labels.
pub(crate) fn check_choices(
    question_id: &str,
    choices: &[String],
) -> Result<(), ConfigurationError> {
    if choices.is_empty() {
        return Err(ConfigurationError::invalid_option(
            question_id,
            "choices",
            "at least one choice is required",
        ));
    }
    let mut seen = HashSet::with_capacity(choices.len());
    for choice in choices {
        if choice.trim().is_empty() {
            return Err(ConfigurationError::invalid_option(
                question_id,
                "choices",
                "choices cannot be blank",
            ));
        }
        if !seen.insert(choice.as_str()) {
            return Err(ConfigurationError::invalid_option(
                question_id,
                "choices",
                format!("'{choice}' is listed more than once"),
            ));
        }
    }
    Ok(())
}

/// The answer as text, or a type mismatch.
pub(crate) fn expect_text<'a>(
    value: &'a AnswerValue,
    expected: &str,
) -> Result<&'a str, Violation> {
    value
        .as_str()
        .map(str::trim)
        .ok_or_else(|| Violation::type_mismatch(expected, value))
}

/// The answer as a number. Text that does not parse is `NotANumber`.
pub(crate) fn expect_number(value: &AnswerValue) -> Result<f64, Violation> {
    match value {
        AnswerValue::Number(n) if n.is_finite() => Ok(*n),
        AnswerValue::Number(_) => Err(not_a_number()),
        AnswerValue::Text(_) => value.as_number().ok_or_else(not_a_number),
        _ => Err(Violation::type_mismatch("a number", value)),
    }
}

fn not_a_number() -> Violation {
    Violation::new(ValidationErrorKind::NotANumber, "Please enter a valid number")
}

/// Render a bound without a trailing `.0` for whole numbers.
pub(crate) fn display_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
