use std::collections::HashSet;

use survey_builder_types::{
    AnswerValue, CheckboxOptions, ConfigurationError, DropdownOptions, MultipleChoiceOptions,
};

use super::{BuildRule, check_bounds, check_choices, expect_text};
use crate::rule::{RuleKind, ValidationErrorKind, Violation};

fn not_in_choices(value: &str) -> Violation {
    Violation::new(
        ValidationErrorKind::NotInChoices,
        format!("'{value}' is not one of the available options"),
    )
}

/// Exactly one of a fixed list, with an optional free text "Other".
#[derive(Debug, Clone, PartialEq)]
pub struct SingleChoiceRule {
    pub choices: Vec<String>,
    pub allow_other: bool,
    pub max_other_length: Option<usize>,
}

impl SingleChoiceRule {
    pub fn check(&self, value: &AnswerValue) -> Result<(), Violation> {
        let picked = expect_text(value, "a single choice")?;
        if self.choices.iter().any(|choice| choice == picked) {
            return Ok(());
        }
        if !self.allow_other {
            return Err(not_in_choices(picked));
        }
        match self.max_other_length {
            Some(max) if picked.chars().count() > max => Err(Violation::new(
                ValidationErrorKind::OtherTooLong,
                format!("Other answers must be at most {max} characters"),
            )),
            _ => Ok(()),
        }
    }
}

impl BuildRule for MultipleChoiceOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        check_choices(question_id, &self.choices)?;
        Ok(RuleKind::SingleChoice(SingleChoiceRule {
            choices: self.choices.clone(),
            allow_other: self.allow_other,
            max_other_length: self.max_length_for_other_parameter,
        }))
    }
}

impl BuildRule for DropdownOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        check_choices(question_id, &self.choices)?;
        Ok(RuleKind::SingleChoice(SingleChoiceRule {
            choices: self.choices.clone(),
            allow_other: false,
            max_other_length: None,
        }))
    }
}

/// A subset of a fixed list with a bounded size.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxRule {
    pub choices: Vec<String>,
    pub min_selections: usize,
    pub max_selections: usize,
}

impl CheckboxRule {
    pub fn check(&self, value: &AnswerValue) -> Result<(), Violation> {
        let picked = value
            .as_choices()
            .ok_or_else(|| Violation::type_mismatch("a list of choices", value))?;

        let mut seen = HashSet::with_capacity(picked.len());
        for choice in picked {
            if !self.choices.contains(choice) {
                return Err(not_in_choices(choice));
            }
            if !seen.insert(choice.as_str()) {
                return Err(Violation::new(
                    ValidationErrorKind::DuplicateSelection,
                    format!("'{choice}' was selected more than once"),
                ));
            }
        }
        self.check_count(picked.len())
    }

    pub(crate) fn check_count(&self, count: usize) -> Result<(), Violation> {
        if count < self.min_selections {
            return Err(Violation::new(
                ValidationErrorKind::TooFewSelections,
                format!("Please select at least {}", self.min_selections),
            ));
        }
        if count > self.max_selections {
            return Err(Violation::new(
                ValidationErrorKind::TooManySelections,
                format!("Please select at most {}", self.max_selections),
            ));
        }
        Ok(())
    }
}

impl BuildRule for CheckboxOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        check_choices(question_id, &self.choices)?;
        let available = self.choices.len();
        if self.min_selections > available {
            return Err(ConfigurationError::invalid_option(
                question_id,
                "minSelections",
                format!("cannot exceed the {available} available choices"),
            ));
        }
        check_bounds(
            question_id,
            ("minSelections", Some(self.min_selections)),
            ("maxSelections", self.max_selections),
        )?;
        if self.max_selections == Some(0) {
            return Err(ConfigurationError::invalid_option(
                question_id,
                "maxSelections",
                "must be at least 1",
            ));
        }
        Ok(RuleKind::Checkbox(CheckboxRule {
            choices: self.choices.clone(),
            min_selections: self.min_selections,
            max_selections: self.max_selections.unwrap_or(available).min(available),
        }))
    }
}
