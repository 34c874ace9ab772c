//! Turning a question list into a schema and validating submissions with it.

use std::collections::HashMap;

use survey_builder_types::{ConfigurationError, Question, Submission};

use crate::registry;
use crate::report::{FieldError, ValidationReport};
use crate::rule::ValidationRule;

/// The validation rules of a survey, keyed by question id, plus the order the
/// questions are rendered in.
///
/// A schema is rebuilt from scratch whenever the questions change.
#[derive(Debug, Clone, Default)]
pub struct ComposedSchema {
    rules: HashMap<String, ValidationRule>,
    order: Vec<String>,
}

/// Build the schema for `questions`.
///
/// Fails on the first question whose options are inconsistent, or on a
/// repeated question id.
pub fn compose(questions: &[Question]) -> Result<ComposedSchema, ConfigurationError> {
    let mut rules = HashMap::with_capacity(questions.len());
    for question in questions {
        if rules.contains_key(question.id()) {
            return Err(ConfigurationError::DuplicateQuestionId {
                question_id: question.id().to_string(),
            });
        }
        let rule = registry::build_rule(question)?;
        tracing::trace!(
            question_id = question.id(),
            question_type = %question.question_type(),
            required = question.is_required(),
            "built validation rule"
        );
        rules.insert(question.id().to_string(), rule);
    }

    let mut ordered: Vec<&Question> = questions.iter().collect();
    ordered.sort_by_key(|question| question.order_number());
    let order = ordered.iter().map(|q| q.id().to_string()).collect();

    tracing::debug!(questions = questions.len(), "composed survey schema");
    Ok(ComposedSchema { rules, order })
}

impl ComposedSchema {
    pub fn rule(&self, question_id: &str) -> Option<&ValidationRule> {
        self.rules.get(question_id)
    }

    /// Question ids in render order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Rules in render order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &ValidationRule)> {
        self.order
            .iter()
            .filter_map(|id| self.rules.get(id).map(|rule| (id.as_str(), rule)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check a complete submission.
    ///
    /// Every question is checked; errors come in render order, followed by
    /// answers to questions the schema does not know.
    pub fn validate(&self, submission: &Submission) -> ValidationReport {
        let mut report = ValidationReport::default();
        for (question_id, rule) in self.rules() {
            match submission.get(question_id) {
                None if rule.is_required() => report.push(FieldError::missing(question_id)),
                None => {}
                Some(value) => {
                    if let Err(violation) = rule.check(value) {
                        report.push(FieldError::invalid(question_id, violation));
                    }
                }
            }
        }
        for (question_id, _) in submission.iter() {
            if !self.rules.contains_key(question_id) {
                report.push(FieldError::unknown(question_id));
            }
        }
        if !report.is_valid() {
            tracing::debug!(errors = report.len(), "submission failed validation");
        }
        report
    }
}
