use survey_builder_types::{
    AnswerValue, ConfigurationError, LikertOptions, LinearScaleOptions, NumberOptions,
    RatingOptions, SliderOptions,
};

use super::{BuildRule, check_bounds, check_finite, display_number, expect_number};
use crate::rule::{RuleKind, ValidationErrorKind, Violation};

const STEP_TOLERANCE: f64 = 1e-9;

fn out_of_range(min: Option<f64>, max: Option<f64>) -> Violation {
    let message = match (min, max) {
        (Some(min), Some(max)) => format!(
            "Value must be between {} and {}",
            display_number(min),
            display_number(max)
        ),
        (Some(min), None) => format!("Value must be at least {}", display_number(min)),
        (None, Some(max)) => format!("Value must be at most {}", display_number(max)),
        (None, None) => "Value is out of range".to_string(),
    };
    Violation::new(ValidationErrorKind::OutOfRange, message)
}

fn whole_number_required() -> Violation {
    Violation::new(
        ValidationErrorKind::DecimalNotAllowed,
        "Please enter a whole number",
    )
}

/// Free numeric input.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberRule {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub allow_decimal: bool,
}

impl NumberRule {
    pub fn check(&self, value: &AnswerValue) -> Result<(), Violation> {
        let number = expect_number(value)?;
        if self.min.is_some_and(|min| number < min) || self.max.is_some_and(|max| number > max) {
            return Err(out_of_range(self.min, self.max));
        }
        if !self.allow_decimal && number.fract() != 0.0 {
            return Err(whole_number_required());
        }
        Ok(())
    }
}

impl BuildRule for NumberOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        if let Some(min) = self.min {
            check_finite(question_id, "min", min)?;
        }
        if let Some(max) = self.max {
            check_finite(question_id, "max", max)?;
        }
        check_bounds(question_id, ("min", self.min), ("max", self.max))?;
        Ok(RuleKind::Number(NumberRule {
            min: self.min,
            max: self.max,
            allow_decimal: self.allow_decimal,
        }))
    }
}

/// A bounded scale: linear scale, slider, likert or rating.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRule {
    pub min: f64,
    pub max: f64,
    /// Answers must sit on `min + k * step`.
    pub step: Option<f64>,
    /// Only whole numbers are accepted.
    pub integer: bool,
    /// Answers are `[low, high]` pairs.
    pub range: bool,
}

impl ScaleRule {
    pub fn check(&self, value: &AnswerValue) -> Result<(), Violation> {
        if !self.range {
            return self.check_point(expect_number(value)?);
        }
        let Some((low, high)) = value.as_range() else {
            return Err(Violation::type_mismatch("a [low, high] range", value));
        };
        if low > high {
            return Err(Violation::new(
                ValidationErrorKind::InvalidRange,
                "The start of the range must not exceed its end",
            ));
        }
        self.check_point(low)?;
        self.check_point(high)
    }

    fn check_point(&self, value: f64) -> Result<(), Violation> {
        if !value.is_finite() {
            return Err(Violation::new(
                ValidationErrorKind::NotANumber,
                "Please enter a valid number",
            ));
        }
        if self.integer && value.fract() != 0.0 {
            return Err(whole_number_required());
        }
        if value < self.min || value > self.max {
            return Err(out_of_range(Some(self.min), Some(self.max)));
        }
        if let Some(step) = self.step {
            let steps = (value - self.min) / step;
            if (steps - steps.round()).abs() > STEP_TOLERANCE {
                return Err(Violation::new(
                    ValidationErrorKind::StepMismatch,
                    format!(
                        "Value must be a multiple of {} from {}",
                        display_number(step),
                        display_number(self.min)
                    ),
                ));
            }
        }
        Ok(())
    }
}

fn check_scale(
    question_id: &str,
    min: f64,
    max: f64,
    step: Option<f64>,
) -> Result<(), ConfigurationError> {
    check_finite(question_id, "min", min)?;
    check_finite(question_id, "max", max)?;
    check_bounds(question_id, ("min", Some(min)), ("max", Some(max)))?;
    if let Some(step) = step {
        if !(step.is_finite() && step > 0.0) {
            return Err(ConfigurationError::invalid_option(
                question_id,
                "step",
                "must be a positive number",
            ));
        }
    }
    Ok(())
}

impl BuildRule for LinearScaleOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        check_scale(question_id, self.min, self.max, self.step)?;
        Ok(RuleKind::Scale(ScaleRule {
            min: self.min,
            max: self.max,
            step: self.step,
            integer: false,
            range: false,
        }))
    }
}

impl BuildRule for SliderOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        check_scale(question_id, self.min, self.max, self.step)?;
        if let Some(default) = self.default_value {
            if !(self.min..=self.max).contains(&default) {
                return Err(ConfigurationError::invalid_option(
                    question_id,
                    "defaultValue",
                    format!(
                        "must lie between {} and {}",
                        display_number(self.min),
                        display_number(self.max)
                    ),
                ));
            }
        }
        Ok(RuleKind::Scale(ScaleRule {
            min: self.min,
            max: self.max,
            step: self.step,
            integer: false,
            range: self.range,
        }))
    }
}

impl BuildRule for LikertOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        if !(2..=7).contains(&self.scale) {
            return Err(ConfigurationError::invalid_option(
                question_id,
                "scale",
                "must be between 2 and 7",
            ));
        }
        if self.labels.len() != usize::from(self.scale) {
            return Err(ConfigurationError::invalid_option(
                question_id,
                "labels",
                format!("expected {} labels, got {}", self.scale, self.labels.len()),
            ));
        }
        for (idx, label) in self.labels.iter().enumerate() {
            if self.labels[..idx].contains(label) {
                return Err(ConfigurationError::invalid_option(
                    question_id,
                    "labels",
                    format!("'{label}' is listed more than once"),
                ));
            }
        }
        Ok(RuleKind::Scale(ScaleRule {
            min: 1.0,
            max: f64::from(self.scale),
            step: None,
            integer: true,
            range: false,
        }))
    }
}

impl BuildRule for RatingOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        if !(1..=10).contains(&self.max) {
            return Err(ConfigurationError::invalid_option(
                question_id,
                "max",
                "must be between 1 and 10",
            ));
        }
        Ok(RuleKind::Scale(ScaleRule {
            min: 1.0,
            max: f64::from(self.max),
            step: None,
            integer: true,
            range: false,
        }))
    }
}
