use std::fmt::Debug;

use survey_builder_types::{
    AnswerValue, ConfigurationError, DateFormat, DateOptions, DatetimeFormat, DatetimeOptions,
    TimeFormat, TimeOptions,
};
use time::{Date, PrimitiveDateTime, Time};

use super::{BuildRule, expect_text};
use crate::rule::{RuleKind, ValidationErrorKind, Violation};

/// A display format for date-like answers.
pub trait TemporalFormat: Copy + Debug + PartialEq {
    /// The parsed value bounds are compared on.
    type Value: Copy + Debug + PartialEq + PartialOrd;

    /// Field names of the lower and upper bound in the option record.
    const BOUND_FIELDS: (&'static str, &'static str);

    fn pattern(self) -> &'static str;

    fn parse_answer(self, input: &str) -> Option<Self::Value>;

    fn parse_bound(self, input: &str) -> Option<Self::Value>;
}

impl TemporalFormat for DateFormat {
    type Value = Date;
    const BOUND_FIELDS: (&'static str, &'static str) = ("minDate", "maxDate");

    fn pattern(self) -> &'static str {
        DateFormat::pattern(self)
    }

    fn parse_answer(self, input: &str) -> Option<Date> {
        self.parse(input).ok()
    }

    fn parse_bound(self, input: &str) -> Option<Date> {
        DateFormat::parse_bound(self, input).ok()
    }
}

impl TemporalFormat for TimeFormat {
    type Value = Time;
    const BOUND_FIELDS: (&'static str, &'static str) = ("minTime", "maxTime");

    fn pattern(self) -> &'static str {
        TimeFormat::pattern(self)
    }

    fn parse_answer(self, input: &str) -> Option<Time> {
        self.parse(input).ok()
    }

    fn parse_bound(self, input: &str) -> Option<Time> {
        TimeFormat::parse_bound(self, input).ok()
    }
}

impl TemporalFormat for DatetimeFormat {
    type Value = PrimitiveDateTime;
    const BOUND_FIELDS: (&'static str, &'static str) = ("minDatetime", "maxDatetime");

    fn pattern(self) -> &'static str {
        DatetimeFormat::pattern(self)
    }

    fn parse_answer(self, input: &str) -> Option<PrimitiveDateTime> {
        self.parse(input).ok()
    }

    fn parse_bound(self, input: &str) -> Option<PrimitiveDateTime> {
        DatetimeFormat::parse_bound(self, input).ok()
    }
}

/// One inclusive bound, kept with the text the author wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound<T> {
    pub value: T,
    pub text: String,
}

/// A date, time or datetime answer in a fixed format, optionally bounded.
///
/// Bounds are compared on parsed values, so `MM/DD/YYYY` answers order by
/// date and not by their text.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalRule<F: TemporalFormat> {
    pub format: F,
    pub min: Option<Bound<F::Value>>,
    pub max: Option<Bound<F::Value>>,
}

impl<F: TemporalFormat> TemporalRule<F> {
    /// Parse the bounds and make sure they are ordered.
    pub fn new(
        question_id: &str,
        format: F,
        min: Option<&str>,
        max: Option<&str>,
    ) -> Result<Self, ConfigurationError> {
        let (min_field, max_field) = F::BOUND_FIELDS;
        let min = parse_bound(question_id, format, min_field, min)?;
        let max = parse_bound(question_id, format, max_field, max)?;
        if let (Some(min), Some(max)) = (&min, &max) {
            if min.value > max.value {
                return Err(ConfigurationError::invalid_bounds(
                    question_id,
                    min_field,
                    max_field,
                    &min.text,
                    &max.text,
                ));
            }
        }
        Ok(Self { format, min, max })
    }

    pub fn check(&self, value: &AnswerValue) -> Result<(), Violation> {
        let text = expect_text(value, "a date or time")?;
        let Some(parsed) = self.format.parse_answer(text) else {
            return Err(Violation::new(
                ValidationErrorKind::FormatMismatch,
                format!("Please use the format {}", self.format.pattern()),
            ));
        };
        if let Some(min) = self.min.as_ref().filter(|min| parsed < min.value) {
            return Err(Violation::new(
                ValidationErrorKind::OutOfRange,
                format!("Must be on or after {}", min.text),
            ));
        }
        if let Some(max) = self.max.as_ref().filter(|max| parsed > max.value) {
            return Err(Violation::new(
                ValidationErrorKind::OutOfRange,
                format!("Must be on or before {}", max.text),
            ));
        }
        Ok(())
    }
}

fn parse_bound<F: TemporalFormat>(
    question_id: &str,
    format: F,
    field: &'static str,
    input: Option<&str>,
) -> Result<Option<Bound<F::Value>>, ConfigurationError> {
    let Some(text) = input.map(str::trim).filter(|text| !text.is_empty()) else {
        return Ok(None);
    };
    format
        .parse_bound(text)
        .map(|value| {
            Some(Bound {
                value,
                text: text.to_string(),
            })
        })
        .ok_or_else(|| {
            ConfigurationError::invalid_option(
                question_id,
                field,
                format!("'{text}' does not match {}", format.pattern()),
            )
        })
}

impl BuildRule for DateOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        TemporalRule::new(
            question_id,
            self.format,
            self.min_date.as_deref(),
            self.max_date.as_deref(),
        )
        .map(RuleKind::Date)
    }
}

impl BuildRule for TimeOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        TemporalRule::new(
            question_id,
            self.format,
            self.min_time.as_deref(),
            self.max_time.as_deref(),
        )
        .map(RuleKind::Time)
    }
}

impl BuildRule for DatetimeOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        TemporalRule::new(
            question_id,
            self.format,
            self.min_datetime.as_deref(),
            self.max_datetime.as_deref(),
        )
        .map(RuleKind::Datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(result: Result<(), Violation>) -> ValidationErrorKind {
        result.unwrap_err().kind
    }

    #[test]
    fn us_dates_compare_by_value() {
        let rule = TemporalRule::new(
            "q",
            DateFormat::MonthDayYear,
            Some("02/01/2024"),
            Some("11/30/2024"),
        )
        .unwrap();
        // "10/..." sorts before "02/..." as text but is later in the year.
        assert!(rule.check(&"10/05/2024".into()).is_ok());
        assert_eq!(
            kind(rule.check(&"01/15/2024".into())),
            ValidationErrorKind::OutOfRange
        );
        assert_eq!(
            kind(rule.check(&"12/01/2024".into())),
            ValidationErrorKind::OutOfRange
        );
    }

    #[test]
    fn wrong_layout_is_a_format_mismatch() {
        let rule = TemporalRule::new("q", DateFormat::Iso, None, None).unwrap();
        assert_eq!(
            kind(rule.check(&"10/05/2024".into())),
            ValidationErrorKind::FormatMismatch
        );
        assert_eq!(
            kind(rule.check(&AnswerValue::Number(20240105.0))),
            ValidationErrorKind::TypeMismatch
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let rule = TemporalRule::new(
            "q",
            TimeFormat::Hour24,
            Some("09:00"),
            Some("17:00"),
        )
        .unwrap();
        assert!(rule.check(&"09:00".into()).is_ok());
        assert!(rule.check(&"17:00".into()).is_ok());
        assert_eq!(
            kind(rule.check(&"17:01".into())),
            ValidationErrorKind::OutOfRange
        );
    }

    #[test]
    fn unparsable_bound_names_the_field() {
        let options = DateOptions {
            min_date: Some("soon".to_string()),
            ..DateOptions::default()
        };
        assert_eq!(options.build_rule("q").unwrap_err().field(), Some("minDate"));
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        let options = DatetimeOptions {
            min_datetime: Some("2024-06-01T12:00".to_string()),
            max_datetime: Some("2024-05-01T12:00".to_string()),
            ..DatetimeOptions::default()
        };
        assert!(matches!(
            options.build_rule("q"),
            Err(ConfigurationError::InvalidBounds { .. })
        ));
    }
}
