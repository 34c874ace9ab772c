use std::sync::LazyLock;

use regex::Regex;
use survey_builder_types::{
    AnswerValue, ConfigurationError, EmailOptions, PhoneOptions, TextOptions,
};

use super::{BuildRule, check_bounds, expect_text};
use crate::rule::{RuleKind, ValidationErrorKind, Violation};

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static PHONE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ().\-]*$").ok());

fn check_length(
    length: usize,
    min: Option<usize>,
    max: Option<usize>,
    noun: &str,
) -> Result<(), Violation> {
    if let Some(min) = min.filter(|&min| length < min) {
        return Err(Violation::new(
            ValidationErrorKind::LengthOutOfBounds,
            format!("{noun} must be at least {min} characters"),
        ));
    }
    if let Some(max) = max.filter(|&max| length > max) {
        return Err(Violation::new(
            ValidationErrorKind::LengthOutOfBounds,
            format!("{noun} must be at most {max} characters"),
        ));
    }
    Ok(())
}

/// Length limits on free text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRule {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl TextRule {
    pub fn check(&self, value: &AnswerValue) -> Result<(), Violation> {
        let text = expect_text(value, "text")?;
        check_length(
            text.chars().count(),
            self.min_length,
            self.max_length,
            "Answer",
        )
    }
}

impl BuildRule for TextOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        check_bounds(
            question_id,
            ("minAnswerLength", self.min_answer_length),
            ("maxAnswerLength", self.max_answer_length),
        )?;
        Ok(RuleKind::Text(TextRule {
            min_length: self.min_answer_length,
            max_length: self.max_answer_length,
        }))
    }
}

/// Email syntax, length and domain restrictions.
///
/// Domains are stored lowercased without a leading `@` and compared
/// case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailRule {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub allowed_domains: Vec<String>,
    pub disallowed_domains: Vec<String>,
}

fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_start_matches('@').to_lowercase()
}

impl EmailRule {
    pub fn check(&self, value: &AnswerValue) -> Result<(), Violation> {
        let email = expect_text(value, "an email address")?;
        let well_formed = EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email));
        let Some((_, domain)) = email.rsplit_once('@').filter(|_| well_formed) else {
            return Err(Violation::new(
                ValidationErrorKind::InvalidEmail,
                "Please enter a valid email address",
            ));
        };

        check_length(
            email.chars().count(),
            self.min_length,
            self.max_length,
            "Email",
        )?;

        let domain = domain.to_lowercase();
        if !self.allowed_domains.is_empty() && !self.allowed_domains.contains(&domain) {
            return Err(Violation::new(
                ValidationErrorKind::DomainNotAllowed,
                format!(
                    "Email must use one of these domains: {}",
                    self.allowed_domains.join(", ")
                ),
            ));
        }
        if self.disallowed_domains.contains(&domain) {
            return Err(Violation::new(
                ValidationErrorKind::DomainDisallowed,
                format!("Email addresses at {domain} are not accepted"),
            ));
        }
        Ok(())
    }
}

impl BuildRule for EmailOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        check_bounds(
            question_id,
            ("minEmailLength", self.min_email_length),
            ("maxEmailLength", self.max_email_length),
        )?;
        if !self.allowed_domains.is_empty() && !self.disallowed_domains.is_empty() {
            return Err(ConfigurationError::ConflictingDomainLists {
                question_id: question_id.to_string(),
            });
        }
        let normalize = |domains: &[String]| -> Vec<String> {
            domains
                .iter()
                .map(|d| normalize_domain(d))
                .filter(|d| !d.is_empty())
                .collect()
        };
        Ok(RuleKind::Email(EmailRule {
            min_length: self.min_email_length,
            max_length: self.max_email_length,
            allowed_domains: normalize(&self.allowed_domains),
            disallowed_domains: normalize(&self.disallowed_domains),
        }))
    }
}

/// Phone number characters and digit count.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneRule {
    pub min_digits: usize,
    pub max_digits: usize,
}

impl PhoneRule {
    pub fn check(&self, value: &AnswerValue) -> Result<(), Violation> {
        let phone = expect_text(value, "a phone number")?;
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        let well_formed = PHONE_RE.as_ref().is_some_and(|re| re.is_match(phone));
        if !well_formed || digits < self.min_digits || digits > self.max_digits {
            return Err(Violation::new(
                ValidationErrorKind::InvalidPhone,
                format!(
                    "Please enter a phone number with {} to {} digits",
                    self.min_digits, self.max_digits
                ),
            ));
        }
        Ok(())
    }
}

impl BuildRule for PhoneOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        if self.min_digits == 0 {
            return Err(ConfigurationError::invalid_option(
                question_id,
                "minDigits",
                "must be at least 1",
            ));
        }
        check_bounds(
            question_id,
            ("minDigits", Some(self.min_digits)),
            ("maxDigits", Some(self.max_digits)),
        )?;
        Ok(RuleKind::Phone(PhoneRule {
            min_digits: self.min_digits,
            max_digits: self.max_digits,
        }))
    }
}
