use std::collections::BTreeSet;

use serde::Serialize;
use survey_builder_types::{Answer, QuestionTypeTag};

use crate::choice::ChoiceCount;
use crate::numeric::{percentage, ranked_counts};

const TOP_WORDS: usize = 20;

const STOP_WORDS: &[&str] = &[
    "and", "are", "but", "for", "from", "had", "has", "have", "her", "his", "its", "not", "that",
    "the", "their", "them", "then", "there", "they", "this", "was", "were", "with", "you", "your",
];

/// A word and how often it occurred across all answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Statistics for free text questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStats {
    /// Non-blank answers.
    pub responses: usize,
    /// Mean answer length in characters.
    pub average_length: Option<f64>,
    /// Most frequent words, for a word cloud.
    pub top_words: Vec<WordCount>,
}

/// Statistics for email questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailStats {
    pub responses: usize,
    /// Distinct addresses, compared case-insensitively.
    pub unique_addresses: usize,
    pub domains: Vec<ChoiceCount>,
}

/// Statistics for phone questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhoneStats {
    pub responses: usize,
    /// Leading `+code` of each number, or `unknown`.
    pub country_codes: Vec<ChoiceCount>,
}

fn texts(answers: &[Answer], tag: QuestionTypeTag) -> Vec<String> {
    answers
        .iter()
        .filter_map(|answer| answer.value_for(tag))
        .filter_map(|value| value.as_str().map(|s| s.trim().to_string()))
        .filter(|text| !text.is_empty())
        .collect()
}

fn counted(ranked: Vec<(String, usize)>, responses: usize) -> Vec<ChoiceCount> {
    ranked
        .into_iter()
        .map(|(choice, count)| ChoiceCount {
            choice,
            count,
            percentage: percentage(count, responses),
        })
        .collect()
}

/// Reducer for `text` questions.
pub fn summarize_text(answers: &[Answer]) -> TextStats {
    let texts = texts(answers, QuestionTypeTag::Text);
    let total_chars: usize = texts.iter().map(|text| text.chars().count()).sum();

    let words: Vec<String> = texts
        .iter()
        .flat_map(|text| text.split(|c: char| !c.is_alphanumeric() && c != '\''))
        .map(|word| word.trim_matches('\'').to_lowercase())
        .filter(|word| word.chars().count() >= 3 && !STOP_WORDS.contains(&word.as_str()))
        .collect();

    let top_words = ranked_counts(words.iter().map(String::as_str))
        .into_iter()
        .take(TOP_WORDS)
        .map(|(word, count)| WordCount { word, count })
        .collect();

    TextStats {
        responses: texts.len(),
        average_length: (!texts.is_empty()).then(|| total_chars as f64 / texts.len() as f64),
        top_words,
    }
}

/// Reducer for `email` questions.
pub fn summarize_email(answers: &[Answer]) -> EmailStats {
    let addresses: Vec<String> = texts(answers, QuestionTypeTag::Email)
        .into_iter()
        .map(|address| address.to_lowercase())
        .collect();
    let unique: BTreeSet<&str> = addresses.iter().map(String::as_str).collect();
    let domains = ranked_counts(
        addresses
            .iter()
            .filter_map(|address| address.rsplit_once('@').map(|(_, domain)| domain)),
    );

    EmailStats {
        responses: addresses.len(),
        unique_addresses: unique.len(),
        domains: counted(domains, addresses.len()),
    }
}

fn country_code(number: &str) -> &str {
    let Some(rest) = number.strip_prefix('+') else {
        return "unknown";
    };
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || digits > 3 {
        return "unknown";
    }
    &number[..=digits]
}

/// Reducer for `phone` questions.
pub fn summarize_phone(answers: &[Answer]) -> PhoneStats {
    let numbers = texts(answers, QuestionTypeTag::Phone);
    let codes = ranked_counts(numbers.iter().map(|number| country_code(number)));
    PhoneStats {
        responses: numbers.len(),
        country_codes: counted(codes, numbers.len()),
    }
}
