//! Frequencies and diversity for choice-based questions.

use serde::Serialize;
use survey_builder_types::{Answer, AnswerValue, QuestionTypeTag};

use crate::numeric::{percentage, ranked_counts};

/// How many respondents picked one choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceCount {
    pub choice: String,
    pub count: usize,
    /// Share of responses that picked this choice, 0 to 100.
    pub percentage: f64,
}

/// Statistics for multiple choice, dropdown and checkbox questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceStats {
    pub responses: usize,
    /// Sum of all picks. Equals `responses` for single-choice questions.
    pub total_selections: usize,
    /// Configured choices first, in authoring order (including unpicked
    /// ones), then "other" answers by frequency.
    pub frequencies: Vec<ChoiceCount>,
    /// Shannon diversity index (natural log) of the picks.
    pub diversity: Option<f64>,
    /// Mean number of picks per response.
    pub average_selections: Option<f64>,
}

/// Shannon diversity index `H = -Σ p ln p` over the given counts.
///
/// `None` when all counts are zero. A single non-empty category gives 0.
pub fn shannon_index(counts: impl IntoIterator<Item = usize>) -> Option<f64> {
    let counts: Vec<usize> = counts.into_iter().filter(|&c| c > 0).collect();
    let total: usize = counts.iter().sum();
    if total == 0 {
        return None;
    }
    let total = total as f64;
    let h = counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.ln()
        })
        .sum::<f64>();
    // -0.0 for a single category
    Some(h.abs())
}

fn build(choices: &[String], picks: Vec<Vec<String>>) -> ChoiceStats {
    let responses = picks.len();
    let flat: Vec<&str> = picks.iter().flatten().map(String::as_str).collect();
    let total_selections = flat.len();

    let mut frequencies: Vec<ChoiceCount> = choices
        .iter()
        .map(|choice| {
            let count = flat.iter().filter(|pick| **pick == choice.as_str()).count();
            ChoiceCount {
                choice: choice.clone(),
                count,
                percentage: percentage(count, responses),
            }
        })
        .collect();

    let others = ranked_counts(
        flat.iter()
            .copied()
            .filter(|pick| !choices.iter().any(|choice| choice == pick)),
    );
    frequencies.extend(others.into_iter().map(|(choice, count)| ChoiceCount {
        choice,
        count,
        percentage: percentage(count, responses),
    }));

    ChoiceStats {
        responses,
        total_selections,
        diversity: shannon_index(frequencies.iter().map(|entry| entry.count)),
        average_selections: (responses > 0)
            .then(|| total_selections as f64 / responses as f64),
        frequencies,
    }
}

/// Reducer for `multiple_choice` and `dropdown` questions.
pub fn summarize_single_choice(choices: &[String], answers: &[Answer]) -> ChoiceStats {
    let picks = answers
        .iter()
        .filter_map(|answer| answer.value_for(QuestionTypeTag::Dropdown))
        .filter_map(|value| match value {
            AnswerValue::Text(text) if !text.trim().is_empty() => Some(vec![text]),
            _ => None,
        })
        .collect();
    build(choices, picks)
}

/// Reducer for `checkbox` questions.
pub fn summarize_checkbox(choices: &[String], answers: &[Answer]) -> ChoiceStats {
    let picks = answers
        .iter()
        .filter_map(|answer| answer.value_for(QuestionTypeTag::Checkbox))
        .filter_map(|value| match value {
            AnswerValue::Choices(mut picked) => {
                picked.sort();
                picked.dedup();
                Some(picked)
            }
            _ => None,
        })
        .collect();
    build(choices, picks)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn answer(value: impl Into<AnswerValue>) -> Answer {
        Answer::from_value("a", "q", datetime!(2024-01-01 0:00 UTC), &value.into())
    }

    fn choices() -> Vec<String> {
        vec!["red".into(), "green".into(), "blue".into()]
    }

    #[test]
    fn shannon_of_uniform_distribution_is_ln_n() {
        let h = shannon_index([5, 5, 5, 5]).unwrap();
        assert!((h - 4f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn shannon_of_single_category_is_zero() {
        assert_eq!(shannon_index([7, 0]), Some(0.0));
        assert_eq!(shannon_index([0, 0]), None);
    }

    #[test]
    fn single_choice_keeps_authoring_order_and_zero_counts() {
        let answers = vec![answer("blue"), answer("blue"), answer("red"), answer("teal")];
        let stats = summarize_single_choice(&choices(), &answers);

        let labels: Vec<(&str, usize)> = stats
            .frequencies
            .iter()
            .map(|entry| (entry.choice.as_str(), entry.count))
            .collect();
        assert_eq!(
            labels,
            vec![("red", 1), ("green", 0), ("blue", 2), ("teal", 1)]
        );
        assert_eq!(stats.responses, 4);
        assert_eq!(stats.frequencies[2].percentage, 50.0);
    }

    #[test]
    fn checkbox_percentages_are_per_response() {
        let answers = vec![
            answer(vec!["red", "green"]),
            answer(vec!["red"]),
            answer(vec!["red", "red"]),
        ];
        let stats = summarize_checkbox(&choices(), &answers);
        assert_eq!(stats.responses, 3);
        assert_eq!(stats.total_selections, 4);
        assert_eq!(stats.frequencies[0].percentage, 100.0);
        assert!((stats.average_selections.unwrap() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_has_no_diversity() {
        let stats = summarize_checkbox(&choices(), &[]);
        assert_eq!(stats.responses, 0);
        assert_eq!(stats.diversity, None);
        assert_eq!(stats.average_selections, None);
        assert!(stats.frequencies.iter().all(|entry| entry.percentage == 0.0));
    }
}
