use serde::Serialize;
use survey_builder_types::{Answer, DateFormat, DatetimeFormat, QuestionTypeTag, TimeFormat};
use time::Weekday;

use crate::choice::ChoiceCount;
use crate::numeric::percentage;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Statistics for date, time and datetime questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalStats {
    /// Non-blank answers.
    pub responses: usize,
    /// Answers that parsed under the question's format.
    pub parsed: usize,
    /// Earliest answer, as the respondent wrote it.
    pub earliest: Option<String>,
    /// Latest answer, as the respondent wrote it.
    pub latest: Option<String>,
    /// Weekday buckets for dates, hour buckets for times.
    pub buckets: Vec<ChoiceCount>,
}

fn reduce<T: Ord + Copy>(
    answers: &[Answer],
    tag: QuestionTypeTag,
    parse: impl Fn(&str) -> Option<T>,
    labels: Vec<String>,
    bucket_of: impl Fn(T) -> usize,
) -> TemporalStats {
    let texts: Vec<String> = answers
        .iter()
        .filter_map(|answer| answer.value_for(tag))
        .filter_map(|value| value.as_str().map(|s| s.trim().to_string()))
        .filter(|text| !text.is_empty())
        .collect();

    let mut parsed: Vec<(T, &str)> = texts
        .iter()
        .filter_map(|text| parse(text).map(|value| (value, text.as_str())))
        .collect();
    // Ties on the parsed value fall back to the text so the result is order independent.
    parsed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    let mut counts = vec![0usize; labels.len()];
    for (value, _) in &parsed {
        counts[bucket_of(*value)] += 1;
    }

    TemporalStats {
        responses: texts.len(),
        parsed: parsed.len(),
        earliest: parsed.first().map(|(_, text)| text.to_string()),
        latest: parsed.last().map(|(_, text)| text.to_string()),
        buckets: labels
            .into_iter()
            .zip(counts)
            .map(|(choice, count)| ChoiceCount {
                choice,
                count,
                percentage: percentage(count, parsed.len()),
            })
            .collect(),
    }
}

fn weekday_labels() -> Vec<String> {
    WEEKDAYS.iter().map(ToString::to_string).collect()
}

/// Reducer for `date` questions.
pub fn summarize_date(format: DateFormat, answers: &[Answer]) -> TemporalStats {
    reduce(
        answers,
        QuestionTypeTag::Date,
        |text| format.parse(text).ok(),
        weekday_labels(),
        |date| usize::from(date.weekday().number_days_from_monday()),
    )
}

/// Reducer for `time` questions.
pub fn summarize_time(format: TimeFormat, answers: &[Answer]) -> TemporalStats {
    reduce(
        answers,
        QuestionTypeTag::Time,
        |text| format.parse(text).ok(),
        (0..24).map(|hour| format!("{hour:02}:00")).collect(),
        |time| usize::from(time.hour()),
    )
}

/// Reducer for `datetime` questions.
pub fn summarize_datetime(format: DatetimeFormat, answers: &[Answer]) -> TemporalStats {
    reduce(
        answers,
        QuestionTypeTag::Datetime,
        |text| format.parse(text).ok(),
        weekday_labels(),
        |datetime| usize::from(datetime.weekday().number_days_from_monday()),
    )
}

#[cfg(test)]
mod tests {
    use survey_builder_types::AnswerValue;
    use time::macros::datetime;

    use super::*;

    fn answer(text: &str) -> Answer {
        Answer::from_value("a", "q", datetime!(2024-01-01 0:00 UTC), &AnswerValue::from(text))
    }

    #[test]
    fn long_dates_order_by_value_not_by_text() {
        let answers = vec![
            answer("September 30, 2024"),
            answer("April 2, 2024"),
            answer("December 1, 2023"),
        ];
        let stats = summarize_date(DateFormat::Long, &answers);
        assert_eq!(stats.parsed, 3);
        assert_eq!(stats.earliest.as_deref(), Some("December 1, 2023"));
        assert_eq!(stats.latest.as_deref(), Some("September 30, 2024"));
    }

    #[test]
    fn weekday_buckets() {
        // 2024-10-07 is a Monday
        let answers = vec![answer("2024-10-07"), answer("2024-10-14"), answer("2024-10-13")];
        let stats = summarize_date(DateFormat::Iso, &answers);
        assert_eq!(stats.buckets.len(), 7);
        assert_eq!(stats.buckets[0].choice, "Monday");
        assert_eq!(stats.buckets[0].count, 2);
        assert_eq!(stats.buckets[6].count, 1);
    }

    #[test]
    fn unparsable_answers_are_counted_but_not_bucketed() {
        let answers = vec![answer("9:15 AM"), answer("noon"), answer("9:45 PM")];
        let stats = summarize_time(TimeFormat::Hour12, &answers);
        assert_eq!(stats.responses, 3);
        assert_eq!(stats.parsed, 2);
        assert_eq!(stats.buckets[9].count, 1);
        assert_eq!(stats.buckets[21].count, 1);
    }

    #[test]
    fn empty_input_is_no_data() {
        let stats = summarize_datetime(DatetimeFormat::Iso, &[]);
        assert_eq!(stats.responses, 0);
        assert_eq!(stats.earliest, None);
        assert!(stats.buckets.iter().all(|b| b.count == 0 && b.percentage == 0.0));
    }
}
