//! Descriptive statistics over numeric answers.

use std::collections::BTreeMap;

use serde::Serialize;
use survey_builder_types::{Answer, AnswerValue, QuestionTypeTag};

/// Summary of a non-empty set of numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p25: f64,
    pub p75: f64,
}

/// One bar of a histogram. The last bin includes its upper edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// How often one exact value was given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueCount {
    pub value: f64,
    pub count: usize,
    pub percentage: f64,
}

/// Statistics for number, scale, slider, likert and rating questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericStats {
    /// Answers that carried a usable number.
    pub responses: usize,
    /// `None` when there is no data.
    pub summary: Option<NumericSummary>,
    pub histogram: Vec<HistogramBin>,
    /// Per-value counts, ascending by value.
    pub distribution: Vec<ValueCount>,
}

impl NumericStats {
    /// Reduce a list of numbers. Non-finite values are ignored.
    pub fn from_values(values: &[f64]) -> Self {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        sorted.sort_by(f64::total_cmp);
        Self {
            responses: sorted.len(),
            summary: describe_sorted(&sorted),
            histogram: histogram_sorted(&sorted),
            distribution: distribution_sorted(&sorted),
        }
    }
}

/// Summarize a set of numbers; `None` if no finite value is present.
pub fn describe(values: &[f64]) -> Option<NumericSummary> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    describe_sorted(&sorted)
}

fn describe_sorted(sorted: &[f64]) -> Option<NumericSummary> {
    let (&min, &max) = (sorted.first()?, sorted.last()?);
    let n = sorted.len() as f64;
    // Work in units of the largest magnitude so sums of huge values stay finite.
    let scale = min.abs().max(max.abs());
    let scale = if scale > 0.0 { scale } else { 1.0 };
    let scaled_mean = sorted.iter().map(|v| v / scale).sum::<f64>() / n;
    let scaled_variance = sorted
        .iter()
        .map(|v| (v / scale - scaled_mean).powi(2))
        .sum::<f64>()
        / n;
    let mean = (scaled_mean * scale).clamp(min, max);
    // Population deviation never exceeds half the spread.
    let std_dev = (scaled_variance.sqrt() * scale).min(max / 2.0 - min / 2.0);
    Some(NumericSummary {
        count: sorted.len(),
        mean,
        median: percentile(sorted, 0.5),
        std_dev,
        min,
        max,
        p25: percentile(sorted, 0.25),
        p75: percentile(sorted, 0.75),
    })
}

/// Point at fraction `t` of the way from `a` to `b`. Monotone in `t` and
/// finite for any finite endpoints.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let span = b - a;
    let value = if span.is_finite() {
        a + span * t
    } else {
        2.0 * (a / 2.0 + (b / 2.0 - a / 2.0) * t)
    };
    value.clamp(a.min(b), a.max(b))
}

/// Linear-interpolated percentile of ascending `sorted`; `p` in `[0, 1]`.
///
/// Returns 0 for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        len => {
            let rank = p.clamp(0.0, 1.0) * (len - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            lerp(sorted[lower], sorted[upper], rank - lower as f64)
        }
    }
}

/// Bin values with Sturges' rule.
pub fn histogram(values: &[f64]) -> Vec<HistogramBin> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    histogram_sorted(&sorted)
}

fn histogram_sorted(sorted: &[f64]) -> Vec<HistogramBin> {
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };
    if min == max {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: sorted.len(),
        }];
    }

    let bins = (sorted.len() as f64).log2().ceil() as usize + 1;
    let edge = |idx: usize| lerp(min, max, idx as f64 / bins as f64);
    // Halved so the spread of values near the float limits stays finite.
    let half_width = (max / 2.0 - min / 2.0) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in sorted {
        let offset = value / 2.0 - min / 2.0;
        let idx = ((offset / half_width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            lower: edge(idx),
            upper: if idx + 1 == bins { max } else { edge(idx + 1) },
            count,
        })
        .collect()
}

fn distribution_sorted(sorted: &[f64]) -> Vec<ValueCount> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &value in sorted {
        match counts.last_mut() {
            Some((last, count)) if *last == value => *count += 1,
            _ => counts.push((value, 1)),
        }
    }
    counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value,
            count,
            percentage: percentage(count, sorted.len()),
        })
        .collect()
}

pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// Numbers stored for a numeric question type.
pub(crate) fn numbers(answers: &[Answer], tag: QuestionTypeTag) -> Vec<f64> {
    answers
        .iter()
        .filter_map(|answer| match answer.value_for(tag)? {
            AnswerValue::Range(low, high) => Some(low / 2.0 + high / 2.0),
            value => value.as_number(),
        })
        .collect()
}

/// Reducer for `number` questions.
pub fn summarize_number(answers: &[Answer]) -> NumericStats {
    let mut stats = NumericStats::from_values(&numbers(answers, QuestionTypeTag::Number));
    // Free-form numbers rarely repeat; the histogram carries the shape.
    stats.distribution.clear();
    stats
}

/// Reducer for `linear_scale`, `likert` and `rating` questions.
pub fn summarize_scale(answers: &[Answer]) -> NumericStats {
    let mut stats = NumericStats::from_values(&numbers(answers, QuestionTypeTag::Rating));
    stats.histogram.clear();
    stats
}

/// Reducer for `slider` questions. Range answers count with their midpoint.
pub fn summarize_slider(answers: &[Answer]) -> NumericStats {
    NumericStats::from_values(&numbers(answers, QuestionTypeTag::Slider))
}

/// Group equal labels and count them, most frequent first.
pub(crate) fn ranked_counts<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn describe_known_values() {
        let summary = describe(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.count, 8);
        assert!(close(summary.mean, 5.0));
        assert!(close(summary.std_dev, 2.0));
        assert!(close(summary.median, 4.5));
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
    }

    #[test]
    fn describe_empty_is_none() {
        assert!(describe(&[]).is_none());
        assert!(describe(&[f64::NAN, f64::INFINITY]).is_none());
    }

    #[test]
    fn percentile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!(close(percentile(&sorted, 0.25), 1.75));
        assert!(close(percentile(&sorted, 1.0), 4.0));
        assert_eq!(percentile(&[], 0.5), 0.0);
    }

    #[test]
    fn histogram_uses_sturges_bins() {
        let values: Vec<f64> = (1..=8).map(f64::from).collect();
        let bins = histogram(&values);
        // log2(8) + 1 = 4 bins
        assert_eq!(bins.len(), 4);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 8);
        assert_eq!(bins.last().unwrap().upper, 8.0);
    }

    #[test]
    fn histogram_of_identical_values_is_one_bin() {
        let bins = histogram(&[3.0, 3.0, 3.0]);
        assert_eq!(
            bins,
            vec![HistogramBin {
                lower: 3.0,
                upper: 3.0,
                count: 3
            }]
        );
    }

    #[test]
    fn distribution_counts_each_value() {
        let stats = NumericStats::from_values(&[5.0, 3.0, 5.0, 1.0]);
        let values: Vec<(f64, usize)> = stats
            .distribution
            .iter()
            .map(|entry| (entry.value, entry.count))
            .collect();
        assert_eq!(values, vec![(1.0, 1), (3.0, 1), (5.0, 2)]);
        assert!(close(stats.distribution[2].percentage, 50.0));
    }

    #[test]
    fn values_near_the_float_limits_stay_finite() {
        let summary = describe(&[1.0e308, 1.0e308]).unwrap();
        assert_eq!(summary.mean, 1.0e308);
        assert_eq!(summary.std_dev, 0.0);

        let stats = NumericStats::from_values(&[f64::MAX, -f64::MAX, 0.0]);
        let summary = stats.summary.unwrap();
        assert!(close(summary.mean, 0.0));
        assert!(summary.std_dev.is_finite() && summary.std_dev > 0.0);
        assert_eq!(summary.median, 0.0);
        assert!(summary.p25.is_finite() && summary.p75.is_finite());

        assert_eq!(stats.histogram.len(), 3);
        assert_eq!(stats.histogram[0].lower, -f64::MAX);
        assert_eq!(stats.histogram[2].upper, f64::MAX);
        for bin in &stats.histogram {
            assert!(bin.lower.is_finite() && bin.upper.is_finite());
            assert!(bin.lower <= bin.upper);
        }
        let counts: Vec<usize> = stats.histogram.iter().map(|bin| bin.count).collect();
        assert_eq!(counts, vec![1, 1, 1]);
    }

    #[test]
    fn slider_range_midpoint_does_not_overflow() {
        let answers = [Answer::from_value(
            "a",
            "q",
            time::macros::datetime!(2024-01-01 0:00 UTC),
            &AnswerValue::Range(f64::MAX, f64::MAX),
        )];
        let stats = summarize_slider(&answers);
        assert_eq!(stats.summary.unwrap().mean, f64::MAX);
    }

    #[test]
    fn ranked_counts_break_ties_alphabetically() {
        let ranked = ranked_counts(["b", "a", "b", "c", "a"]);
        assert_eq!(
            ranked,
            vec![("a".to_string(), 2), ("b".to_string(), 2), ("c".to_string(), 1)]
        );
    }
}
