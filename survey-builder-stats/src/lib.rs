//! # survey-builder-stats
//!
//! Pure, stateless reducers turning stored answers into chart-ready
//! statistics. Every reducer is deterministic, independent of answer order,
//! and returns a well-defined "no data" value for empty input: optional
//! numbers are `None`, counts are zero, percentages are `0.0`. No reducer ever
//! produces `NaN` or infinity.

mod choice;
pub use choice::{
    ChoiceCount, ChoiceStats, shannon_index, summarize_checkbox, summarize_single_choice,
};

mod files;
pub use files::{FileStats, summarize_files};

mod numeric;
pub use numeric::{
    HistogramBin, NumericStats, NumericSummary, ValueCount, describe, histogram, percentile,
    summarize_number, summarize_scale, summarize_slider,
};

mod temporal;
pub use temporal::{TemporalStats, summarize_date, summarize_datetime, summarize_time};

mod text;
pub use text::{
    EmailStats, PhoneStats, TextStats, WordCount, summarize_email, summarize_phone, summarize_text,
};

use serde::Serialize;

/// Statistics for one question, shaped by its question type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerStats {
    Text(TextStats),
    Email(EmailStats),
    Phone(PhoneStats),
    Numeric(NumericStats),
    Choice(ChoiceStats),
    Temporal(TemporalStats),
    Files(FileStats),
}

impl AnswerStats {
    /// Number of answers that contributed to the statistics.
    pub fn responses(&self) -> usize {
        match self {
            Self::Text(stats) => stats.responses,
            Self::Email(stats) => stats.responses,
            Self::Phone(stats) => stats.responses,
            Self::Numeric(stats) => stats.responses,
            Self::Choice(stats) => stats.responses,
            Self::Temporal(stats) => stats.responses,
            Self::Files(stats) => stats.responses,
        }
    }

    /// Whether there is nothing to chart.
    pub fn is_empty(&self) -> bool {
        self.responses() == 0
    }
}
