//! Display formats accepted by date, time and datetime questions.
//!
//! Answers and option bounds are written in these formats. Comparison always
//! happens on the parsed values: only the ISO layouts sort correctly as raw
//! strings.

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

type Description = &'static [BorrowedFormatItem<'static>];

const ISO_DATE: Description = format_description!("[year]-[month]-[day]");
const ISO_TIME: Description = format_description!("[hour]:[minute]");
const ISO_DATETIME: Description = format_description!("[year]-[month]-[day]T[hour]:[minute]");

/// Layout of a date answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateFormat {
    /// `2024-10-05`
    #[default]
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
    /// `10/05/2024`
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    /// `05/10/2024`
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    /// `October 5, 2024`
    #[serde(rename = "MMMM D, YYYY")]
    Long,
}

impl DateFormat {
    /// The pattern as shown to survey authors.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Iso => "YYYY-MM-DD",
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::Long => "MMMM D, YYYY",
        }
    }

    fn description(self) -> Description {
        match self {
            Self::Iso => ISO_DATE,
            Self::MonthDayYear => format_description!("[month]/[day]/[year]"),
            Self::DayMonthYear => format_description!("[day]/[month]/[year]"),
            Self::Long => format_description!(
                "[month repr:long case_sensitive:false] [day padding:none], [year]"
            ),
        }
    }

    /// Parse an answer written in this format.
    pub fn parse(self, input: &str) -> Result<Date, time::error::Parse> {
        Date::parse(input.trim(), self.description())
    }

    /// Parse an option bound: this format first, then ISO.
    pub fn parse_bound(self, input: &str) -> Result<Date, time::error::Parse> {
        self.parse(input)
            .or_else(|err| Date::parse(input.trim(), ISO_DATE).map_err(|_| err))
    }
}

/// Layout of a time-of-day answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// `14:30`
    #[default]
    #[serde(rename = "HH:mm")]
    Hour24,
    /// `14:30:15`
    #[serde(rename = "HH:mm:ss")]
    Hour24Seconds,
    /// `2:30 PM`
    #[serde(rename = "hh:mm A")]
    Hour12,
}

impl TimeFormat {
    /// The pattern as shown to survey authors.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Hour24 => "HH:mm",
            Self::Hour24Seconds => "HH:mm:ss",
            Self::Hour12 => "hh:mm A",
        }
    }

    fn description(self) -> Description {
        match self {
            Self::Hour24 => ISO_TIME,
            Self::Hour24Seconds => format_description!("[hour]:[minute]:[second]"),
            Self::Hour12 => format_description!(
                "[hour repr:12 padding:none]:[minute] [period case_sensitive:false]"
            ),
        }
    }

    /// Parse an answer written in this format.
    pub fn parse(self, input: &str) -> Result<Time, time::error::Parse> {
        Time::parse(input.trim(), self.description())
    }

    /// Parse an option bound: this format first, then `HH:mm`.
    pub fn parse_bound(self, input: &str) -> Result<Time, time::error::Parse> {
        self.parse(input)
            .or_else(|err| Time::parse(input.trim(), ISO_TIME).map_err(|_| err))
    }
}

/// Layout of a combined date and time answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatetimeFormat {
    /// `2024-10-05T14:30`, as produced by `datetime-local` inputs.
    #[default]
    #[serde(rename = "YYYY-MM-DDTHH:mm")]
    Iso,
    /// `2024-10-05 14:30`
    #[serde(rename = "YYYY-MM-DD HH:mm")]
    IsoSpace,
    /// `10/05/2024 2:30 PM`
    #[serde(rename = "MM/DD/YYYY hh:mm A")]
    MonthDayYear12,
}

impl DatetimeFormat {
    /// The pattern as shown to survey authors.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Iso => "YYYY-MM-DDTHH:mm",
            Self::IsoSpace => "YYYY-MM-DD HH:mm",
            Self::MonthDayYear12 => "MM/DD/YYYY hh:mm A",
        }
    }

    fn description(self) -> Description {
        match self {
            Self::Iso => ISO_DATETIME,
            Self::IsoSpace => format_description!("[year]-[month]-[day] [hour]:[minute]"),
            Self::MonthDayYear12 => format_description!(
                "[month]/[day]/[year] [hour repr:12 padding:none]:[minute] [period case_sensitive:false]"
            ),
        }
    }

    /// Parse an answer written in this format.
    pub fn parse(self, input: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
        PrimitiveDateTime::parse(input.trim(), self.description())
    }

    /// Parse an option bound: this format first, then `YYYY-MM-DDTHH:mm`.
    pub fn parse_bound(self, input: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
        self.parse(input).or_else(|err| {
            PrimitiveDateTime::parse(input.trim(), ISO_DATETIME).map_err(|_| err)
        })
    }
}
