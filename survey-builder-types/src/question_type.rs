use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// The closed set of question kinds a survey can contain.
///
/// Adding a kind means adding a variant here, an option set in
/// [`QuestionOptions`](crate::QuestionOptions) and a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionTypeTag {
    Text,
    Email,
    Number,
    Phone,
    MultipleChoice,
    Checkbox,
    Dropdown,
    LinearScale,
    Slider,
    Likert,
    Rating,
    Date,
    Time,
    Datetime,
    File,
}

impl QuestionTypeTag {
    /// Every tag, in registry order.
    pub const ALL: [QuestionTypeTag; 15] = [
        Self::Text,
        Self::Email,
        Self::Number,
        Self::Phone,
        Self::MultipleChoice,
        Self::Checkbox,
        Self::Dropdown,
        Self::LinearScale,
        Self::Slider,
        Self::Likert,
        Self::Rating,
        Self::Date,
        Self::Time,
        Self::Datetime,
        Self::File,
    ];

    /// Position of this tag in [`Self::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The wire name, e.g. `"multiple_choice"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
            Self::Phone => "phone",
            Self::MultipleChoice => "multiple_choice",
            Self::Checkbox => "checkbox",
            Self::Dropdown => "dropdown",
            Self::LinearScale => "linear_scale",
            Self::Slider => "slider",
            Self::Likert => "likert",
            Self::Rating => "rating",
            Self::Date => "date",
            Self::Time => "time",
            Self::Datetime => "datetime",
            Self::File => "file",
        }
    }

    /// Whether answers of this kind are stored in `answer_number`.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Number | Self::LinearScale | Self::Slider | Self::Likert | Self::Rating
        )
    }

    /// Whether answers of this kind pick from a fixed list of choices.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::MultipleChoice | Self::Checkbox | Self::Dropdown)
    }

    /// Whether answers of this kind are a date, a time of day, or both.
    pub fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::Datetime)
    }
}

impl fmt::Display for QuestionTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionTypeTag {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownQuestionType {
                question_id: None,
                tag: s.to_string(),
            })
    }
}
