use serde::{Deserialize, Serialize};

use crate::{DateFormat, DatetimeFormat, QuestionTypeTag, TimeFormat};

/// A per-type option record.
///
/// Implemented by every option set so generic code can go from a
/// [`QuestionOptions`] value to the concrete record for one tag.
pub trait OptionSet: Default + Clone + Into<QuestionOptions> {
    /// The question type this record configures.
    const TAG: QuestionTypeTag;

    /// Borrow the record out of `options` if it is of this type.
    fn from_options(options: &QuestionOptions) -> Option<&Self>;
}

fn default_choices() -> Vec<String> {
    vec!["Option 1".to_string(), "Option 2".to_string()]
}

/// Configuration for a free text question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_answer_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_answer_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Render a textarea instead of a single line input.
    pub is_multiline: bool,
}

/// Configuration for an email address question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_email_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_email_length: Option<usize>,
    /// If non-empty, only these domains are accepted.
    pub allowed_domains: Vec<String>,
    /// If non-empty, these domains are rejected.
    pub disallowed_domains: Vec<String>,
    /// Whether two responses may use the same address. Enforced by the backend.
    pub allow_duplicates: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            min_email_length: None,
            max_email_length: None,
            allowed_domains: Vec::new(),
            disallowed_domains: Vec::new(),
            allow_duplicates: true,
            placeholder: None,
        }
    }
}

/// Configuration for a numeric question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub allow_decimal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            allow_decimal: true,
            placeholder: None,
        }
    }
}

/// Configuration for a phone number question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneOptions {
    /// Prefilled dialing code, e.g. `+1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_country_code: Option<String>,
    pub min_digits: usize,
    pub max_digits: usize,
}

impl Default for PhoneOptions {
    fn default() -> Self {
        Self {
            default_country_code: None,
            min_digits: 7,
            max_digits: 15,
        }
    }
}

/// Configuration for a single-select radio question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MultipleChoiceOptions {
    pub choices: Vec<String>,
    /// Offer an "Other" entry with a free text answer.
    pub allow_other: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length_for_other_parameter: Option<usize>,
    pub randomize_order: bool,
}

impl Default for MultipleChoiceOptions {
    fn default() -> Self {
        Self {
            choices: default_choices(),
            allow_other: false,
            max_length_for_other_parameter: None,
            randomize_order: false,
        }
    }
}

/// Configuration for a multi-select checkbox question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckboxOptions {
    pub choices: Vec<String>,
    pub min_selections: usize,
    /// Upper bound on ticked boxes; `None` means all of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<usize>,
    pub randomize_order: bool,
}

impl Default for CheckboxOptions {
    fn default() -> Self {
        Self {
            choices: default_choices(),
            min_selections: 0,
            max_selections: None,
            randomize_order: false,
        }
    }
}

/// Configuration for a dropdown question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropdownOptions {
    pub choices: Vec<String>,
    pub allow_search: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            choices: default_choices(),
            allow_search: false,
            placeholder: None,
        }
    }
}

/// Configuration for a linear scale (a row of numbered buttons).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinearScaleOptions {
    pub min: f64,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_label: Option<String>,
}

impl Default for LinearScaleOptions {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 5.0,
            step: Some(1.0),
            min_label: None,
            max_label: None,
        }
    }
}

/// Configuration for a slider, optionally selecting a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SliderOptions {
    pub min: f64,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    pub labels: Vec<String>,
    /// Answer with a `[low, high]` pair instead of a single value.
    pub range: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: Some(1.0),
            labels: Vec::new(),
            range: false,
            default_value: None,
        }
    }
}

/// Configuration for a Likert agreement scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LikertOptions {
    /// Number of points, between 2 and 7.
    pub scale: u8,
    /// One label per point, lowest first.
    pub labels: Vec<String>,
}

impl Default for LikertOptions {
    fn default() -> Self {
        Self {
            scale: 5,
            labels: [
                "Strongly disagree",
                "Disagree",
                "Neutral",
                "Agree",
                "Strongly agree",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// The symbol a rating question is drawn with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingIcon {
    #[default]
    Star,
    Heart,
    Thumb,
}

/// Configuration for a star rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RatingOptions {
    pub max: u32,
    pub icon: RatingIcon,
}

impl Default for RatingOptions {
    fn default() -> Self {
        Self {
            max: 5,
            icon: RatingIcon::Star,
        }
    }
}

/// Configuration for a date question. Bounds are written in `format` or ISO.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateOptions {
    pub format: DateFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
}

/// Configuration for a time-of-day question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeOptions {
    pub format: TimeFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<String>,
}

/// Configuration for a combined date and time question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatetimeOptions {
    pub format: DatetimeFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_datetime: Option<String>,
}

/// Configuration for a file upload question.
///
/// Only client-side metadata (name, size, count) is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileOptions {
    /// Accepted extensions, e.g. `.pdf`. Case-insensitive, leading dot optional.
    pub accepted_formats: Vec<String>,
    #[serde(rename = "maxSizeMB")]
    pub max_size_mb: f64,
    pub max_files: usize,
    pub allow_multiple: bool,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            accepted_formats: [".pdf", ".png", ".jpg", ".jpeg"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_size_mb: 10.0,
            max_files: 1,
            allow_multiple: false,
        }
    }
}

/// The options of one question, tagged with its question type.
///
/// In JSON the tag and the record sit side by side:
/// `{"questionType": "number", "options": {"min": 0}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "questionType", content = "options", rename_all = "snake_case")]
pub enum QuestionOptions {
    Text(TextOptions),
    Email(EmailOptions),
    Number(NumberOptions),
    Phone(PhoneOptions),
    MultipleChoice(MultipleChoiceOptions),
    Checkbox(CheckboxOptions),
    Dropdown(DropdownOptions),
    LinearScale(LinearScaleOptions),
    Slider(SliderOptions),
    Likert(LikertOptions),
    Rating(RatingOptions),
    Date(DateOptions),
    Time(TimeOptions),
    Datetime(DatetimeOptions),
    File(FileOptions),
}

macro_rules! option_sets {
    ($($variant:ident => $options:ty),* $(,)?) => {
        $(
            impl From<$options> for QuestionOptions {
                fn from(options: $options) -> Self {
                    Self::$variant(options)
                }
            }

            impl OptionSet for $options {
                const TAG: QuestionTypeTag = QuestionTypeTag::$variant;

                fn from_options(options: &QuestionOptions) -> Option<&Self> {
                    match options {
                        QuestionOptions::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*

        impl QuestionOptions {
            /// The question type these options belong to.
            pub fn tag(&self) -> QuestionTypeTag {
                match self {
                    $(Self::$variant(_) => QuestionTypeTag::$variant,)*
                }
            }
        }
    };
}

option_sets! {
    Text => TextOptions,
    Email => EmailOptions,
    Number => NumberOptions,
    Phone => PhoneOptions,
    MultipleChoice => MultipleChoiceOptions,
    Checkbox => CheckboxOptions,
    Dropdown => DropdownOptions,
    LinearScale => LinearScaleOptions,
    Slider => SliderOptions,
    Likert => LikertOptions,
    Rating => RatingOptions,
    Date => DateOptions,
    Time => TimeOptions,
    Datetime => DatetimeOptions,
    File => FileOptions,
}

impl QuestionOptions {
    /// The fixed choice list, for choice-based questions.
    pub fn choices(&self) -> Option<&[String]> {
        match self {
            Self::MultipleChoice(options) => Some(&options.choices),
            Self::Checkbox(options) => Some(&options.choices),
            Self::Dropdown(options) => Some(&options.choices),
            _ => None,
        }
    }

    /// Borrow the concrete record if it is of type `T`.
    pub fn get<T: OptionSet>(&self) -> Option<&T> {
        T::from_options(self)
    }
}
