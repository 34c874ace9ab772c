//! Core types for the survey-builder crate.
//!
//! This crate provides the presentation-agnostic data model:
//! - `QuestionTypeTag` - The closed set of question kinds
//! - `QuestionOptions` and the per-type option sets - How each question is configured
//! - `Question` and `Survey` - Authored definitions
//! - `AnswerValue`, `Submission` and `Answer` - Submitted and stored answers
//! - `ConfigurationError` and `SurveyError` - Error types
//! - `SurveyApi` - The seam to the external REST backend

mod question_type;
pub use question_type::QuestionTypeTag;

mod formats;
pub use formats::{DateFormat, DatetimeFormat, TimeFormat};

mod options;
pub use options::{
    CheckboxOptions, DateOptions, DatetimeOptions, DropdownOptions, EmailOptions, FileOptions,
    LikertOptions, LinearScaleOptions, MultipleChoiceOptions, NumberOptions, OptionSet,
    PhoneOptions, QuestionOptions, RatingIcon, RatingOptions, SliderOptions, TextOptions,
    TimeOptions,
};

mod question;
pub use question::Question;

mod survey;
pub use survey::Survey;

mod answer;
pub use answer::{Answer, AnswerValue, FileMeta};

mod submission;
pub use submission::Submission;

mod error;
pub use error::{ConfigurationError, SurveyError};

mod traits;
pub use traits::SurveyApi;
