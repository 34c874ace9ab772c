//! # survey-builder
//!
//! The core of a survey builder: a closed registry of question types, a
//! schema composer that validates whole submissions, statistics reducers and
//! the flows that tie them to a backend.
//!
//! ## Usage
//!
//! ```rust
//! use survey_builder::{
//!     CheckboxOptions, NumberOptions, Question, Submission, ValidationErrorKind, compose,
//! };
//!
//! let questions = vec![
//!     Question::new(
//!         "age",
//!         "How old are you?",
//!         NumberOptions {
//!             min: Some(0.0),
//!             max: Some(150.0),
//!             allow_decimal: false,
//!             ..Default::default()
//!         },
//!     )
//!     .required(),
//!     Question::new(
//!         "fruit",
//!         "Pick up to two fruits",
//!         CheckboxOptions {
//!             choices: vec!["apple".into(), "pear".into(), "plum".into()],
//!             max_selections: Some(2),
//!             ..Default::default()
//!         },
//!     ),
//! ];
//!
//! let schema = compose(&questions).unwrap();
//! let report = schema.validate(
//!     &Submission::new()
//!         .with("age", 31.5)
//!         .with("fruit", vec!["apple", "plum"]),
//! );
//! assert_eq!(report.len(), 1);
//! assert_eq!(
//!     report.errors()[0].validation_kind(),
//!     Some(ValidationErrorKind::DecimalNotAllowed)
//! );
//! ```
//!
//! ## Question types
//!
//! Every [`QuestionTypeTag`] has one [`registry`] entry holding its default
//! options, its rule builder, its widgets and its statistics reducer:
//!
//! - `text`, `email`, `number`, `phone`
//! - `multiple_choice`, `checkbox`, `dropdown`
//! - `linear_scale`, `slider`, `likert`, `rating`
//! - `date`, `time`, `datetime`
//! - `file`
//!
//! ## Backends
//!
//! The flows in this crate talk to storage through [`SurveyApi`].
//! [`InMemoryApi`] implements it for tests and demos.

// Re-export all types from survey-builder-types
pub use survey_builder_types::*;

pub use survey_builder_stats as stats;
pub use survey_builder_stats::AnswerStats;

mod compose;
pub use compose::{ComposedSchema, compose};

mod draft;
pub use draft::{SurveyDraft, TEMPORARY_ID_PREFIX};

mod flow;
pub use flow::{
    AnswerForm, FormField, QuestionReport, ResponseReview, ReviewEntry, SubmitOutcome, load_form,
    review_response, submit, survey_report,
};

pub mod registry;
pub use registry::QuestionTypeEntry;

mod report;
pub use report::{FieldError, FieldErrorKind, ValidationReport};

mod rule;
pub use rule::{RuleKind, ValidationErrorKind, ValidationRule, Violation};

pub mod rules;
pub use rules::BuildRule;

pub mod widget;
pub use widget::{AnswerWidget, ChartKind, OptionEditor, ReviewWidget, answer_widget_for};

// In-memory API for tests and demos
mod in_memory_api;
pub use in_memory_api::{InMemoryApi, InMemoryApiError};
