/// A malformed question configuration.
///
/// Raised while building validation rules or composing a schema. It is meant
/// for the survey author and must never reach a respondent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// A lower bound is greater than its upper bound.
    #[error("Question '{question_id}': {min_field} ({min}) is greater than {max_field} ({max})")]
    InvalidBounds {
        question_id: String,
        min_field: &'static str,
        max_field: &'static str,
        min: String,
        max: String,
    },

    /// A single option value is unusable.
    #[error("Question '{question_id}': invalid {field}: {reason}")]
    InvalidOption {
        question_id: String,
        field: &'static str,
        reason: String,
    },

    /// Two questions in the same list share an id.
    #[error("Duplicate question id '{question_id}'")]
    DuplicateQuestionId { question_id: String },

    /// A question names a type tag outside the closed set.
    #[error("Unknown question type '{tag}'")]
    UnknownQuestionType {
        question_id: Option<String>,
        tag: String,
    },

    /// Both domain lists of an email question are non-empty.
    #[error("Question '{question_id}': allowedDomains and disallowedDomains cannot both be set")]
    ConflictingDomainLists { question_id: String },
}

impl ConfigurationError {
    /// Build an [`InvalidOption`](Self::InvalidOption) error.
    pub fn invalid_option(
        question_id: impl Into<String>,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOption {
            question_id: question_id.into(),
            field,
            reason: reason.into(),
        }
    }

    /// Build an [`InvalidBounds`](Self::InvalidBounds) error.
    pub fn invalid_bounds(
        question_id: impl Into<String>,
        min_field: &'static str,
        max_field: &'static str,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self::InvalidBounds {
            question_id: question_id.into(),
            min_field,
            max_field,
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// The question this error is about, if known.
    pub fn question_id(&self) -> Option<&str> {
        match self {
            Self::InvalidBounds { question_id, .. }
            | Self::InvalidOption { question_id, .. }
            | Self::DuplicateQuestionId { question_id }
            | Self::ConflictingDomainLists { question_id } => Some(question_id),
            Self::UnknownQuestionType { question_id, .. } => question_id.as_deref(),
        }
    }

    /// The offending option field, if the error is about a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidBounds { min_field, .. } => Some(min_field),
            Self::InvalidOption { field, .. } => Some(field),
            Self::ConflictingDomainLists { .. } => Some("allowedDomains"),
            Self::DuplicateQuestionId { .. } | Self::UnknownQuestionType { .. } => None,
        }
    }
}

/// Error type for survey operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The survey's questions cannot be turned into a schema.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Survey data could not be decoded.
    #[error("Malformed survey data: {0}")]
    Decode(#[from] serde_json::Error),

    /// An operation referenced a question the survey does not contain.
    #[error("No question with id '{0}'")]
    QuestionNotFound(String),

    /// Backend-specific failure (network, storage, ...).
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error is a configuration problem the author can fix.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
