//! In-memory API for exercising the survey flows without a server.
//!
//! `InMemoryApi` keeps surveys and stored answers in maps and hands out
//! sequential ids, so flow tests are deterministic.
//!
//! # Example
//!
//! ```rust
//! use survey_builder::{InMemoryApi, Question, Submission, Survey, TextOptions, submit};
//!
//! let mut survey = Survey::new("s1", "acct", "Feedback")
//!     .with_question(Question::new("name", "Your name", TextOptions::default()).required());
//! survey.is_published = true;
//! let api = InMemoryApi::new().with_survey(survey);
//!
//! let outcome = submit(&api, "s1", &Submission::new().with("name", "Ada")).unwrap();
//! assert!(outcome.is_accepted());
//! assert_eq!(api.response_count(), 1);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use survey_builder_types::{Answer, Submission, Survey, SurveyApi};
use time::OffsetDateTime;

#[derive(Debug, Clone)]
struct StoredResponse {
    survey_id: String,
    answers: Vec<Answer>,
}

#[derive(Debug, Default)]
struct Store {
    responses: HashMap<String, StoredResponse>,
    /// Response ids in submission order.
    response_order: Vec<String>,
    next_answer: u64,
}

/// An API backed by in-memory maps.
#[derive(Debug, Default)]
pub struct InMemoryApi {
    surveys: HashMap<String, Survey>,
    store: RefCell<Store>,
}

/// Error type for InMemoryApi.
#[derive(Debug, thiserror::Error)]
pub enum InMemoryApiError {
    #[error("Survey not found: {0}")]
    SurveyNotFound(String),

    #[error("Response not found: {0}")]
    ResponseNotFound(String),

    #[error("Survey '{0}' is not published")]
    NotPublished(String),
}

impl InMemoryApi {
    /// Create an empty API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a survey.
    pub fn with_survey(mut self, survey: Survey) -> Self {
        self.surveys.insert(survey.id.clone(), survey);
        self
    }

    /// Store an existing response, as if it had been submitted earlier.
    pub fn with_response(
        self,
        survey_id: impl Into<String>,
        response_id: impl Into<String>,
        answers: Vec<Answer>,
    ) -> Self {
        let response_id = response_id.into();
        {
            let mut store = self.store.borrow_mut();
            store.response_order.push(response_id.clone());
            store.responses.insert(
                response_id,
                StoredResponse {
                    survey_id: survey_id.into(),
                    answers,
                },
            );
        }
        self
    }

    /// Number of stored responses, across all surveys.
    pub fn response_count(&self) -> usize {
        self.store.borrow().responses.len()
    }

    /// Ids of the responses stored for `survey_id`, oldest first.
    pub fn response_ids(&self, survey_id: &str) -> Vec<String> {
        let store = self.store.borrow();
        store
            .response_order
            .iter()
            .filter(|id| {
                store
                    .responses
                    .get(id.as_str())
                    .is_some_and(|response| response.survey_id == survey_id)
            })
            .cloned()
            .collect()
    }
}

impl SurveyApi for InMemoryApi {
    type Error = InMemoryApiError;

    fn fetch_survey(&self, survey_id: &str) -> Result<Survey, Self::Error> {
        self.surveys
            .get(survey_id)
            .cloned()
            .ok_or_else(|| InMemoryApiError::SurveyNotFound(survey_id.to_string()))
    }

    fn fetch_question_answers(
        &self,
        survey_id: &str,
        question_id: &str,
    ) -> Result<Vec<Answer>, Self::Error> {
        if !self.surveys.contains_key(survey_id) {
            return Err(InMemoryApiError::SurveyNotFound(survey_id.to_string()));
        }
        let store = self.store.borrow();
        Ok(store
            .response_order
            .iter()
            .filter_map(|id| store.responses.get(id))
            .filter(|response| response.survey_id == survey_id)
            .flat_map(|response| &response.answers)
            .filter(|answer| answer.question_id == question_id)
            .cloned()
            .collect())
    }

    fn fetch_response(&self, response_id: &str) -> Result<Vec<Answer>, Self::Error> {
        self.store
            .borrow()
            .responses
            .get(response_id)
            .map(|response| response.answers.clone())
            .ok_or_else(|| InMemoryApiError::ResponseNotFound(response_id.to_string()))
    }

    fn submit_response(
        &self,
        survey_id: &str,
        submission: &Submission,
    ) -> Result<String, Self::Error> {
        let survey = self
            .surveys
            .get(survey_id)
            .ok_or_else(|| InMemoryApiError::SurveyNotFound(survey_id.to_string()))?;
        if !survey.is_published {
            return Err(InMemoryApiError::NotPublished(survey_id.to_string()));
        }

        let mut store = self.store.borrow_mut();
        let response_id = format!("resp-{}", store.response_order.len() + 1);
        let now = OffsetDateTime::now_utc();
        let mut answers = Vec::with_capacity(submission.len());
        for (question_id, value) in submission.iter() {
            store.next_answer += 1;
            let answer_id = format!("ans-{}", store.next_answer);
            answers.push(Answer::from_value(answer_id, question_id, now, value));
        }
        store.response_order.push(response_id.clone());
        store.responses.insert(
            response_id.clone(),
            StoredResponse {
                survey_id: survey_id.to_string(),
                answers,
            },
        );
        Ok(response_id)
    }
}
