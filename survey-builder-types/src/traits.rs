use crate::{Answer, Submission, Survey};

/// The REST backend holding surveys, questions and answers.
///
/// The core never talks to the network itself; the flows in `survey-builder`
/// go through an implementation of this trait. Implementations decide how to
/// reach the backend (HTTP client, local storage, an in-memory map in tests).
pub trait SurveyApi {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Fetch a survey with its questions (`GET /surveys/:id`).
    fn fetch_survey(&self, survey_id: &str) -> Result<Survey, Self::Error>;

    /// Fetch every stored answer to one question
    /// (`GET /surveys/:id/question-answers`).
    fn fetch_question_answers(
        &self,
        survey_id: &str,
        question_id: &str,
    ) -> Result<Vec<Answer>, Self::Error>;

    /// Fetch the answers of one stored response (`GET /responses/:id`).
    fn fetch_response(&self, response_id: &str) -> Result<Vec<Answer>, Self::Error>;

    /// Store a validated submission and return the new response id
    /// (`POST /surveys/:id/responses`).
    fn submit_response(
        &self,
        survey_id: &str,
        submission: &Submission,
    ) -> Result<String, Self::Error>;
}
