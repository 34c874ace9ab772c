//! Answering, reviewing and reporting on top of a [`SurveyApi`].

use serde::Serialize;
use survey_builder_stats::AnswerStats;
use survey_builder_types::{
    Answer, AnswerValue, Question, QuestionTypeTag, Submission, Survey, SurveyApi, SurveyError,
};

use crate::compose::{ComposedSchema, compose};
use crate::registry;
use crate::report::ValidationReport;
use crate::widget::{self, AnswerWidget, ChartKind, ReviewWidget};

/// A survey ready to be answered.
#[derive(Debug, Clone)]
pub struct AnswerForm {
    survey: Survey,
    schema: ComposedSchema,
}

/// One question of an [`AnswerForm`].
#[derive(Debug, Clone, Copy)]
pub struct FormField<'a> {
    pub question: &'a Question,
    pub widget: AnswerWidget,
}

impl AnswerForm {
    /// Compose the schema for `survey`.
    pub fn new(survey: Survey) -> Result<Self, SurveyError> {
        let schema = compose(survey.questions())?;
        Ok(Self { survey, schema })
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    pub fn schema(&self) -> &ComposedSchema {
        &self.schema
    }

    /// Questions in render order with their answering widgets.
    pub fn fields(&self) -> impl Iterator<Item = FormField<'_>> {
        self.schema.order().iter().filter_map(|id| {
            self.survey.question(id).map(|question| FormField {
                question,
                widget: widget::answer_widget_for(question),
            })
        })
    }

    pub fn validate(&self, submission: &Submission) -> ValidationReport {
        self.schema.validate(submission)
    }

    /// Validate `submission` and send it only if it is clean.
    pub fn submit<A: SurveyApi>(
        &self,
        api: &A,
        submission: &Submission,
    ) -> Result<SubmitOutcome, SurveyError> {
        let report = self.validate(submission);
        if !report.is_valid() {
            tracing::debug!(
                survey_id = %self.survey.id,
                errors = report.len(),
                "submission rejected before sending"
            );
            return Ok(SubmitOutcome::Rejected(report));
        }
        let response_id = api
            .submit_response(&self.survey.id, submission)
            .map_err(SurveyError::backend)?;
        tracing::debug!(survey_id = %self.survey.id, %response_id, "response stored");
        Ok(SubmitOutcome::Accepted { response_id })
    }
}

/// Result of trying to submit a response.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The response was stored.
    Accepted { response_id: String },
    /// The response was not sent; the report lists every problem.
    Rejected(ValidationReport),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn response_id(&self) -> Option<&str> {
        match self {
            Self::Accepted { response_id } => Some(response_id),
            Self::Rejected(_) => None,
        }
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(report) => Some(report),
        }
    }
}

/// Fetch a survey and prepare it for answering.
pub fn load_form<A: SurveyApi>(api: &A, survey_id: &str) -> Result<AnswerForm, SurveyError> {
    let survey = api.fetch_survey(survey_id).map_err(SurveyError::backend)?;
    tracing::debug!(survey_id, questions = survey.len(), "loaded survey");
    AnswerForm::new(survey)
}

/// Load the survey, validate `submission` against it and send it if valid.
pub fn submit<A: SurveyApi>(
    api: &A,
    survey_id: &str,
    submission: &Submission,
) -> Result<SubmitOutcome, SurveyError> {
    load_form(api, survey_id)?.submit(api, submission)
}

/// One answered question in a [`ResponseReview`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    pub question_id: String,
    pub question_text: String,
    pub widget: ReviewWidget,
    /// `None` if the respondent skipped the question.
    pub value: Option<AnswerValue>,
}

/// Read-only view of one stored response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseReview {
    pub survey_id: String,
    pub response_id: String,
    /// Entries in render order.
    pub entries: Vec<ReviewEntry>,
    /// The stored answers re-checked against the current questions.
    pub report: ValidationReport,
}

/// Fetch a stored response and lay it out for review.
pub fn review_response<A: SurveyApi>(
    api: &A,
    survey_id: &str,
    response_id: &str,
) -> Result<ResponseReview, SurveyError> {
    let form = load_form(api, survey_id)?;
    let answers = api.fetch_response(response_id).map_err(SurveyError::backend)?;
    let submission = Submission::from_answers(form.survey().questions(), &answers);
    let orphaned = orphaned_answers(form.survey(), &answers);
    if orphaned > 0 {
        tracing::warn!(response_id, orphaned, "response has answers that match no question");
    }

    let entries = form
        .fields()
        .map(|field| ReviewEntry {
            question_id: field.question.id().to_string(),
            question_text: field.question.question_text().to_string(),
            widget: widget::review_widget(field.question.question_type()),
            value: submission.get(field.question.id()).cloned(),
        })
        .collect();

    Ok(ResponseReview {
        survey_id: survey_id.to_string(),
        response_id: response_id.to_string(),
        entries,
        report: form.validate(&submission),
    })
}

/// Stored answers whose question is no longer part of `survey`.
fn orphaned_answers(survey: &Survey, answers: &[Answer]) -> usize {
    answers
        .iter()
        .filter(|answer| survey.question(&answer.question_id).is_none())
        .count()
}

/// Analytics for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReport {
    pub question_id: String,
    pub question_text: String,
    pub question_type: QuestionTypeTag,
    pub chart: ChartKind,
    pub stats: AnswerStats,
}

/// Fetch every question's answers and reduce them to statistics, in render
/// order.
pub fn survey_report<A: SurveyApi>(
    api: &A,
    survey_id: &str,
) -> Result<Vec<QuestionReport>, SurveyError> {
    let form = load_form(api, survey_id)?;
    let mut reports = Vec::with_capacity(form.schema().len());
    for field in form.fields() {
        let question = field.question;
        let answers = api
            .fetch_question_answers(survey_id, question.id())
            .map_err(SurveyError::backend)?;
        tracing::trace!(question_id = question.id(), answers = answers.len(), "summarizing");
        reports.push(QuestionReport {
            question_id: question.id().to_string(),
            question_text: question.question_text().to_string(),
            question_type: question.question_type(),
            chart: widget::chart_kind(question.question_type()),
            stats: registry::summarize(question, &answers),
        });
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use survey_builder_types::{NumberOptions, TextOptions};

    use super::*;
    use crate::InMemoryApi;

    fn api() -> InMemoryApi {
        let mut survey = Survey::new("s1", "acct", "Check-in")
            .with_question(
                Question::new("name", "Name", TextOptions::default())
                    .required()
                    .with_order(1),
            )
            .with_question(
                Question::new(
                    "age",
                    "Age",
                    NumberOptions {
                        min: Some(0.0),
                        max: Some(120.0),
                        ..NumberOptions::default()
                    },
                )
                .with_order(2),
            );
        survey.is_published = true;
        InMemoryApi::new().with_survey(survey)
    }

    #[test]
    fn invalid_submissions_are_never_sent() {
        let api = api();
        let outcome = submit(&api, "s1", &Submission::new().with("age", 200.0)).unwrap();
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.report().map(ValidationReport::len), Some(2));
        assert_eq!(api.response_count(), 0);
    }

    #[test]
    fn valid_submissions_are_stored() {
        let api = api();
        let outcome = submit(
            &api,
            "s1",
            &Submission::new().with("name", "Ada").with("age", "36"),
        )
        .unwrap();
        assert_eq!(outcome.response_id(), Some("resp-1"));
        assert_eq!(api.response_ids("s1"), ["resp-1"]);
    }

    #[test]
    fn backend_errors_are_wrapped() {
        let err = load_form(&api(), "missing").unwrap_err();
        assert!(matches!(err, SurveyError::Backend(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn only_answers_to_removed_questions_are_orphaned() {
        let survey = load_form(&api(), "s1").unwrap().survey().clone();
        let stored = |question_id: &str, value: Option<AnswerValue>| {
            let created_at = time::OffsetDateTime::UNIX_EPOCH;
            match value {
                Some(value) => Answer::from_value("a", question_id, created_at, &value),
                None => Answer {
                    id: "a".to_string(),
                    question_id: question_id.to_string(),
                    created_at,
                    answer_text: None,
                    answer_number: None,
                    answer_json: None,
                },
            }
        };
        let answers = [
            stored("name", Some("Ada".into())),
            // Skipped question: stored without a payload.
            stored("age", None),
            stored("nickname", Some("ada".into())),
        ];
        assert_eq!(orphaned_answers(&survey, &answers), 1);
        assert_eq!(Submission::from_answers(survey.questions(), &answers).len(), 1);
    }

    #[test]
    fn form_fields_carry_widgets() {
        let form = load_form(&api(), "s1").unwrap();
        let widgets: Vec<(&str, AnswerWidget)> = form
            .fields()
            .map(|field| (field.question.id(), field.widget))
            .collect();
        assert_eq!(
            widgets,
            [("name", AnswerWidget::TextInput), ("age", AnswerWidget::NumberInput)]
        );
    }
}
