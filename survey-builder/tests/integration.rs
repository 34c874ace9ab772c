//! Integration tests for survey-builder

use example_surveys::{
    customer_feedback, event_registration, every_type, every_type_answers, happy_customer,
    speaker, workshop,
};
use survey_builder::{
    AnswerStats, AnswerValue, CheckboxOptions, ConfigurationError, EmailOptions, FieldErrorKind,
    InMemoryApi, NumberOptions, Question, QuestionTypeTag, ReviewWidget, Submission, Survey,
    SurveyDraft, SurveyError, ValidationErrorKind, ValidationReport, compose, review_response,
    submit, survey_report,
};

fn kinds(report: &ValidationReport) -> Vec<(&str, FieldErrorKind)> {
    report
        .errors()
        .iter()
        .map(|e| (e.question_id.as_str(), e.kind))
        .collect()
}

/// The rule violation for a single answer to question `id`, ignoring the
/// rest of the survey.
fn single_error(
    questions: &[Question],
    id: &str,
    value: impl Into<AnswerValue>,
) -> Option<ValidationErrorKind> {
    let schema = compose(questions).unwrap();
    let report = schema.validate(&Submission::new().with(id, value));
    let errors: Vec<_> = report.errors_for(id).collect();
    assert!(errors.len() <= 1, "unexpected errors: {errors:?}");
    errors.first().and_then(|e| e.validation_kind())
}

#[test]
fn test_whole_number_question() {
    let questions = [Question::new(
        "n",
        "Pick a number",
        NumberOptions {
            min: Some(0.0),
            max: Some(10.0),
            allow_decimal: false,
            placeholder: None,
        },
    )];

    assert_eq!(single_error(&questions, "n", 5.0), None);
    assert_eq!(
        single_error(&questions, "n", 5.5),
        Some(ValidationErrorKind::DecimalNotAllowed)
    );
    assert_eq!(
        single_error(&questions, "n", 11.0),
        Some(ValidationErrorKind::OutOfRange)
    );
    assert_eq!(
        single_error(&questions, "n", -1.0),
        Some(ValidationErrorKind::OutOfRange)
    );
}

#[test]
fn test_checkbox_question() {
    let questions = [Question::new(
        "c",
        "Pick some",
        CheckboxOptions {
            choices: vec!["a".into(), "b".into(), "c".into()],
            min_selections: 1,
            max_selections: Some(2),
            randomize_order: false,
        },
    )];

    assert_eq!(single_error(&questions, "c", vec!["a"]), None);
    assert_eq!(single_error(&questions, "c", vec!["a", "b"]), None);
    assert_eq!(
        single_error(&questions, "c", Vec::<String>::new()),
        Some(ValidationErrorKind::TooFewSelections)
    );
    assert_eq!(
        single_error(&questions, "c", vec!["a", "b", "c"]),
        Some(ValidationErrorKind::TooManySelections)
    );
    assert_eq!(
        single_error(&questions, "c", vec!["a", "x"]),
        Some(ValidationErrorKind::NotInChoices)
    );
}

#[test]
fn test_email_allowed_domains() {
    let questions = [Question::new(
        "e",
        "Email",
        EmailOptions {
            allowed_domains: vec!["example.com".into()],
            ..EmailOptions::default()
        },
    )];

    assert_eq!(single_error(&questions, "e", "user@example.com"), None);
    assert_eq!(
        single_error(&questions, "e", "user@other.com"),
        Some(ValidationErrorKind::DomainNotAllowed)
    );
}

#[test]
fn test_missing_required_answer_is_reported_once() {
    let survey = customer_feedback();
    let schema = compose(survey.questions()).unwrap();
    let mut submission = happy_customer();
    submission.remove("satisfaction");

    let report = schema.validate(&submission);
    assert_eq!(
        kinds(&report),
        [("satisfaction", FieldErrorKind::MissingRequiredAnswer)]
    );
}

#[test]
fn test_every_invalid_answer_is_reported() {
    let survey = customer_feedback();
    let schema = compose(survey.questions()).unwrap();
    let submission = happy_customer()
        .with("satisfaction", 9.0)
        .with("recommend", 3.5)
        .with("features", vec!["Search", "Teleport"])
        .with("contact", "spam@example.com");

    let report = schema.validate(&submission);
    assert_eq!(
        kinds(&report),
        [
            ("satisfaction", FieldErrorKind::Invalid(ValidationErrorKind::OutOfRange)),
            ("recommend", FieldErrorKind::Invalid(ValidationErrorKind::StepMismatch)),
            ("features", FieldErrorKind::Invalid(ValidationErrorKind::NotInChoices)),
            ("contact", FieldErrorKind::Invalid(ValidationErrorKind::DomainDisallowed)),
        ]
    );
}

#[test]
fn test_sample_submissions_pass() {
    for (survey, submission) in [
        (customer_feedback(), happy_customer()),
        (event_registration(), speaker()),
        (every_type(), every_type_answers()),
    ] {
        let schema = compose(survey.questions()).unwrap();
        let report = schema.validate(&submission);
        assert!(report.is_valid(), "{}: {report:?}", survey.id);
    }
}

#[test]
fn test_every_type_rejects_blank_required_answers() {
    let survey = every_type();
    let schema = compose(survey.questions()).unwrap();
    let blank: Submission = QuestionTypeTag::ALL
        .iter()
        .map(|tag| (tag.as_str().to_string(), AnswerValue::from("")))
        .collect();

    let report = schema.validate(&blank);
    assert_eq!(report.len(), QuestionTypeTag::ALL.len());
    assert!(
        report
            .errors()
            .iter()
            .all(|e| e.validation_kind() == Some(ValidationErrorKind::Empty))
    );
}

#[test]
fn test_long_date_bounds_compare_as_dates() {
    let questions = event_registration().questions;

    assert_eq!(single_error(&questions, "arrival", "October 14, 2025"), None);
    assert_eq!(single_error(&questions, "arrival", "september 1, 2025"), None);
    assert_eq!(
        single_error(&questions, "arrival", "August 31, 2025"),
        Some(ValidationErrorKind::OutOfRange)
    );
    assert_eq!(
        single_error(&questions, "arrival", "December 1, 2025"),
        Some(ValidationErrorKind::OutOfRange)
    );
    assert_eq!(
        single_error(&questions, "arrival", "2025-10-14"),
        Some(ValidationErrorKind::FormatMismatch)
    );
    assert_eq!(
        single_error(&questions, "talk_slot", "6:15 PM"),
        Some(ValidationErrorKind::OutOfRange)
    );
}

#[test]
fn test_workshop_fixture() {
    let survey = workshop().unwrap();
    let schema = compose(survey.questions()).unwrap();
    assert_eq!(
        schema.order(),
        [
            "name",
            "experience",
            "day",
            "session_start",
            "topics",
            "laptop_hours",
            "dietary"
        ]
    );

    let submission = Submission::new()
        .with("name", "Ferris")
        .with("experience", "I use it at work")
        .with("day", "10/05/2026")
        .with("session_start", "2026-10-05 09:30")
        .with("topics", vec!["Async", "Unsafe"])
        .with("laptop_hours", 7.5);
    assert!(schema.validate(&submission).is_valid());

    let early = submission.clone().with("day", "01/31/2026");
    assert_eq!(
        kinds(&schema.validate(&early)),
        [("day", FieldErrorKind::Invalid(ValidationErrorKind::OutOfRange))]
    );
}

#[test]
fn test_unknown_question_type_names_the_question() {
    let json = r#"{
        "id": "s", "accountId": "a", "title": "t",
        "questions": [{"id": "q9", "questionType": "signature", "questionText": "Sign", "options": {}}]
    }"#;
    match Survey::from_json(json) {
        Err(SurveyError::Configuration(ConfigurationError::UnknownQuestionType {
            question_id,
            tag,
        })) => {
            assert_eq!(question_id.as_deref(), Some("q9"));
            assert_eq!(tag, "signature");
        }
        other => panic!("expected an unknown type error, got {other:?}"),
    }
}

#[test]
fn test_submit_review_and_report() {
    let api = InMemoryApi::new().with_survey(customer_feedback());

    let first = submit(&api, "customer-feedback", &happy_customer()).unwrap();
    let second = submit(
        &api,
        "customer-feedback",
        &happy_customer()
            .with("satisfaction", 3.0)
            .with("features", vec!["Search"]),
    )
    .unwrap();
    let rejected = submit(
        &api,
        "customer-feedback",
        &Submission::new().with("satisfaction", 4.0),
    )
    .unwrap();

    assert!(first.is_accepted() && second.is_accepted());
    assert_eq!(
        rejected.report().map(|r| r.errors()[0].kind),
        Some(FieldErrorKind::MissingRequiredAnswer)
    );
    assert_eq!(api.response_count(), 2);

    let review = review_response(&api, "customer-feedback", first.response_id().unwrap()).unwrap();
    assert!(review.report.is_valid());
    assert_eq!(review.entries.len(), 7);
    assert_eq!(review.entries[0].widget, ReviewWidget::RatingIcons);
    assert_eq!(review.entries[0].value.as_ref().and_then(|v| v.as_number()), Some(5.0));

    let report = survey_report(&api, "customer-feedback").unwrap();
    assert_eq!(report.len(), 7);
    let AnswerStats::Numeric(satisfaction) = &report[0].stats else {
        panic!("expected numeric stats, got {:?}", report[0].stats);
    };
    assert_eq!(satisfaction.responses, 2);
    assert_eq!(satisfaction.summary.as_ref().map(|s| s.mean), Some(4.0));

    let AnswerStats::Choice(features) = &report[3].stats else {
        panic!("expected choice stats, got {:?}", report[3].stats);
    };
    assert_eq!(features.total_selections, 3);
    assert_eq!(features.frequencies[0].choice, "Search");
    assert_eq!(features.frequencies[0].count, 2);
}

#[test]
fn test_draft_to_schema() -> anyhow::Result<()> {
    let mut draft = SurveyDraft::new(workshop()?);
    let id = draft.add_question(QuestionTypeTag::Rating, "Rate the venue");
    draft.set_required(&id, true)?;
    draft.move_question(&id, 0)?;

    let schema = draft.compose()?;
    assert_eq!(schema.order()[0], id);
    assert_eq!(schema.len(), 8);
    let orders: Vec<u32> = draft.questions().iter().map(|q| q.order_number()).collect();
    assert_eq!(orders, (1..=8).collect::<Vec<_>>());

    let report = schema.validate(&Submission::new());
    assert!(
        report
            .errors()
            .iter()
            .any(|e| e.question_id == id && e.kind == FieldErrorKind::MissingRequiredAnswer)
    );
    Ok(())
}
