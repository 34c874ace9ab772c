//! Property tests for the registry and the schema composer.

use std::str::FromStr;

use proptest::prelude::*;
use survey_builder::{
    AnswerValue, FieldErrorKind, LinearScaleOptions, NumberOptions, Question, QuestionTypeTag,
    Submission, TextOptions, ValidationErrorKind, compose, registry,
};

fn any_tag() -> impl Strategy<Value = QuestionTypeTag> {
    prop::sample::select(QuestionTypeTag::ALL.to_vec())
}

#[test]
fn registry_lookup_is_a_bijection() {
    for tag in QuestionTypeTag::ALL {
        assert_eq!(registry::entry(tag).tag, tag);
        assert_eq!(QuestionTypeTag::from_str(tag.as_str()).unwrap(), tag);
    }
    let mut labels: Vec<&str> = registry::entries().iter().map(|e| e.label).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), QuestionTypeTag::ALL.len());
}

proptest! {
    #[test]
    fn default_options_survive_json(tag in any_tag()) {
        let question = Question::new("q", "Question", registry::default_options(tag));
        let json = serde_json::to_string(&question).unwrap();
        let decoded: Question = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded.question_type(), tag);
        prop_assert!(registry::build_rule(&decoded).is_ok());
    }

    #[test]
    fn schema_keys_are_exactly_the_question_ids(
        ids in prop::collection::btree_set("[a-z][a-z0-9_]{0,8}", 0..12),
        tags in prop::collection::vec(any_tag(), 12),
    ) {
        let questions: Vec<Question> = ids
            .iter()
            .zip(&tags)
            .enumerate()
            .map(|(idx, (id, tag))| {
                Question::new(id, "Q", registry::default_options(*tag)).with_order(idx as u32 + 1)
            })
            .collect();
        let schema = compose(&questions).unwrap();
        prop_assert_eq!(schema.len(), ids.len());
        for id in &ids {
            prop_assert!(schema.rule(id).is_some());
        }
        let mut order: Vec<&str> = schema.order().iter().map(String::as_str).collect();
        order.sort_unstable();
        prop_assert_eq!(order, ids.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert!(schema.rule("not-a-question").is_none());
    }

    #[test]
    fn validation_is_idempotent(
        texts in prop::collection::vec(".{0,12}", 1..6),
        numbers in prop::collection::vec(-50.0f64..50.0, 1..6),
    ) {
        let mut questions = Vec::new();
        let mut submission = Submission::new();
        for (idx, text) in texts.iter().enumerate() {
            let id = format!("t{idx}");
            let options = TextOptions {
                max_answer_length: Some(6),
                ..TextOptions::default()
            };
            questions.push(Question::new(&id, "Text", options).with_order(idx as u32));
            submission.insert(id, text.as_str());
        }
        for (idx, number) in numbers.iter().enumerate() {
            let id = format!("n{idx}");
            let options = NumberOptions {
                min: Some(0.0),
                max: Some(10.0),
                ..NumberOptions::default()
            };
            questions.push(Question::new(&id, "Number", options).required());
            submission.insert(id, *number);
        }

        let schema = compose(&questions).unwrap();
        let first = schema.validate(&submission);
        let second = compose(&questions).unwrap().validate(&submission);
        prop_assert_eq!(&first, &second);
        // One entry per failing question, never more.
        prop_assert!(first.len() <= questions.len());
    }

    #[test]
    fn missing_required_answers_are_each_reported_once(
        required in prop::collection::vec(any::<bool>(), 0..10),
    ) {
        let questions: Vec<Question> = required
            .iter()
            .enumerate()
            .map(|(idx, &required)| {
                let question = Question::new(format!("q{idx}"), "Q", TextOptions::default());
                if required { question.required() } else { question }
            })
            .collect();
        let report = compose(&questions).unwrap().validate(&Submission::new());
        prop_assert_eq!(report.len(), required.iter().filter(|r| **r).count());
        prop_assert!(
            report
                .errors()
                .iter()
                .all(|e| e.kind == FieldErrorKind::MissingRequiredAnswer)
        );
    }

    #[test]
    fn scale_accepts_exactly_the_steps(min in -20i32..20, span in 1i32..20, value in -50i32..50) {
        let (min, max) = (f64::from(min), f64::from(min + span));
        let question = Question::new(
            "s",
            "Scale",
            LinearScaleOptions { min, max, step: Some(1.0), ..LinearScaleOptions::default() },
        );
        let rule = registry::build_rule(&question).unwrap();
        let value = f64::from(value);
        let result = rule.check(&AnswerValue::Number(value));
        if (min..=max).contains(&value) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err().kind, ValidationErrorKind::OutOfRange);
        }
        let half = rule.check(&AnswerValue::Number(value + 0.5));
        prop_assert!(half.is_err());
    }

    #[test]
    fn inverted_number_bounds_never_compose(a in -1.0e6f64..1.0e6, gap in 0.001f64..1.0e3) {
        let question = Question::new(
            "n",
            "Number",
            NumberOptions { min: Some(a + gap), max: Some(a), ..NumberOptions::default() },
        );
        prop_assert!(compose(&[question]).is_err());
    }
}
