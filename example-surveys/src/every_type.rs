//! One question of every type, each with its default options.

use survey_builder_types::{
    CheckboxOptions, DateOptions, DatetimeOptions, DropdownOptions, EmailOptions, FileMeta,
    FileOptions, LikertOptions, LinearScaleOptions, MultipleChoiceOptions, NumberOptions,
    PhoneOptions, Question, QuestionOptions, RatingOptions, SliderOptions, Submission, Survey,
    TextOptions, TimeOptions,
};

pub const SURVEY_ID: &str = "every-type";

fn defaults() -> [QuestionOptions; 15] {
    [
        TextOptions::default().into(),
        EmailOptions::default().into(),
        NumberOptions::default().into(),
        PhoneOptions::default().into(),
        MultipleChoiceOptions::default().into(),
        CheckboxOptions::default().into(),
        DropdownOptions::default().into(),
        LinearScaleOptions::default().into(),
        SliderOptions::default().into(),
        LikertOptions::default().into(),
        RatingOptions::default().into(),
        DateOptions::default().into(),
        TimeOptions::default().into(),
        DatetimeOptions::default().into(),
        FileOptions::default().into(),
    ]
}

/// Required questions with ids equal to their type tag.
pub fn every_type() -> Survey {
    let mut survey = Survey::new(SURVEY_ID, "acme", "Every question type");
    for (idx, options) in defaults().into_iter().enumerate() {
        let tag = options.tag();
        survey.questions.push(
            Question::new(tag.as_str(), format!("A {tag} question"), options)
                .required()
                .with_order(idx as u32 + 1),
        );
    }
    survey.is_published = true;
    survey
}

/// A submission that passes every default rule.
pub fn every_type_answers() -> Submission {
    Submission::new()
        .with("text", "Hello")
        .with("email", "someone@example.org")
        .with("number", 3.25)
        .with("phone", "+1 555 123 4567")
        .with("multiple_choice", "Option 1")
        .with("checkbox", vec!["Option 1", "Option 2"])
        .with("dropdown", "Option 2")
        .with("linear_scale", 3.0)
        .with("slider", 42.0)
        .with("likert", 4.0)
        .with("rating", 5.0)
        .with("date", "2025-03-14")
        .with("time", "08:45")
        .with("datetime", "2025-03-14T08:45")
        .with("file", vec![FileMeta::new("report.pdf", 2048)])
}
