//! A short customer feedback survey.

use survey_builder_types::{
    CheckboxOptions, EmailOptions, LikertOptions, LinearScaleOptions, MultipleChoiceOptions,
    Question, RatingIcon, RatingOptions, Submission, Survey, TextOptions,
};

pub const SURVEY_ID: &str = "customer-feedback";

pub const FEATURES: [&str; 4] = ["Search", "Checkout", "Wishlist", "Reviews"];

pub fn customer_feedback() -> Survey {
    let mut survey = Survey::new(SURVEY_ID, "acme", "How did we do?")
        .with_description("Tell us about your last order.")
        .with_question(
            Question::new(
                "satisfaction",
                "How satisfied are you overall?",
                RatingOptions {
                    max: 5,
                    icon: RatingIcon::Star,
                },
            )
            .required()
            .with_order(1),
        )
        .with_question(
            Question::new(
                "recommend",
                "How likely are you to recommend us?",
                LinearScaleOptions {
                    min: 0.0,
                    max: 10.0,
                    step: Some(1.0),
                    min_label: Some("Not likely".to_string()),
                    max_label: Some("Very likely".to_string()),
                },
            )
            .required()
            .with_order(2),
        )
        .with_question(
            Question::new(
                "channel",
                "How did you hear about us?",
                MultipleChoiceOptions {
                    choices: ["Friend", "Search engine", "Advertisement"]
                        .map(String::from)
                        .to_vec(),
                    allow_other: true,
                    max_length_for_other_parameter: Some(40),
                    randomize_order: false,
                },
            )
            .with_order(3),
        )
        .with_question(
            Question::new(
                "features",
                "Which features did you use?",
                CheckboxOptions {
                    choices: FEATURES.map(String::from).to_vec(),
                    min_selections: 1,
                    max_selections: Some(3),
                    randomize_order: true,
                },
            )
            .with_order(4),
        )
        .with_question(
            Question::new(
                "easy",
                "The website was easy to use.",
                LikertOptions::default(),
            )
            .with_order(5),
        )
        .with_question(
            Question::new(
                "comments",
                "Anything else?",
                TextOptions {
                    max_answer_length: Some(500),
                    is_multiline: true,
                    ..TextOptions::default()
                },
            )
            .with_order(6),
        )
        .with_question(
            Question::new(
                "contact",
                "Email, if you want us to follow up",
                EmailOptions {
                    disallowed_domains: vec!["example.com".to_string()],
                    ..EmailOptions::default()
                },
            )
            .with_order(7),
        );
    survey.is_published = true;
    survey.show_progress_bar = true;
    survey
}

/// A submission that passes every rule of [`customer_feedback`].
pub fn happy_customer() -> Submission {
    Submission::new()
        .with("satisfaction", 5.0)
        .with("recommend", 9.0)
        .with("channel", "Friend")
        .with("features", vec!["Search", "Checkout"])
        .with("easy", 4.0)
        .with("comments", "Fast delivery, thanks!")
        .with("contact", "ada@lovelace.dev")
}
