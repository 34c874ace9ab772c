//! Registration form for a company conference.
//!
//! Uses non-ISO date and time formats, so bounds only work when compared
//! as parsed values.

use survey_builder_types::{
    DateFormat, DateOptions, DropdownOptions, EmailOptions, FileMeta, FileOptions, NumberOptions,
    PhoneOptions, Question, SliderOptions, Submission, Survey, TextOptions, TimeFormat,
    TimeOptions,
};

pub const SURVEY_ID: &str = "event-registration";

pub const COUNTRIES: [&str; 5] = ["Austria", "Germany", "Italy", "Spain", "Switzerland"];

pub fn event_registration() -> Survey {
    let mut survey = Survey::new(SURVEY_ID, "acme", "Conference registration")
        .with_question(
            Question::new(
                "full_name",
                "Full name",
                TextOptions {
                    min_answer_length: Some(2),
                    max_answer_length: Some(80),
                    ..TextOptions::default()
                },
            )
            .required()
            .with_order(1),
        )
        .with_question(
            Question::new(
                "work_email",
                "Work email",
                EmailOptions {
                    allowed_domains: vec!["acme.com".to_string(), "acme.org".to_string()],
                    allow_duplicates: false,
                    ..EmailOptions::default()
                },
            )
            .required()
            .with_order(2),
        )
        .with_question(
            Question::new(
                "phone",
                "Mobile number",
                PhoneOptions {
                    default_country_code: Some("+43".to_string()),
                    ..PhoneOptions::default()
                },
            )
            .with_order(3),
        )
        .with_question(
            Question::new(
                "country",
                "Country of residence",
                DropdownOptions {
                    choices: COUNTRIES.map(String::from).to_vec(),
                    allow_search: true,
                    placeholder: Some("Select a country".to_string()),
                },
            )
            .required()
            .with_order(4),
        )
        .with_question(
            Question::new(
                "arrival",
                "Arrival date",
                DateOptions {
                    format: DateFormat::Long,
                    min_date: Some("September 1, 2025".to_string()),
                    max_date: Some("November 30, 2025".to_string()),
                },
            )
            .required()
            .with_order(5),
        )
        .with_question(
            Question::new(
                "talk_slot",
                "Preferred talk slot",
                TimeOptions {
                    format: TimeFormat::Hour12,
                    min_time: Some("9:00 AM".to_string()),
                    max_time: Some("5:00 PM".to_string()),
                },
            )
            .with_order(6),
        )
        .with_question(
            Question::new(
                "guests",
                "Number of guests",
                NumberOptions {
                    min: Some(0.0),
                    max: Some(4.0),
                    allow_decimal: false,
                    placeholder: None,
                },
            )
            .with_order(7),
        )
        .with_question(
            Question::new(
                "budget",
                "Hotel budget per night (EUR)",
                SliderOptions {
                    min: 50.0,
                    max: 400.0,
                    step: Some(10.0),
                    range: true,
                    ..SliderOptions::default()
                },
            )
            .with_order(8),
        )
        .with_question(
            Question::new(
                "slides",
                "Upload your slides",
                FileOptions {
                    accepted_formats: vec![".pdf".to_string(), ".pptx".to_string()],
                    max_size_mb: 25.0,
                    max_files: 2,
                    allow_multiple: true,
                },
            )
            .with_order(9),
        );
    survey.is_published = true;
    survey.requires_sign_in = true;
    survey
}

/// A submission that passes every rule of [`event_registration`].
pub fn speaker() -> Submission {
    Submission::new()
        .with("full_name", "Grace Hopper")
        .with("work_email", "grace@acme.com")
        .with("phone", "+43 660 1234567")
        .with("country", "Austria")
        .with("arrival", "October 14, 2025")
        .with("talk_slot", "2:30 PM")
        .with("guests", 1.0)
        .with("budget", (120.0, 180.0))
        .with("slides", vec![FileMeta::new("compilers.pdf", 3 * 1024 * 1024)])
}
