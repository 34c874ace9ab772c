//! Sample surveys for tests and demos.
//!
//! Surveys built in Rust live in their own modules; surveys stored as JSON,
//! the way the backend returns them, live under `fixtures/`.

use anyhow::Context;
use survey_builder_types::Survey;

pub mod customer_feedback;
pub mod event_registration;
pub mod every_type;

pub use customer_feedback::{customer_feedback, happy_customer};
pub use event_registration::{event_registration, speaker};
pub use every_type::{every_type, every_type_answers};

/// The workshop sign-up survey, as served by the backend.
pub const WORKSHOP_JSON: &str = include_str!("../fixtures/workshop.json");

/// Decode [`WORKSHOP_JSON`].
pub fn workshop() -> anyhow::Result<Survey> {
    Survey::from_json(WORKSHOP_JSON).context("failed to decode the workshop fixture")
}

/// Every built-in sample survey.
pub fn all() -> anyhow::Result<Vec<Survey>> {
    Ok(vec![
        customer_feedback(),
        event_registration(),
        every_type(),
        workshop()?,
    ])
}
