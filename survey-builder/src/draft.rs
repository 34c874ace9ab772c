//! Editable survey state for the authoring flow.

use survey_builder_types::{Question, QuestionOptions, QuestionTypeTag, Survey, SurveyError};
use uuid::Uuid;

use crate::compose::{ComposedSchema, compose};
use crate::registry;

/// Prefix of ids handed out to questions that were never saved.
pub const TEMPORARY_ID_PREFIX: &str = "tmp-";

/// A survey being edited.
///
/// Questions are kept in render order with order numbers `1..=n`. Every
/// edit that touches options is checked by building the question's rule, so
/// the draft never holds options that cannot be composed.
#[derive(Debug, Clone)]
pub struct SurveyDraft {
    survey: Survey,
}

impl SurveyDraft {
    /// Start editing `survey`. Questions are sorted and renumbered.
    pub fn new(survey: Survey) -> Self {
        let mut draft = Self { survey };
        draft
            .survey
            .questions_mut()
            .sort_by_key(Question::order_number);
        draft.renumber();
        draft
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    pub fn into_survey(self) -> Survey {
        self.survey
    }

    /// Questions in render order.
    pub fn questions(&self) -> &[Question] {
        self.survey.questions()
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.survey.question(id)
    }

    /// Append a question of type `tag` with the registry's default options.
    ///
    /// Returns the temporary id of the new question.
    pub fn add_question(&mut self, tag: QuestionTypeTag, text: impl Into<String>) -> String {
        let id = format!("{TEMPORARY_ID_PREFIX}{}", Uuid::new_v4());
        let order = self.questions().len() as u32 + 1;
        let question =
            Question::new(id.clone(), text, registry::default_options(tag)).with_order(order);
        self.survey.questions_mut().push(question);
        tracing::debug!(question_id = %id, question_type = %tag, "added question");
        id
    }

    /// Replace the options of a question.
    ///
    /// The new record is checked first; on error the old options stay.
    pub fn update_options(
        &mut self,
        id: &str,
        options: impl Into<QuestionOptions>,
    ) -> Result<(), SurveyError> {
        let question = self.question_mut(id)?;
        let mut candidate = question.clone();
        candidate.set_options(options);
        if let Err(err) = registry::build_rule(&candidate) {
            tracing::warn!(question_id = id, error = %err, "rejected option update");
            return Err(err.into());
        }
        *question = candidate;
        tracing::trace!(question_id = id, "updated options");
        Ok(())
    }

    /// Switch a question to another type, resetting its options to that
    /// type's defaults. Switching to the current type changes nothing.
    pub fn change_type(&mut self, id: &str, tag: QuestionTypeTag) -> Result<(), SurveyError> {
        let question = self.question_mut(id)?;
        if question.question_type() != tag {
            tracing::debug!(
                question_id = id,
                from = %question.question_type(),
                to = %tag,
                "changed question type"
            );
            question.set_options(registry::default_options(tag));
        }
        Ok(())
    }

    pub fn set_required(&mut self, id: &str, required: bool) -> Result<(), SurveyError> {
        self.question_mut(id)?.set_required(required);
        Ok(())
    }

    pub fn set_question_text(
        &mut self,
        id: &str,
        text: impl Into<String>,
    ) -> Result<(), SurveyError> {
        self.question_mut(id)?.set_question_text(text);
        Ok(())
    }

    /// Remove a question and close the gap in the numbering.
    pub fn remove_question(&mut self, id: &str) -> Result<Question, SurveyError> {
        let idx = self.position(id)?;
        let removed = self.survey.questions_mut().remove(idx);
        self.renumber();
        tracing::debug!(question_id = id, "removed question");
        Ok(removed)
    }

    /// Move a question to the zero-based `position`, clamped to the end.
    pub fn move_question(&mut self, id: &str, position: usize) -> Result<(), SurveyError> {
        let idx = self.position(id)?;
        let questions = self.survey.questions_mut();
        let question = questions.remove(idx);
        let position = position.min(questions.len());
        questions.insert(position, question);
        self.renumber();
        tracing::trace!(question_id = id, position, "moved question");
        Ok(())
    }

    /// Build the schema for the current questions.
    pub fn compose(&self) -> Result<ComposedSchema, SurveyError> {
        Ok(compose(self.questions())?)
    }

    /// Ids of questions that have not been saved yet.
    pub fn unsaved_question_ids(&self) -> impl Iterator<Item = &str> {
        self.questions()
            .iter()
            .map(Question::id)
            .filter(|id| id.starts_with(TEMPORARY_ID_PREFIX))
    }

    fn position(&self, id: &str) -> Result<usize, SurveyError> {
        self.questions()
            .iter()
            .position(|q| q.id() == id)
            .ok_or_else(|| SurveyError::QuestionNotFound(id.to_string()))
    }

    fn question_mut(&mut self, id: &str) -> Result<&mut Question, SurveyError> {
        let idx = self.position(id)?;
        Ok(&mut self.survey.questions_mut()[idx])
    }

    fn renumber(&mut self) {
        for (idx, question) in self.survey.questions_mut().iter_mut().enumerate() {
            question.set_order_number(idx as u32 + 1);
        }
    }
}
