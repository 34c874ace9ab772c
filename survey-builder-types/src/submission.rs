use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Answer, AnswerValue, Question};

/// A submitted answer set: question id to raw value.
///
/// Questions the respondent skipped are simply absent. In JSON this is a
/// plain object, e.g. `{"q-age": 31, "q-tags": ["a", "b"]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    values: BTreeMap<String, AnswerValue>,
}

impl Submission {
    /// Create a new empty submission.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Add an answer, builder style.
    pub fn with(mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(question_id, value);
        self
    }

    /// Insert an answer for the given question.
    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(question_id.into(), value.into());
    }

    /// Get the answer for a question.
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.values.get(question_id)
    }

    /// Check if the question was answered.
    pub fn contains(&self, question_id: &str) -> bool {
        self.values.contains_key(question_id)
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.values.remove(question_id)
    }

    /// Iterate over `(question id, value)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(id, value)| (id.as_str(), value))
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another submission into this one. Later values win.
    pub fn extend(&mut self, other: Submission) {
        self.values.extend(other.values);
    }

    /// Rebuild the answer set of one stored response.
    ///
    /// Each answer is decoded according to its question's type; answers for
    /// questions not in `questions` and answers with an empty payload are
    /// left out.
    pub fn from_answers(questions: &[Question], answers: &[Answer]) -> Self {
        let mut submission = Self::new();
        for answer in answers {
            let Some(question) = questions.iter().find(|q| q.id() == answer.question_id) else {
                continue;
            };
            if let Some(value) = answer.value_for(question.question_type()) {
                submission.insert(answer.question_id.clone(), value);
            }
        }
        submission
    }
}

impl IntoIterator for Submission {
    type Item = (String, AnswerValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Submission {
    type Item = (&'a String, &'a AnswerValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl FromIterator<(String, AnswerValue)> for Submission {
    fn from_iter<I: IntoIterator<Item = (String, AnswerValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::*;
    use crate::{CheckboxOptions, NumberOptions};

    #[test]
    fn insert_and_get() {
        let submission = Submission::new().with("name", "Alice").with("age", 30);
        assert_eq!(submission.get("name"), Some(&AnswerValue::from("Alice")));
        assert_eq!(submission.get("age").and_then(AnswerValue::as_number), Some(30.0));
        assert!(!submission.contains("email"));
    }

    #[test]
    fn decodes_from_plain_object() {
        let submission: Submission =
            serde_json::from_value(json!({"q1": "text", "q2": 3, "q3": ["a"]})).unwrap();
        assert_eq!(submission.len(), 3);
        assert_eq!(submission.get("q3"), Some(&AnswerValue::from(vec!["a"])));
    }

    #[test]
    fn rebuilds_from_stored_answers() {
        let questions = vec![
            Question::new("age", "Age?", NumberOptions::default()),
            Question::new("langs", "Languages?", CheckboxOptions::default()),
        ];
        let created = datetime!(2024-10-05 12:00 UTC);
        let answers = vec![
            Answer::from_value("a1", "age", created, &AnswerValue::Number(40.0)),
            Answer::from_value("a2", "langs", created, &AnswerValue::from(vec!["Rust"])),
            Answer::from_value("a3", "gone", created, &AnswerValue::from("orphan")),
        ];

        let submission = Submission::from_answers(&questions, &answers);
        assert_eq!(submission.len(), 2);
        assert_eq!(submission.get("age"), Some(&AnswerValue::Number(40.0)));
        assert_eq!(submission.get("langs"), Some(&AnswerValue::from(vec!["Rust"])));
    }
}
