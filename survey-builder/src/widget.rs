//! Widget bindings for each question type.
//!
//! The registry maps every tag to one widget per flow. Callers pick the
//! actual component from these identifiers; nothing here renders anything.

use serde::Serialize;
use survey_builder_types::{
    DropdownOptions, FileOptions, Question, QuestionTypeTag, SliderOptions, TextOptions,
};

use crate::registry;

/// Input component used while answering a survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerWidget {
    TextInput,
    TextArea,
    EmailInput,
    NumberInput,
    PhoneInput,
    RadioGroup,
    CheckboxGroup,
    Select,
    SearchableSelect,
    ScaleButtons,
    Slider,
    RangeSlider,
    LikertScale,
    Rating,
    DatePicker,
    TimePicker,
    DateTimePicker,
    FileUpload,
    MultiFileUpload,
}

/// Read-only display of a stored answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewWidget {
    Text,
    EmailLink,
    PhoneLink,
    Number,
    SelectedChoice,
    SelectedChoices,
    ScaleValue,
    LikertLabel,
    RatingIcons,
    FormattedDate,
    FormattedTime,
    FormattedDatetime,
    FileList,
}

/// Form the survey author edits a question's options with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionEditor {
    TextLimits,
    EmailRules,
    NumberBounds,
    PhoneDigits,
    ChoiceList,
    ChoiceListWithLimits,
    ScaleBounds,
    SliderSettings,
    LikertLabels,
    RatingSettings,
    DateBounds,
    TimeBounds,
    DatetimeBounds,
    FileLimits,
}

/// Chart an analytics view draws for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    WordFrequency,
    DomainBar,
    CountryCodeBar,
    Histogram,
    Distribution,
    Pie,
    HorizontalBar,
    WeekdayBar,
    HourBar,
    FileSummary,
}

/// The answering widget for a tag, ignoring options.
pub fn answer_widget(tag: QuestionTypeTag) -> AnswerWidget {
    registry::entry(tag).answer_widget
}

/// The review widget for a tag.
pub fn review_widget(tag: QuestionTypeTag) -> ReviewWidget {
    registry::entry(tag).review_widget
}

pub fn option_editor(tag: QuestionTypeTag) -> OptionEditor {
    registry::entry(tag).option_editor
}

pub fn chart_kind(tag: QuestionTypeTag) -> ChartKind {
    registry::entry(tag).chart
}

/// The answering widget for a concrete question, refined by its options.
pub fn answer_widget_for(question: &Question) -> AnswerWidget {
    let base = answer_widget(question.question_type());
    match question.question_type() {
        QuestionTypeTag::Text
            if question
                .options_as::<TextOptions>()
                .is_some_and(|o| o.is_multiline) =>
        {
            AnswerWidget::TextArea
        }
        QuestionTypeTag::Dropdown
            if question
                .options_as::<DropdownOptions>()
                .is_some_and(|o| o.allow_search) =>
        {
            AnswerWidget::SearchableSelect
        }
        QuestionTypeTag::Slider
            if question
                .options_as::<SliderOptions>()
                .is_some_and(|o| o.range) =>
        {
            AnswerWidget::RangeSlider
        }
        QuestionTypeTag::File
            if question
                .options_as::<FileOptions>()
                .is_some_and(|o| o.allow_multiple && o.max_files > 1) =>
        {
            AnswerWidget::MultiFileUpload
        }
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_refine_the_answer_widget() {
        let plain = Question::new("q1", "Bio", TextOptions::default());
        assert_eq!(answer_widget_for(&plain), AnswerWidget::TextInput);

        let long = Question::new(
            "q2",
            "Bio",
            TextOptions {
                is_multiline: true,
                ..TextOptions::default()
            },
        );
        assert_eq!(answer_widget_for(&long), AnswerWidget::TextArea);

        let range = Question::new(
            "q3",
            "Budget",
            SliderOptions {
                range: true,
                ..SliderOptions::default()
            },
        );
        assert_eq!(answer_widget_for(&range), AnswerWidget::RangeSlider);

        let uploads = Question::new(
            "q4",
            "Attachments",
            FileOptions {
                allow_multiple: true,
                max_files: 3,
                ..FileOptions::default()
            },
        );
        assert_eq!(answer_widget_for(&uploads), AnswerWidget::MultiFileUpload);
    }

    #[test]
    fn searchable_dropdown() {
        let question = Question::new(
            "country",
            "Country",
            DropdownOptions {
                allow_search: true,
                ..DropdownOptions::default()
            },
        );
        assert_eq!(answer_widget_for(&question), AnswerWidget::SearchableSelect);
        assert_eq!(answer_widget(QuestionTypeTag::Dropdown), AnswerWidget::Select);
    }

    #[test]
    fn every_tag_has_distinct_base_answer_widget() {
        let mut widgets: Vec<AnswerWidget> =
            QuestionTypeTag::ALL.iter().map(|&tag| answer_widget(tag)).collect();
        widgets.sort_by_key(|w| *w as u8);
        widgets.dedup();
        assert_eq!(widgets.len(), QuestionTypeTag::ALL.len());
    }
}
