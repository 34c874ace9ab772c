//! The question type registry.
//!
//! One [`QuestionTypeEntry`] per tag, stored in [`QuestionTypeTag::ALL`]
//! order so lookup is a plain index and can never miss.

use survey_builder_stats::{
    AnswerStats, summarize_checkbox, summarize_date, summarize_datetime, summarize_email,
    summarize_files, summarize_number, summarize_phone, summarize_scale, summarize_single_choice,
    summarize_slider, summarize_text, summarize_time,
};
use survey_builder_types::{
    Answer, CheckboxOptions, ConfigurationError, DateOptions, DatetimeOptions, DropdownOptions,
    EmailOptions, FileOptions, LikertOptions, LinearScaleOptions, MultipleChoiceOptions,
    NumberOptions, PhoneOptions, Question, QuestionOptions, QuestionTypeTag, RatingOptions,
    SliderOptions, TextOptions, TimeOptions,
};

use crate::rule::ValidationRule;
use crate::rules::BuildRule;
use crate::widget::{AnswerWidget, ChartKind, OptionEditor, ReviewWidget};

type BuildFn = fn(&QuestionOptions, &str, bool) -> Result<ValidationRule, ConfigurationError>;
type SummarizeFn = fn(&QuestionOptions, &[Answer]) -> AnswerStats;

/// Everything the builder knows about one question type.
#[derive(Debug, Clone, Copy)]
pub struct QuestionTypeEntry {
    pub tag: QuestionTypeTag,
    /// Name shown in the type picker.
    pub label: &'static str,
    pub default_options: fn() -> QuestionOptions,
    pub build_rule: BuildFn,
    pub answer_widget: AnswerWidget,
    pub review_widget: ReviewWidget,
    pub option_editor: OptionEditor,
    pub chart: ChartKind,
    pub summarize: SummarizeFn,
}

fn defaults<T: BuildRule>() -> QuestionOptions {
    T::default().into()
}

fn build<T: BuildRule>(
    options: &QuestionOptions,
    question_id: &str,
    required: bool,
) -> Result<ValidationRule, ConfigurationError> {
    let typed = options.get::<T>().ok_or_else(|| {
        ConfigurationError::invalid_option(
            question_id,
            "questionType",
            format!("expected {} options, got {}", T::TAG, options.tag()),
        )
    })?;
    Ok(ValidationRule::new(typed.build_rule(question_id)?, required))
}

fn stats_text(_: &QuestionOptions, answers: &[Answer]) -> AnswerStats {
    AnswerStats::Text(summarize_text(answers))
}

fn stats_email(_: &QuestionOptions, answers: &[Answer]) -> AnswerStats {
    AnswerStats::Email(summarize_email(answers))
}

fn stats_phone(_: &QuestionOptions, answers: &[Answer]) -> AnswerStats {
    AnswerStats::Phone(summarize_phone(answers))
}

fn stats_number(_: &QuestionOptions, answers: &[Answer]) -> AnswerStats {
    AnswerStats::Numeric(summarize_number(answers))
}

fn stats_scale(_: &QuestionOptions, answers: &[Answer]) -> AnswerStats {
    AnswerStats::Numeric(summarize_scale(answers))
}

fn stats_slider(_: &QuestionOptions, answers: &[Answer]) -> AnswerStats {
    AnswerStats::Numeric(summarize_slider(answers))
}

fn stats_single_choice(options: &QuestionOptions, answers: &[Answer]) -> AnswerStats {
    AnswerStats::Choice(summarize_single_choice(
        options.choices().unwrap_or_default(),
        answers,
    ))
}

fn stats_checkbox(options: &QuestionOptions, answers: &[Answer]) -> AnswerStats {
    AnswerStats::Choice(summarize_checkbox(
        options.choices().unwrap_or_default(),
        answers,
    ))
}

fn stats_date(options: &QuestionOptions, answers: &[Answer]) -> AnswerStats {
    let format = options.get::<DateOptions>().map(|o| o.format).unwrap_or_default();
    AnswerStats::Temporal(summarize_date(format, answers))
}

fn stats_time(options: &QuestionOptions, answers: &[Answer]) -> AnswerStats {
    let format = options.get::<TimeOptions>().map(|o| o.format).unwrap_or_default();
    AnswerStats::Temporal(summarize_time(format, answers))
}

fn stats_datetime(options: &QuestionOptions, answers: &[Answer]) -> AnswerStats {
    let format = options
        .get::<DatetimeOptions>()
        .map(|o| o.format)
        .unwrap_or_default();
    AnswerStats::Temporal(summarize_datetime(format, answers))
}

fn stats_files(_: &QuestionOptions, answers: &[Answer]) -> AnswerStats {
    AnswerStats::Files(summarize_files(answers))
}

static ENTRIES: [QuestionTypeEntry; 15] = [
    QuestionTypeEntry {
        tag: QuestionTypeTag::Text,
        label: "Short answer",
        default_options: defaults::<TextOptions>,
        build_rule: build::<TextOptions>,
        answer_widget: AnswerWidget::TextInput,
        review_widget: ReviewWidget::Text,
        option_editor: OptionEditor::TextLimits,
        chart: ChartKind::WordFrequency,
        summarize: stats_text,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::Email,
        label: "Email",
        default_options: defaults::<EmailOptions>,
        build_rule: build::<EmailOptions>,
        answer_widget: AnswerWidget::EmailInput,
        review_widget: ReviewWidget::EmailLink,
        option_editor: OptionEditor::EmailRules,
        chart: ChartKind::DomainBar,
        summarize: stats_email,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::Number,
        label: "Number",
        default_options: defaults::<NumberOptions>,
        build_rule: build::<NumberOptions>,
        answer_widget: AnswerWidget::NumberInput,
        review_widget: ReviewWidget::Number,
        option_editor: OptionEditor::NumberBounds,
        chart: ChartKind::Histogram,
        summarize: stats_number,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::Phone,
        label: "Phone number",
        default_options: defaults::<PhoneOptions>,
        build_rule: build::<PhoneOptions>,
        answer_widget: AnswerWidget::PhoneInput,
        review_widget: ReviewWidget::PhoneLink,
        option_editor: OptionEditor::PhoneDigits,
        chart: ChartKind::CountryCodeBar,
        summarize: stats_phone,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::MultipleChoice,
        label: "Multiple choice",
        default_options: defaults::<MultipleChoiceOptions>,
        build_rule: build::<MultipleChoiceOptions>,
        answer_widget: AnswerWidget::RadioGroup,
        review_widget: ReviewWidget::SelectedChoice,
        option_editor: OptionEditor::ChoiceList,
        chart: ChartKind::Pie,
        summarize: stats_single_choice,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::Checkbox,
        label: "Checkboxes",
        default_options: defaults::<CheckboxOptions>,
        build_rule: build::<CheckboxOptions>,
        answer_widget: AnswerWidget::CheckboxGroup,
        review_widget: ReviewWidget::SelectedChoices,
        option_editor: OptionEditor::ChoiceListWithLimits,
        chart: ChartKind::HorizontalBar,
        summarize: stats_checkbox,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::Dropdown,
        label: "Dropdown",
        default_options: defaults::<DropdownOptions>,
        build_rule: build::<DropdownOptions>,
        answer_widget: AnswerWidget::Select,
        review_widget: ReviewWidget::SelectedChoice,
        option_editor: OptionEditor::ChoiceList,
        chart: ChartKind::Pie,
        summarize: stats_single_choice,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::LinearScale,
        label: "Linear scale",
        default_options: defaults::<LinearScaleOptions>,
        build_rule: build::<LinearScaleOptions>,
        answer_widget: AnswerWidget::ScaleButtons,
        review_widget: ReviewWidget::ScaleValue,
        option_editor: OptionEditor::ScaleBounds,
        chart: ChartKind::Distribution,
        summarize: stats_scale,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::Slider,
        label: "Slider",
        default_options: defaults::<SliderOptions>,
        build_rule: build::<SliderOptions>,
        answer_widget: AnswerWidget::Slider,
        review_widget: ReviewWidget::ScaleValue,
        option_editor: OptionEditor::SliderSettings,
        chart: ChartKind::Histogram,
        summarize: stats_slider,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::Likert,
        label: "Likert scale",
        default_options: defaults::<LikertOptions>,
        build_rule: build::<LikertOptions>,
        answer_widget: AnswerWidget::LikertScale,
        review_widget: ReviewWidget::LikertLabel,
        option_editor: OptionEditor::LikertLabels,
        chart: ChartKind::Distribution,
        summarize: stats_scale,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::Rating,
        label: "Rating",
        default_options: defaults::<RatingOptions>,
        build_rule: build::<RatingOptions>,
        answer_widget: AnswerWidget::Rating,
        review_widget: ReviewWidget::RatingIcons,
        option_editor: OptionEditor::RatingSettings,
        chart: ChartKind::Distribution,
        summarize: stats_scale,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::Date,
        label: "Date",
        default_options: defaults::<DateOptions>,
        build_rule: build::<DateOptions>,
        answer_widget: AnswerWidget::DatePicker,
        review_widget: ReviewWidget::FormattedDate,
        option_editor: OptionEditor::DateBounds,
        chart: ChartKind::WeekdayBar,
        summarize: stats_date,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::Time,
        label: "Time",
        default_options: defaults::<TimeOptions>,
        build_rule: build::<TimeOptions>,
        answer_widget: AnswerWidget::TimePicker,
        review_widget: ReviewWidget::FormattedTime,
        option_editor: OptionEditor::TimeBounds,
        chart: ChartKind::HourBar,
        summarize: stats_time,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::Datetime,
        label: "Date and time",
        default_options: defaults::<DatetimeOptions>,
        build_rule: build::<DatetimeOptions>,
        answer_widget: AnswerWidget::DateTimePicker,
        review_widget: ReviewWidget::FormattedDatetime,
        option_editor: OptionEditor::DatetimeBounds,
        chart: ChartKind::WeekdayBar,
        summarize: stats_datetime,
    },
    QuestionTypeEntry {
        tag: QuestionTypeTag::File,
        label: "File upload",
        default_options: defaults::<FileOptions>,
        build_rule: build::<FileOptions>,
        answer_widget: AnswerWidget::FileUpload,
        review_widget: ReviewWidget::FileList,
        option_editor: OptionEditor::FileLimits,
        chart: ChartKind::FileSummary,
        summarize: stats_files,
    },
];

/// The registry entry for `tag`.
pub fn entry(tag: QuestionTypeTag) -> &'static QuestionTypeEntry {
    &ENTRIES[tag.index()]
}

/// All entries, in [`QuestionTypeTag::ALL`] order.
pub fn entries() -> &'static [QuestionTypeEntry] {
    &ENTRIES
}

/// The options a freshly added question of type `tag` starts with.
pub fn default_options(tag: QuestionTypeTag) -> QuestionOptions {
    (entry(tag).default_options)()
}

/// Build the validation rule for `question` from its options.
pub fn build_rule(question: &Question) -> Result<ValidationRule, ConfigurationError> {
    let options = question.options();
    (entry(options.tag()).build_rule)(options, question.id(), question.is_required())
}

/// Reduce the stored answers of `question` to chart-ready statistics.
pub fn summarize(question: &Question, answers: &[Answer]) -> AnswerStats {
    let options = question.options();
    (entry(options.tag()).summarize)(options, answers)
}
