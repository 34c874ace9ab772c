use serde::Serialize;
use survey_builder_types::{Answer, FileMeta, QuestionTypeTag};

use crate::choice::ChoiceCount;
use crate::numeric::{percentage, ranked_counts};

/// Statistics for file upload questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileStats {
    /// Responses with at least one file.
    pub responses: usize,
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub average_size_bytes: Option<f64>,
    /// File extensions by frequency; percentages are per file.
    pub extensions: Vec<ChoiceCount>,
}

/// Reducer for `file` questions.
pub fn summarize_files(answers: &[Answer]) -> FileStats {
    let uploads: Vec<Vec<FileMeta>> = answers
        .iter()
        .filter_map(|answer| answer.value_for(QuestionTypeTag::File))
        .filter_map(|value| value.as_files().map(<[FileMeta]>::to_vec))
        .filter(|files| !files.is_empty())
        .collect();

    let files: Vec<&FileMeta> = uploads.iter().flatten().collect();
    let total_size_bytes: u64 = files.iter().map(|file| file.size_bytes).sum();
    let extensions: Vec<String> = files
        .iter()
        .map(|file| file.extension().unwrap_or_else(|| "none".to_string()))
        .collect();

    FileStats {
        responses: uploads.len(),
        total_files: files.len(),
        total_size_bytes,
        average_size_bytes: (!files.is_empty())
            .then(|| total_size_bytes as f64 / files.len() as f64),
        extensions: ranked_counts(extensions.iter().map(String::as_str))
            .into_iter()
            .map(|(choice, count)| ChoiceCount {
                choice,
                count,
                percentage: percentage(count, files.len()),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use survey_builder_types::AnswerValue;
    use time::macros::datetime;

    use super::*;

    fn upload(files: Vec<FileMeta>) -> Answer {
        Answer::from_value("a", "q", datetime!(2024-01-01 0:00 UTC), &AnswerValue::Files(files))
    }

    #[test]
    fn totals_and_extensions() {
        let answers = vec![
            upload(vec![FileMeta::new("a.pdf", 100), FileMeta::new("b.PDF", 300)]),
            upload(vec![FileMeta::new("c.png", 200)]),
            upload(vec![]),
        ];
        let stats = summarize_files(&answers);
        assert_eq!(stats.responses, 2);
        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.total_size_bytes, 600);
        assert_eq!(stats.average_size_bytes, Some(200.0));
        assert_eq!(stats.extensions[0].choice, "pdf");
        assert_eq!(stats.extensions[0].count, 2);
    }

    #[test]
    fn no_uploads_is_no_data() {
        let stats = summarize_files(&[]);
        assert_eq!(stats.total_files, 0);
        assert_eq!(stats.average_size_bytes, None);
        assert!(stats.extensions.is_empty());
    }
}
