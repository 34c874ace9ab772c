use survey_builder_types::{AnswerValue, ConfigurationError, FileOptions};

use super::{BuildRule, display_number};
use crate::rule::{RuleKind, ValidationErrorKind, Violation};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Limits on uploaded file metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRule {
    /// Lowercased extensions without the dot. Empty accepts any file.
    pub accepted_extensions: Vec<String>,
    pub max_size_bytes: u64,
    pub max_files: usize,
}

impl FileRule {
    pub fn check(&self, value: &AnswerValue) -> Result<(), Violation> {
        let files = value
            .as_files()
            .ok_or_else(|| Violation::type_mismatch("uploaded files", value))?;

        if files.len() > self.max_files {
            let message = if self.max_files == 1 {
                "Only one file can be uploaded".to_string()
            } else {
                format!("At most {} files can be uploaded", self.max_files)
            };
            return Err(Violation::new(ValidationErrorKind::TooManyFiles, message));
        }

        for file in files {
            if !self.accepted_extensions.is_empty() {
                let accepted = file
                    .extension()
                    .is_some_and(|ext| self.accepted_extensions.contains(&ext));
                if !accepted {
                    return Err(Violation::new(
                        ValidationErrorKind::FileTypeNotAccepted,
                        format!(
                            "'{}' is not an accepted file type ({})",
                            file.name,
                            self.accepted_list()
                        ),
                    ));
                }
            }
            if file.size_bytes > self.max_size_bytes {
                return Err(Violation::new(
                    ValidationErrorKind::FileTooLarge,
                    format!(
                        "'{}' exceeds the {} MB limit",
                        file.name,
                        display_number(self.max_size_bytes as f64 / BYTES_PER_MB)
                    ),
                ));
            }
        }
        Ok(())
    }

    fn accepted_list(&self) -> String {
        self.accepted_extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl BuildRule for FileOptions {
    fn build_rule(&self, question_id: &str) -> Result<RuleKind, ConfigurationError> {
        if !(self.max_size_mb.is_finite() && self.max_size_mb > 0.0) {
            return Err(ConfigurationError::invalid_option(
                question_id,
                "maxSizeMB",
                "must be a positive number",
            ));
        }
        if self.max_files == 0 {
            return Err(ConfigurationError::invalid_option(
                question_id,
                "maxFiles",
                "must be at least 1",
            ));
        }
        let accepted_extensions = self
            .accepted_formats
            .iter()
            .map(|format| format.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Ok(RuleKind::File(FileRule {
            accepted_extensions,
            max_size_bytes: (self.max_size_mb * BYTES_PER_MB) as u64,
            max_files: if self.allow_multiple { self.max_files } else { 1 },
        }))
    }
}

#[cfg(test)]
mod tests {
    use survey_builder_types::FileMeta;

    use super::*;

    fn rule(options: FileOptions) -> FileRule {
        match options.build_rule("upload").unwrap() {
            RuleKind::File(rule) => rule,
            other => panic!("unexpected rule {other:?}"),
        }
    }

    fn files(list: &[(&str, u64)]) -> AnswerValue {
        list.iter()
            .map(|(name, size)| FileMeta::new(*name, *size))
            .collect::<Vec<_>>()
            .into()
    }

    fn kind(result: Result<(), Violation>) -> ValidationErrorKind {
        result.unwrap_err().kind
    }

    #[test]
    fn extensions_are_case_insensitive() {
        let rule = rule(FileOptions::default());
        assert!(rule.check(&files(&[("CV.PDF", 1024)])).is_ok());
        assert_eq!(
            kind(rule.check(&files(&[("notes.txt", 10)]))),
            ValidationErrorKind::FileTypeNotAccepted
        );
        assert_eq!(
            kind(rule.check(&files(&[("README", 10)]))),
            ValidationErrorKind::FileTypeNotAccepted
        );
    }

    #[test]
    fn size_limit_in_megabytes() {
        let rule = rule(FileOptions {
            max_size_mb: 1.0,
            ..FileOptions::default()
        });
        assert!(rule.check(&files(&[("a.png", 1024 * 1024)])).is_ok());
        assert_eq!(
            kind(rule.check(&files(&[("a.png", 1024 * 1024 + 1)]))),
            ValidationErrorKind::FileTooLarge
        );
    }

    #[test]
    fn single_upload_unless_multiple_allowed() {
        let two = files(&[("a.png", 1), ("b.png", 1)]);
        let single = rule(FileOptions {
            max_files: 5,
            ..FileOptions::default()
        });
        assert_eq!(kind(single.check(&two)), ValidationErrorKind::TooManyFiles);

        let multiple = rule(FileOptions {
            max_files: 2,
            allow_multiple: true,
            ..FileOptions::default()
        });
        assert!(multiple.check(&two).is_ok());
    }

    #[test]
    fn limits_must_be_positive() {
        let options = FileOptions {
            max_size_mb: 0.0,
            ..FileOptions::default()
        };
        assert_eq!(options.build_rule("q").unwrap_err().field(), Some("maxSizeMB"));
        let options = FileOptions {
            max_files: 0,
            ..FileOptions::default()
        };
        assert_eq!(options.build_rule("q").unwrap_err().field(), Some("maxFiles"));
    }
}
