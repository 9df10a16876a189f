//! Shared data models: per-file issues, reports, and summary counts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
/// A single problem found in one `.env` file.
pub enum Issue {
    /// Line has no key before the first `=` (or no `=` at all).
    InvalidFormat {
        /// 1-based line number in the original file.
        line: usize,
        /// The line exactly as written, untrimmed.
        content: String,
    },
    DuplicateKey {
        key: String,
    },
    EmptyValue {
        key: String,
    },
    MissingRequired {
        key: String,
    },
}

impl Issue {
    /// Stable tag used by the serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            Issue::InvalidFormat { .. } => "INVALID_FORMAT",
            Issue::DuplicateKey { .. } => "DUPLICATE_KEY",
            Issue::EmptyValue { .. } => "EMPTY_VALUE",
            Issue::MissingRequired { .. } => "MISSING_REQUIRED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Issues found in one analyzed file, in discovery order.
pub struct FileReport {
    pub file: String,
    pub issues: Vec<Issue>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Aggregated counts over a report sequence, used by the text footer.
pub struct Summary {
    pub files: usize,
    pub files_with_issues: usize,
    pub issues: usize,
    pub invalid: usize,
    pub duplicate: usize,
    pub empty: usize,
    pub missing: usize,
}

impl Summary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut s = Summary {
            files: reports.len(),
            ..Summary::default()
        };
        for r in reports {
            if !r.is_clean() {
                s.files_with_issues += 1;
            }
            for is in &r.issues {
                s.issues += 1;
                match is {
                    Issue::InvalidFormat { .. } => s.invalid += 1,
                    Issue::DuplicateKey { .. } => s.duplicate += 1,
                    Issue::EmptyValue { .. } => s.empty += 1,
                    Issue::MissingRequired { .. } => s.missing += 1,
                }
            }
        }
        s
    }
}
