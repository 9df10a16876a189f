//! File analysis: runs the line classifier over a whole `.env` text.
//!
//! Produces one `FileReport` per file. Line-scan issues come first in line
//! order, followed by one `MissingRequired` per absent required key in the
//! order the keys were supplied.

use crate::classify::{classify, Classification};
use crate::discover::EnvFile;
use crate::models::{FileReport, Issue};
use rayon::prelude::*;
use std::collections::HashSet;

/// Analyze one file's text against the required keys.
///
/// Pure: the seen-key set and issue list are local to this call, so calls
/// for different files may run concurrently.
pub fn analyze(file_name: &str, raw_text: &str, required_keys: &[String]) -> FileReport {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut issues: Vec<Issue> = Vec::new();

    for (idx, line) in raw_text.split('\n').enumerate() {
        let class = classify(line, &seen);
        match class {
            Classification::Skip | Classification::Valid { .. } => {}
            Classification::InvalidFormat => issues.push(Issue::InvalidFormat {
                line: idx + 1,
                content: line.to_string(),
            }),
            Classification::DuplicateKey { key } => issues.push(Issue::DuplicateKey {
                key: key.to_string(),
            }),
            Classification::EmptyValue { key } => issues.push(Issue::EmptyValue {
                key: key.to_string(),
            }),
        }
        if let Some(key) = class.newly_seen() {
            seen.insert(key);
        }
    }

    for key in required_keys {
        if !seen.contains(key.as_str()) {
            issues.push(Issue::MissingRequired { key: key.clone() });
        }
    }

    tracing::debug!(
        file = file_name,
        keys = seen.len(),
        issues = issues.len(),
        "analyzed"
    );
    FileReport {
        file: file_name.to_string(),
        issues,
    }
}

/// Analyze every discovered file in parallel.
///
/// Reports are returned in the same order as `files`.
pub fn analyze_all(files: &[EnvFile], required_keys: &[String]) -> Vec<FileReport> {
    files
        .par_iter()
        .map(|f| analyze(&f.name, &f.contents, required_keys))
        .collect()
}
