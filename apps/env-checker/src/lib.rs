//! env-checker core library.
//!
//! Validates `.env` files: malformed lines, duplicate keys, empty values, and
//! missing required keys, reported as text, JSON, or Markdown.
//!
//! High-level modules:
//! - `classify`: Per-line classification (skip/invalid/duplicate/empty/valid).
//! - `lint`: Per-file analysis producing a `FileReport`; parallel batch runner.
//! - `discover`: `.env*` file discovery in a directory.
//! - `config`: Config file discovery and effective settings resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `models`: Issue, report, and summary types.
//! - `output`: Text/JSON/Markdown renderers and printers.
//! - `error`: Error type for conditions that prevent a report.
pub mod classify;
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod lint;
pub mod models;
pub mod output;

pub use error::{EnvCheckError, Result};
pub use lint::{analyze, analyze_all};
pub use models::{FileReport, Issue};
