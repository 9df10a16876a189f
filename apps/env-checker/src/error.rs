//! Error type shared by discovery, configuration, and rendering.
//!
//! Issues found inside `.env` files are not errors; they are recorded in a
//! `FileReport`. Only conditions that prevent producing a report live here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvCheckError {
    #[error("No .env files were found in {}", .dir.display())]
    NoEnvFiles { dir: PathBuf },

    #[error("Failed to read directory: {}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file: {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("JSON serialization error")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EnvCheckError>;

impl EnvCheckError {
    /// Process exit code for this failure.
    ///
    /// A missing input set is the one "expected" failure and gets its own
    /// code; every other fatal condition maps to `2`.
    pub fn exit_code(&self) -> i32 {
        match self {
            EnvCheckError::NoEnvFiles { .. } => 1,
            _ => 2,
        }
    }
}
