//! Discovery of `.env` files in a directory.
//!
//! Non-recursive. Keeps regular files (following symlinks) whose name starts
//! with [`ENV_PREFIX`], sorted by name, and reads them as UTF-8 (lossy).

use crate::error::{EnvCheckError, Result};
use std::fs;
use std::path::Path;

/// File name prefix that marks an environment definition file.
pub const ENV_PREFIX: &str = ".env";

#[derive(Debug, Clone, PartialEq, Eq)]
/// A discovered file and its full text.
pub struct EnvFile {
    pub name: String,
    pub contents: String,
}

/// List matching file names in `dir`, sorted.
pub fn list_env_files(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|source| EnvCheckError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| EnvCheckError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 file name");
            continue;
        };
        if !name.starts_with(ENV_PREFIX) {
            continue;
        }
        // fs::metadata follows symlinks
        match fs::metadata(entry.path()) {
            Ok(md) if md.is_file() => names.push(name),
            Ok(_) => tracing::debug!(name = %name, "skipping non-regular entry"),
            Err(e) => tracing::debug!(name = %name, error = %e, "skipping unreadable entry"),
        }
    }
    names.sort();
    Ok(names)
}

/// Discover and read every `.env*` file in `dir`.
///
/// Fails with [`EnvCheckError::NoEnvFiles`] when nothing matches.
pub fn discover(dir: &Path) -> Result<Vec<EnvFile>> {
    let names = list_env_files(dir)?;
    if names.is_empty() {
        return Err(EnvCheckError::NoEnvFiles {
            dir: dir.to_path_buf(),
        });
    }
    let mut files = Vec::with_capacity(names.len());
    for name in names {
        let path = dir.join(&name);
        let bytes = fs::read(&path).map_err(|source| EnvCheckError::FileRead { path, source })?;
        // invalid sequences become U+FFFD
        let contents = String::from_utf8_lossy(&bytes).into_owned();
        files.push(EnvFile { name, contents });
    }
    tracing::info!(count = files.len(), dir = %dir.display(), "discovered env files");
    Ok(files)
}
