//! Report rendering.
//!
//! Supports `text` (default), `json`, and `md` outputs. Each format is a pure
//! function from the ordered `FileReport` sequence to a string; printing is
//! kept separate so renderers can be tested without capturing stdout.

use crate::error::{EnvCheckError, Result};
use crate::models::{FileReport, Issue, Summary};
use owo_colors::{OwoColorize, Style};
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Selected report format.
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl ReportFormat {
    /// Map a `--report` selector to a format.
    ///
    /// Unknown selectors fall back to text rather than failing.
    pub fn from_selector(sel: Option<&str>) -> Self {
        match sel {
            None => ReportFormat::Text,
            Some("json") => ReportFormat::Json,
            Some("md" | "markdown") => ReportFormat::Markdown,
            Some(other) => {
                tracing::warn!(report = other, "unknown report format, using text");
                ReportFormat::Text
            }
        }
    }

    /// Render `reports` in this format.
    pub fn render(self, reports: &[FileReport], opts: &RenderOptions) -> Result<String> {
        match self {
            ReportFormat::Text => Ok(render_text(reports, opts)),
            ReportFormat::Json => render_json(reports),
            ReportFormat::Markdown => Ok(render_markdown(reports)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Presentation switches shared by renderers.
pub struct RenderOptions {
    /// Emit ANSI colors (text format only).
    pub color: bool,
}

fn colors_for(preferred: bool, no_color_env: bool, is_tty: bool) -> bool {
    preferred && !no_color_env && is_tty
}

/// Whether to colorize the report on stdout given the user's preference.
pub fn use_colors(preferred: bool) -> bool {
    colors_for(
        preferred,
        std::env::var_os("NO_COLOR").is_some(),
        std::io::stdout().is_terminal(),
    )
}

/// Same as [`use_colors`] but for messages written to stderr.
pub fn use_stderr_colors(preferred: bool) -> bool {
    colors_for(
        preferred,
        std::env::var_os("NO_COLOR").is_some(),
        std::io::stderr().is_terminal(),
    )
}

fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Human-readable report, one section per file plus a summary footer.
pub fn render_text(reports: &[FileReport], opts: &RenderOptions) -> String {
    let color = opts.color;
    let warn = Style::new().yellow();
    let err = Style::new().red();
    let mut lines: Vec<String> = Vec::new();
    for r in reports {
        lines.push(String::new());
        lines.push(paint(
            &format!("🔍 Checking {}:", r.file),
            Style::new().blue(),
            color,
        ));
        if r.is_clean() {
            lines.push(paint(
                "  ✅ All variables are valid.",
                Style::new().green(),
                color,
            ));
            continue;
        }
        for is in &r.issues {
            let line = match is {
                Issue::InvalidFormat { line, content } => paint(
                    &format!(" ⚠️ INVALID FORMAT (line {}): {}", line, content),
                    warn,
                    color,
                ),
                Issue::DuplicateKey { key } => {
                    paint(&format!(" ❌ REPEATING VARIABLE: {}", key), err, color)
                }
                Issue::EmptyValue { key } => {
                    paint(&format!(" ⚠️ NULL VALUE: {}", key), warn, color)
                }
                Issue::MissingRequired { key } => paint(
                    &format!(" ❌ MISSING REQUIRED VARIABLE: {}", key),
                    err,
                    color,
                ),
            };
            lines.push(line);
        }
    }
    let s = Summary::from_reports(reports);
    let summary = format!(
        "— Summary — files={} issues={} invalid={} duplicate={} empty={} missing={}",
        s.files, s.issues, s.invalid, s.duplicate, s.empty, s.missing
    );
    lines.push(String::new());
    lines.push(paint(&summary, Style::new().bold(), color));
    lines.join("\n")
}

/// Pretty-printed JSON array of file reports.
pub fn render_json(reports: &[FileReport]) -> Result<String> {
    serde_json::to_string_pretty(reports).map_err(EnvCheckError::from)
}

/// Markdown document with one `##` section per file.
pub fn render_markdown(reports: &[FileReport]) -> String {
    let mut md = String::from("# Env File Report\n");
    for r in reports {
        md.push_str(&format!("\n## {}\n", r.file));
        if r.is_clean() {
            md.push_str("✅ All variables are valid.\n");
            continue;
        }
        for is in &r.issues {
            let item = match is {
                Issue::InvalidFormat { line, content } => {
                    format!("- ⚠️ **Invalid Format** (line {}): `{}`\n", line, content)
                }
                Issue::DuplicateKey { key } => format!("- ❌ **Repeat Key**: `{}`\n", key),
                Issue::EmptyValue { key } => format!("- ⚠️ **Empty Value**: `{}`\n", key),
                Issue::MissingRequired { key } => {
                    format!("- ❌ **Missing Required Key**: `{}`\n", key)
                }
            };
            md.push_str(&item);
        }
    }
    md
}

/// Render and print the report to stdout.
pub fn print_report(
    reports: &[FileReport],
    format: ReportFormat,
    opts: &RenderOptions,
) -> Result<()> {
    let out = format.render(reports, opts)?;
    println!("{}", out);
    Ok(())
}

/// User-facing text for a fatal error, including its underlying cause.
pub fn error_message(err: &EnvCheckError) -> String {
    match err {
        EnvCheckError::NoEnvFiles { .. } => "❌ No .env files were found.".to_string(),
        other => match std::error::Error::source(other) {
            Some(src) => format!("❌ {}: {}", other, src),
            None => format!("❌ {}", other),
        },
    }
}

/// Print a fatal error to stderr.
pub fn print_error(err: &EnvCheckError, color: bool) {
    eprintln!("{}", paint(&error_message(err), Style::new().red(), color));
}

/// Print a non-fatal note to stderr.
pub fn print_note(msg: &str, color: bool) {
    eprintln!("{} {}", paint("note:", Style::new().yellow().bold(), color), msg);
}
