//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "env-checker",
    version,
    about = "Check .env files for invalid lines, duplicate keys, empty values, and missing required keys",
    long_about = "env-checker scans the current directory for files whose name starts with `.env` and\nreports invalid format, duplicate keys, empty values, and missing required variables.\n\nConfiguration precedence: CLI > env-checker.toml > defaults.",
    after_help = "Examples:\n  env-checker                                       Check all .env files, plain output\n  env-checker --report json                         Show the report as JSON\n  env-checker --required DB_HOST,DB_USER            Require keys in every .env file\n  env-checker --report md --required DB_HOST,DB_PASS  Markdown report with required keys"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, value_name = "json|md", help = "Report format: json or md (default: plain text)")]
    pub report: Option<String>,
    #[arg(
        long,
        value_name = "KEY1,KEY2",
        help = "Comma-separated list of keys every .env file must define"
    )]
    pub required: Option<String>,
    #[arg(long, value_name = "PATH", help = "Directory to scan (default: current dir)")]
    pub dir: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable colored output")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "env-checker",
            "--report",
            "md",
            "--required",
            "DB_HOST,DB_PASS",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.report.as_deref(), Some("md"));
        assert_eq!(cli.required.as_deref(), Some("DB_HOST,DB_PASS"));
        assert!(cli.no_color);
        assert!(cli.dir.is_none());
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["env-checker"]).unwrap();
        assert!(cli.report.is_none());
        assert!(cli.required.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_help_short_circuits() {
        let err = Cli::try_parse_from(["env-checker", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
