//! env-checker CLI binary entry point.
//! Resolves settings, discovers `.env` files, analyzes them, and prints the report.

use clap::Parser;
use env_checker::cli::Cli;
use env_checker::output::{self, RenderOptions};
use env_checker::{config, discover, lint};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // RUST_LOG overrides the default warn level; logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let (eff, cfg_err) = config::resolve_effective(
        cli.dir.as_deref(),
        cli.report.as_deref(),
        cli.required.as_deref(),
        cli.no_color,
    );
    let color = output::use_colors(eff.color);
    let err_color = output::use_stderr_colors(eff.color);
    if let Some(e) = cfg_err {
        output::print_note(&format!("{}; using defaults.", e), err_color);
    }

    let files = match discover::discover(&eff.dir) {
        Ok(f) => f,
        Err(e) => {
            output::print_error(&e, err_color);
            std::process::exit(e.exit_code());
        }
    };

    let reports = lint::analyze_all(&files, &eff.required);
    if let Err(e) = output::print_report(&reports, eff.report, &RenderOptions { color }) {
        output::print_error(&e, err_color);
        std::process::exit(e.exit_code());
    }
}
