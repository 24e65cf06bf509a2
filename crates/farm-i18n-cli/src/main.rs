//! farm-i18n CLI entry point.
//!
//! Provides command-line tools for reviewing farm-i18n content:
//! - `farm-i18n languages` - List supported languages
//! - `farm-i18n resolve` - Resolve keys in a language
//! - `farm-i18n preference` - Inspect or change the persisted language
//! - `farm-i18n coverage` - Report translation coverage
//! - `farm-i18n check` - Validate catalog file syntax

mod commands;
mod output;

use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_languages, run_preference, run_resolve, CheckArgs, CoverageArgs,
    LanguagesArgs, PreferenceArgs, ResolveArgs,
};
use tracing_subscriber::EnvFilter;

/// Farm biosecurity localization tools.
#[derive(Debug, Parser)]
#[command(name = "farm-i18n")]
#[command(about = "Farm biosecurity localization tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory of catalog files (<code>.i18n) overlaying the built-in content
    #[arg(long, env = "FARM_I18N_CATALOGS", global = true)]
    pub catalogs: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List supported languages
    Languages(LanguagesArgs),
    /// Resolve translation keys in a language
    Resolve(ResolveArgs),
    /// Inspect or change the persisted language preference
    Preference(PreferenceArgs),
    /// Report translation coverage across languages
    Coverage(CoverageArgs),
    /// Check catalog file syntax
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Route library logs to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    init_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let catalogs = cli.catalogs.as_deref();
    let result = match cli.command {
        Commands::Languages(args) => run_languages(args, catalogs),
        Commands::Resolve(args) => run_resolve(args, catalogs),
        Commands::Preference(args) => run_preference(args),
        Commands::Coverage(args) => run_coverage(args, catalogs),
        Commands::Check(args) => run_check(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "farm-i18n",
            "resolve",
            "--lang",
            "hi",
            "home",
            "--catalogs",
            "content",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.catalogs, Some(PathBuf::from("content")));
        assert!(matches!(cli.command, Commands::Resolve(_)));
    }
}
