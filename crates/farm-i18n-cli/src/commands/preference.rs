//! Implementation of the `farm-i18n preference` command.

use std::path::PathBuf;

use clap::Subcommand;
use farm_i18n::{FileStore, Language, PreferenceStore, Resolver, PREFERENCE_KEY};
use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;

/// Arguments for the preference command.
#[derive(Debug, clap::Args)]
pub struct PreferenceArgs {
    /// Preference file (JSON)
    #[arg(long, env = "FARM_I18N_STORE", global = true)]
    pub store: PathBuf,

    #[command(subcommand)]
    pub action: PreferenceAction,
}

/// What to do with the stored preference.
#[derive(Debug, Subcommand)]
pub enum PreferenceAction {
    /// Show the stored value and the language a fresh session would use
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Switch to a language and persist it
    Set {
        /// Language code (e.g., hi, bn, te)
        code: String,
    },
    /// Remove the stored preference
    Clear,
}

/// JSON output for `preference show`.
#[derive(Debug, Serialize)]
struct PreferenceJson {
    path: String,
    stored: Option<String>,
    effective: Language,
}

/// Run the preference command.
pub fn run_preference(args: PreferenceArgs) -> miette::Result<i32> {
    match args.action {
        PreferenceAction::Show { json } => show(args.store, json),
        PreferenceAction::Set { code } => set(args.store, &code),
        PreferenceAction::Clear => clear(args.store),
    }
}

fn show(path: PathBuf, json: bool) -> miette::Result<i32> {
    let store = FileStore::new(&path);
    let stored = match store.load(PREFERENCE_KEY) {
        Ok(stored) => stored,
        Err(e) => {
            eprintln!("{}: {e}", "warning".yellow().bold());
            None
        }
    };
    let effective = Resolver::with_store(store).language();

    if json {
        let output = PreferenceJson {
            path: path.display().to_string(),
            stored,
            effective,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        match &stored {
            Some(code) if Language::from_code(code).is_none() => {
                println!("stored:    {code} {}", "(unsupported, ignored)".dimmed());
            }
            Some(code) => println!("stored:    {code}"),
            None => println!("stored:    {}", "(none)".dimmed()),
        }
        println!("effective: {} ({})", effective.code(), effective.name());
    }

    Ok(exitcode::OK)
}

fn set(path: PathBuf, code: &str) -> miette::Result<i32> {
    let mut resolver = Resolver::with_store(FileStore::new(&path));
    let change = match resolver.set_language_code(code) {
        Ok(change) => change,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            return Ok(exitcode::USAGE);
        }
    };
    debug!(?change, "preference set requested");

    // The resolver only logs failed writes, so confirm what is on disk.
    match FileStore::new(&path).load(PREFERENCE_KEY) {
        Ok(Some(stored)) if stored == change.current().code() => {}
        Ok(stored) => {
            eprintln!(
                "{}: preference was not written to {} (found {:?})",
                "error".red().bold(),
                path.display(),
                stored
            );
            return Ok(exitcode::CANTCREAT);
        }
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            return Ok(exitcode::CANTCREAT);
        }
    }

    let current = change.current();
    if change.is_changed() {
        println!("language set to {} ({})", current.code(), current.name());
    } else {
        println!("language already {} ({})", current.code(), current.name());
    }
    Ok(exitcode::OK)
}

fn clear(path: PathBuf) -> miette::Result<i32> {
    let mut store = FileStore::new(&path);
    match store.remove(PREFERENCE_KEY) {
        Ok(()) => {
            println!("preference cleared; next session starts in {}", Language::DEFAULT.code());
            Ok(exitcode::OK)
        }
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            Ok(exitcode::CANTCREAT)
        }
    }
}
