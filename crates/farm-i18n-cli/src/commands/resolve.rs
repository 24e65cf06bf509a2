//! Implementation of the `farm-i18n resolve` command.

use std::path::Path;
use std::sync::Arc;

use farm_i18n::{Language, Resolver, ResolverConfig};
use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::load_table;

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Language code to resolve in (e.g., en, hi, ta)
    #[arg(long, env = "FARM_I18N_LANG", default_value = "en")]
    pub lang: String,

    /// Keys to resolve
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Exit with non-zero code if any key is missing
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one resolved key.
#[derive(Debug, Serialize, PartialEq)]
struct Resolution {
    key: String,
    text: String,
    found: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<String>,
}

fn resolve_keys(resolver: &Resolver, keys: &[String]) -> Vec<Resolution> {
    keys.iter()
        .map(|key| {
            let found = resolver.lookup(key).is_some();
            Resolution {
                key: key.clone(),
                text: resolver.resolve(key).to_string(),
                found,
                suggestions: if found {
                    Vec::new()
                } else {
                    resolver.suggestions(key)
                },
            }
        })
        .collect()
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs, catalogs: Option<&Path>) -> miette::Result<i32> {
    let language = match args.lang.parse::<Language>() {
        Ok(language) => language,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
            eprintln!("supported codes: {}", codes.join(", "));
            return Ok(exitcode::USAGE);
        }
    };

    let table = load_table(catalogs)?;
    let resolver = ResolverConfig::builder()
        .table(Arc::new(table))
        .default_language(language)
        .build()
        .initialize();

    let resolutions = resolve_keys(&resolver, &args.keys);
    let any_missing = resolutions.iter().any(|r| !r.found);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&resolutions).into_diagnostic()?
        );
    } else {
        for resolution in &resolutions {
            if resolution.found {
                println!("{} = {}", resolution.key.bold(), resolution.text);
            } else {
                println!(
                    "{} = {} {}",
                    resolution.key.bold(),
                    resolution.text.yellow(),
                    "(missing, shown as key)".dimmed()
                );
                if !resolution.suggestions.is_empty() {
                    println!("  did you mean: {}", resolution.suggestions.join(", "));
                }
            }
        }
    }

    if args.strict && any_missing {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_in(language: Language) -> Resolver {
        ResolverConfig::builder()
            .default_language(language)
            .build()
            .initialize()
    }

    #[test]
    fn found_keys_resolve_to_text() {
        let resolver = resolver_in(Language::Hi);
        let resolutions = resolve_keys(&resolver, &["home".to_string()]);
        assert_eq!(
            resolutions,
            vec![Resolution {
                key: "home".to_string(),
                text: "होम".to_string(),
                found: true,
                suggestions: Vec::new(),
            }]
        );
    }

    #[test]
    fn missing_keys_fall_back_with_suggestions() {
        let resolver = resolver_in(Language::En);
        let resolutions = resolve_keys(&resolver, &["hom".to_string()]);
        assert_eq!(resolutions[0].text, "hom");
        assert!(!resolutions[0].found);
        assert_eq!(resolutions[0].suggestions, vec!["home"]);
    }

    #[test]
    fn missing_keys_serialize_their_suggestions_only() {
        let resolver = resolver_in(Language::En);
        let resolutions = resolve_keys(&resolver, &["home".to_string(), "hom".to_string()]);
        let json = serde_json::to_value(&resolutions).unwrap();
        assert!(json[0].get("suggestions").is_none());
        assert_eq!(json[1]["suggestions"], serde_json::json!(["home"]));
    }
}
