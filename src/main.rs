//! Command-line lookup of country names.
//!
//! Usage:
//!   country-translator                        # List every country and its languages
//!   country-translator can                    # List the languages available for Canada
//!   country-translator can German             # Canada's name in German (name or code)
//!
//! Optional environment variables:
//! - TRANSLATOR_PROVIDER (json | by-hand, defaults to json)
//! - TRANSLATOR_COUNTRY_RESOURCE (defaults to sample.json)
//! - TRANSLATOR_LANGUAGE_RESOURCE (defaults to language-codes.txt)
//! - TRANSLATOR_RESOURCE_DIR (directory searched before the built-in data)

use anyhow::{bail, Result};
use country_translator::config::Config;
use country_translator::{LanguageCodeTable, TranslationProvider};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter())
        .init();

    let config = Config::from_env()?;
    info!("Using {:?} provider", config.provider);

    let translator = config.build_provider()?;
    let languages = config.build_language_table()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            let mut countries = translator.countries();
            countries.sort();
            for country in &countries {
                print_languages(&*translator, &languages, country);
            }
        }
        [country] => {
            if translator.country_languages(country).is_empty() {
                bail!("No translations for country '{}'", country);
            }
            print_languages(&*translator, &languages, country);
        }
        [country, language] => {
            // Accept either a display name or a code
            let code = languages.from_language(language).unwrap_or(language);
            match translator.translate(country, code) {
                Some(name) => println!("{}", name),
                None => bail!("No translation of '{}' into '{}'", country, language),
            }
        }
        _ => bail!("Usage: country-translator [COUNTRY [LANGUAGE]]"),
    }

    Ok(())
}

fn print_languages(
    translator: &dyn TranslationProvider,
    languages: &LanguageCodeTable,
    country: &str,
) {
    println!("{}:", country);
    for code in translator.country_languages(country) {
        let display = languages.from_language_code(&code).unwrap_or("unknown language");
        let name = translator.translate(country, &code).unwrap_or_default();
        println!("  {} ({}): {}", code, display, name);
    }
}

/// `RUST_LOG` when set, otherwise warnings from this crate only.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("country_translator=warn"))
}
