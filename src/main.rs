//! countrytrans: Country Name Translation CLI
//!
//! Prompts for a country and a language and prints the country's name in
//! that language until the user types `quit`.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use countrytrans::cli::{lookup, run_program, Cli, Commands};
use countrytrans::translation::{CodeConverter, Columns, Converters, TranslationStore};
use countrytrans::utils::{print_info, print_loaded, print_welcome};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Any load failure is fatal
    let store = TranslationStore::load(&cli.data).context("Failed to load country dataset")?;
    let countries = CodeConverter::load(&cli.countries, Columns::COUNTRY)
        .context("Failed to load country code reference")?;
    let languages = CodeConverter::load(&cli.languages, Columns::LANGUAGE)
        .context("Failed to load language code reference")?;

    if !cli.quiet {
        print_loaded("countries", store.len(), &cli.data);
        print_loaded("country codes", countries.len(), &cli.countries);
        print_loaded("language codes", languages.len(), &cli.languages);
        if store.is_empty() {
            print_info("The dataset has no countries; every lookup will miss");
        }
    }

    let converters = Converters::new(countries, languages);

    if let Some(command) = &cli.command {
        return match command {
            Commands::Lookup { country, language } => {
                println!("{}", lookup(&store, &converters, country, language));
                Ok(())
            }
        };
    }

    if !cli.quiet {
        print_welcome();
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_program(&store, &converters, stdin.lock(), stdout.lock())
        .context("Interactive session failed")?;

    Ok(())
}
