//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample.json");
const DEFAULT_COUNTRIES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/country-codes.txt");
const DEFAULT_LANGUAGES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/language-codes.txt");

/// countrytrans - Pick a country and a language, get the country's name in that language
#[derive(Parser, Debug)]
#[command(name = "countrytrans")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Country translation dataset (JSON array of records keyed by "alpha3")
    #[arg(long, default_value = DEFAULT_DATA)]
    pub data: PathBuf,

    /// Country code reference file (tab-separated: Country, Alpha-2, Alpha-3, Numeric)
    #[arg(long, default_value = DEFAULT_COUNTRIES)]
    pub countries: PathBuf,

    /// Language code reference file (tab-separated: ISO 639-1, Language)
    #[arg(long, default_value = DEFAULT_LANGUAGES)]
    pub languages: PathBuf,

    /// Suppress startup status lines on stderr
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one translation and exit instead of starting the interactive loop
    Lookup {
        /// Country display name (e.g. "Canada")
        country: String,

        /// Language display name (e.g. "German")
        language: String,
    },
}
