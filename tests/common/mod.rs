//! Shared test utilities and fixture generators
#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use countrytrans::cli::run_program;
use countrytrans::translation::{CodeConverter, Columns, Converters, TranslationStore};
use tempfile::TempDir;

/// A small dataset with known characteristics:
/// - `CAN`: the canonical example record with en/fr/de
/// - `DEU`: a second country with a different language set
/// - `ZZZ`: a code the country reference file does not know
pub const SAMPLE_JSON: &str = r#"[
    {"alpha3": "CAN", "alpha2": "CA", "id": 1, "en": "Canada", "fr": "Canada", "de": "Kanada"},
    {"alpha3": "DEU", "alpha2": "DE", "id": 2, "en": "Germany", "de": "Deutschland"},
    {"alpha3": "ZZZ", "id": 3, "en": "Nowhere"}
]"#;

/// Country reference; France has no record in `SAMPLE_JSON`
pub const COUNTRY_CODES: &str = "Country\tAlpha-2 code\tAlpha-3 code\tNumeric\n\
                                 Canada\tCA\tCAN\t124\n\
                                 France\tFR\tFRA\t250\n\
                                 Germany\tDE\tDEU\t276\n";

/// Language reference; Spanish appears in no record of `SAMPLE_JSON`
pub const LANGUAGE_CODES: &str = "ISO 639-1\tLanguage\n\
                                  de\tGerman\n\
                                  en\tEnglish\n\
                                  es\tSpanish\n\
                                  fr\tFrench\n";

pub fn sample_store() -> TranslationStore {
    TranslationStore::from_json_str(SAMPLE_JSON).unwrap()
}

pub fn sample_converters() -> Converters {
    Converters::new(
        CodeConverter::parse(COUNTRY_CODES, Columns::COUNTRY).unwrap(),
        CodeConverter::parse(LANGUAGE_CODES, Columns::LANGUAGE).unwrap(),
    )
}

/// Run the interactive loop over the sample data and return everything written.
pub fn run_session(input: &str) -> String {
    let store = sample_store();
    let converters = sample_converters();
    let mut output = Vec::new();
    run_program(&store, &converters, Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// Lines of a session transcript that are result sentences.
pub fn result_lines(transcript: &str) -> Vec<&str> {
    transcript.lines().filter(|line| line.contains(" is ")).collect()
}

/// Create a temporary directory holding one file with the given contents
pub fn create_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

/// Path to a file shipped in the crate's `data/` directory
pub fn bundled(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

/// Assert that two lists hold the same items regardless of order
pub fn assert_same_items(actual: Vec<String>, expected: &[&str]) {
    let mut actual = actual;
    actual.sort();
    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(actual, expected, "Item sets differ");
}
