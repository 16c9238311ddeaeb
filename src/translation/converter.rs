//! Bidirectional mapping between short codes and display names
//!
//! Reference files are tab-separated text with a header line, e.g.
//!
//! ```text
//! Country<TAB>Alpha-2 code<TAB>Alpha-3 code<TAB>Numeric
//! Canada<TAB>CA<TAB>CAN<TAB>124
//! ```
//!
//! Lookups that miss return their input unchanged.

use std::collections::HashMap;
use std::path::Path;

use csv::ReaderBuilder;

use super::error::{read_source, LoadError, ParseError};

/// Which tab-separated columns hold the code and the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub code: usize,
    pub name: usize,
}

impl Columns {
    /// `Country, Alpha-2 code, Alpha-3 code, Numeric`
    pub const COUNTRY: Columns = Columns { code: 2, name: 0 };

    /// `ISO 639-1, Language`
    pub const LANGUAGE: Columns = Columns { code: 0, name: 1 };

    fn required(&self) -> usize {
        self.code.max(self.name) + 1
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeConverter {
    name_by_code: HashMap<String, String>,
    code_by_name: HashMap<String, String>,
}

impl CodeConverter {
    /// Build a converter from `(code, name)` pairs. Later pairs replace
    /// earlier ones with the same code or name.
    pub fn from_pairs<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let mut converter = Self::default();
        for (code, name) in pairs {
            converter.insert(code.into(), name.into());
        }
        converter
    }

    /// Parse reference text. The first line is a header; blank lines are skipped.
    pub fn parse(text: &str, columns: Columns) -> Result<Self, ParseError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(text.as_bytes());

        let mut converter = Self::default();
        for result in reader.records() {
            let record = result?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }

            let (Some(code), Some(name)) = (record.get(columns.code), record.get(columns.name))
            else {
                return Err(ParseError::MissingColumn {
                    line: record.position().map_or(0, |pos| pos.line() as usize),
                    expected: columns.required(),
                    found: record.len(),
                });
            };

            converter.insert(code.trim().to_string(), name.trim().to_string());
        }

        Ok(converter)
    }

    /// Load reference text from disk.
    pub fn load(path: &Path, columns: Columns) -> Result<Self, LoadError> {
        let text = read_source(path)?;
        Self::parse(&text, columns).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn insert(&mut self, code: String, name: String) {
        self.code_by_name.insert(name.clone(), code.clone());
        self.name_by_code.insert(code, name);
    }

    /// Code for a display name, or `name` itself if it is not known.
    pub fn from_display_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.code_by_name.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Display name for a code, or `code` itself if it is not known.
    pub fn from_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.name_by_code.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Number of codes in the reference data
    pub fn len(&self) -> usize {
        self.name_by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_by_code.is_empty()
    }

    /// Iterate over every known code.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.name_by_code.keys().map(String::as_str)
    }
}

/// The country and language converters used together by the lookup flows.
#[derive(Debug, Clone, Default)]
pub struct Converters {
    pub countries: CodeConverter,
    pub languages: CodeConverter,
}

impl Converters {
    pub fn new(countries: CodeConverter, languages: CodeConverter) -> Self {
        Self {
            countries,
            languages,
        }
    }

    /// Load both reference files with their standard column layouts.
    pub fn load(countries: &Path, languages: &Path) -> Result<Self, LoadError> {
        Ok(Self::new(
            CodeConverter::load(countries, Columns::COUNTRY)?,
            CodeConverter::load(languages, Columns::LANGUAGE)?,
        ))
    }
}
