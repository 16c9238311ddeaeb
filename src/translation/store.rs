//! JSON-backed translation store
//!
//! The dataset is a JSON array of objects such as
//! `{"id": 124, "alpha2": "ca", "alpha3": "CAN", "en": "Canada", "de": "Kanada"}`.
//! `alpha3` keys the record; `id` and `alpha2` are metadata; every other key
//! is a language code mapped to the translated country name.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::error::{read_source, LoadError, ParseError};
use super::translator::{Translator, COUNTRY_NOT_FOUND};

/// Field names that describe a record rather than translate it.
pub const METADATA_FIELDS: [&str; 3] = ["id", "alpha2", "alpha3"];

/// One country entry from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRecord {
    /// Three-letter country code
    #[serde(rename = "alpha3")]
    pub code: String,

    /// Metadata, kept as-is and never validated
    #[serde(default)]
    pub alpha2: Option<Value>,

    #[serde(default)]
    pub id: Option<Value>,

    /// Language code to translated name
    #[serde(flatten)]
    pub translations: HashMap<String, String>,
}

impl CountryRecord {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            alpha2: None,
            id: None,
            translations: HashMap::new(),
        }
    }

    /// Builder-style helper for adding one translation.
    pub fn with_translation(mut self, language: impl Into<String>, name: impl Into<String>) -> Self {
        self.translations.insert(language.into(), name.into());
        self
    }
}

/// In-memory map from country code to its record. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    records: HashMap<String, CountryRecord>,
}

impl TranslationStore {
    /// Build a store from already-parsed records. A repeated code replaces the
    /// earlier record.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CountryRecord>,
    {
        let records = records
            .into_iter()
            .map(|record| (record.code.clone(), record))
            .collect();
        Self { records }
    }

    /// Parse a JSON dataset held in memory.
    pub fn from_json_str(json: &str) -> Result<Self, ParseError> {
        let records: Vec<CountryRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Load and parse a JSON dataset from disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let json = read_source(path)?;
        Self::from_json_str(&json).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of countries in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, country: &str) -> Option<&CountryRecord> {
        self.records.get(country)
    }
}

impl Translator for TranslationStore {
    fn countries(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    fn country_languages(&self, country: &str) -> Vec<String> {
        self.records
            .get(country)
            .map(|record| record.translations.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        match self.records.get(country) {
            Some(record) => record.translations.get(language).map(String::as_str),
            None => Some(COUNTRY_NOT_FOUND),
        }
    }
}
