//! The query contract shared by every translation backend

/// Sentinel returned by [`Translator::translate`] for an unknown country code.
pub const COUNTRY_NOT_FOUND: &str = "Country Not Found";

/// Read-only queries over a set of country name translations.
///
/// Lookups never fail. An unknown country yields an empty language list or
/// the [`COUNTRY_NOT_FOUND`] sentinel, and a known country without the
/// requested language yields `None`.
pub trait Translator {
    /// All country codes known to this translator, in no particular order.
    fn countries(&self) -> Vec<String>;

    /// Language codes available for `country`; empty if the country is unknown.
    fn country_languages(&self, country: &str) -> Vec<String>;

    /// Name of `country` written in `language`.
    ///
    /// Returns `Some(COUNTRY_NOT_FOUND)` when the country code is unknown and
    /// `None` when the country is known but has no entry for `language`.
    fn translate(&self, country: &str, language: &str) -> Option<&str>;
}
