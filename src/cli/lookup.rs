//! One-shot lookup shared by the `lookup` subcommand and the interactive loop

use crate::translation::{Converters, Translator};

/// Shown in place of a translation the dataset does not have.
pub const MISSING_TRANSLATION: &str = "(no translation)";

/// Format the result sentence using the names the user typed.
pub fn format_result(country: &str, language: &str, translation: Option<&str>) -> String {
    format!(
        "{} in {} is {}",
        country,
        language,
        translation.unwrap_or(MISSING_TRANSLATION)
    )
}

/// Resolve display names to codes and produce the result sentence.
pub fn lookup<T: Translator + ?Sized>(
    translator: &T,
    converters: &Converters,
    country: &str,
    language: &str,
) -> String {
    let country_code = converters.countries.from_display_name(country);
    let language_code = converters.languages.from_display_name(language);
    format_result(
        country,
        language,
        translator.translate(country_code, language_code),
    )
}
