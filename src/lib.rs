//! countrytrans: Country Name Translation Library
//!
//! Loads a dataset of country names translated into many languages and
//! answers lookups by country and language, either through an interactive
//! prompt loop or one query at a time.

pub mod cli;
pub mod translation;
pub mod utils;
