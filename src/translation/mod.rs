//! Translation module - dataset loading, code conversion and lookups

pub mod converter;
pub mod error;
pub mod store;
pub mod translator;

pub use converter::*;
pub use error::{LoadError, ParseError};
pub use store::*;
pub use translator::*;
