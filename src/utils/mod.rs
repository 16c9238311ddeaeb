//! Utilities - terminal styling

mod styling;

pub use styling::*;
