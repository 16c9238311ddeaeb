//! CLI module - argument parsing, the interactive loop and one-shot lookups

mod args;
pub mod lookup;
pub mod prompts;

pub use args::{Cli, Commands};
pub use lookup::*;
pub use prompts::*;
