//! Terminal styling for prompts and startup status lines

use std::io::{self, Write};
use std::path::Path;

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static GLOBE: Emoji<'_, '_> = Emoji("🌐 ", "");

/// Print the startup status line for a loaded file.
pub fn print_loaded(what: &str, count: usize, path: &Path) {
    print_success(&format!(
        "Loaded {} {} from {}",
        count,
        what,
        truncate_path(path, 60)
    ));
}

/// Print a success message to stderr
pub fn print_success(message: &str) {
    eprintln!(
        "{} {}",
        style("✓").green().bold().for_stderr(),
        style(message).green().for_stderr()
    );
}

/// Print an info message to stderr
pub fn print_info(message: &str) {
    eprintln!("{}{}", INFO, message);
}

/// Print the greeting shown before the interactive loop starts
pub fn print_welcome() {
    eprintln!(
        "{}{}",
        GLOBE,
        style(format!(
            "Country name translator v{} - type quit at any prompt to exit",
            env!("CARGO_PKG_VERSION")
        ))
        .dim()
        .for_stderr()
    );
}

/// Write each option on its own line, unstyled.
pub fn write_options<W: Write + ?Sized>(out: &mut W, names: &[String]) -> io::Result<()> {
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Write a selection prompt
pub fn write_prompt<W: Write + ?Sized>(out: &mut W, prompt: &str) -> io::Result<()> {
    writeln!(out, "{}", style(prompt).cyan().bold())
}

pub fn write_hint<W: Write + ?Sized>(out: &mut W, hint: &str) -> io::Result<()> {
    writeln!(out, "{}", style(hint).dim())
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    let chars: Vec<char> = path_str.chars().collect();
    if chars.len() <= max_len {
        path_str
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
