//! Interactive country/language selection loop
//!
//! The loop is a small state machine:
//!
//! ```text
//! PromptCountry -> PromptLanguage -> ShowResult -> PromptContinue -> PromptCountry
//! ```
//!
//! with `Quit` reachable from every prompt, either by typing [`QUIT_TOKEN`] or
//! by reaching end of input.

use std::io::{self, BufRead, Write};

use crate::translation::{CodeConverter, Converters, Translator};
use crate::utils::{write_hint, write_options, write_prompt};

use super::lookup::format_result;

/// Typed at any prompt to leave the loop. Checked before any code conversion.
pub const QUIT_TOKEN: &str = "quit";

const COUNTRY_PROMPT: &str = "select a country from above:";
const LANGUAGE_PROMPT: &str = "select a language from above:";
const CONTINUE_HINT: &str = "Press enter to continue or quit to exit.";

/// A user's choice: the name they typed and the code it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    PromptCountry,
    PromptLanguage { country: Selection },
    ShowResult { country: Selection, language: Selection },
    PromptContinue,
    Quit,
}

/// Drives the interactive loop over any line-based input and text output.
pub struct Session<'a, T: ?Sized, R, W> {
    translator: &'a T,
    converters: &'a Converters,
    input: R,
    output: W,
}

impl<'a, T, R, W> Session<'a, T, R, W>
where
    T: Translator + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(translator: &'a T, converters: &'a Converters, input: R, output: W) -> Self {
        Self {
            translator,
            converters,
            input,
            output,
        }
    }

    /// Run until the user quits or input runs out.
    pub fn run(mut self) -> io::Result<()> {
        let mut step = Step::PromptCountry;
        while step != Step::Quit {
            step = self.advance(step)?;
        }
        self.output.flush()
    }

    /// Perform one step and return the next one.
    pub fn advance(&mut self, step: Step) -> io::Result<Step> {
        match step {
            Step::PromptCountry => {
                let names = display_names(self.translator.countries(), &self.converters.countries);
                write_options(&mut self.output, &names)?;
                write_prompt(&mut self.output, COUNTRY_PROMPT)?;

                Ok(match self.read_choice()? {
                    Some(name) => {
                        let code = self.converters.countries.from_display_name(&name).to_string();
                        Step::PromptLanguage {
                            country: Selection { name, code },
                        }
                    }
                    None => Step::Quit,
                })
            }
            Step::PromptLanguage { country } => {
                let names = display_names(
                    self.translator.country_languages(&country.code),
                    &self.converters.languages,
                );
                write_options(&mut self.output, &names)?;
                write_prompt(&mut self.output, LANGUAGE_PROMPT)?;

                Ok(match self.read_choice()? {
                    Some(name) => {
                        let code = self.converters.languages.from_display_name(&name).to_string();
                        Step::ShowResult {
                            country,
                            language: Selection { name, code },
                        }
                    }
                    None => Step::Quit,
                })
            }
            Step::ShowResult { country, language } => {
                let translation = self.translator.translate(&country.code, &language.code);
                writeln!(
                    self.output,
                    "{}",
                    format_result(&country.name, &language.name, translation)
                )?;
                Ok(Step::PromptContinue)
            }
            Step::PromptContinue => {
                write_hint(&mut self.output, CONTINUE_HINT)?;
                Ok(match self.read_choice()? {
                    Some(_) => Step::PromptCountry,
                    None => Step::Quit,
                })
            }
            Step::Quit => Ok(Step::Quit),
        }
    }

    /// Read one line. `None` means the user quit or input is exhausted.
    fn read_choice(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;

        // Undecodable bytes become U+FFFD rather than ending the session
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf).into_owned();

        if line == QUIT_TOKEN {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

/// Convert codes to display names and sort them for presentation.
pub fn display_names(codes: Vec<String>, converter: &CodeConverter) -> Vec<String> {
    let mut names: Vec<String> = codes
        .iter()
        .map(|code| converter.from_code(code).to_string())
        .collect();
    names.sort();
    names
}

/// Run the interactive loop to completion.
pub fn run_program<T, R, W>(
    translator: &T,
    converters: &Converters,
    input: R,
    output: W,
) -> io::Result<()>
where
    T: Translator + ?Sized,
    R: BufRead,
    W: Write,
{
    Session::new(translator, converters, input, output).run()
}
