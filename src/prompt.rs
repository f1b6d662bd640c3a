//! Prompt Module
//!
//! Line-oriented prompting over any `BufRead`/`Write` pair: free-text
//! questions and numbered single-choice lists. Choice lists come from a
//! [`ChoiceSource`], which is either a fixed list or a provider evaluated
//! each time the prompt is shown.

use crate::core::{EmsError, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// One entry of a selection list.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Choice {
            label: label.into(),
            value,
        }
    }
}

type Provider<'a, T> = Box<dyn Fn() -> Result<Vec<Choice<T>>> + 'a>;

/// Where a selection prompt gets its entries from.
pub enum ChoiceSource<'a, T> {
    Static(Vec<Choice<T>>),
    Deferred(Provider<'a, T>),
}

impl<'a, T: Clone> ChoiceSource<'a, T> {
    pub fn deferred<F>(provider: F) -> Self
    where
        F: Fn() -> Result<Vec<Choice<T>>> + 'a,
    {
        ChoiceSource::Deferred(Box::new(provider))
    }

    /// Produces the current entries, running the provider if deferred.
    pub fn resolve(&self) -> Result<Vec<Choice<T>>> {
        match self {
            ChoiceSource::Static(choices) => Ok(choices.clone()),
            ChoiceSource::Deferred(provider) => provider(),
        }
    }
}

/// Interactive prompter bound to an input and an output stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writes one line to the output.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Asks a free-text question and returns the trimmed answer.
    pub fn input(&mut self, message: &str) -> Result<String> {
        write!(self.output, "? {} ", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Shows a numbered list and returns the value of the chosen entry.
    ///
    /// Re-asks until a number in range is entered.
    ///
    /// # Errors
    ///
    /// `EmsError::Validation` when the source yields no entries, provider
    /// errors as-is, and `EmsError::InputClosed` at end of input.
    pub fn select<T: Clone>(&mut self, message: &str, source: &ChoiceSource<'_, T>) -> Result<T> {
        let choices = source.resolve()?;
        if choices.is_empty() {
            return Err(EmsError::Validation(format!(
                "There are no options to choose from for: {}",
                message
            )));
        }

        writeln!(self.output, "? {}", message)?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, choice.label)?;
        }

        loop {
            write!(self.output, "  Answer (1-{}): ", choices.len())?;
            self.output.flush()?;
            let answer = self.read_line()?;
            match parse_index(&answer, choices.len()) {
                Some(index) => return Ok(choices[index].value.clone()),
                None => writeln!(
                    self.output,
                    "  Please enter a number between 1 and {}.",
                    choices.len()
                )?,
            }
        }
    }

    /// Consumes the prompter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one answer. Bytes that are not valid UTF-8 are replaced with
    /// U+FFFD rather than failing the read.
    fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(EmsError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }
}

/// Converts a 1-based answer into an index below `len`.
fn parse_index(answer: &str, len: usize) -> Option<usize> {
    match answer.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}
