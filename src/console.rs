// src/console.rs

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

pub const SEPARATOR: &str = "----------------------------------------";

/// Line-oriented prompts over any reader/writer pair (stdin/stdout in the
/// binary, in-memory buffers in tests).
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and return the answer, trimmed and lower-cased.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush().context("flushing prompt")?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("reading from standard input")?;
        if n == 0 {
            bail!("standard input closed");
        }
        Ok(line.trim().to_lowercase())
    }

    /// Ask `prompt`, then keep asking `retry` until `parse` accepts the answer.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        let mut answer = self.ask(prompt)?;
        loop {
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            debug!(answer = %answer, "rejected input");
            answer = self.ask(retry)?;
        }
    }

    /// `y` / `yes`, any case.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_normalises_answer() {
        let mut c = console("  New York City \r\n");
        assert_eq!(c.ask("city? ").unwrap(), "new york city");
        assert_eq!(String::from_utf8(c.into_output()).unwrap(), "city? ");
    }

    #[test]
    fn ask_until_retries_until_valid() {
        let mut c = console("boston\n\nchicago\n");
        let got = c
            .ask_until("city? ", "again: ", |s| (s == "chicago").then(|| s.to_string()))
            .unwrap();
        assert_eq!(got, "chicago");
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out, "city? again: again: ");
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut c = console("nope\n");
        let err = c
            .ask_until("city? ", "again: ", |_| None::<()>)
            .unwrap_err();
        assert!(err.to_string().contains("standard input closed"));
    }

    #[test]
    fn confirm_accepts_y_and_yes() {
        let mut c = console("Y\nyes\nno\nyep\n");
        assert!(c.confirm("? ").unwrap());
        assert!(c.confirm("? ").unwrap());
        assert!(!c.confirm("? ").unwrap());
        assert!(!c.confirm("? ").unwrap());
    }

    #[test]
    fn separator_is_forty_dashes() {
        assert_eq!(SEPARATOR.len(), 40);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }
}
