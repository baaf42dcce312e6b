use std::borrow::Cow;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use super::config::ReplConfig;
use super::render::render;
use crate::error::Result;
use crate::lexer::{tokenize, TokenStream};

/// What the loop should do after one iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Read another line
    Continue,
    /// Stop the session
    Quit,
}

/// Decision for a single input line, before any output happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The line was the quit sentinel; nothing was tokenized
    Quit,
    /// The line's tokens, to be echoed
    Echo(TokenStream),
}

impl Outcome {
    /// The loop control this outcome maps to
    pub fn control(&self) -> Control {
        match self {
            Outcome::Quit => Control::Quit,
            Outcome::Echo(_) => Control::Continue,
        }
    }
}

/// Classifies a line (already stripped of its line terminator)
pub fn evaluate_line(config: &ReplConfig, line: &str) -> Outcome {
    if config.is_quit(line) {
        Outcome::Quit
    } else {
        Outcome::Echo(tokenize(line))
    }
}

/// Strips one trailing `\n` or `\r\n`, leaving any other whitespace in place
///
/// A `\r` with no `\n` after it is kept.
fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => line,
    }
}

/// Reads one line without its terminator, or `None` at end of input
///
/// Invalid UTF-8 is replaced with U+FFFD rather than ending the session.
fn read_line_lossy<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }

    let text = match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!("input line is not valid UTF-8; replacing invalid bytes");
            text
        }
    };
    Ok(Some(strip_line_ending(&text).to_string()))
}

/// Interactive read-tokenize-print loop over any reader and writer
pub struct Repl<R, W> {
    config: ReplConfig,
    input: R,
    output: W,
    /// Lines echoed so far
    echoed: usize,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Creates a session reading from `input` and writing prompts and echoes to `output`
    pub fn new(config: ReplConfig, input: R, output: W) -> Self {
        Repl {
            config,
            input,
            output,
            echoed: 0,
        }
    }

    /// Number of lines echoed so far
    pub fn echoed(&self) -> usize {
        self.echoed
    }

    /// Prompts, reads one line, and echoes its tokens
    ///
    /// End of input ends the session the same way the sentinel does.
    pub fn step(&mut self) -> Result<Control> {
        write!(self.output, "{}", self.config.prompt)?;
        self.output.flush()?;

        let Some(line) = read_line_lossy(&mut self.input)? else {
            debug!("end of input");
            writeln!(self.output)?;
            self.output.flush()?;
            return Ok(Control::Quit);
        };

        match evaluate_line(&self.config, &line) {
            Outcome::Quit => {
                debug!("quit sentinel received");
                Ok(Control::Quit)
            }
            Outcome::Echo(tokens) => {
                debug!(tokens = tokens.len(), "echoing line");
                writeln!(self.output, "{}", render(&self.config, &tokens)?)?;
                self.output.flush()?;
                self.echoed += 1;
                Ok(Control::Continue)
            }
        }
    }

    /// Runs until the sentinel or end of input, returning the number of lines echoed
    pub fn run(&mut self) -> Result<usize> {
        info!(prompt = %self.config.prompt, format = %self.config.format, "session started");
        while self.step()? == Control::Continue {}
        info!(echoed = self.echoed, "session ended");
        Ok(self.echoed)
    }

    /// Consumes the session, returning its reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Echoes every line of `input` without prompting, stopping at the quit sentinel
///
/// Returns the number of lines echoed.
pub fn run_batch<R: BufRead, W: Write>(
    config: &ReplConfig,
    mut input: R,
    mut output: W,
) -> Result<usize> {
    let mut echoed = 0;
    while let Some(line) = read_line_lossy(&mut input)? {
        match evaluate_line(config, &line) {
            Outcome::Quit => {
                debug!(echoed, "quit sentinel in batch input");
                break;
            }
            Outcome::Echo(tokens) => {
                writeln!(output, "{}", render(config, &tokens)?)?;
                echoed += 1;
            }
        }
    }
    output.flush()?;
    Ok(echoed)
}

/// Echoes a single line without prompting; the sentinel is not special here
pub fn echo_once<W: Write>(config: &ReplConfig, line: &str, mut output: W) -> Result<()> {
    writeln!(output, "{}", render(config, &tokenize(line))?)?;
    output.flush()?;
    Ok(())
}
