//! Line-oriented console I/O.
//!
//! The only place prompts touch a real stream. Everything above this
//! module renders lines and interprets strings; this module writes the
//! lines, reads the answers, and turns a dead input stream into a
//! [`PromptError`] the caller has to deal with.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Stdin, StdinLock, Stdout, Write};
use std::path::Path;

/// Marker printed in front of every answer.
pub const PROMPT_MARKER: &str = "? ";

// ============================================================================
// ERRORS
// ============================================================================

/// Unrecoverable failure while prompting.
///
/// Bad answers are never errors; they are reported and asked again.
/// These are the cases where asking again is impossible.
#[derive(Debug)]
pub enum PromptError {
    /// Input stream reached end-of-file before an answer was given.
    Closed,

    /// Reading input or writing a prompt failed.
    Io(io::Error),
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Closed => write!(f, "Input closed before an answer was given"),
            PromptError::Io(e) => write!(f, "Console I/O failed: {}", e),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromptError::Closed => None,
            PromptError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

// ============================================================================
// CONSOLE
// ============================================================================

/// A pair of streams prompts are written to and answers read from.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Write one line of text.
    pub fn line(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> Result<(), PromptError> {
        self.line("")
    }

    /// Write several lines in order.
    pub fn lines<I, S>(&mut self, lines: I) -> Result<(), PromptError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.line(line.as_ref())?;
        }
        Ok(())
    }

    /// Write `text` without a newline, flush, and read one answer.
    ///
    /// The answer is returned without its line terminator but otherwise
    /// untouched; trimming is the caller's call.
    pub fn read_answer(&mut self, text: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            tracing::debug!(prompt = text, "input closed");
            return Err(PromptError::Closed);
        }

        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }

    /// Borrow the output stream (transcripts in tests).
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Console::new(stdin.lock(), io::stdout())
    }
}

impl Console<BufReader<File>, Stdout> {
    /// Console that takes its answers from a file, one per line.
    ///
    /// Prompts still go to stdout so a scripted run reads like a live one.
    pub fn replay(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Console::new(BufReader::new(file), io::stdout()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
