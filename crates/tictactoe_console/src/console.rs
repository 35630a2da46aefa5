//! Line-oriented console used for prompts and board output.

use crate::SessionError;
use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use tracing::{debug, instrument};

/// One input channel and one output channel, read a line at a time.
///
/// Reads block until a full line is available; there is no timeout.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    buffer: Vec<u8>,
}

/// Console attached to the process's stdin and stdout.
pub type StdConsole = Console<StdinLock<'static>, Stdout>;

/// Opens a console on stdin and stdout.
pub fn stdio() -> StdConsole {
    Console::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buffer: Vec::new(),
        }
    }

    /// Reads one line with surrounding whitespace removed.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line is
    /// handed back as text for the caller to reject.
    /// Fails with [`SessionError::EndOfInput`] once the input is exhausted.
    #[instrument(skip(self))]
    pub fn read_line(&mut self) -> Result<String, SessionError> {
        self.buffer.clear();
        let read = self.input.read_until(b'\n', &mut self.buffer)?;
        if read == 0 {
            debug!("Input exhausted");
            return Err(SessionError::EndOfInput);
        }
        Ok(String::from_utf8_lossy(&self.buffer).trim().to_string())
    }

    /// Writes `text` without a newline and flushes so it shows before input.
    pub fn prompt(&mut self, text: impl Display) -> Result<(), SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> Result<(), SessionError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes an empty line.
    pub fn blank_line(&mut self) -> Result<(), SessionError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Borrows the output channel.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning the output channel.
    pub fn into_output(self) -> W {
        self.output
    }
}
