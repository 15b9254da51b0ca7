pub mod screen;

use crate::supply::{io::SupplyIo, PieceQueue, ReserveStack, SupplyError};
use anyhow::Result;
use crossterm::{style::ResetColor, ExecutableCommand};
use std::{
    fmt::{self, Debug},
    io::{BufRead, Write},
};

/// A line-oriented implementation of `SupplyIo`.
///
/// Reads one selection per line from `input`; writes the transcript to
/// `output`, using `crossterm` color codes for piece labels when `color` is
/// set.
pub struct TerminalIo<R, W: Write> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> TerminalIo<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }
}

impl<R, W: Write> Debug for TerminalIo<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalIo")
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> SupplyIo for TerminalIo<R, W> {
    fn show_banner(&mut self) -> Result<()> {
        screen::write_banner(&mut self.output)?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        screen::write_menu(&mut self.output)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_selection(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let n = self.input.read_until(b'\n', &mut buf)?;
        writeln!(self.output)?;

        // Zero bytes read means end of input. Bytes that aren't UTF-8 become
        // U+FFFD, which `Command` then rejects as an invalid selection.
        Ok((n > 0).then(|| String::from_utf8_lossy(&buf).into_owned()))
    }

    fn show_state(&mut self, queue: &PieceQueue, stack: &ReserveStack) -> Result<()> {
        screen::write_state(&mut self.output, queue, stack, self.color)?;
        Ok(())
    }

    fn show_rules(&mut self) -> Result<()> {
        screen::write_rules(&mut self.output)?;
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn show_error(&mut self, err: &SupplyError) -> Result<()> {
        writeln!(self.output, "Error: {err}")?;
        Ok(())
    }

    fn show_goodbye(&mut self) -> Result<()> {
        writeln!(self.output, "Exiting... Thanks for playing Tetris Stack!")?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R, W: Write> Drop for TerminalIo<R, W> {
    fn drop(&mut self) {
        if self.color {
            self.output.execute(ResetColor).ok();
        }
        self.output.flush().ok();
    }
}
