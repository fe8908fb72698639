//! Line-based console I/O.

use std::io::{self, BufRead, Write};

use crate::ui::Theme;

/// Input and output handles for an interactive session.
///
/// Generic over the streams so sessions can be driven from memory in tests.
pub struct Console<I, O> {
    input: I,
    output: O,
    theme: Theme,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O, theme: Theme) -> Self {
        Self {
            input,
            output,
            theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Write text and flush, so prompts without a trailing newline show up.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Read one line of input. Returns `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Consume the console and return the output stream.
    pub fn into_output(self) -> O {
        self.output
    }
}
