//! Reader/writer console adapter
//!
//! Drives a session over any `BufRead` + `Write` pair: stdin/stdout for a
//! non-interactive run, `Cursor` + `Vec<u8>` in tests.

use std::io::{BufRead, Write};

use crate::domain::result::Result;
use crate::ports::Console;

/// Plain-text console over a reader and a writer
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Remove one trailing `\n` or `\r\n`
fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn prompt(&mut self, text: &str) -> Result<()> {
        self.write_line(text)
    }

    fn reject(&mut self, text: &str) -> Result<()> {
        self.write_line(text)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        strip_line_ending(&mut line);
        Ok(Some(line))
    }
}
