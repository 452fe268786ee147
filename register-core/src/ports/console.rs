//! Console port - line-based text channel

use crate::domain::result::Result;

/// Line-based input/output channel used by a registration session
///
/// `read_line` returns `Ok(None)` once the input is exhausted. Returned lines
/// never include the trailing `\n` or `\r\n`.
pub trait Console {
    /// Show a prompt describing what to enter next
    fn prompt(&mut self, text: &str) -> Result<()>;

    /// Show why the last value was rejected
    fn reject(&mut self, text: &str) -> Result<()>;

    /// Read one line of input
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Read one line that should not be echoed back
    ///
    /// Plain channels have no way to hide input, so this reads a normal line.
    fn read_secret(&mut self) -> Result<Option<String>> {
        self.read_line()
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn prompt(&mut self, text: &str) -> Result<()> {
        (**self).prompt(text)
    }

    fn reject(&mut self, text: &str) -> Result<()> {
        (**self).reject(text)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }

    fn read_secret(&mut self) -> Result<Option<String>> {
        (**self).read_secret()
    }
}
