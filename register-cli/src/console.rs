//! Terminal console - stdin/stdout with colored rejections
//!
//! When stdin is a terminal and password hiding is requested, the password
//! is read through dialoguer so it is not echoed.

use std::io::{self, Stdin, StdinLock, Stdout};

use colored::Colorize;
use dialoguer::Password;
use register_core::adapters::io::IoConsole;
use register_core::{Console, Result};

pub struct TerminalConsole {
    inner: IoConsole<StdinLock<'static>, Stdout>,
    hide_secret: bool,
}

impl TerminalConsole {
    pub fn new(hide_password: bool) -> Self {
        let stdin: Stdin = io::stdin();
        let hide_secret = hide_password && atty::is(atty::Stream::Stdin);
        if hide_password && !hide_secret {
            tracing::debug!("stdin is not a terminal, password will be read as a plain line");
        }

        Self {
            inner: IoConsole::new(stdin.lock(), io::stdout()),
            hide_secret,
        }
    }

    fn read_hidden(&mut self) -> Result<Option<String>> {
        match Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
        {
            Ok(password) => Ok(Some(password)),
            Err(err) => {
                let err = to_io_error(err);
                if err.kind() == io::ErrorKind::UnexpectedEof {
                    Ok(None)
                } else {
                    Err(err.into())
                }
            }
        }
    }
}

#[allow(unreachable_patterns)]
fn to_io_error(err: dialoguer::Error) -> io::Error {
    match err {
        dialoguer::Error::IO(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other.to_string()),
    }
}

impl Console for TerminalConsole {
    fn prompt(&mut self, text: &str) -> Result<()> {
        self.inner.prompt(text)
    }

    fn reject(&mut self, text: &str) -> Result<()> {
        self.inner.reject(&text.yellow().to_string())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.inner.read_line()
    }

    fn read_secret(&mut self) -> Result<Option<String>> {
        if self.hide_secret {
            self.read_hidden()
        } else {
            self.inner.read_line()
        }
    }
}
