//! Output formatting utilities

use anyhow::Result;
use colored::Colorize;
use register_core::Registration;

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print the confirmation for a completed registration
pub fn summary(registration: &Registration, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(registration)?);
    } else {
        print!("{}", registration.summary());
    }
    Ok(())
}
