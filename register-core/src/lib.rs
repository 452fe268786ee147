//! Register Core - Field rules and prompt loops for the registration console
//!
//! This crate follows the same hexagonal layout as the rest of the workspace:
//!
//! - **domain**: Field rules, the accepted registration, and error types
//! - **ports**: Trait definitions for external dependencies (Console)
//! - **services**: The registration session and event logging
//! - **adapters**: Concrete implementations (plain reader/writer console)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types at crate root
pub use config::SessionConfig;
pub use domain::result::{Error, Result};
pub use domain::{Field, PasswordIssue, Registration};
pub use ports::Console;
pub use services::{EntryPoint, LogEvent, LoggingService, RegistrationSession};
