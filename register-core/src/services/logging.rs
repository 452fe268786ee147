//! Logging service - structured session events
//!
//! Privacy-safe event log for a registration session. Events name the field
//! and attempt number but never carry the value that was typed.
//!
//! Events are emitted through `tracing` at debug level; the binary decides
//! where they go. Nothing is written to disk.

use serde::{Deserialize, Serialize};

use crate::domain::Field;

/// Entry point for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    Cli,
    Library,
}

impl EntryPoint {
    fn as_str(&self) -> &'static str {
        match self {
            EntryPoint::Cli => "cli",
            EntryPoint::Library => "library",
        }
    }
}

/// A log event to be recorded
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub event: String,
    pub field: Option<Field>,
    pub attempt: Option<u32>,
    pub reason: Option<String>,
    pub error_message: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            field: None,
            attempt: None,
            reason: None,
            error_message: None,
        }
    }

    /// Set the field being collected
    pub fn with_field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }

    /// Set the attempt number (1-based)
    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = Some(attempt);
        self
    }

    /// Set a short machine-readable rejection reason, e.g. `too_short`
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Set error information
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

/// Service for structured event logging
pub struct LoggingService {
    entry_point: EntryPoint,
    app_version: String,
}

impl LoggingService {
    pub fn new(entry_point: EntryPoint, app_version: impl Into<String>) -> Self {
        Self {
            entry_point,
            app_version: app_version.into(),
        }
    }

    /// Log an event
    ///
    /// Unset context is left out of the record. The entry point and app
    /// version come from the service configuration.
    pub fn log(&self, event: LogEvent) {
        tracing::debug!(
            event = %event.event,
            field = event.field.map(|f| f.as_str()),
            attempt = event.attempt,
            reason = event.reason.as_deref(),
            error = event.error_message.as_deref(),
            entry_point = self.entry_point.as_str(),
            app_version = %self.app_version,
            "session event"
        );
    }
}
