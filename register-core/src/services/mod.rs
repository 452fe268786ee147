//! Service layer - session orchestration
//!
//! Services coordinate domain rules and port interactions.

pub mod logging;
mod registration;

pub use logging::{EntryPoint, LogEvent, LoggingService};
pub use registration::RegistrationSession;
