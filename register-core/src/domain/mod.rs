//! Core domain entities
//!
//! Field rules and the accepted registration. These are pure data structures
//! and predicates - no I/O.

mod field;
mod registration;
pub mod result;
pub mod rules;

pub use field::Field;
pub use registration::Registration;
pub use rules::PasswordIssue;
