//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The session
//! depends only on these traits, not on concrete implementations.

mod console;

pub use console::Console;
