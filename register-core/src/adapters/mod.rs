//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Any `BufRead` / `Write` pair for the Console port

pub mod io;
