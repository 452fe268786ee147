//! Session configuration
//!
//! The defaults keep prompting forever and read the password like any other
//! line. The binary sets these from its command-line flags only.

use std::num::NonZeroU32;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Rejected attempts allowed per field before the session fails.
    /// `None` keeps prompting forever.
    pub max_attempts: Option<NonZeroU32>,
    /// Ask the console not to echo the password
    pub hide_password: bool,
}

impl SessionConfig {
    pub fn with_max_attempts(mut self, max_attempts: Option<NonZeroU32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_hide_password(mut self, hide_password: bool) -> Self {
        self.hide_password = hide_password;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unbounded_and_plain() {
        let config = SessionConfig::default();
        assert!(config.max_attempts.is_none());
        assert!(!config.hide_password);
    }

    #[test]
    fn test_builders_override() {
        let config = SessionConfig::default()
            .with_max_attempts(NonZeroU32::new(5))
            .with_hide_password(true);
        assert_eq!(config.max_attempts, NonZeroU32::new(5));
        assert!(config.hide_password);
    }
}
