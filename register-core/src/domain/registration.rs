//! Registration domain model

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::rules::mask_password;

/// The three accepted values of a completed session
///
/// The raw password is only reachable through [`Registration::password`];
/// `Debug`, `Display` and serialization all use the masked form.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub age: i32,
    password: String,
}

impl Registration {
    pub fn new(username: impl Into<String>, age: i32, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            age,
            password: password.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn masked_password(&self) -> String {
        mask_password(&self.password)
    }

    /// The confirmation block printed at the end of a session
    pub fn summary(&self) -> String {
        format!(
            "User name: {}\nAge: {}\nPassword: {}\n",
            self.username,
            self.age,
            self.masked_password()
        )
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("age", &self.age)
            .field("password", &self.masked_password())
            .finish()
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl Serialize for Registration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Registration", 3)?;
        state.serialize_field("username", &self.username)?;
        state.serialize_field("age", &self.age)?;
        state.serialize_field("password", &self.masked_password())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_format() {
        let reg = Registration::new("abcd", 18, "Valid1Pass");
        assert_eq!(reg.summary(), "User name: abcd\nAge: 18\nPassword: **********\n");
        assert_eq!(reg.to_string(), reg.summary());
    }

    #[test]
    fn test_debug_hides_password() {
        let reg = Registration::new("abcd", 18, "Valid1Pass");
        let debug = format!("{:?}", reg);
        assert!(!debug.contains("Valid1Pass"));
        assert!(debug.contains("**********"));
    }

    #[test]
    fn test_serialize_masks_password() {
        let reg = Registration::new("abcd", 42, "Valid1Pass");
        let value = serde_json::to_value(&reg).unwrap();
        assert_eq!(value["username"], "abcd");
        assert_eq!(value["age"], 42);
        assert_eq!(value["password"], "**********");
        assert_eq!(reg.password(), "Valid1Pass");
    }
}
