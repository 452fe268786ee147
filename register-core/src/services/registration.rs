//! Registration session - the prompt-validate-repeat loops
//!
//! A session owns its console for one run and collects username, age and
//! password in that order. Rejected values are explained on the console and
//! asked for again. The loops stop on a valid value, at end of input, or
//! once a configured attempt limit is reached.

use std::num::NonZeroU32;

use crate::config::SessionConfig;
use crate::domain::result::{Error, Result};
use crate::domain::rules::{
    age_ok, char_len, check_password, username_ok, PasswordIssue, MAX_AGE, MAX_USERNAME_LEN,
    MIN_AGE, MIN_USERNAME_LEN,
};
use crate::domain::{Field, Registration};
use crate::ports::Console;
use crate::services::logging::{LogEvent, LoggingService};

/// Rejection counter for one field
struct Attempts {
    field: Field,
    rejected: u32,
    limit: Option<NonZeroU32>,
}

impl Attempts {
    fn new(field: Field, limit: Option<NonZeroU32>) -> Self {
        Self {
            field,
            rejected: 0,
            limit,
        }
    }

    /// 1-based number of the attempt in progress
    fn current(&self) -> u32 {
        self.rejected + 1
    }

    fn record_rejection(&mut self) -> Result<()> {
        self.rejected += 1;
        match self.limit {
            Some(limit) if self.rejected >= limit.get() => Err(Error::AttemptsExhausted {
                field: self.field,
                attempts: self.rejected,
            }),
            _ => Ok(()),
        }
    }
}

fn password_issue_reason(issue: &PasswordIssue) -> &'static str {
    match issue {
        PasswordIssue::TooShort { .. } => "too_short",
        PasswordIssue::MissingUppercase => "missing_uppercase",
        PasswordIssue::MissingLowercase => "missing_lowercase",
        PasswordIssue::MissingDigit => "missing_digit",
    }
}

pub struct RegistrationSession<C> {
    console: C,
    config: SessionConfig,
    logger: Option<LoggingService>,
}

impl<C: Console> RegistrationSession<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            config: SessionConfig::default(),
            logger: None,
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_logger(mut self, logger: LoggingService) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Collect all three fields and return the accepted registration
    pub fn run(&mut self) -> Result<Registration> {
        self.log(LogEvent::new("session_started"));

        let result = self.collect();
        match &result {
            Ok(_) => self.log(LogEvent::new("session_completed")),
            Err(e) => {
                let mut event = LogEvent::new("session_failed").with_error(e.to_string());
                if let Some(field) = e.field() {
                    event = event.with_field(field);
                }
                self.log(event);
            }
        }
        result
    }

    fn collect(&mut self) -> Result<Registration> {
        let username = self.prompt_for_username()?;
        let age = self.prompt_for_age()?;
        let password = self.prompt_for_password()?;
        Ok(Registration::new(username, age, password))
    }

    pub fn prompt_for_username(&mut self) -> Result<String> {
        let mut attempts = Attempts::new(Field::Username, self.config.max_attempts);
        loop {
            self.console.prompt(&format!(
                "Enter your username (between {} and {} characters):",
                MIN_USERNAME_LEN, MAX_USERNAME_LEN
            ))?;
            let username = self.read_field(Field::Username)?;

            if username_ok(&username) {
                self.accepted(&attempts);
                return Ok(username);
            }

            self.console.reject(&format!(
                "{} is invalid, username length is {}.",
                username,
                char_len(&username)
            ))?;
            self.rejected(&mut attempts, "length")?;
        }
    }

    pub fn prompt_for_age(&mut self) -> Result<i32> {
        let mut attempts = Attempts::new(Field::Age, self.config.max_attempts);
        loop {
            self.console
                .prompt(&format!("Enter your age (between {} and {}):", MIN_AGE, MAX_AGE))?;
            let age = self.read_int_counted(&mut attempts)?;

            if age_ok(age) {
                self.accepted(&attempts);
                return Ok(age);
            }

            self.console.reject(&format!("{} Invalid age.", age))?;
            self.rejected(&mut attempts, "out_of_range")?;
        }
    }

    pub fn prompt_for_password(&mut self) -> Result<String> {
        let mut attempts = Attempts::new(Field::Password, self.config.max_attempts);
        loop {
            self.console.prompt(
                "Enter your password (must have at least one uppercase, one lowercase, and one digit):",
            )?;
            let password = self.read_field(Field::Password)?;

            match check_password(&password) {
                Ok(()) => {
                    self.accepted(&attempts);
                    return Ok(password);
                }
                Err(issue) => {
                    self.console.reject(&issue.to_string())?;
                    self.rejected(&mut attempts, password_issue_reason(&issue))?;
                }
            }
        }
    }

    /// Read lines until one parses as a base-10 integer
    ///
    /// The value is not range-checked. Surrounding whitespace is ignored.
    pub fn read_int(&mut self, field: Field) -> Result<i32> {
        let mut attempts = Attempts::new(field, self.config.max_attempts);
        self.read_int_counted(&mut attempts)
    }

    fn read_int_counted(&mut self, attempts: &mut Attempts) -> Result<i32> {
        loop {
            let line = self.read_field(attempts.field)?;
            match line.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    self.console.reject(&format!(
                        "{} invalid input. Please enter a valid integer.",
                        line
                    ))?;
                    self.rejected(attempts, "not_an_integer")?;
                }
            }
        }
    }

    fn read_field(&mut self, field: Field) -> Result<String> {
        let line = match field {
            Field::Password if self.config.hide_password => self.console.read_secret()?,
            _ => self.console.read_line()?,
        };
        line.ok_or(Error::EndOfInput { field })
    }

    fn accepted(&self, attempts: &Attempts) {
        self.log(
            LogEvent::new("field_accepted")
                .with_field(attempts.field)
                .with_attempt(attempts.current()),
        );
    }

    fn rejected(&self, attempts: &mut Attempts, reason: &str) -> Result<()> {
        self.log(
            LogEvent::new("field_rejected")
                .with_field(attempts.field)
                .with_attempt(attempts.current())
                .with_reason(reason),
        );
        attempts.record_rejection()
    }

    fn log(&self, event: LogEvent) {
        if let Some(logger) = &self.logger {
            logger.log(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::io::IoConsole;
    use crate::services::logging::tests::capture_logs;
    use crate::services::logging::EntryPoint;
    use std::io::Cursor;

    type TestConsole = IoConsole<Cursor<Vec<u8>>, Vec<u8>>;

    fn session(lines: &[&str]) -> RegistrationSession<TestConsole> {
        let mut input = lines.join("\n");
        input.push('\n');
        RegistrationSession::new(IoConsole::new(Cursor::new(input.into_bytes()), Vec::new()))
    }

    fn output(session: RegistrationSession<TestConsole>) -> String {
        let (_, out) = session.into_console().into_parts();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_username_loop() {
        let mut s = session(&["abc", "abcd"]);
        assert_eq!(s.prompt_for_username().unwrap(), "abcd");
        let out = output(s);
        assert!(out.contains("abc is invalid, username length is 3."));
        assert_eq!(out.matches("Enter your username").count(), 2);
    }

    #[test]
    fn test_username_upper_bound() {
        let long = "a".repeat(21);
        let ok = "b".repeat(20);
        let mut s = session(&[long.as_str(), ok.as_str()]);
        assert_eq!(s.prompt_for_username().unwrap(), ok);
        assert!(output(s).contains("username length is 21."));
    }

    #[test]
    fn test_age_loop_bounds() {
        let mut s = session(&["17", "121", "120"]);
        assert_eq!(s.prompt_for_age().unwrap(), 120);
        let out = output(s);
        assert!(out.contains("17 Invalid age."));
        assert!(out.contains("121 Invalid age."));

        let mut s = session(&["18"]);
        assert_eq!(s.prompt_for_age().unwrap(), 18);
    }

    #[test]
    fn test_read_int_reprompts_on_garbage() {
        let mut s = session(&["abc", "", "99999999999", " 42 "]);
        assert_eq!(s.read_int(Field::Age).unwrap(), 42);
        let out = output(s);
        assert!(out.contains("abc invalid input. Please enter a valid integer."));
        assert!(out.contains("99999999999 invalid input."));
    }

    #[test]
    fn test_read_int_is_not_range_checked() {
        let mut s = session(&["-7"]);
        assert_eq!(s.read_int(Field::Age).unwrap(), -7);
    }

    #[test]
    fn test_password_loop_messages() {
        let mut s = session(&["short1A", "alllowercase1", "ALLUPPER1", "NoDigitsHere", "Valid1Pass"]);
        assert_eq!(s.prompt_for_password().unwrap(), "Valid1Pass");
        let out = output(s);
        assert!(out.contains("Password too short. Length is 7."));
        assert!(out.contains("at least one uppercase letter."));
        assert!(out.contains("at least one lowercase letter."));
        assert!(out.contains("at least one digit."));
        assert!(!out.contains("alllowercase1"));
    }

    #[test]
    fn test_end_of_input_names_field() {
        let mut s = session(&["abcd"]);
        let err = s.run().unwrap_err();
        assert!(matches!(err, Error::EndOfInput { field: Field::Age }));
    }

    #[test]
    fn test_attempt_limit() {
        let config = SessionConfig::default().with_max_attempts(NonZeroU32::new(2));
        let mut s = session(&["abc", "x", "abcd"]).with_config(config);
        let err = s.prompt_for_username().unwrap_err();
        assert!(matches!(
            err,
            Error::AttemptsExhausted {
                field: Field::Username,
                attempts: 2
            }
        ));
        // no prompt is shown after the last rejection
        assert_eq!(output(s).matches("Enter your username").count(), 2);
    }

    #[test]
    fn test_attempt_limit_counts_parse_failures() {
        let config = SessionConfig::default().with_max_attempts(NonZeroU32::new(2));
        let mut s = session(&["abc", "17", "18"]).with_config(config);
        let err = s.prompt_for_age().unwrap_err();
        assert!(matches!(err, Error::AttemptsExhausted { field: Field::Age, .. }));
    }

    #[test]
    fn test_logger_records_events_without_values() {
        let logger = LoggingService::new(EntryPoint::Library, "test");
        let mut s = session(&["abcd", "18", "short", "Valid1Pass"]).with_logger(logger);

        let logs = capture_logs(|| {
            s.run().unwrap();
        });

        let started = logs.find("session_started").unwrap();
        let completed = logs.find("session_completed").unwrap();
        assert!(started < completed);

        let rejected: Vec<_> = logs.lines().filter(|l| l.contains("field_rejected")).collect();
        assert_eq!(rejected.len(), 1);
        assert!(rejected[0].contains("password"));
        assert!(rejected[0].contains("too_short"));

        assert!(!logs.contains("Valid1Pass"));
        assert!(!logs.contains("abcd"));
    }
}
