//! Field rules
//!
//! The three hardcoded constraints and the helpers used to enforce them.
//! Lengths are counted in `char`s, not bytes.

use std::fmt;

use unicode_general_category::{get_general_category, GeneralCategory};

pub const MIN_USERNAME_LEN: usize = 4;
pub const MAX_USERNAME_LEN: usize = 20;
pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 120;
pub const MIN_PASSWORD_LEN: usize = 8;

/// True iff `lower <= value <= upper`
pub fn between_range<T: PartialOrd>(value: T, lower: T, upper: T) -> bool {
    value >= lower && value <= upper
}

/// Number of characters in a field value
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn username_ok(username: &str) -> bool {
    between_range(char_len(username), MIN_USERNAME_LEN, MAX_USERNAME_LEN)
}

pub fn age_ok(age: i32) -> bool {
    between_range(age, MIN_AGE, MAX_AGE)
}

/// Decimal digit, general category `Nd`
///
/// Narrower than `char::is_numeric`, which also accepts `²`, `½` and Roman
/// numerals such as `ⅷ`.
pub fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Which of the required character classes a password contains
struct CharClasses {
    upper: bool,
    lower: bool,
    digit: bool,
}

impl CharClasses {
    fn of(password: &str) -> Self {
        let mut classes = Self {
            upper: false,
            lower: false,
            digit: false,
        };
        for c in password.chars() {
            classes.upper |= c.is_uppercase();
            classes.lower |= c.is_lowercase();
            classes.digit |= is_digit(c);
        }
        classes
    }

    fn first_missing(&self) -> Option<PasswordIssue> {
        if !self.upper {
            Some(PasswordIssue::MissingUppercase)
        } else if !self.lower {
            Some(PasswordIssue::MissingLowercase)
        } else if !self.digit {
            Some(PasswordIssue::MissingDigit)
        } else {
            None
        }
    }
}

/// True iff the password contains an uppercase letter, a lowercase letter and a digit
///
/// Letters use Unicode case properties, so `É` counts as uppercase. Digits
/// are category `Nd` only, so `٣` (Arabic-Indic three) counts and `²` does
/// not. Length is not checked here.
pub fn password_ok(password: &str) -> bool {
    CharClasses::of(password).first_missing().is_none()
}

/// Why a password was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordIssue {
    TooShort { len: usize },
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
}

impl fmt::Display for PasswordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordIssue::TooShort { len } => write!(
                f,
                "Password too short. Length is {}. It must be at least {} characters long.",
                len, MIN_PASSWORD_LEN
            ),
            PasswordIssue::MissingUppercase => {
                f.write_str("Invalid password. It must contain at least one uppercase letter.")
            }
            PasswordIssue::MissingLowercase => {
                f.write_str("Invalid password. It must contain at least one lowercase letter.")
            }
            PasswordIssue::MissingDigit => {
                f.write_str("Invalid password. It must contain at least one digit.")
            }
        }
    }
}

/// Full password check: length first, then the first missing character class
pub fn check_password(password: &str) -> Result<(), PasswordIssue> {
    let len = char_len(password);
    if len < MIN_PASSWORD_LEN {
        return Err(PasswordIssue::TooShort { len });
    }
    match CharClasses::of(password).first_missing() {
        Some(issue) => Err(issue),
        None => Ok(()),
    }
}

/// Replace every character with `*`
pub fn mask_password(password: &str) -> String {
    "*".repeat(char_len(password))
}
