// src/generators/validator.rs
use std::fmt;

use thiserror::Error;

use crate::models::{Field, PasswordOptions};

/// Maximum allowed length for a generated password
pub const MAX_LENGTH: i64 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionName {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionName::Length => write!(f, "Length"),
            OptionName::Uppercase => write!(f, "Uppercase"),
            OptionName::Lowercase => write!(f, "Lowercase"),
            OptionName::Number => write!(f, "Number"),
            OptionName::Special => write!(f, "Special"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must be provided.")]
    Missing(OptionName),

    #[error("Length must be an integer.")]
    LengthNotInteger,

    #[error("Length must be a positive integer.")]
    LengthNotPositive,

    #[error("Length cannot exceed {max} characters.")]
    LengthTooLong { max: i64 },

    #[error("Number must be a non-negative integer.")]
    InvalidNumber,

    #[error("Special must be a non-negative integer.")]
    InvalidSpecial,

    #[error("Uppercase must be a boolean value.")]
    UppercaseNotBoolean,

    #[error("Lowercase must be a boolean value.")]
    LowercaseNotBoolean,

    #[error("At least one of uppercase or lowercase must be true.")]
    NoLetterCase,

    // i128 so that extreme counts can't overflow the sum
    #[error("Password too short: length={length}, but requires at least {required} characters.")]
    TooShort { length: i64, required: i128 },
}

/// Checks password options and reports every violated constraint.
///
/// All checks run; nothing stops at the first failure. The order of the
/// returned errors is fixed: presence, length, number, special, letter flags,
/// then capacity.
pub struct Validator<'a> {
    options: &'a PasswordOptions,
}

impl<'a> Validator<'a> {
    pub fn new(options: &'a PasswordOptions) -> Self {
        Self { options }
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        self.check_presence(&mut errors);
        self.check_length(&mut errors);
        self.check_number(&mut errors);
        self.check_special(&mut errors);
        self.check_letter_flags(&mut errors);
        self.check_total_required_fits_length(&mut errors);

        errors
    }

    /// Error messages in report order; empty when the options are valid.
    pub fn validate(&self) -> Vec<String> {
        self.errors().iter().map(ToString::to_string).collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    fn check_presence(&self, errors: &mut Vec<ValidationError>) {
        let o = self.options;
        let presence = [
            (OptionName::Length, o.length.is_missing()),
            (OptionName::Uppercase, o.uppercase.is_missing()),
            (OptionName::Lowercase, o.lowercase.is_missing()),
            (OptionName::Number, o.number.is_missing()),
            (OptionName::Special, o.special.is_missing()),
        ];

        errors.extend(
            presence
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| ValidationError::Missing(name)),
        );
    }

    fn check_length(&self, errors: &mut Vec<ValidationError>) {
        match self.options.length {
            Field::Value(length) => {
                if length <= 0 {
                    errors.push(ValidationError::LengthNotPositive);
                }
                if length > MAX_LENGTH {
                    errors.push(ValidationError::LengthTooLong { max: MAX_LENGTH });
                }
            }
            _ => errors.push(ValidationError::LengthNotInteger),
        }
    }

    fn check_number(&self, errors: &mut Vec<ValidationError>) {
        if !is_non_negative(&self.options.number) {
            errors.push(ValidationError::InvalidNumber);
        }
    }

    fn check_special(&self, errors: &mut Vec<ValidationError>) {
        if !is_non_negative(&self.options.special) {
            errors.push(ValidationError::InvalidSpecial);
        }
    }

    fn check_letter_flags(&self, errors: &mut Vec<ValidationError>) {
        let uppercase = self.options.uppercase.value();
        let lowercase = self.options.lowercase.value();

        if uppercase.is_none() {
            errors.push(ValidationError::UppercaseNotBoolean);
        }
        if lowercase.is_none() {
            errors.push(ValidationError::LowercaseNotBoolean);
        }

        if let (Some(false), Some(false)) = (uppercase, lowercase) {
            errors.push(ValidationError::NoLetterCase);
        }
    }

    // Only sized when length, number and special are all integers
    fn check_total_required_fits_length(&self, errors: &mut Vec<ValidationError>) {
        let o = self.options;
        let (Some(&length), Some(&number), Some(&special)) =
            (o.length.value(), o.number.value(), o.special.value())
        else {
            return;
        };

        let required_letters = i128::from(o.uppercase.is_truthy()) + i128::from(o.lowercase.is_truthy());
        let required = i128::from(number) + i128::from(special) + required_letters;

        if required > i128::from(length) {
            errors.push(ValidationError::TooShort { length, required });
        }
    }
}

fn is_non_negative(field: &Field<i64>) -> bool {
    matches!(field, Field::Value(v) if *v >= 0)
}
