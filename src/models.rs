// src/models.rs
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::generators::GenerationError;

pub const DEFAULT_NUMBER_COUNT: i64 = 2;
pub const DEFAULT_SPECIAL_COUNT: i64 = 1;

/// A single raw option as supplied by the caller.
///
/// Options can come from JSON or the command line, so a value may be absent
/// or of the wrong type. Validation needs to tell those cases apart instead
/// of rejecting the input at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Missing,
    /// Provided, but not of the expected type. Holds the raw text.
    Invalid(String),
    Value(T),
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T: FromStr> Field<T> {
    // Parse command-line text; anything that doesn't parse is kept as Invalid
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<T>() {
            Ok(value) => Field::Value(value),
            Err(_) => Field::Invalid(raw.to_string()),
        }
    }
}

impl Field<bool> {
    /// Whether the flag requests letters of its case.
    ///
    /// Only a missing flag or an explicit `false` opts out; any other provided
    /// value counts as a request when sizing the password.
    pub fn is_truthy(&self) -> bool {
        match self {
            Field::Missing => false,
            Field::Invalid(_) => true,
            Field::Value(b) => *b,
        }
    }
}

/// Strict conversion from a JSON value into an option type.
pub trait JsonField: Sized {
    fn from_json(value: &JsonValue) -> Option<Self>;
}

impl JsonField for i64 {
    fn from_json(value: &JsonValue) -> Option<Self> {
        value.as_i64()
    }
}

impl JsonField for bool {
    fn from_json(value: &JsonValue) -> Option<Self> {
        value.as_bool()
    }
}

impl<T: JsonField> Field<T> {
    // `null` is treated the same as an absent value
    pub fn from_json(value: Option<&JsonValue>) -> Self {
        match value {
            None | Some(JsonValue::Null) => Field::Missing,
            Some(v) => match T::from_json(v) {
                Some(parsed) => Field::Value(parsed),
                None => Field::Invalid(v.to_string()),
            },
        }
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: Field<i64>,
    pub uppercase: Field<bool>,
    pub lowercase: Field<bool>,
    pub number: Field<i64>,
    pub special: Field<i64>,
}

impl Default for PasswordOptions {
    // Length has no default and stays missing
    fn default() -> Self {
        Self {
            length: Field::Missing,
            uppercase: Field::Value(true),
            lowercase: Field::Value(true),
            number: Field::Value(DEFAULT_NUMBER_COUNT),
            special: Field::Value(DEFAULT_SPECIAL_COUNT),
        }
    }
}

impl PasswordOptions {
    pub fn new(length: i64) -> Self {
        Self {
            length: Field::Value(length),
            ..Self::default()
        }
    }

    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = Field::Value(uppercase);
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = Field::Value(lowercase);
        self
    }

    pub fn with_number(mut self, number: i64) -> Self {
        self.number = Field::Value(number);
        self
    }

    pub fn with_special(mut self, special: i64) -> Self {
        self.special = Field::Value(special);
        self
    }

    /// Build options from a JSON object.
    ///
    /// Absent keys fall back to the defaults (length has none), an explicit
    /// `null` marks the option as missing, and unknown keys are ignored.
    pub fn from_json_map(map: &Map<String, JsonValue>) -> Self {
        let defaults = Self::default();
        let field_or = |key: &str, default: Field<i64>| match map.get(key) {
            Some(v) => Field::from_json(Some(v)),
            None => default,
        };
        let flag_or = |key: &str, default: Field<bool>| match map.get(key) {
            Some(v) => Field::from_json(Some(v)),
            None => default,
        };

        Self {
            length: Field::from_json(map.get("length")),
            uppercase: flag_or("uppercase", defaults.uppercase),
            lowercase: flag_or("lowercase", defaults.lowercase),
            number: field_or("number", defaults.number),
            special: field_or("special", defaults.special),
        }
    }
}

impl<'de> Deserialize<'de> for PasswordOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, JsonValue>::deserialize(deserializer)?;
        Ok(Self::from_json_map(&map))
    }
}

/// Outcome of a generation request in its serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<String>>,
}

impl From<Result<String, GenerationError>> for GenerationResponse {
    fn from(result: Result<String, GenerationError>) -> Self {
        match result {
            Ok(password) => Self {
                success: true,
                password: Some(password),
                error: None,
            },
            Err(GenerationError::InvalidOptions(errors)) => Self {
                success: false,
                password: None,
                error: Some(errors),
            },
        }
    }
}
