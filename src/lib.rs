// src/lib.rs
//! Rule-driven password generation.
//!
//! [`Validator`] checks a set of [`PasswordOptions`] and reports every
//! violated rule; [`PasswordGenerator`] builds passwords that meet those
//! rules exactly, or hands back the validation errors.

pub mod cli;
pub mod core;
pub mod generators;
pub mod models;

pub use crate::generators::{GenerationError, PasswordGenerator, ValidationError, Validator, MAX_LENGTH};
pub use crate::models::{Field, GenerationResponse, PasswordOptions};
