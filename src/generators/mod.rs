// src/generators/mod.rs
pub mod password;
pub mod validator;

pub use password::{GenerationError, PasswordGenerator};
pub use validator::{ValidationError, Validator, MAX_LENGTH};
