// src/generators/password.rs
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::generators::validator::Validator;
use crate::models::PasswordOptions;

pub static SPECIAL_CHARS: &[u8] = b"@%!?*^&";
pub static NUMBER_CHARS: &[u8] = b"0123456789";
pub static LOWER_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub static UPPER_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Invalid password options: {}", .0.join(" "))]
    InvalidOptions(Vec<String>),
}

pub type Result<T> = std::result::Result<T, GenerationError>;

// Validated options with every count resolved to a usable size
#[derive(Debug, Clone, Copy)]
struct Composition {
    length: usize,
    uppercase: bool,
    lowercase: bool,
    number: usize,
    special: usize,
}

impl Composition {
    fn from_options(options: &PasswordOptions) -> Option<Self> {
        Some(Self {
            length: usize::try_from(*options.length.value()?).ok()?,
            uppercase: *options.uppercase.value()?,
            lowercase: *options.lowercase.value()?,
            number: usize::try_from(*options.number.value()?).ok()?,
            special: usize::try_from(*options.special.value()?).ok()?,
        })
    }
}

/// Builds passwords that satisfy a fixed set of composition rules.
///
/// The options are validated once, on construction. Invalid options never
/// produce a password: [`PasswordGenerator::generate`] hands back the
/// validation errors instead and draws nothing from the random source.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    options: PasswordOptions,
    errors: Vec<String>,
    composition: Option<Composition>,
}

impl PasswordGenerator {
    pub fn new(options: PasswordOptions) -> Self {
        let errors = Validator::new(&options).validate();

        let composition = if errors.is_empty() {
            Composition::from_options(&options)
        } else {
            log::debug!("Password options rejected with {} error(s)", errors.len());
            None
        };

        PasswordGenerator {
            options,
            errors,
            composition,
        }
    }

    pub fn options(&self) -> &PasswordOptions {
        &self.options
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Generate a password using the thread-local random source.
    pub fn generate(&self) -> Result<String> {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let Some(composition) = self.composition else {
            return Err(GenerationError::InvalidOptions(self.errors.clone()));
        };

        log::debug!(
            "Generating password: length={}, digits={}, specials={}",
            composition.length,
            composition.number,
            composition.special
        );

        Ok(build_password(&composition, rng))
    }
}

fn build_password<R: Rng + ?Sized>(composition: &Composition, rng: &mut R) -> String {
    let mut password = Vec::with_capacity(composition.length);

    password.extend(pick_random(SPECIAL_CHARS, composition.special, rng));
    password.extend(pick_random(NUMBER_CHARS, composition.number, rng));
    password.extend(required_letters(composition, rng));

    // Fill the rest with letters from the enabled cases
    let remaining = composition.length.saturating_sub(password.len());
    password.extend(pick_random(&available_letters(composition), remaining, rng));

    password.shuffle(rng);
    password.into_iter().map(char::from).collect()
}

// Uniform draws with replacement
fn pick_random<R: Rng + ?Sized>(source: &[u8], count: usize, rng: &mut R) -> Vec<u8> {
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        if let Some(&c) = source.choose(rng) {
            picked.push(c);
        }
    }
    picked
}

// One letter from each enabled case, so both cases are always represented
fn required_letters<R: Rng + ?Sized>(composition: &Composition, rng: &mut R) -> Vec<u8> {
    let mut letters = Vec::with_capacity(2);
    if composition.uppercase {
        letters.extend(pick_random(UPPER_CHARS, 1, rng));
    }
    if composition.lowercase {
        letters.extend(pick_random(LOWER_CHARS, 1, rng));
    }
    letters
}

fn available_letters(composition: &Composition) -> Vec<u8> {
    let mut chars = Vec::with_capacity(UPPER_CHARS.len() + LOWER_CHARS.len());
    if composition.uppercase {
        chars.extend_from_slice(UPPER_CHARS);
    }
    if composition.lowercase {
        chars.extend_from_slice(LOWER_CHARS);
    }
    chars
}
