// src/cli/handlers.rs
use std::io::Write;

use anyhow::Context;
use rand::RngCore;

use crate::generators::{PasswordGenerator, Validator};
use crate::models::{GenerationResponse, PasswordOptions};

// Handlers for CLI commands. Each returns whether the request succeeded so
// the caller can pick the exit status.

pub fn handle_generate<W: Write, E: Write>(
    options: PasswordOptions,
    count: usize,
    json: bool,
    rng: &mut dyn RngCore,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<bool> {
    let generator = PasswordGenerator::new(options);

    if !generator.is_valid() {
        log::info!("Refusing to generate: {} validation error(s)", generator.errors().len());
        let result = generator.generate_with_rng(rng);
        if json {
            write_json(out, &GenerationResponse::from(result))?;
        } else {
            write_errors(err, generator.errors())?;
        }
        return Ok(false);
    }

    for _ in 0..count {
        let result = generator.generate_with_rng(rng);
        if json {
            write_json(out, &GenerationResponse::from(result))?;
        } else {
            let password = result?;
            writeln!(out, "{}", password)?;
        }
    }

    log::info!("Generated {} password(s)", count);
    Ok(true)
}

pub fn handle_validate<W: Write, E: Write>(
    options: &PasswordOptions,
    json: bool,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<bool> {
    let errors = Validator::new(options).validate();
    let valid = errors.is_empty();

    if json {
        let response = GenerationResponse {
            success: valid,
            password: None,
            error: (!valid).then_some(errors),
        };
        write_json(out, &response)?;
    } else if valid {
        writeln!(out, "Options are valid.")?;
    } else {
        write_errors(err, &errors)?;
    }

    Ok(valid)
}

/// Handle a JSON options document and answer with a JSON response.
///
/// Malformed JSON, or a document that isn't an object, is an error of the
/// request itself rather than a validation failure.
pub fn handle_json<W: Write>(input: &str, rng: &mut dyn RngCore, out: &mut W) -> anyhow::Result<bool> {
    let options: PasswordOptions =
        serde_json::from_str(input).context("Options must be a JSON object")?;

    let response = GenerationResponse::from(PasswordGenerator::new(options).generate_with_rng(rng));
    write_json(out, &response)?;

    Ok(response.success)
}

fn write_json<W: Write>(out: &mut W, response: &GenerationResponse) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    Ok(())
}

fn write_errors<E: Write>(err: &mut E, errors: &[String]) -> anyhow::Result<()> {
    for error in errors {
        writeln!(err, "{}", error)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::password::{NUMBER_CHARS, SPECIAL_CHARS};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use serde_json::Value;

    fn run_generate(options: PasswordOptions, count: usize, json: bool) -> (bool, String, String) {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = handle_generate(options, count, json, &mut rng, &mut out, &mut err).unwrap();
        (ok, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn generate_prints_one_password_per_line() {
        let (ok, out, err) = run_generate(PasswordOptions::new(12).with_number(3).with_special(2), 3, false);
        assert!(ok);
        assert!(err.is_empty());

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.len(), 12);
            assert_eq!(line.bytes().filter(|b| NUMBER_CHARS.contains(b)).count(), 3);
            assert_eq!(line.bytes().filter(|b| SPECIAL_CHARS.contains(b)).count(), 2);
        }
    }

    #[test]
    fn generate_reports_errors_on_stderr() {
        let (ok, out, err) = run_generate(PasswordOptions::new(-10), 1, false);
        assert!(!ok);
        assert!(out.is_empty());
        assert!(err.lines().any(|l| l == "Length must be a positive integer."));
    }

    #[test]
    fn generate_json_failure() {
        let options = PasswordOptions::new(8).with_uppercase(false).with_lowercase(false).with_number(1);
        let (ok, out, _) = run_generate(options, 1, true);
        assert!(!ok);

        let response: Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(response["success"], Value::Bool(false));
        assert!(response["error"]
            .as_array()
            .unwrap()
            .contains(&Value::from("At least one of uppercase or lowercase must be true.")));
        assert!(response.get("password").is_none());
    }

    #[test]
    fn validate_plain_and_json() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert!(handle_validate(&PasswordOptions::new(10), false, &mut out, &mut err).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "Options are valid.\n");

        let mut out = Vec::new();
        let mut err = Vec::new();
        assert!(!handle_validate(&PasswordOptions::new(2000), true, &mut out, &mut err).unwrap());
        let response: GenerationResponse = serde_json::from_slice(&out).unwrap();
        assert_eq!(response.error, Some(vec!["Length cannot exceed 1024 characters.".to_string()]));
        assert!(err.is_empty());
    }

    #[test]
    fn json_request_success() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut out = Vec::new();
        let ok = handle_json(r#"{"length": 16, "special": 4}"#, &mut rng, &mut out).unwrap();
        assert!(ok);

        let response: GenerationResponse = serde_json::from_slice(&out).unwrap();
        let password = response.password.unwrap();
        assert_eq!(password.len(), 16);
        assert_eq!(password.bytes().filter(|b| SPECIAL_CHARS.contains(b)).count(), 4);
    }

    #[test]
    fn json_request_with_missing_fields() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut out = Vec::new();
        let input = r#"{"length": null, "uppercase": null, "lowercase": null, "number": null, "special": null}"#;
        assert!(!handle_json(input, &mut rng, &mut out).unwrap());

        let response: GenerationResponse = serde_json::from_slice(&out).unwrap();
        let errors = response.error.unwrap();
        assert_eq!(
            &errors[..5],
            &[
                "Length must be provided.",
                "Uppercase must be provided.",
                "Lowercase must be provided.",
                "Number must be provided.",
                "Special must be provided.",
            ]
        );
    }

    #[test]
    fn json_request_must_be_an_object() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut out = Vec::new();
        assert!(handle_json("[12]", &mut rng, &mut out).is_err());
        assert!(handle_json("not json", &mut rng, &mut out).is_err());
        assert!(out.is_empty());
    }
}
