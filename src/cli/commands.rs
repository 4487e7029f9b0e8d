// src/cli/commands.rs
use clap::Subcommand;

use crate::core::Config;
use crate::models::{Field, PasswordOptions};

/// Password options as typed on the command line.
///
/// Values stay as raw text so that badly typed input reaches the validator
/// and is reported alongside every other problem.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Total password length
    #[arg(long, short = 'l', allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Include uppercase letters (true/false)
    #[arg(long, short = 'u')]
    pub uppercase: Option<String>,

    /// Include lowercase letters (true/false)
    #[arg(long, short = 'w')]
    pub lowercase: Option<String>,

    /// Number of digits
    #[arg(long, short = 'n', allow_hyphen_values = true)]
    pub number: Option<String>,

    /// Number of special characters
    #[arg(long, short = 's', allow_hyphen_values = true)]
    pub special: Option<String>,
}

impl OptionArgs {
    // Flags not given on the command line fall back to the configured defaults
    pub fn to_options(&self, config: &Config) -> PasswordOptions {
        let length = match (&self.length, config.default_password_length) {
            (Some(raw), _) => Field::parse(raw),
            (None, Some(length)) => Field::Value(length),
            (None, None) => Field::Missing,
        };

        PasswordOptions {
            length,
            uppercase: parse_or(self.uppercase.as_deref(), true),
            lowercase: parse_or(self.lowercase.as_deref(), true),
            number: parse_or(self.number.as_deref(), config.default_number_count),
            special: parse_or(self.special.as_deref(), config.default_special_count),
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> Field<T> {
    raw.map_or(Field::Value(default), Field::parse)
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        #[command(flatten)]
        options: OptionArgs,

        /// How many passwords to generate
        #[arg(long, short = 'c', default_value_t = 1)]
        count: usize,
    },

    /// Check password options without generating anything
    Validate {
        #[command(flatten)]
        options: OptionArgs,
    },

    /// Read options as a JSON object and answer in JSON
    Json {
        /// JSON options; read from stdin when omitted
        input: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    #[test]
    fn absent_flags_use_defaults() {
        let options = OptionArgs::default().to_options(&Config::default());
        assert_eq!(options, PasswordOptions::default());
    }

    #[test]
    fn configured_length_fills_in() {
        let config = Config {
            default_password_length: Some(16),
            default_number_count: 4,
            ..Config::default()
        };
        let options = OptionArgs::default().to_options(&config);
        assert_eq!(options, PasswordOptions::new(16).with_number(4));
    }

    #[test]
    fn raw_text_is_kept_for_validation() {
        let args = Args::parse_from([
            "passforge", "generate", "--length", "eight", "--uppercase", "yes", "--number", "-2",
        ]);
        let CliCommand::Generate { options, count } = args.command else {
            panic!("expected generate");
        };
        assert_eq!(count, 1);

        let options = options.to_options(&Config::default());
        assert_eq!(options.length, Field::Invalid("eight".into()));
        assert_eq!(options.uppercase, Field::Invalid("yes".into()));
        assert_eq!(options.number, Field::Value(-2));
    }

    #[test]
    fn json_flag_is_global() {
        let args = Args::parse_from(["passforge", "validate", "-l", "12", "--json"]);
        assert!(args.json);
        assert!(matches!(args.command, CliCommand::Validate { .. }));
    }
}
