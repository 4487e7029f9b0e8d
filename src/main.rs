use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use passforge::cli::{handlers, Args, CliCommand};
use passforge::core::Config;

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::load();

    // Results go to stdout, so logs stay on stderr
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("Loaded config: {:?}", config);

    let mut rng: Box<dyn RngCore> = match config.rng_seed {
        Some(seed) => {
            log::info!("Using seeded random source; output is reproducible");
            Box::new(ChaCha20Rng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let success = match args.command {
        CliCommand::Generate { options, count } => {
            let options = options.to_options(&config);
            handlers::handle_generate(options, count, args.json, rng.as_mut(), &mut out, &mut err)?
        }
        CliCommand::Validate { options } => {
            let options = options.to_options(&config);
            handlers::handle_validate(&options, args.json, &mut out, &mut err)?
        }
        CliCommand::Json { input } => {
            let input = match input {
                Some(input) => input,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read options from stdin")?;
                    buf
                }
            };
            handlers::handle_json(&input, rng.as_mut(), &mut out)?
        }
    };

    Ok(if success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
