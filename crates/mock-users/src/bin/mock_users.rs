//! Writes a batch of mock users for `mongoimport`.
//!
//! Settings come from CLI flags, `MOCK_USERS_*` environment variables and
//! config files; with none supplied, twenty users are written to
//! `20_users_for_mongodb.json`.

use std::env;
use std::io;
use std::process::ExitCode;

use mock_users::{GeneratorSettings, run};
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = match GeneratorSettings::load_from_iter(env::args_os()) {
        Ok(settings) => settings,
        Err(err) => {
            error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    match run(&settings) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "mock user generation failed");
            ExitCode::FAILURE
        }
    }
}
