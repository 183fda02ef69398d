//! Primitive mode viewer
//!
//! One hand-placed star outline at a time. Keys 1-5 pick the outline,
//! Space cycles, Escape exits.

use std::process::ExitCode;

use starlab::app::{init_logging, load_config};
use starlab::demo::ModesDemo;

fn main() -> ExitCode {
    let (config, config_error) = load_config();
    init_logging(&config);
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let demo = ModesDemo::from_config(&config.rendering);
    match starlab::run(config, demo) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
