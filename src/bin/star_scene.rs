//! Star scene demo
//!
//! Five generated stars, one per topology plus two extras, on a dark green
//! background. Keys 1-4 or Space force a single topology on every star,
//! R redraws, Escape exits.

use std::process::ExitCode;

use starlab::app::{init_logging, load_config};
use starlab::demo::SceneDemo;

fn main() -> ExitCode {
    let (config, config_error) = load_config();
    init_logging(&config);
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let demo = SceneDemo::from_config(&config);
    match starlab::run(config, demo) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
