//! # smarthome — device model runner
//!
//! Composition root that wires configuration, logging and the application
//! service together.
//!
//! ## Usage
//! ```text
//! smarthome light.turn_on thermostat.set_temperature=72 door_lock.unlock
//! ```
//!
//! Every argument is a service call. The whole script is validated before
//! any call is applied; the final state of the home is printed to stdout.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod output;

use smarthome_app::services::home_service::HomeService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    let calls: Vec<String> = std::env::args().skip(1).collect();
    tracing::debug!(?calls, format = ?config.output.format, "starting smarthome");

    let mut service = HomeService::new();
    let home = service.run(&calls)?;

    println!("{}", output::render(home, config.output.format)?);
    Ok(())
}
