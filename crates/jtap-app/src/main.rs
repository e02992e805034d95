//! JTAP console entry point.
//!
//! Starts the logger, loads the TOML config, builds the command registry
//! and the chain session, optionally attaches the configured default
//! cable, and hands control to the read-eval loop.

mod config;
mod repl;

use anyhow::Result;

use config::JtapConfig;
use jtap_chain::{Chain, open_cable};
use jtap_console::{CommandRegistry, register_builtins};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = JtapConfig::load()?;
    log::info!("Starting JTAP console");

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);

    let mut chain = Chain::new();
    if let Some(driver) = &config.default_cable {
        match open_cable(driver) {
            Ok(mut cable) => {
                cable.set_frequency(config.frequency);
                chain.attach_cable(cable);
            },
            // A broken default cable should not keep the console from
            // starting; the user can attach one interactively.
            Err(e) => log::warn!("default cable '{driver}': {e}"),
        }
    }

    repl::run(&registry, &mut chain, &config.prompt)?;
    Ok(())
}
