//! Check command implementation
//!
//! Validates the configuration and prints the effective run parameters.

use tracing::info;

use crate::commands::run::Mode;
use crate::config::{AnimationConfig, RunOverrides};
use crate::Result;

/// Run the check command
pub fn run(config: &AnimationConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;

    println!("pi_reference = {}", config.pi_reference);
    match config.seed {
        Some(seed) => println!("seed         = {}", seed),
        None => println!("seed         = (entropy)"),
    }
    println!("log_level    = {}", config.log_level);

    for mode in [Mode::Pseudo, Mode::Quasi, Mode::Compare] {
        let simulation = mode.simulation(config, &RunOverrides::default())?;
        if mode != Mode::Pseudo {
            simulation.quasi_source()?;
        }
        println!(
            "{:<8} n_points={:<8} frames={:<6} sobol_order={:?}",
            format!("{:?}", mode).to_lowercase(),
            simulation.n_points(),
            simulation.frame_count(),
            simulation.sobol_order()
        );
    }

    info!("Configuration OK");
    Ok(())
}
