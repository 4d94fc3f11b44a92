//! Orchestration Layer
//!
//! This crate sets up SPH initial states around the pure `sph-kernel` crate:
//! - JSON configuration loading and validation
//! - Dam-break particle placement
//! - CSV snapshot output of particle positions and velocities
//!
//! Building a state never writes files; snapshot export is a separate,
//! opt-in call.

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error;
pub mod snapshot;

pub use config::{DamBreakConfig, OutputConfig};
pub use domain::Simulation;
pub use error::{Error, Result};
pub use snapshot::{SnapshotFiles, SnapshotWriter};

use std::path::Path;

/// Create a dam-break initial state from a configuration file
///
/// This function performs the setup pipeline:
/// 1. Load and validate the configuration
/// 2. Place particles under the dam-break condition
///
/// # Arguments
/// * `config_path` - Path to the JSON configuration file
///
/// # Returns
/// The loaded configuration together with the populated state
///
/// # Example
/// ```no_run
/// use orchestrator::{create_simulation, export_initial_state};
///
/// let (config, sim) = create_simulation("configs/dam-break.json")?;
/// println!("{} particles", sim.len());
/// export_initial_state(&config, &sim)?;
/// # Ok::<(), orchestrator::Error>(())
/// ```
pub fn create_simulation(config_path: impl AsRef<Path>) -> Result<(DamBreakConfig, Simulation)> {
    let config_path = config_path.as_ref();
    tracing::info!("Creating simulation from config: {}", config_path.display());

    let config = DamBreakConfig::load(config_path)?;
    tracing::info!("Configuration loaded: {}", config.name);

    let sim = Simulation::dam_break(&config)?;
    Ok((config, sim))
}

/// Write `sim` as frame 0 when the configuration enables output
///
/// Returns `None` when `config.output` is absent.
pub fn export_initial_state(config: &DamBreakConfig, sim: &Simulation) -> Result<Option<SnapshotFiles>> {
    let Some(output) = &config.output else {
        return Ok(None);
    };
    let writer = SnapshotWriter::new(&output.directory, output.frame_count);
    writer.write(0, sim).map(Some)
}
