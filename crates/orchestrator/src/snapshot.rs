//! Per-frame CSV snapshots of particle positions and velocities
//!
//! Layout under the root directory:
//!
//! ```text
//! positions/<step>.csv    index,x,y
//! velocities/<step>.csv   index,vx,vy
//! ```
//!
//! Step numbers are zero-padded to the digit count of the last step
//! (`frame_count - 1`), so lexicographic file order matches numeric order.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use sph_kernel::DIM;

use crate::domain::Simulation;
use crate::error::Result;

/// Directory holding position snapshots
pub const POSITIONS_DIR: &str = "positions";

/// Directory holding velocity snapshots
pub const VELOCITIES_DIR: &str = "velocities";

/// Number of decimal digits in `last_step` (at least 1)
pub fn pad_width(last_step: u64) -> usize {
    let mut digits = 1;
    let mut n = last_step / 10;
    while n > 0 {
        digits += 1;
        n /= 10;
    }
    digits
}

/// Files written for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFiles {
    /// Position CSV
    pub positions: PathBuf,
    /// Velocity CSV
    pub velocities: PathBuf,
}

/// Writes numbered CSV snapshots below a root directory
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    root: PathBuf,
    pad_width: usize,
}

impl SnapshotWriter {
    /// Writer for a run producing `frame_count` frames, steps `0..frame_count`
    pub fn new(root: impl Into<PathBuf>, frame_count: u64) -> Self {
        Self {
            root: root.into(),
            pad_width: pad_width(frame_count.saturating_sub(1)),
        }
    }

    /// Root output directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Zero-padded file stem for a step
    pub fn frame_name(&self, step: u64) -> String {
        format!("{:0width$}", step, width = self.pad_width)
    }

    /// Write positions and velocities of `sim` as frame `step`
    ///
    /// Creates the output directories when missing and overwrites existing
    /// files for the same step.
    pub fn write(&self, step: u64, sim: &Simulation) -> Result<SnapshotFiles> {
        let file_name = format!("{}.csv", self.frame_name(step));

        let positions_dir = self.root.join(POSITIONS_DIR);
        let velocities_dir = self.root.join(VELOCITIES_DIR);
        fs::create_dir_all(&positions_dir)?;
        fs::create_dir_all(&velocities_dir)?;

        let positions = positions_dir.join(&file_name);
        write_rows(&positions, sim.positions())?;

        let velocities = velocities_dir.join(&file_name);
        write_rows(&velocities, sim.velocities())?;

        tracing::info!(
            "Snapshot {} written: {} particles to {}",
            step,
            sim.len(),
            self.root.display()
        );

        Ok(SnapshotFiles {
            positions,
            velocities,
        })
    }
}

/// One `index,a,b` row per vector
fn write_rows<'a>(path: &Path, rows: impl Iterator<Item = &'a [f64; DIM]>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for (i, v) in rows.enumerate() {
        writeln!(out, "{},{},{}", i, v[0], v[1])?;
    }
    out.flush()?;
    Ok(())
}
