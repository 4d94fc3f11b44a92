//! Domain setup: dam-break particle placement

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sph_kernel::{Particle, VelocityDistribution, DIM};

use crate::config::DamBreakConfig;
use crate::error::{Error, Result};

/// Initial particle state of a rectangular domain
///
/// Owns its particles exclusively. Insertion order is generation order and
/// carries no physical meaning.
#[derive(Debug, Clone)]
pub struct Simulation {
    width: f64,
    height: f64,
    number: usize,
    effective_radius: f64,
    rejected: usize,
    particles: Vec<Particle>,
}

/// Radius of a sphere holding `mass` at `density`
///
/// ```text
/// r = (3 m / (4 pi rho))^(1/3)
/// ```
pub fn effective_radius(mass: f64, density: f64) -> f64 {
    (3.0 * mass / (4.0 * PI * density)).cbrt()
}

/// Whether a position falls in the dry quadrant `x > width/2 AND y > height/2`
pub fn in_dry_region(position: &[f64; DIM], width: f64, height: f64) -> bool {
    position[0] > 0.5 * width && position[1] > 0.5 * height
}

impl Simulation {
    /// Populate a domain with a dam-break fluid column
    ///
    /// Uses `config.seed` when set, otherwise seeds from the OS.
    ///
    /// Each of the `config.number` slots draws a uniform position inside the
    /// wall margin. Slots landing in the dry quadrant are dropped rather than
    /// retried, so the realized particle count is at most `config.number` and
    /// usually below it; [`Simulation::rejected`] reports how many were
    /// dropped.
    ///
    /// Errors:
    /// - `Error::Config` if the configuration is invalid
    /// - `Error::Domain` if the effective radius exceeds half an extent
    /// - `Error::Entropy` if an unseeded run cannot reach the OS random source
    pub fn dam_break(config: &DamBreakConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::try_from_os_rng().map_err(|e| Error::Entropy(e.to_string()))?,
        };
        Self::dam_break_with_rng(config, &mut rng)
    }

    /// Populate a domain with a dam-break fluid column from a caller-supplied RNG
    ///
    /// Draw order per slot is `x`, `y`, then `vx`, `vy` for accepted slots.
    pub fn dam_break_with_rng<R: Rng + ?Sized>(config: &DamBreakConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let width = config.width();
        let height = config.height();
        let radius = effective_radius(config.mass, config.avg_density);

        // Placement range [r, L - r] per axis
        let mut ranges = [(0.0, 0.0); DIM];
        for (range, extent) in ranges.iter_mut().zip(config.dimensions) {
            if radius > 0.5 * extent {
                return Err(Error::Domain(format!(
                    "effective radius {radius:.6} exceeds half of extent {extent}; \
                     no valid particle positions in a {width} x {height} domain"
                )));
            }
            *range = (radius, extent - radius);
        }
        tracing::debug!(
            "effective radius {:.6}, placement x in [{:.6}, {:.6}], y in [{:.6}, {:.6}]",
            radius,
            ranges[0].0,
            ranges[0].1,
            ranges[1].0,
            ranges[1].1
        );

        let velocities = VelocityDistribution::gaussian(config.avg_velocity, config.std_velocity)?;

        let mut particles = Vec::with_capacity(config.number);
        let mut rejected = 0usize;
        for _ in 0..config.number {
            let mut position = [0.0_f64; DIM];
            for (p, &(lo, hi)) in position.iter_mut().zip(&ranges) {
                *p = rng.random_range(lo..=hi);
            }

            // Dam-break condition: the upper-right quadrant starts dry
            if in_dry_region(&position, width, height) {
                rejected += 1;
                continue;
            }

            let mut velocity = [0.0_f64; DIM];
            for v in velocity.iter_mut() {
                *v = velocities.sample(rng);
            }

            particles.push(Particle::new(config.mass, position, velocity)?);
        }

        tracing::info!(
            "Dam-break setup complete: {} particles placed, {} of {} slots fell in the dry region",
            particles.len(),
            rejected,
            config.number
        );
        if particles.is_empty() {
            tracing::warn!("Dam-break setup produced no particles");
        }

        Ok(Self {
            width,
            height,
            number: config.number,
            effective_radius: radius,
            rejected,
            particles,
        })
    }

    /// Domain width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Domain height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Requested particle count
    pub fn number(&self) -> usize {
        self.number
    }

    /// Wall margin used during placement
    pub fn effective_radius(&self) -> f64 {
        self.effective_radius
    }

    /// Slots dropped by the dry-region rule
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Realized particle count
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether no particle was placed
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particles in generation order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Borrowed view over particle positions
    pub fn positions(&self) -> impl ExactSizeIterator<Item = &[f64; DIM]> + '_ {
        self.particles.iter().map(|p| &p.position)
    }

    /// Borrowed view over particle velocities
    pub fn velocities(&self) -> impl ExactSizeIterator<Item = &[f64; DIM]> + '_ {
        self.particles.iter().map(|p| &p.velocity)
    }
}
