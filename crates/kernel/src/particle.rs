//! Fluid particle record.

use crate::error::{Error, Result};

/// Spatial dimension of particle state.
pub const DIM: usize = 2;

/// One fluid sample's mechanical state.
///
/// `density` and `pressure` start at zero. They are placeholders until a
/// density-estimation pass runs; the zero values carry no physical meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Mass represented by this sample (> 0, constant).
    pub mass: f64,
    /// Position (x, y).
    pub position: [f64; DIM],
    /// Velocity (vx, vy).
    pub velocity: [f64; DIM],
    /// Density (kg/m^3), zero until estimated.
    pub density: f64,
    /// Pressure (Pa), zero until computed from density.
    pub pressure: f64,
}

impl Particle {
    /// Create a particle with zeroed density and pressure.
    ///
    /// Errors:
    /// - `Error::InvalidArgument` if `mass` is not finite and positive, or any
    ///   position/velocity component is NaN/inf.
    pub fn new(mass: f64, position: [f64; DIM], velocity: [f64; DIM]) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidArgument("mass must be finite and > 0".into()));
        }
        if !position.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidArgument("position must be finite".into()));
        }
        if !velocity.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidArgument("velocity must be finite".into()));
        }
        Ok(Self {
            mass,
            position,
            velocity,
            density: 0.0,
            pressure: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_has_placeholder_state() -> Result<()> {
        let p = Particle::new(2.0, [1.0, 3.0], [-0.5, 0.25])?;
        assert_eq!(p.mass, 2.0);
        assert_eq!(p.position, [1.0, 3.0]);
        assert_eq!(p.velocity, [-0.5, 0.25]);
        assert_eq!(p.density, 0.0);
        assert_eq!(p.pressure, 0.0);
        Ok(())
    }

    #[test]
    fn non_positive_mass_rejected() {
        let err = Particle::new(0.0, [0.0, 0.0], [0.0, 0.0]).unwrap_err();
        assert!(err.to_string().contains("mass"));
        assert!(Particle::new(-1.0, [0.0, 0.0], [0.0, 0.0]).is_err());
    }

    #[test]
    fn non_finite_state_rejected() {
        assert!(Particle::new(1.0, [f64::NAN, 0.0], [0.0, 0.0]).is_err());
        assert!(Particle::new(1.0, [0.0, 0.0], [f64::INFINITY, 0.0]).is_err());
    }
}
