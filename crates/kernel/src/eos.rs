//! Tait (stiffened) equation of state for weakly-compressible SPH.
//!
//! ```text
//! P = K0 / K0' * ((rho / rho0)^K0' - 1) + P0
//! ```
//!
//! Small density deviations from `rho0` produce large restoring pressures,
//! which is how WCSPH approximates incompressibility.
//! All units are SI: kg/m^3 and Pascals.

use crate::error::{Error, Result};

/// Bulk modulus of water, K0 (Pa).
pub const WATER_BULK_MODULUS: f64 = 2.15e9;

/// Tait exponent of water, K0' (dimensionless).
pub const WATER_TAIT_EXPONENT: f64 = 7.15;

/// Reference density of water, rho0 (kg/m^3).
pub const WATER_REFERENCE_DENSITY: f64 = 1000.0;

/// Atmospheric reference pressure, P0 (Pa).
pub const ATMOSPHERIC_PRESSURE: f64 = 101_325.0;

/// Parameters of the Tait relation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaitEos {
    /// Bulk modulus K0 (Pa).
    pub bulk_modulus: f64,
    /// Tait exponent K0'.
    pub exponent: f64,
    /// Reference density rho0 (kg/m^3).
    pub reference_density: f64,
    /// Pressure at the reference density, P0 (Pa).
    pub reference_pressure: f64,
}

impl Default for TaitEos {
    fn default() -> Self {
        Self {
            bulk_modulus: WATER_BULK_MODULUS,
            exponent: WATER_TAIT_EXPONENT,
            reference_density: WATER_REFERENCE_DENSITY,
            reference_pressure: ATMOSPHERIC_PRESSURE,
        }
    }
}

impl TaitEos {
    /// Build a validated parameter set.
    ///
    /// Errors:
    /// - `Error::InvalidArgument` if any parameter is non-finite, or if the bulk
    ///   modulus, exponent or reference density is not positive.
    pub fn new(
        bulk_modulus: f64,
        exponent: f64,
        reference_density: f64,
        reference_pressure: f64,
    ) -> Result<Self> {
        let eos = Self {
            bulk_modulus,
            exponent,
            reference_density,
            reference_pressure,
        };
        eos.validate()?;
        Ok(eos)
    }

    /// Check the parameter invariants.
    pub fn validate(&self) -> Result<()> {
        if !self.bulk_modulus.is_finite() || self.bulk_modulus <= 0.0 {
            return Err(Error::InvalidArgument(
                "bulk modulus must be finite and > 0".into(),
            ));
        }
        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(Error::InvalidArgument(
                "Tait exponent must be finite and > 0".into(),
            ));
        }
        if !self.reference_density.is_finite() || self.reference_density <= 0.0 {
            return Err(Error::InvalidArgument(
                "reference density must be finite and > 0".into(),
            ));
        }
        if !self.reference_pressure.is_finite() {
            return Err(Error::InvalidArgument(
                "reference pressure must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Pressure for a given density.
    ///
    /// Returns exactly `reference_pressure` at `reference_density` and is
    /// strictly increasing in density.
    ///
    /// Errors:
    /// - `Error::InvalidArgument` if `density` is negative or not finite.
    pub fn pressure(&self, density: f64) -> Result<f64> {
        if !density.is_finite() || density < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "density must be finite and >= 0, got {density}"
            )));
        }
        let ratio = density / self.reference_density;
        Ok(self.bulk_modulus / self.exponent * (ratio.powf(self.exponent) - 1.0)
            + self.reference_pressure)
    }
}

/// Tait pressure for water at the given density.
///
/// Shorthand for `TaitEos::default().pressure(density)`.
pub fn pressure(density: f64) -> Result<f64> {
    TaitEos::default().pressure(density)
}
