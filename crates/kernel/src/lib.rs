//! SPH Fluid Kernel
//!
//! Computational core of a weakly-compressible Smoothed Particle
//! Hydrodynamics solver. Everything here is pure and synchronous: the
//! functions read only their arguments and fixed constants, so they can be
//! called from any number of threads without locking.
//!
//! # Modules
//! - [`sph`] -- Cubic spline smoothing kernel and its gradient.
//! - [`eos`] -- Tait equation of state.
//! - [`particle`] -- Fluid particle record.
//! - [`sampler`] -- Discretized Gaussian velocity distribution.
//! - [`error`] -- Crate error type.
//!
//! Neighbor search and time integration are not part of this crate; an
//! integrator consumes [`kernel`], [`grad_kernel`] and [`pressure`] as pure
//! functions.

#![warn(missing_docs)]

pub mod eos;
pub mod error;
pub mod particle;
pub mod sampler;
pub mod sph;

pub use eos::{pressure, TaitEos};
pub use error::{Error, Result};
pub use particle::{Particle, DIM};
pub use sampler::VelocityDistribution;
pub use sph::{grad_kernel, kernel, CubicSpline, Dimension};
