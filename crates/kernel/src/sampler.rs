//! Discretized Gaussian velocity distribution.
//!
//! Approximates a normal distribution without an inverse CDF: candidate
//! values are laid out evenly over `mean +/- 4 stdev`, weighted by the
//! unnormalized Gaussian density, and the weights are normalized into a
//! probability mass function that is sampled with a weighted index.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::error::{Error, Result};

/// Default number of candidate values.
pub const DEFAULT_CANDIDATES: usize = 1000;

/// Half-width of the candidate span in standard deviations.
pub const SPAN_STDEVS: f64 = 4.0;

/// Reusable empirical distribution over one velocity axis.
#[derive(Debug, Clone)]
pub struct VelocityDistribution {
    values: Vec<f64>,
    probabilities: Vec<f64>,
    /// `None` for the point-mass case.
    index: Option<WeightedIndex<f64>>,
}

impl VelocityDistribution {
    /// Distribution with [`DEFAULT_CANDIDATES`] candidates.
    pub fn gaussian(mean: f64, stdev: f64) -> Result<Self> {
        Self::with_resolution(mean, stdev, DEFAULT_CANDIDATES)
    }

    /// Distribution with an explicit number of candidates.
    ///
    /// A zero `stdev` collapses to a point mass at `mean`.
    ///
    /// Errors:
    /// - `Error::InvalidArgument` if `mean` is not finite, `stdev` is negative or
    ///   not finite, `mean +/- 4 stdev` overflows, or fewer than two candidates
    ///   are requested.
    /// - `Error::Sampling` if the weights cannot back a weighted index.
    pub fn with_resolution(mean: f64, stdev: f64, candidates: usize) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "mean velocity must be finite, got {mean}"
            )));
        }
        if !stdev.is_finite() || stdev < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "velocity standard deviation must be finite and >= 0, got {stdev}"
            )));
        }

        if stdev == 0.0 {
            tracing::debug!("zero velocity spread, sampling collapses to {mean}");
            return Ok(Self {
                values: vec![mean],
                probabilities: vec![1.0],
                index: None,
            });
        }

        if candidates < 2 {
            return Err(Error::InvalidArgument(format!(
                "need at least 2 candidate velocities, got {candidates}"
            )));
        }

        let lo = mean - SPAN_STDEVS * stdev;
        let hi = mean + SPAN_STDEVS * stdev;
        if !lo.is_finite() || !hi.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "velocity span [{lo}, {hi}] overflows for mean {mean}, stdev {stdev}"
            )));
        }

        // Grid in standard scores so the weights do not depend on the scale
        // of `stdev`.
        let step = 2.0 * SPAN_STDEVS / (candidates - 1) as f64;
        let scores: Vec<f64> = (0..candidates)
            .map(|i| -SPAN_STDEVS + step * i as f64)
            .collect();
        let values: Vec<f64> = scores.iter().map(|z| mean + z * stdev).collect();

        let mut probabilities: Vec<f64> = scores.iter().map(|z| (-0.5 * z * z).exp()).collect();
        let norm: f64 = probabilities.iter().sum();
        if !norm.is_finite() || norm <= 0.0 {
            return Err(Error::Domain(format!(
                "Gaussian weights do not normalize (sum = {norm})"
            )));
        }
        for p in &mut probabilities {
            *p /= norm;
        }

        let index = WeightedIndex::new(&probabilities)
            .map_err(|e| Error::Sampling(e.to_string()))?;

        tracing::debug!(
            "velocity distribution: {} candidates over [{lo:.4}, {hi:.4}]",
            candidates
        );

        Ok(Self {
            values,
            probabilities,
            index: Some(index),
        })
    }

    /// Candidate velocities in ascending order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Probability of each candidate; sums to one.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Draw one velocity component.
    ///
    /// A point-mass distribution returns its value without consuming randomness.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.index {
            Some(index) => self.values[index.sample(rng)],
            None => self.values[0],
        }
    }
}
