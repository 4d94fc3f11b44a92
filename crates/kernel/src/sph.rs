//! SPH smoothing kernel functions.
//!
//! Implements the cubic spline kernel with compact support `h` and its
//! gradient. Two entry points share the same piecewise shape:
//!
//! - [`kernel`] / [`grad_kernel`] use the fixed coefficients `8/pi` and
//!   `16/pi` with no `h^d` scaling.
//! - [`CubicSpline`] applies the normalization for an explicit [`Dimension`],
//!   so the kernel integrates to one over its support.
//!
//! Both are generic over the vector dimension `D` of the separation.

use std::f64::consts::PI;

use crate::error::{Error, Result};

/// Coefficient of the fixed-normalization kernel (`C1 = 8/pi`).
pub const KERNEL_COEFF_INNER: f64 = 8.0 / PI;

/// Coefficient of the outer kernel branch (`C2 = 16/pi`).
pub const KERNEL_COEFF_OUTER: f64 = 16.0 / PI;

/// Coefficient of the inner gradient branch (`C3 = 8/pi`).
pub const GRADIENT_COEFF_INNER: f64 = 8.0 / PI;

/// Coefficient of the outer gradient branch (`C4 = -48/pi`).
pub const GRADIENT_COEFF_OUTER: f64 = -48.0 / PI;

/// Separations shorter than this fraction of `h` are treated as coincident.
const MIN_SEPARATION_RATIO: f64 = 1.0e-12;

/// Spatial dimension used to pick the kernel normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Planar simulation, `sigma = 40 / (7 pi)`.
    Two,
    /// Volumetric simulation, `sigma = 8 / pi`.
    Three,
}

impl Dimension {
    /// Number of spatial axes.
    pub fn axes(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }

    /// Normalization constant for a kernel with unit support radius.
    pub fn sigma(self) -> f64 {
        match self {
            Dimension::Two => 40.0 / (7.0 * PI),
            Dimension::Three => 8.0 / PI,
        }
    }
}

// ---------------------------------------------------------------------------
// Shared piecewise shape
// ---------------------------------------------------------------------------

/// Unnormalized cubic spline shape `f(q)`.
///
/// ```text
/// f(q) = 1 - 6q^2 + 6q^3     0 <= q <= 1/2
/// f(q) = 2 (1 - q)^3         1/2 < q <= 1
/// f(q) = 0                   q > 1
/// ```
#[inline]
fn shape(q: f64) -> f64 {
    if (0.0..=0.5).contains(&q) {
        1.0 - 6.0 * q * q + 6.0 * q * q * q
    } else if q > 0.5 && q <= 1.0 {
        let t = 1.0 - q;
        2.0 * t * t * t
    } else {
        0.0
    }
}

/// Analytic derivative `df/dq` of [`shape`].
///
/// ```text
/// f'(q) = -12q + 18q^2       0 <= q <= 1/2
/// f'(q) = -6 (1 - q)^2       1/2 < q <= 1
/// f'(q) = 0                  q > 1
/// ```
#[inline]
fn shape_derivative(q: f64) -> f64 {
    if (0.0..=0.5).contains(&q) {
        -12.0 * q + 18.0 * q * q
    } else if q > 0.5 && q <= 1.0 {
        let t = 1.0 - q;
        -6.0 * t * t
    } else {
        0.0
    }
}

/// Euclidean norm of a separation vector.
#[inline]
pub fn norm<const D: usize>(v: &[f64; D]) -> f64 {
    v.iter().map(|c| c * c).sum::<f64>().sqrt()
}

/// Gradient vector `scale * f'(q) * r_hat`, or zero for coincident points and
/// separations outside the support.
#[inline]
fn directional<const D: usize>(separation: &[f64; D], h: f64, scale: f64) -> [f64; D] {
    let r = norm(separation);
    let q = r / h;
    if q > 1.0 || r < MIN_SEPARATION_RATIO * h {
        return [0.0; D];
    }
    let magnitude = scale * shape_derivative(q) / r;
    let mut grad = [0.0; D];
    for (g, s) in grad.iter_mut().zip(separation) {
        *g = magnitude * s;
    }
    grad
}

// ---------------------------------------------------------------------------
// Fixed-coefficient kernel
// ---------------------------------------------------------------------------

/// Cubic spline kernel with the fixed coefficients `C1 = 8/pi`, `C2 = 16/pi`.
///
/// ```text
/// q = |r| / h
/// W = C1 (1 - 6q^2 + 6q^3)   0 <= q <= 1/2
/// W = C2 (1 - q)^3           1/2 < q <= 1
/// W = 0                      q > 1
/// ```
///
/// # Arguments
/// * `separation` - Displacement between the two sample points.
/// * `h` - Compact support radius (must be > 0).
///
/// `h` is only checked in debug builds. In release builds a non-positive or
/// NaN `h` yields `0.0`; use [`CubicSpline::new`] when `h` needs validation.
pub fn kernel<const D: usize>(separation: &[f64; D], h: f64) -> f64 {
    debug_assert!(h > 0.0, "support radius must be positive");
    KERNEL_COEFF_INNER * shape(norm(separation) / h)
}

/// Gradient of [`kernel`] with respect to the separation.
///
/// ```text
/// grad W = C3 (-12q + 18q^2) r_hat / h   0 <= q <= 1/2
/// grad W = C4 (1 - q)^2 r_hat / h        1/2 < q <= 1
/// grad W = 0                             q > 1
/// ```
///
/// `r_hat` is the unit vector along `separation`. Since `dW/dq <= 0` on the
/// support, the gradient points against the separation. Coincident points
/// (zero separation) return the zero vector: a particle exerts no force on
/// itself.
///
/// As with [`kernel`], `h > 0` is a debug-only check; a non-positive or NaN
/// `h` yields the zero vector in release builds.
pub fn grad_kernel<const D: usize>(separation: &[f64; D], h: f64) -> [f64; D] {
    debug_assert!(h > 0.0, "support radius must be positive");
    directional(separation, h, GRADIENT_COEFF_INNER / h)
}

// ---------------------------------------------------------------------------
// Dimension-normalized kernel
// ---------------------------------------------------------------------------

/// Cubic spline kernel normalized for a given spatial dimension.
///
/// ```text
/// W(r, h)      = sigma_d / h^d * f(q)
/// grad W(r, h) = sigma_d / h^(d+1) * f'(q) * r_hat
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSpline {
    h: f64,
    dimension: Dimension,
    normalization: f64,
}

impl CubicSpline {
    /// Create a kernel with support radius `h` in the given dimension.
    ///
    /// Errors:
    /// - `Error::InvalidArgument` if `h` is not finite and positive.
    pub fn new(h: f64, dimension: Dimension) -> Result<Self> {
        if !h.is_finite() || h <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "support radius must be finite and > 0, got {h}"
            )));
        }
        let normalization = dimension.sigma() / h.powi(dimension.axes() as i32);
        Ok(Self {
            h,
            dimension,
            normalization,
        })
    }

    /// Support radius.
    pub fn support_radius(&self) -> f64 {
        self.h
    }

    /// Dimension the normalization was chosen for.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// `sigma_d / h^d`, the kernel value scale.
    pub fn normalization(&self) -> f64 {
        self.normalization
    }

    /// Kernel weight for a separation vector.
    ///
    /// `D` must equal `self.dimension().axes()`. This is asserted in debug
    /// builds only; a mismatch in release applies the `h^d` scaling of the
    /// configured dimension regardless of `D`.
    pub fn value<const D: usize>(&self, separation: &[f64; D]) -> f64 {
        debug_assert_eq!(D, self.dimension.axes(), "separation dimension mismatch");
        self.normalization * shape(norm(separation) / self.h)
    }

    /// Kernel weight at a scalar distance.
    pub fn value_at(&self, r: f64) -> f64 {
        self.normalization * shape(r / self.h)
    }

    /// Kernel gradient for a separation vector.
    ///
    /// Same dimension precondition as [`CubicSpline::value`].
    pub fn gradient<const D: usize>(&self, separation: &[f64; D]) -> [f64; D] {
        debug_assert_eq!(D, self.dimension.axes(), "separation dimension mismatch");
        directional(separation, self.h, self.normalization / self.h)
    }
}
