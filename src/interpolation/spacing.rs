//! Equal-spacing test.
//!
//! Decides whether the Newton finite-difference formulas apply. Each
//! consecutive gap is compared to the first gap `h = x[1] - x[0]` with
//!
//! ```text
//! |gap - h| <= abs + rel * |h|
//! ```
//!
//! Floating-point sample generation (e.g. `linspace`) rarely produces
//! bit-identical gaps, so exact comparison is never used.


use crate::interpolation::errors::InterpolationError;
use crate::interpolation::sample_set::SampleSet;

pub const DEFAULT_SPACING_ABS_TOL: f64 = 1e-8;
pub const DEFAULT_SPACING_REL_TOL: f64 = 1e-5;


/// Absolute / relative tolerance for gap comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingTol {
    abs: f64,
    rel: f64,
}

impl SpacingTol {
    /// # Errors
    /// - [`InterpolationError::InvalidSpacingTol`] if either value is negative
    ///   or non-finite, or both are zero.
    pub fn new(abs: f64, rel: f64) -> Result<Self, InterpolationError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(abs) || !valid(rel) || (abs == 0.0 && rel == 0.0) {
            return Err(InterpolationError::InvalidSpacingTol { abs, rel });
        }
        Ok(Self { abs, rel })
    }

    pub fn abs(&self) -> f64 { self.abs }
    pub fn rel(&self) -> f64 { self.rel }

    #[inline]
    fn close(&self, gap: f64, h: f64) -> bool {
        (gap - h).abs() <= self.abs + self.rel * h.abs()
    }
}

impl Default for SpacingTol {
    fn default() -> Self {
        Self { abs: DEFAULT_SPACING_ABS_TOL, rel: DEFAULT_SPACING_REL_TOL }
    }
}


/// `true` iff every gap in `set.x()` matches the first within `tol`.
pub fn is_equally_spaced(set: &SampleSet, tol: SpacingTol) -> bool {
    first_irregular_gap(set, tol).is_none()
}

/// Same test as [`is_equally_spaced`], reporting the first offending gap.
///
/// # Errors
/// - [`InterpolationError::IrregularSpacing`] with the index `i` of the gap
///   `x[i + 1] - x[i]` that differs from the step.
pub fn require_equally_spaced(set: &SampleSet, tol: SpacingTol) -> Result<(), InterpolationError> {
    match first_irregular_gap(set, tol) {
        None             => Ok(()),
        Some((idx, gap)) => Err(InterpolationError::IrregularSpacing {
            idx,
            gap,
            h: set.x()[1] - set.x()[0],
        }),
    }
}

fn first_irregular_gap(set: &SampleSet, tol: SpacingTol) -> Option<(usize, f64)> {
    let x = set.x();
    let h = x[1] - x[0];
    x.windows(2)
        .map(|w| w[1] - w[0])
        .enumerate()
        .find(|&(_, gap)| !tol.close(gap, h))
}
