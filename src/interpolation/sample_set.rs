//! Validated sample data.
//!
//! A [`SampleSet`] is the only way sample points enter the algorithms.
//! Construction sorts by ascending `x` and rejects anything that would
//! make the interpolation formulas divide by zero or propagate NaN:
//! - fewer than 2 points
//! - a repeated `x`
//! - a non-finite coordinate
//! - an `x` span too wide for `f64`, which would overflow `x_i - x_j`
//!
//! The set is immutable once built; every table and estimate is derived
//! from it.


use crate::interpolation::errors::InvalidSampleSetError;


/// A single sample `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}


/// Sorted samples with strictly increasing, finite `x`.
///
/// # Invariants
/// - `len() >= 2`
/// - `x[i] < x[i + 1]` for all `i`
/// - every coordinate is finite
/// - `x_max - x_min` is finite, so every difference of two `x` is too
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[allow(clippy::len_without_is_empty)]
impl SampleSet {
    /// Builds a set from raw `(x, y)` pairs in any order.
    ///
    /// # Errors
    /// - [`InvalidSampleSetError::InsufficientPoints`] for fewer than 2 pairs
    /// - [`InvalidSampleSetError::NonFinite`] with the index of the offending pair
    /// - [`InvalidSampleSetError::DuplicateX`] if two pairs share an `x`
    /// - [`InvalidSampleSetError::UnboundedSpan`] if `x_max - x_min` overflows
    pub fn new(raw: &[(f64, f64)]) -> Result<Self, InvalidSampleSetError> {
        Self::from_points(raw.iter().copied().map(Point::from).collect())
    }

    /// Builds a set from parallel `x` and `y` columns.
    pub fn from_xy(x: &[f64], y: &[f64]) -> Result<Self, InvalidSampleSetError> {
        if x.len() != y.len() {
            return Err(InvalidSampleSetError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        Self::from_points(x.iter().zip(y).map(|(&x, &y)| Point::new(x, y)).collect())
    }

    pub fn from_points(mut points: Vec<Point>) -> Result<Self, InvalidSampleSetError> {
        if points.len() < 2 {
            return Err(InvalidSampleSetError::InsufficientPoints { got: points.len() });
        }
        if let Some(idx) = points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(InvalidSampleSetError::NonFinite { idx });
        }

        // finite, so total_cmp agrees with the numeric order
        points.sort_by(|a, b| a.x.total_cmp(&b.x));

        if let Some(w) = points.windows(2).find(|w| w[0].x == w[1].x) {
            return Err(InvalidSampleSetError::DuplicateX { x: w[0].x });
        }

        let (x_min, x_max) = (points[0].x, points[points.len() - 1].x);
        if !(x_max - x_min).is_finite() {
            return Err(InvalidSampleSetError::UnboundedSpan { x_min, x_max });
        }

        let (x, y) = points.into_iter().map(|p| (p.x, p.y)).unzip();
        Ok(Self { x, y })
    }

    // getters
    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn x_min(&self) -> f64 { self.x[0] }
    pub fn x_max(&self) -> f64 { self.x[self.x.len() - 1] }

    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Point::new(x, y))
    }
}
