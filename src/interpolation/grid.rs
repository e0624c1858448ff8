//! Dense evaluation grids for plotting.
//!
//! [`GridCfg`] defaults to [`DEFAULT_GRID_POINTS`] points spanning the
//! sampled range; an explicit range may extend past it, in which case
//! the outer points are extrapolated.


use crate::interpolation::errors::InterpolationError;
use crate::interpolation::sample_set::SampleSet;

pub const DEFAULT_GRID_POINTS: usize = 50;


/// `n` evenly spaced points from `start` to `end` inclusive.
///
/// # Errors
/// - [`InterpolationError::InvalidGridSize`] if `n == 0`
/// - [`InterpolationError::InvalidGridRange`] if either end is non-finite
///   or `start > end`
pub fn linspace(start: f64, end: f64, n: usize) -> Result<Vec<f64>, InterpolationError> {
    if n == 0 {
        return Err(InterpolationError::InvalidGridSize { got: n });
    }
    if !start.is_finite() || !end.is_finite() || start > end {
        return Err(InterpolationError::InvalidGridRange { start, end });
    }
    if n == 1 {
        return Ok(vec![start]);
    }

    let span = end - start;
    let last = (n - 1) as f64;
    let mut xs: Vec<f64> = (0..n).map(|i| start + span * (i as f64 / last)).collect();
    // pin the endpoint against rounding
    xs[n - 1] = end;
    Ok(xs)
}


/// Grid configuration 
/// 
/// # Fields 
/// - `range`    : explicit `[start, end]`, or `None` for the sampled range 
/// - `n_points` : number of grid points; [`DEFAULT_GRID_POINTS`] by default 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCfg {
    range   : Option<(f64, f64)>,
    n_points: usize,
}

impl GridCfg {
    pub fn new() -> Self {
        Self { range: None, n_points: DEFAULT_GRID_POINTS }
    }

    pub fn set_range(mut self, start: f64, end: f64) -> Result<Self, InterpolationError> {
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(InterpolationError::InvalidGridRange { start, end });
        }
        self.range = Some((start, end));
        Ok(self)
    }

    pub fn set_n_points(mut self, n: usize) -> Result<Self, InterpolationError> {
        if n == 0 {
            return Err(InterpolationError::InvalidGridSize { got: n });
        }
        self.n_points = n;
        Ok(self)
    }

    // getters
    pub fn range(&self) -> Option<(f64, f64)> { self.range }
    pub fn n_points(&self) -> usize { self.n_points }

    /// Grid abscissae for `samples`.
    pub fn resolve(&self, samples: &SampleSet) -> Result<Vec<f64>, InterpolationError> {
        let (start, end) = self.range.unwrap_or((samples.x_min(), samples.x_max()));
        linspace(start, end, self.n_points)
    }
}

impl Default for GridCfg {
    fn default() -> Self {
        Self::new()
    }
}
