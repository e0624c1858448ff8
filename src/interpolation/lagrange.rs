//! Lagrange Interpolation 
//!
//! Evaluates the unique degree-`(n - 1)` polynomial through `n` samples 
//! directly from the [Lagrange basis](https://en.wikipedia.org/wiki/Lagrange_polynomial), 
//! without building a table: 
//!
//! ```text
//! P(xq) = Σ_i y_i · Π_{j≠i} (xq - x_j) / (x_i - x_j)
//! ```
//!
//! `O(n²)` per query. Queries outside `[x[0], x[n-1]]` extrapolate.


use crate::interpolation::algorithms::Algorithm; 
use crate::interpolation::config::{impl_common_cfg, CommonCfg}; 
use crate::interpolation::errors::InterpolationError; 
use crate::interpolation::report::InterpolationReport; 
use crate::interpolation::sample_set::SampleSet; 
use crate::interpolation::traits::Interpolator; 


/// Lagrange interpolation configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`]
///
/// # Construction 
/// - Use [`LagrangeCfg::new`] then setters. 
#[derive(Debug, Clone)] 
pub struct LagrangeCfg<'a> { 
    common: CommonCfg<'a>, 
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Evaluates the Lagrange polynomial through `set` at `x_query`.
pub fn evaluate(set: &SampleSet, x_query: f64) -> f64 { 
    let x = set.x(); 
    let y = set.y(); 

    let mut result = 0.0; 
    for i in 0..x.len() { 
        let mut term = y[i]; 
        for j in 0..x.len() { 
            if j != i { 
                // distinct x guaranteed by SampleSet 
                debug_assert!(x[i] != x[j]); 
                term *= (x_query - x[j]) / (x[i] - x[j]); 
            }
        }
        result += term; 
    }
    result 
}


/// [`Interpolator`] over a borrowed [`SampleSet`]. 
#[derive(Debug, Clone, Copy)] 
pub struct Lagrange<'s> { 
    samples: &'s SampleSet, 
}

impl<'s> Lagrange<'s> { 
    pub fn new(samples: &'s SampleSet) -> Self { 
        Self { samples } 
    }
}

impl Interpolator for Lagrange<'_> { 
    fn algorithm(&self) -> Algorithm { Algorithm::Lagrange } 

    fn eval(&self, x: f64) -> f64 { 
        evaluate(self.samples, x) 
    }
}


/// Performs Lagrange interpolation at every point of `cfg.common.x_eval()`.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::MissingPoints`] if no samples were configured.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> { 
    let samples = cfg.common.samples()?; 

    Ok(InterpolationReport::collect(
        &Lagrange::new(samples), 
        samples.len(), 
        (samples.x_min(), samples.x_max()), 
        cfg.common.x_eval(), 
    ))
}
