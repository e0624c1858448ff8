//! Newton Forward-Difference Interpolation 
//!
//! [Newton's forward formula](https://en.wikipedia.org/wiki/Newton_polynomial#Newton_forward_divided_difference_formula) 
//! for equally spaced samples, anchored at `x[0]`. Most accurate for 
//! queries in the first half of the range. 
//!
//! With `h = x[1] - x[0]` and `t = (xq - x[0]) / h`: 
//!
//! ```text
//! P(xq) = Δ⁰y₀ + Σ_{j=1}^{n-1} C(t, j) · Δʲy₀ 
//! C(t, j) = t (t - 1) ... (t - j + 1) / j! 
//! ```


use crate::interpolation::algorithms::Algorithm; 
use crate::interpolation::config::{impl_common_cfg, CommonCfg}; 
use crate::interpolation::errors::InterpolationError; 
use crate::interpolation::finite::FiniteDifferenceTable; 
use crate::interpolation::report::InterpolationReport; 
use crate::interpolation::sample_set::SampleSet; 
use crate::interpolation::spacing::require_equally_spaced; 
use crate::interpolation::traits::Interpolator; 


/// Newton forward-difference configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`] 
///
/// # Construction 
/// - Use [`NewtonForwardCfg::new`] then setters. 
///
/// # Defaults 
/// - Spacing tolerance [`crate::interpolation::spacing::SpacingTol::default`]. 
#[derive(Debug, Clone)] 
pub struct NewtonForwardCfg<'a> { 
    common: CommonCfg<'a>, 
}
impl<'a> NewtonForwardCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonForwardCfg<'a>);


/// Evaluates the forward formula of `table` at `x_query`. 
pub fn evaluate(table: &FiniteDifferenceTable, x_query: f64) -> f64 { 
    let deltas = table.forward_differences(); 
    let t      = (x_query - table.x()[0]) / table.step(); 

    let mut result   = deltas[0]; 
    // running C(t, j) 
    let mut binomial = 1.0; 
    for (j, &delta) in deltas.iter().enumerate().skip(1) { 
        binomial *= (t - (j - 1) as f64) / j as f64; 
        result   += delta * binomial; 
    }
    result 
}


/// [`Interpolator`] owning its [`FiniteDifferenceTable`]. 
#[derive(Debug, Clone, PartialEq)] 
pub struct NewtonForward { 
    table: FiniteDifferenceTable, 
}

impl NewtonForward { 
    /// Wraps an already built table; equal spacing is the caller's concern. 
    pub fn from_table(table: FiniteDifferenceTable) -> Self { 
        Self { table } 
    }

    pub fn table(&self) -> &FiniteDifferenceTable { &self.table } 
}

impl Interpolator for NewtonForward { 
    fn algorithm(&self) -> Algorithm { Algorithm::NewtonForward } 

    fn eval(&self, x: f64) -> f64 { 
        evaluate(&self.table, x) 
    }
}


/// Performs Newton forward-difference interpolation. 
///
/// # Behavior 
/// - Checks equal spacing with `cfg.common.spacing_tol()`. 
/// - Builds the finite-difference table once and evaluates every point of 
///   `cfg.common.x_eval()` with [`evaluate`]. 
///
/// # Returns 
/// [`InterpolationReport`] with `algorithm_name` `"newton-forward"`. 
///
/// # Errors 
/// - [`InterpolationError::MissingPoints`] if no samples were configured. 
/// - [`InterpolationError::IrregularSpacing`] if the samples are not equally spaced. 
pub fn interpolate(cfg: NewtonForwardCfg) -> Result<InterpolationReport, InterpolationError> { 
    let samples: &SampleSet = cfg.common.samples()?; 
    require_equally_spaced(samples, cfg.common.spacing_tol())?; 

    let newton = NewtonForward::from_table(FiniteDifferenceTable::build(samples)); 

    Ok(InterpolationReport::collect(
        &newton, 
        samples.len(), 
        (samples.x_min(), samples.x_max()), 
        cfg.common.x_eval(), 
    ))
}
