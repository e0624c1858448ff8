//! Newton Backward-Difference Interpolation 
//!
//! [Newton's backward formula](https://en.wikipedia.org/wiki/Newton_polynomial#Newton_backward_divided_difference_formula) 
//! for equally spaced samples, anchored at `x[n-1]` and read along the 
//! anti-diagonal of the forward table. Most accurate for queries in the 
//! second half of the range. 
//!
//! With `h = x[1] - x[0]` and `t = (xq - x[n-1]) / h`: 
//!
//! ```text
//! P(xq) = y_{n-1} + Σ_{j=1}^{n-1} t (t + 1) ... (t + j - 1) / j! · table[n-1-j][j] 
//! ```


use crate::interpolation::algorithms::Algorithm; 
use crate::interpolation::config::{impl_common_cfg, CommonCfg}; 
use crate::interpolation::errors::InterpolationError; 
use crate::interpolation::finite::FiniteDifferenceTable; 
use crate::interpolation::report::InterpolationReport; 
use crate::interpolation::spacing::require_equally_spaced; 
use crate::interpolation::traits::Interpolator; 


/// Newton backward-difference configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`] 
///
/// # Construction 
/// - Use [`NewtonBackwardCfg::new`] then setters. 
#[derive(Debug, Clone)] 
pub struct NewtonBackwardCfg<'a> { 
    common: CommonCfg<'a>, 
}
impl<'a> NewtonBackwardCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonBackwardCfg<'a>);


/// Evaluates the backward formula of `table` at `x_query`. 
pub fn evaluate(table: &FiniteDifferenceTable, x_query: f64) -> f64 { 
    let x = table.x(); 
    let t = (x_query - x[x.len() - 1]) / table.step(); 

    // running t (t + 1) ... (t + j - 1) / j! 
    let mut result   = 0.0; 
    let mut binomial = 1.0; 
    for (j, nabla) in table.backward_differences().enumerate() { 
        if j > 0 { 
            binomial *= (t + (j - 1) as f64) / j as f64; 
        }
        result += nabla * binomial; 
    }
    result 
}


/// [`Interpolator`] owning its [`FiniteDifferenceTable`]. 
#[derive(Debug, Clone, PartialEq)] 
pub struct NewtonBackward { 
    table: FiniteDifferenceTable, 
}

impl NewtonBackward { 
    /// Wraps an already built table; equal spacing is the caller's concern. 
    pub fn from_table(table: FiniteDifferenceTable) -> Self { 
        Self { table } 
    }

    pub fn table(&self) -> &FiniteDifferenceTable { &self.table } 
}

impl Interpolator for NewtonBackward { 
    fn algorithm(&self) -> Algorithm { Algorithm::NewtonBackward } 

    fn eval(&self, x: f64) -> f64 { 
        evaluate(&self.table, x) 
    }
}


/// Performs Newton backward-difference interpolation over `cfg.common.x_eval()`. 
///
/// # Errors 
/// - [`InterpolationError::MissingPoints`] if no samples were configured. 
/// - [`InterpolationError::IrregularSpacing`] if the samples are not equally spaced. 
pub fn interpolate(cfg: NewtonBackwardCfg) -> Result<InterpolationReport, InterpolationError> { 
    let samples = cfg.common.samples()?; 
    require_equally_spaced(samples, cfg.common.spacing_tol())?; 

    let newton = NewtonBackward::from_table(FiniteDifferenceTable::build(samples)); 

    Ok(InterpolationReport::collect(
        &newton, 
        samples.len(), 
        (samples.x_min(), samples.x_max()), 
        cfg.common.x_eval(), 
    ))
}
