//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//! Preferred Newton form whenever the samples are not equally spaced.
//!
//! [`DividedDifferenceTable::build`] fills the lower triangle
//!
//! ```text
//! coef[i][0] = y[i]
//! coef[i][j] = (coef[i+1][j-1] - coef[i][j-1]) / (x[i+j] - x[i]),  i + j < n
//! ```
//!
//! and [`evaluate`] runs Horner's nested form over the first row.


use std::fmt;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::display::write_table;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::sample_set::SampleSet;
use crate::interpolation::traits::Interpolator;


/// Newton divided-difference configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`] 
///
/// # Construction 
/// - Use [`NewtonDividedCfg::new`] then setters. 
#[derive(Debug, Clone)] 
pub struct NewtonDividedCfg<'a> { 
    common: CommonCfg<'a>, 
}
impl<'a> NewtonDividedCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonDividedCfg<'a>);


/// Triangular divided-difference table.
///
/// Row `i` stores exactly `n - i` entries, so cells with `i + j >= n`
/// do not exist and cannot be read.
#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferenceTable {
    x   : Vec<f64>,
    coef: Vec<Vec<f64>>,
}

impl DividedDifferenceTable {
    pub fn build(set: &SampleSet) -> Self {
        let x = set.x();
        let n = x.len();

        let mut coef: Vec<Vec<f64>> = set.y().iter().map(|&yi| {
            let mut row = Vec::with_capacity(n);
            row.push(yi);
            row
        }).collect();

        for j in 1..n {
            for i in 0..n - j {
                debug_assert!(x[i + j] != x[i]);
                let v = (coef[i + 1][j - 1] - coef[i][j - 1]) / (x[i + j] - x[i]);
                coef[i].push(v);
            }
        }

        tracing::trace!(n, "built divided-difference table");
        Self { x: x.to_vec(), coef }
    }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Sample abscissae the table was built from.
    pub fn x(&self) -> &[f64] { &self.x }

    /// `coef[i][j]`, or `None` outside the triangle.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.coef.get(i)?.get(j).copied()
    }

    /// Valid entries of row `i` (`n - i` of them).
    pub fn row(&self, i: usize) -> &[f64] {
        &self.coef[i]
    }

    /// Newton coefficients `coef[0][0..n]`, such that
    /// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coef[0]
    }
}

impl fmt::Display for DividedDifferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.len();
        let mut headers = vec!["x".to_string(), "y".to_string()];
        headers.extend((1..n).map(|j| format!("d{j}y")));

        let rows: Vec<Vec<Option<f64>>> = (0..n)
            .map(|i| {
                std::iter::once(Some(self.x[i]))
                    .chain((0..n).map(|j| self.get(i, j)))
                    .collect()
            })
            .collect();

        write_table(f, &headers, &rows)
    }
}


/// Evaluates the Newton polynomial of `table` at `x_query`.
///
/// Horner's nested form, highest-order coefficient first:
///
/// ```text
/// p = c[n-1]
/// p = c[n-1-k] + (xq - x[n-1-k]) * p,   k = 1..n-1
/// ```
pub fn evaluate(table: &DividedDifferenceTable, x_query: f64) -> f64 {
    let c = table.coefficients();
    let x = table.x();
    let n = c.len();

    let mut p = c[n - 1];
    for k in (0..n - 1).rev() {
        p = c[k] + (x_query - x[k]) * p;
    }
    p
}


/// [`Interpolator`] owning its [`DividedDifferenceTable`]. 
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonDivided {
    table: DividedDifferenceTable,
}

impl NewtonDivided {
    pub fn new(set: &SampleSet) -> Self {
        Self { table: DividedDifferenceTable::build(set) }
    }

    pub fn table(&self) -> &DividedDifferenceTable { &self.table }
}

impl Interpolator for NewtonDivided {
    fn algorithm(&self) -> Algorithm { Algorithm::NewtonDivided }

    fn eval(&self, x: f64) -> f64 {
        evaluate(&self.table, x)
    }
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Constructs the divided-difference table once.
/// - Evaluates every point of `cfg.common.x_eval()` with [`evaluate`].
///   Points outside the sampled range are extrapolated and counted in
///   `n_extrapolated`.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton-divided"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::MissingPoints`] if no samples were configured.
pub fn interpolate(cfg: NewtonDividedCfg) -> Result<InterpolationReport, InterpolationError> { 
    let samples = cfg.common.samples()?; 
    let newton  = NewtonDivided::new(samples); 

    Ok(InterpolationReport::collect(
        &newton, 
        samples.len(), 
        (samples.x_min(), samples.x_max()), 
        cfg.common.x_eval(), 
    ))
}
