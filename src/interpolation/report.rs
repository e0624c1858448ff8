//! Defines the structs returned by batch evaluation.
//!
//! [`InterpolationReport`] summarizes one evaluator run over a set of
//! evaluation points; [`GridReport`] pairs the Lagrange and Newton runs
//! over the same plotting grid.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::traits::Interpolator;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"lagrange"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `n_extrapolated` : how many of those fell outside the sampled range
/// - `evaluated`      : interpolated values at each evaluation point
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub n_extrapolated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            n_extrapolated: 0,
            evaluated: Vec::new(),
        }
    }

    /// Runs `interp` over `evals`, counting points outside `[x_min, x_max]`.
    pub(crate) fn collect<I: Interpolator + ?Sized>(
        interp     : &I,
        n_provided : usize,
        (x_min, x_max): (f64, f64),
        evals      : &[f64],
    ) -> Self {
        let mut report = Self::new(interp.algorithm(), n_provided, evals.len());
        report.evaluated.reserve(evals.len());

        for &xq in evals {
            if xq < x_min || xq > x_max {
                report.n_extrapolated += 1;
            }
            report.evaluated.push(interp.eval(xq));
        }

        if report.n_extrapolated > 0 {
            tracing::warn!(
                algorithm = report.algorithm_name,
                n_extrapolated = report.n_extrapolated,
                x_min,
                x_max,
                "evaluation points outside sampled range"
            );
        }
        report
    }
}


/// Lagrange and Newton curves sampled on one grid.
///
/// [`GridReport`]
/// - `x_eval`   : grid abscissae
/// - `lagrange` : [`InterpolationReport`] of the Lagrange polynomial
/// - `newton`   : [`InterpolationReport`] of the selected Newton formula
#[derive(Debug, Clone)]
pub struct GridReport {
    pub x_eval  : Vec<f64>,
    pub lagrange: InterpolationReport,
    pub newton  : InterpolationReport,
}
