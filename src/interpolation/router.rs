//! Method selection.
//!
//! [`route`] validates the samples, always evaluates the Lagrange
//! polynomial, then picks one Newton formula:
//!
//! ```text
//! equally spaced ─┬─ xq <  x[mid] ── newton-forward
//!                 └─ xq >= x[mid] ── newton-backward
//! irregular ─────── newton-divided
//! ```
//!
//! `mid = round(n / 2)` with ties to even (see [`midpoint_index`]). A query
//! equal to `x[mid]` goes to the backward formula.
//!
//! The returned [`Interpolation`] keeps the samples and the selected
//! evaluator so callers can sample both curves on a dense grid
//! ([`Interpolation::eval_grid`]) and render the difference tables.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::backward::NewtonBackward;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::divided::{DividedDifferenceTable, NewtonDivided};
use crate::interpolation::errors::{DomainWarning, InterpolationError};
use crate::interpolation::finite::FiniteDifferenceTable;
use crate::interpolation::forward::NewtonForward;
use crate::interpolation::grid::GridCfg;
use crate::interpolation::lagrange::{self, Lagrange};
use crate::interpolation::report::{GridReport, InterpolationReport};
use crate::interpolation::sample_set::SampleSet;
use crate::interpolation::spacing::is_equally_spaced;
use crate::interpolation::traits::Interpolator;


/// Router configuration 
/// 
/// # Fields 
/// - `common`  : [`CommonCfg`]; a non-empty `x_eval` is evaluated by both 
///   curves into [`Interpolation::evaluated`] 
/// - `x_query` : the query abscissa (required) 
///
/// # Construction 
/// - Use [`RouterCfg::new`] then setters. 
#[derive(Debug, Clone)]
pub struct RouterCfg<'a> {
    common : CommonCfg<'a>,
    x_query: Option<f64>,
}
impl<'a> RouterCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), x_query: None }
    }

    pub fn set_x_query(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() {
            return Err(InterpolationError::NonFiniteQuery { got: v });
        }
        self.x_query = Some(v);
        Ok(self)
    }
}
impl_common_cfg!(RouterCfg<'a>);


/// Index of the sample splitting forward from backward queries.
///
/// `round(n / 2)` with halves rounded to even, e.g. `n = 5 -> 2`,
/// `n = 3 -> 2`, `n = 7 -> 4`, `n = 9 -> 4`.
pub fn midpoint_index(n: usize) -> usize {
    let half = n / 2;
    if n % 2 == 1 && half % 2 == 1 { half + 1 } else { half }
}


/// Newton evaluator chosen by the router.
#[derive(Debug, Clone, PartialEq)]
pub enum NewtonInterpolant {
    Divided(NewtonDivided),
    Forward(NewtonForward),
    Backward(NewtonBackward),
}

impl NewtonInterpolant {
    pub fn divided_table(&self) -> Option<&DividedDifferenceTable> {
        match self {
            NewtonInterpolant::Divided(n) => Some(n.table()),
            _                             => None,
        }
    }

    pub fn finite_table(&self) -> Option<&FiniteDifferenceTable> {
        match self {
            NewtonInterpolant::Forward(n)  => Some(n.table()),
            NewtonInterpolant::Backward(n) => Some(n.table()),
            NewtonInterpolant::Divided(_)  => None,
        }
    }
}

impl Interpolator for NewtonInterpolant {
    fn algorithm(&self) -> Algorithm {
        match self {
            NewtonInterpolant::Divided(n)  => n.algorithm(),
            NewtonInterpolant::Forward(n)  => n.algorithm(),
            NewtonInterpolant::Backward(n) => n.algorithm(),
        }
    }

    fn eval(&self, x: f64) -> f64 {
        match self {
            NewtonInterpolant::Divided(n)  => n.eval(x),
            NewtonInterpolant::Forward(n)  => n.eval(x),
            NewtonInterpolant::Backward(n) => n.eval(x),
        }
    }
}


/// Result of routing one query.
///
/// [`Interpolation`]
/// - `x_query`           : the query abscissa
/// - `lagrange_estimate` : Lagrange polynomial at `x_query`
/// - `newton_estimate`   : selected Newton formula at `x_query`
/// - `method`            : which Newton formula was selected
/// - `equally_spaced`    : outcome of the spacing test
/// - `warning`           : set when `x_query` is outside the sampled range
/// - `evaluated`         : both curves over the configured `x_eval`, if any
///
/// No rounding is applied to any value.
#[derive(Debug, Clone)]
pub struct Interpolation {
    pub x_query          : f64,
    pub lagrange_estimate: f64,
    pub newton_estimate  : f64,
    pub method           : Algorithm,
    pub equally_spaced   : bool,
    pub warning          : Option<DomainWarning>,
    pub evaluated        : Option<GridReport>,
    samples: SampleSet,
    newton : NewtonInterpolant,
}

impl Interpolation {
    pub fn samples(&self) -> &SampleSet { &self.samples }
    pub fn newton(&self) -> &NewtonInterpolant { &self.newton }
    pub fn lagrange(&self) -> Lagrange<'_> { Lagrange::new(&self.samples) }

    /// Samples both curves on the grid described by `grid`.
    pub fn eval_grid(&self, grid: &GridCfg) -> Result<GridReport, InterpolationError> {
        let x_eval = grid.resolve(&self.samples)?;
        Ok(self.report_on(x_eval))
    }

    fn report_on(&self, x_eval: Vec<f64>) -> GridReport {
        let n      = self.samples.len();
        let bounds = (self.samples.x_min(), self.samples.x_max());
        GridReport {
            lagrange: InterpolationReport::collect(&self.lagrange(), n, bounds, &x_eval),
            newton  : InterpolationReport::collect(&self.newton, n, bounds, &x_eval),
            x_eval,
        }
    }
}


/// Routes one query through Lagrange and the applicable Newton formula.
///
/// # Errors
/// - [`InterpolationError::MissingPoints`] / [`InterpolationError::MissingQuery`]
///   if the builder was not completed.
/// - Sample validation errors are raised earlier, by `set_points`.
pub fn route(cfg: RouterCfg) -> Result<Interpolation, InterpolationError> {
    let x_query = cfg.x_query.ok_or(InterpolationError::MissingQuery)?;
    let x_eval  = cfg.common.x_eval();
    let tol     = cfg.common.spacing_tol();
    let samples = cfg.common.samples.ok_or(InterpolationError::MissingPoints)?;

    let warning = DomainWarning::check(x_query, samples.x_min(), samples.x_max());
    if let Some(w) = &warning {
        tracing::warn!(x_query = w.x_query, x_min = w.x_min, x_max = w.x_max, "query outside sampled range, extrapolating");
    }

    let lagrange_estimate = lagrange::evaluate(&samples, x_query);

    let equally_spaced = is_equally_spaced(&samples, tol);
    let newton = if equally_spaced {
        let table = FiniteDifferenceTable::build(&samples);
        let mid   = midpoint_index(samples.len());
        let x_mid = samples.x()[mid];
        tracing::debug!(mid, x_mid, x_query, "equally spaced samples");

        if x_query < x_mid {
            NewtonInterpolant::Forward(NewtonForward::from_table(table))
        } else {
            NewtonInterpolant::Backward(NewtonBackward::from_table(table))
        }
    } else {
        tracing::debug!(n = samples.len(), "irregular spacing");
        NewtonInterpolant::Divided(NewtonDivided::new(&samples))
    };

    let method          = newton.algorithm();
    let newton_estimate = newton.eval(x_query);
    tracing::debug!(%method, lagrange_estimate, newton_estimate, "routed query");

    let mut result = Interpolation {
        x_query,
        lagrange_estimate,
        newton_estimate,
        method,
        equally_spaced,
        warning,
        evaluated: None,
        samples,
        newton,
    };
    if !x_eval.is_empty() {
        result.evaluated = Some(result.report_on(x_eval.to_vec()));
    }
    Ok(result)
}


/// Shorthand for [`route`] with default tolerances and no evaluation grid.
pub fn interpolate(raw: &[(f64, f64)], x_query: f64) -> Result<Interpolation, InterpolationError> {
    route(RouterCfg::new().set_points(raw)?.set_x_query(x_query)?)
}
