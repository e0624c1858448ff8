//! Samples of a known function on `[start, end]`.

use std::fmt;

use crate::interpolation::grid::linspace;
use crate::sources::errors::SourceError;


/// Functions offered for sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFunction {
    Sin,
    Cos,
    Exp,
}

impl SampleFunction {
    pub const ALL: [SampleFunction; 3] = [SampleFunction::Sin, SampleFunction::Cos, SampleFunction::Exp];

    pub const fn name(self) -> &'static str {
        match self {
            SampleFunction::Sin => "sin",
            SampleFunction::Cos => "cos",
            SampleFunction::Exp => "exp",
        }
    }

    pub fn apply(self, x: f64) -> f64 {
        match self {
            SampleFunction::Sin => x.sin(),
            SampleFunction::Cos => x.cos(),
            SampleFunction::Exp => x.exp(),
        }
    }
}

impl fmt::Display for SampleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(x)", self.name())
    }
}


/// `n` evenly spaced samples of `function` from `start` to `end`.
///
/// # Errors
/// - [`SourceError::InvalidInterval`] unless `start < end`, both finite
/// - [`SourceError::InvalidPointCount`] if `n == 0`
/// - [`SourceError::NonFiniteSample`] if the function overflows (e.g. `exp`)
pub fn sample_function(
    function: SampleFunction,
    start   : f64,
    end     : f64,
    n       : usize,
) -> Result<Vec<(f64, f64)>, SourceError> {
    if !start.is_finite() || !end.is_finite() || start >= end {
        return Err(SourceError::InvalidInterval { start, end });
    }
    if n == 0 {
        return Err(SourceError::InvalidPointCount { got: n });
    }

    let xs = linspace(start, end, n).map_err(|_| SourceError::InvalidInterval { start, end })?;
    xs.into_iter()
        .map(|x| {
            let y = function.apply(x);
            if y.is_finite() {
                Ok((x, y))
            } else {
                Err(SourceError::NonFiniteSample { function: function.name(), x })
            }
        })
        .collect()
}
