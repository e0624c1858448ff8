//! Interpolation error types.  
//! 
//! ┌ [`InvalidSampleSetError`] : sample data rejected at construction  
//! │  ├ fewer than 2 points  
//! │  ├ duplicate x-value  
//! │  ├ non-finite coordinate or x span  
//! │  └ mismatched x / y lengths  
//! │
//! ├ [`InterpolationError`]    : configuration and runtime errors  
//! │  ├ wraps [`InvalidSampleSetError`]  
//! │  ├ invalid query / tolerance / grid  
//! │  ├ finite differences requested on irregular samples  
//! │  └ missing builder inputs  
//! │
//! └ [`DomainWarning`]         : non-fatal, query outside the sampled range  


use std::fmt;
use thiserror::Error;


/// Sample data rejected by [`crate::interpolation::sample_set::SampleSet`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidSampleSetError {
    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate x-value detected: {x}")]
    DuplicateX { x: f64 },

    #[error("non-finite coordinate in input at index {idx}")]
    NonFinite { idx: usize },

    #[error("x span [{x_min}, {x_max}] overflows f64")]
    UnboundedSpan { x_min: f64, x_max: f64 },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },
}


#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error(transparent)]
    InvalidSampleSet(#[from] InvalidSampleSetError),

    #[error("query value must be finite. got {got}")]
    NonFiniteQuery { got: f64 },

    #[error("invalid spacing tolerance: abs={abs}, rel={rel}; both must be finite and >= 0, one > 0")]
    InvalidSpacingTol { abs: f64, rel: f64 },

    #[error("invalid grid range [{start}, {end}]: must be finite with start <= end")]
    InvalidGridRange { start: f64, end: f64 },

    #[error("invalid grid size: got {got}, need at least 1")]
    InvalidGridSize { got: usize },

    #[error("finite-difference formulas need equally spaced x; gap {gap} at index {idx} differs from step {h}")]
    IrregularSpacing { idx: usize, gap: f64, h: f64 },

    #[error("no sample points configured")]
    MissingPoints,

    #[error("no query value configured")]
    MissingQuery,
}


/// Query value lies outside `[x_min, x_max]`.
///
/// Interpolation still proceeds and the estimate is an extrapolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainWarning {
    pub x_query: f64,
    pub x_min  : f64,
    pub x_max  : f64,
}

impl DomainWarning {
    /// Returns a warning if `x_query` falls outside `[x_min, x_max]`.
    pub fn check(x_query: f64, x_min: f64, x_max: f64) -> Option<Self> {
        if x_query < x_min || x_query > x_max {
            Some(Self { x_query, x_min, x_max })
        } else {
            None
        }
    }
}

impl fmt::Display for DomainWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "query {} outside sampled range [{}, {}]; result is extrapolated",
            self.x_query, self.x_min, self.x_max
        )
    }
}
