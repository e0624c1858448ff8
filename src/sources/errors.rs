use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid interval [{start}, {end}]: must be finite with start < end")]
    InvalidInterval { start: f64, end: f64 },

    #[error("invalid point count: got {got}, need at least 1")]
    InvalidPointCount { got: usize },

    #[error("function {function} non-finite at x={x}")]
    NonFiniteSample { function: &'static str, x: f64 },

    #[error("no rows in input")]
    EmptyInput,

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}
