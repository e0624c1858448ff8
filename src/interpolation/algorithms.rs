//! Defines the interpolation algorithm variants 
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods. 

/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`]       direct Lagrange basis sum 
/// - [`Algorithm::NewtonDivided`]  Newton form over divided differences 
/// - [`Algorithm::NewtonForward`]  Newton forward finite-difference formula 
/// - [`Algorithm::NewtonBackward`] Newton backward finite-difference formula 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Lagrange,
    NewtonDivided,
    NewtonForward,
    NewtonBackward,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange       => "lagrange",
            Algorithm::NewtonDivided  => "newton-divided",
            Algorithm::NewtonForward  => "newton-forward",
            Algorithm::NewtonBackward => "newton-backward",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
