//! Polynomial interpolation of tabulated data.
//!
//! [`interpolation`] holds the numerical core: Lagrange evaluation,
//! Newton divided differences for irregular spacing, Newton forward and
//! backward finite differences for equal spacing, and the router that
//! picks between them.
//!
//! [`sources`] holds small acquisition helpers that produce raw `(x, y)`
//! pairs for the core (function sampling, CSV reading).

pub mod interpolation;
pub mod sources;
