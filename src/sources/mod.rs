//! Raw `(x, y)` pair producers.
//!
//! These sit outside the numerical core: they produce unsorted,
//! possibly duplicated pairs which
//! [`SampleSet`](crate::interpolation::sample_set::SampleSet) then
//! validates.
//!
//! - [`function`]  : sample a known function on an evenly spaced grid
//! - [`csv_input`] : read `x` / `y` columns from CSV data
//! - [`dedup_points`] : drop exact-duplicate pairs before validation

pub mod errors;
pub mod function;
pub mod csv_input;

pub use errors::SourceError;


/// Removes repeated `(x, y)` pairs, keeping the first occurrence.
///
/// Pairs sharing `x` with different `y` are kept; the core rejects them.
pub fn dedup_points(raw: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out: Vec<(f64, f64)> = Vec::with_capacity(raw.len());
    for &(x, y) in raw {
        let seen = out.iter().any(|&(px, py)| px == x && py == y);
        if !seen {
            out.push((x, y));
        }
    }
    out
}
