//! Forward finite-difference table for equally spaced samples.
//!
//! ```text
//! table[i][0] = y[i]
//! table[i][j] = table[i+1][j-1] - table[i][j-1],   i + j < n
//! ```
//!
//! The forward formula reads the first row `table[0][..]`; the backward
//! formula reads the anti-diagonal `table[n-1-j][j]`. Equal spacing is a
//! precondition checked by the caller through
//! [`crate::interpolation::spacing`], not here.


use std::fmt;

use crate::interpolation::display::write_table;
use crate::interpolation::sample_set::SampleSet;


/// Triangular finite-difference table with its step `h = x[1] - x[0]`.
///
/// Row `i` stores exactly `n - i` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct FiniteDifferenceTable {
    x    : Vec<f64>,
    h    : f64,
    table: Vec<Vec<f64>>,
}

impl FiniteDifferenceTable {
    pub fn build(set: &SampleSet) -> Self {
        let x = set.x();
        let n = x.len();

        let mut table: Vec<Vec<f64>> = set.y().iter().map(|&yi| {
            let mut row = Vec::with_capacity(n);
            row.push(yi);
            row
        }).collect();

        for j in 1..n {
            for i in 0..n - j {
                let v = table[i + 1][j - 1] - table[i][j - 1];
                table[i].push(v);
            }
        }

        tracing::trace!(n, "built finite-difference table");
        Self { x: x.to_vec(), h: x[1] - x[0], table }
    }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Sample abscissae the table was built from.
    pub fn x(&self) -> &[f64] { &self.x }

    /// Step `x[1] - x[0]`.
    pub fn step(&self) -> f64 { self.h }

    /// `Δ^j y_i`, or `None` outside the triangle.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.table.get(i)?.get(j).copied()
    }

    /// Valid entries of row `i` (`n - i` of them).
    pub fn row(&self, i: usize) -> &[f64] {
        &self.table[i]
    }

    /// Forward differences `Δ^j y_0`, `j = 0..n`.
    pub fn forward_differences(&self) -> &[f64] {
        &self.table[0]
    }

    /// Backward differences `∇^j y_{n-1} = table[n-1-j][j]`, `j = 0..n`.
    pub fn backward_differences(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        let n = self.len();
        (0..n).map(move |j| self.table[n - 1 - j][j])
    }
}

impl fmt::Display for FiniteDifferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.len();
        let headers: Vec<String> = (0..n).map(|j| format!("Δ^{j}y")).collect();
        let rows: Vec<Vec<Option<f64>>> = (0..n)
            .map(|i| (0..n).map(|j| self.get(i, j)).collect())
            .collect();

        write_table(f, &headers, &rows)
    }
}
