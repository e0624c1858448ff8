#![allow(dead_code)]

pub const ATOL: f64 = 1e-9;
pub const RTOL: f64 = 1e-9;

#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
pub fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

/// `(i, i^2)` for `i = 0..n`
pub fn squares(n: usize) -> Vec<(f64, f64)> {
    (0..n).map(|i| (i as f64, (i * i) as f64)).collect()
}
