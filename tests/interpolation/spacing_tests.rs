use polyinterp::interpolation::errors::InterpolationError;
use polyinterp::interpolation::sample_set::SampleSet;
use polyinterp::interpolation::spacing::{is_equally_spaced, SpacingTol};

fn with_x(x: &[f64]) -> SampleSet {
    let y = vec![0.0; x.len()];
    SampleSet::from_xy(x, &y).unwrap()
}

#[test]
fn unit_steps_regular() {
    assert!(is_equally_spaced(&with_x(&[0.0, 1.0, 2.0, 3.0, 4.0]), SpacingTol::default()));
}

#[test]
fn growing_steps_irregular() {
    assert!(!is_equally_spaced(&with_x(&[0.0, 1.0, 2.0, 5.0, 10.0]), SpacingTol::default()));
}

#[test]
fn accumulated_rounding_still_regular() {
    // 0.1 * i is not bit-exact in binary
    let x: Vec<f64> = (0..10).map(|i| i as f64 * 0.1).collect();
    let gaps: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    assert!(gaps.iter().any(|&g| g != gaps[0]));
    assert!(is_equally_spaced(&with_x(&x), SpacingTol::default()));
}

#[test]
fn tight_tolerance_splits_close_gaps() {
    let set = with_x(&[0.0, 1.0, 2.001]);
    assert!(!is_equally_spaced(&set, SpacingTol::default()));
    assert!(is_equally_spaced(&set, SpacingTol::new(1e-2, 0.0).unwrap()));
}

#[test]
fn invalid_tolerance() {
    let err = SpacingTol::new(f64::NAN, 0.1).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidSpacingTol { .. }));
}
