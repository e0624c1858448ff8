use polyinterp::interpolation::backward::{self, NewtonBackwardCfg};
use polyinterp::interpolation::errors::InterpolationError;
use polyinterp::interpolation::finite::FiniteDifferenceTable;
use polyinterp::interpolation::forward::{self, NewtonForwardCfg};
use polyinterp::interpolation::lagrange;
use polyinterp::interpolation::sample_set::SampleSet;

use crate::common::{approx_eq, assert_vec_close, squares};

type PolyResult = Result<(), InterpolationError>;

#[test]
fn recurrence_holds_exactly() -> PolyResult {
    let set = SampleSet::from_xy(
        &[0.0, 0.5, 1.0, 1.5, 2.0, 2.5],
        &[1.3, -0.7, 2.9, 0.1, 5.5, -3.25],
    )?;
    let table = FiniteDifferenceTable::build(&set);
    let n     = table.len();

    for j in 1..n {
        for i in 0..n - j {
            let expected = table.get(i + 1, j - 1).unwrap() - table.get(i, j - 1).unwrap();
            assert_eq!(table.get(i, j), Some(expected));
        }
    }
    assert_eq!(table.step(), 0.5);
    Ok(())
}

#[test]
fn forward_squares_first_half() -> PolyResult {
    let set   = SampleSet::new(&squares(5))?;
    let table = FiniteDifferenceTable::build(&set);
    assert!(approx_eq(forward::evaluate(&table, 1.5), 2.25));
    Ok(())
}

#[test]
fn backward_squares_second_half() -> PolyResult {
    let set   = SampleSet::new(&squares(5))?;
    let table = FiniteDifferenceTable::build(&set);
    assert!(approx_eq(backward::evaluate(&table, 3.5), 12.25));
    Ok(())
}

#[test]
fn both_formulas_hit_nodes() -> PolyResult {
    let pts    = [(-1.0, 4.0), (0.0, -2.0), (1.0, 0.5), (2.0, 3.0)];
    let x_eval = [-1.0, 0.0, 1.0, 2.0];
    let y      = [4.0, -2.0, 0.5, 3.0];

    let rep_f = forward::interpolate(
        NewtonForwardCfg::new().set_points(&pts)?.set_x_eval(&x_eval)?,
    )?;
    let rep_b = backward::interpolate(
        NewtonBackwardCfg::new().set_points(&pts)?.set_x_eval(&x_eval)?,
    )?;

    assert_eq!(rep_f.algorithm_name, "newton-forward");
    assert_eq!(rep_b.algorithm_name, "newton-backward");
    assert_vec_close(&rep_f.evaluated, &y);
    assert_vec_close(&rep_b.evaluated, &y);
    Ok(())
}

#[test]
fn cubes_agree_with_lagrange() -> PolyResult {
    let set   = SampleSet::from_xy(&[1.0, 2.0, 3.0, 4.0], &[1.0, 8.0, 27.0, 64.0])?;
    let table = FiniteDifferenceTable::build(&set);
    for &xq in &[1.25, 2.5, 3.75] {
        let l = lagrange::evaluate(&set, xq);
        assert!(approx_eq(forward::evaluate(&table, xq), l));
        assert!(approx_eq(backward::evaluate(&table, xq), l));
    }
    Ok(())
}

#[test]
fn non_unit_step() -> PolyResult {
    // y = 2x + 1 on x = 10, 12.5, 15
    let set   = SampleSet::new(&[(10.0, 21.0), (12.5, 26.0), (15.0, 31.0)])?;
    let table = FiniteDifferenceTable::build(&set);
    assert!(approx_eq(forward::evaluate(&table, 11.0), 23.0));
    assert!(approx_eq(backward::evaluate(&table, 14.0), 29.0));
    Ok(())
}

#[test]
fn irregular_samples_rejected() {
    let pts = [(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (5.0, 25.0)];

    let err = forward::interpolate(NewtonForwardCfg::new().set_points(&pts).unwrap()).unwrap_err();
    assert_eq!(err, InterpolationError::IrregularSpacing { idx: 2, gap: 3.0, h: 1.0 });

    let err = backward::interpolate(NewtonBackwardCfg::new().set_points(&pts).unwrap()).unwrap_err();
    assert!(matches!(err, InterpolationError::IrregularSpacing { .. }));
}

#[test]
fn loose_tolerance_accepts_near_regular() -> PolyResult {
    let pts = [(0.0, 0.0), (1.0, 1.0), (2.0005, 2.0005)];
    let cfg = NewtonForwardCfg::new()
        .set_points(&pts)?
        .set_spacing_tol(1e-3, 0.0)?
        .set_x_eval(&[0.5])?;

    let rep = forward::interpolate(cfg)?;
    assert_eq!(rep.n_evaluated, 1);
    assert!((rep.evaluated[0] - 0.5).abs() < 1e-3);
    Ok(())
}

#[test]
fn table_renders_headers() -> PolyResult {
    let table = FiniteDifferenceTable::build(&SampleSet::new(&squares(3))?);
    let rendered = table.to_string();
    assert!(rendered.contains("Δ^0y"));
    assert!(rendered.contains("Δ^2y"));
    assert!(rendered.contains("2.0000"));
    Ok(())
}
