use polyinterp::interpolation::divided::{evaluate, interpolate, DividedDifferenceTable, NewtonDividedCfg};
use polyinterp::interpolation::errors::{InterpolationError, InvalidSampleSetError};
use polyinterp::interpolation::lagrange;
use polyinterp::interpolation::sample_set::SampleSet;

use crate::common::{approx_eq, assert_vec_close};

type PolyResult = Result<(), InterpolationError>;

#[test]
fn quadratic_global_match() -> PolyResult {
    let pts    = [(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)];
    let x_eval = [0.5, 1.5];

    let cfg = NewtonDividedCfg::new()
        .set_points(&pts)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "newton-divided");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert!(approx_eq(rep.evaluated[0], 0.25));
    assert!(approx_eq(rep.evaluated[1], 2.25));
    Ok(())
}

#[test]
fn cubes_match_lagrange() -> PolyResult {
    let set   = SampleSet::from_xy(&[1.0, 2.0, 3.0, 4.0], &[1.0, 8.0, 27.0, 64.0])?;
    let table = DividedDifferenceTable::build(&set);

    let newton = evaluate(&table, 2.5);
    assert!(approx_eq(newton, 15.625));
    assert!(approx_eq(newton, lagrange::evaluate(&set, 2.5)));
    Ok(())
}

#[test]
fn coefficients_of_cubes() -> PolyResult {
    // f[x0] = 1, f[x0,x1] = 7, f[x0..x2] = 6, f[x0..x3] = 1
    let set   = SampleSet::from_xy(&[1.0, 2.0, 3.0, 4.0], &[1.0, 8.0, 27.0, 64.0])?;
    let table = DividedDifferenceTable::build(&set);
    assert_vec_close(table.coefficients(), &[1.0, 7.0, 6.0, 1.0]);
    assert_eq!(table.len(), 4);
    Ok(())
}

#[test]
fn recurrence_holds_on_irregular_nodes() -> PolyResult {
    let set   = SampleSet::from_xy(&[0.0, 1.0, 3.0, 6.0, 10.0], &[0.0, 2.0, 3.0, 3.0, 8.0])?;
    let table = DividedDifferenceTable::build(&set);
    let x     = set.x();
    let n     = x.len();

    for j in 1..n {
        for i in 0..n - j {
            let expected = (table.get(i + 1, j - 1).unwrap() - table.get(i, j - 1).unwrap())
                / (x[i + j] - x[i]);
            assert_eq!(table.get(i, j), Some(expected));
        }
        assert_eq!(table.get(n - j, j), None);
    }
    Ok(())
}

#[test]
fn exact_hits() -> PolyResult {
    let pts    = [(0.0, 0.0), (1.0, 2.0), (3.0, 3.0), (6.0, 3.0), (10.0, 8.0)];
    let x_eval = [0.0, 1.0, 3.0, 6.0, 10.0];

    let cfg = NewtonDividedCfg::new()
        .set_points(&pts)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &[0.0, 2.0, 3.0, 3.0, 8.0]);
    assert_eq!(rep.n_extrapolated, 0);
    Ok(())
}

#[test]
fn bounds_ok_at_endpoints() -> PolyResult {
    let pts    = [(-1.0, 10.0), (2.0, 40.0)];
    let x_eval = [-1.0, 2.0];

    let cfg = NewtonDividedCfg::new()
        .set_points(&pts)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &[10.0, 40.0]);
    Ok(())
}

#[test]
fn extrapolates_outside_range() -> PolyResult {
    let pts    = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)];
    let x_eval = [-0.5, 2.5];

    let cfg = NewtonDividedCfg::new()
        .set_points(&pts)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.n_extrapolated, 2);
    assert_vec_close(&rep.evaluated, &[-0.5, 2.5]);
    Ok(())
}

#[test]
fn duplicate_x_error() {
    let pts = [(0.0, 0.0), (0.0, 1.0), (2.0, 2.0)];
    let err = NewtonDividedCfg::new().set_points(&pts).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::InvalidSampleSet(InvalidSampleSetError::DuplicateX { .. })
    ));
}

#[test]
fn empty_x_eval_ok() -> PolyResult {
    let cfg = NewtonDividedCfg::new()
        .set_points(&[(0.0, 0.0), (1.0, 1.0)])?
        .set_x_eval(&[])?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.n_provided, 2);
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    Ok(())
}

#[test]
fn table_renders_rounded() -> PolyResult {
    let set = SampleSet::from_xy(&[0.0, 1.0, 3.0], &[0.0, 1.0 / 3.0, 9.0])?;
    let rendered = DividedDifferenceTable::build(&set).to_string();
    assert!(rendered.contains("0.3333"));
    assert!(!rendered.contains("0.33333"));
    // stored value keeps full precision
    let table = DividedDifferenceTable::build(&set);
    assert_eq!(table.get(0, 0), Some(0.0));
    assert_eq!(table.get(1, 0), Some(1.0 / 3.0));
    Ok(())
}
