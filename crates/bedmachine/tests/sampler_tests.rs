//! Sampler contract tests: validation order, output shapes, derivation,
//! and per-variable method routing on analytically known rasters.

use bedmachine::testdata::{self, MemorySource};
use bedmachine::{
    sample, sample_grid, sample_points, RasterGrid, RasterSource, Result, SampleError,
    SampleOutput, Variable,
};
use test_utils::assert_approx_eq;

/// A source that fails the test if the sampler touches the dataset.
struct ExplodingSource;

impl RasterSource for ExplodingSource {
    fn grid(&self, name: &str) -> Result<RasterGrid> {
        panic!("dataset accessed (variable '{}') before validation", name);
    }
}

#[test]
fn unknown_variable_rejected_before_dataset_access() {
    let err = sample(&[0.0], &[0.0], "not_a_variable", false, &ExplodingSource).unwrap_err();

    match err {
        SampleError::UnknownVariable { name, valid } => {
            assert_eq!(name, "not_a_variable");
            for v in Variable::ALL {
                assert!(valid.contains(v.name()), "valid set should list '{}'", v.name());
            }
        }
        other => panic!("expected UnknownVariable, got {:?}", other),
    }
}

#[test]
fn point_mode_shape_mismatch_rejected_before_dataset_access() {
    let err = sample(&[1.0, 2.0, 3.0], &[1.0, 2.0], "bed", false, &ExplodingSource).unwrap_err();

    assert!(matches!(
        err,
        SampleError::ShapeMismatch { x_len: 3, y_len: 2 }
    ));
}

#[test]
fn grid_mode_allows_mismatched_axis_lengths() {
    let source = testdata::full_dataset();
    let out = sample_grid(&[0.0, 1000.0, 2000.0], &[3000.0, 0.0], Variable::Bed, &source).unwrap();

    assert_eq!(out.width, 3);
    assert_eq!(out.height, 2);
    assert_eq!(out.len(), 6);
}

#[test]
fn point_mode_returns_the_diagonal() {
    let source = testdata::full_dataset();
    // bed = 0.5x + 0.25y
    let values = sample_points(
        &[0.0, 1000.0, 2000.0],
        &[3000.0, 2000.0, 1000.0],
        Variable::Bed,
        &source,
    )
    .unwrap();

    assert_eq!(values.len(), 3);
    assert_approx_eq!(values[0], 750.0, 1e-9);
    assert_approx_eq!(values[1], 1000.0, 1e-9);
    assert_approx_eq!(values[2], 1250.0, 1e-9);
}

#[test]
fn sample_dispatches_on_return_grid() {
    let source = testdata::full_dataset();

    match sample(&[0.0, 1000.0], &[3000.0, 2000.0], "bed", false, &source).unwrap() {
        SampleOutput::Points(values) => assert_eq!(values.len(), 2),
        other => panic!("expected point mode, got {:?}", other),
    }

    match sample(&[0.0, 1000.0], &[3000.0, 2000.0, 1000.0], "bed", true, &source).unwrap() {
        SampleOutput::Grid(grid) => {
            assert_eq!(grid.width, 2);
            assert_eq!(grid.height, 3);
        }
        other => panic!("expected grid mode, got {:?}", other),
    }
}

#[test]
fn ice_mask_collapses_boundary_code_before_interpolation() {
    let source = testdata::full_dataset();

    // The stored mask carries a 3 at node (x=1000, y=3000).
    let stored = sample_points(&[1000.0], &[3000.0], Variable::Mask, &source).unwrap();
    assert_eq!(stored[0], 3.0);

    // The derived ice_mask reads the same cell as 0.
    let derived = sample_points(&[1000.0], &[3000.0], Variable::IceMask, &source).unwrap();
    assert_eq!(derived[0], 0.0);
}

#[test]
fn ice_mask_derivation_on_minimal_grid() {
    let mut source = MemorySource::new();
    source.insert(
        "mask",
        testdata::categorical_grid(
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![3.0, 2.0, 2.0, 2.0],
        ),
    );

    let values = sample_points(&[0.0, 1.0], &[1.0, 1.0], Variable::IceMask, &source).unwrap();
    assert_eq!(values, vec![0.0, 2.0]);
}

#[test]
fn continuous_variables_interpolate_linearly() {
    let source = testdata::full_dataset();

    // Midpoint of a cell: a plane is recovered exactly by bilinear sampling.
    for (variable, a, b) in [
        (Variable::Bed, 0.5, 0.25),
        (Variable::Surface, 1.0, 0.0),
        (Variable::Firn, 0.001, 0.002),
        (Variable::Errbed, 0.01, 0.01),
        (Variable::Geoid, -0.1, 0.3),
    ] {
        let (x, y) = (500.0, 2500.0);
        let values = sample_points(&[x], &[y], variable, &source).unwrap();
        assert_approx_eq!(values[0], a * x + b * y, 1e-9);
    }
}

#[test]
fn categorical_variables_snap_to_nearest_node() {
    let source = testdata::full_dataset();

    // (1400, 2900) rounds to node (1000, 3000), which holds mask 3
    // and provenance 1.
    let mask = sample_points(&[1400.0], &[2900.0], Variable::Mask, &source).unwrap();
    assert_eq!(mask[0], 3.0);

    let provenance = sample_points(&[1400.0], &[2900.0], Variable::Source, &source).unwrap();
    assert_eq!(provenance[0], 1.0);

    // Past the cell midpoint it snaps the other way.
    let mask = sample_points(&[1600.0], &[2900.0], Variable::Mask, &source).unwrap();
    assert_eq!(mask[0], 2.0);
}

#[test]
fn out_of_domain_points_are_nan() {
    let source = testdata::full_dataset();
    let values = sample_points(&[-500.0, 0.0], &[0.0, 3500.0], Variable::Bed, &source).unwrap();
    assert!(values[0].is_nan());
    assert!(values[1].is_nan());
}

#[test]
fn missing_stored_variable_propagates() {
    let source = MemorySource::new();
    let err = sample_points(&[0.0], &[0.0], Variable::Bed, &source).unwrap_err();
    assert!(matches!(err, SampleError::MissingData(_)));
}
