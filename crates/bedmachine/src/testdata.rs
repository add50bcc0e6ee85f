//! Synthetic in-memory datasets for tests.
//!
//! These builders create small rasters with analytically known values so
//! tests can verify interpolation behavior exactly: linear ramps for the
//! continuous variables (bilinear interpolation recovers them everywhere)
//! and categorical codes for the masks.

use std::collections::HashMap;

use crate::error::{Result, SampleError};
use crate::grid::RasterGrid;
use crate::source::RasterSource;

/// An in-memory raster source for tests.
#[derive(Debug, Default)]
pub struct MemorySource {
    grids: HashMap<String, RasterGrid>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named raster, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, grid: RasterGrid) {
        self.grids.insert(name.into(), grid);
    }
}

impl RasterSource for MemorySource {
    fn grid(&self, name: &str) -> Result<RasterGrid> {
        self.grids
            .get(name)
            .cloned()
            .ok_or_else(|| SampleError::MissingData(format!("variable '{}'", name)))
    }
}

/// Evenly spaced coordinate axis: `start`, `start + step`, ...
pub fn axis(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Raster whose value at (x, y) is `a·x + b·y`.
///
/// Bilinear interpolation reproduces a plane exactly, so sampled values can
/// be checked analytically anywhere inside the domain.
pub fn ramp_grid(x: Vec<f64>, y: Vec<f64>, a: f64, b: f64) -> RasterGrid {
    let mut values = Vec::with_capacity(x.len() * y.len());
    for &py in &y {
        for &px in &x {
            values.push(a * px + b * py);
        }
    }
    RasterGrid::new(x, y, values).expect("ramp axes are valid")
}

/// Raster with explicit row-major values on the given axes.
pub fn categorical_grid(x: Vec<f64>, y: Vec<f64>, values: Vec<f64>) -> RasterGrid {
    RasterGrid::new(x, y, values).expect("categorical grid is valid")
}

/// A dataset holding every stored variable on a shared 4x4 grid.
///
/// Continuous variables are distinct ramps; `mask` and `source` are
/// categorical, with `mask` carrying the ice/ocean boundary code 3 in the
/// second cell of the top row.
pub fn full_dataset() -> MemorySource {
    let x = axis(0.0, 1000.0, 4);
    let y = axis(3000.0, -1000.0, 4); // descending, north-to-south

    let mut source = MemorySource::new();
    for (name, a, b) in [
        ("bed", 0.5, 0.25),
        ("surface", 1.0, 0.0),
        ("firn", 0.001, 0.002),
        ("errbed", 0.01, 0.01),
        ("geoid", -0.1, 0.3),
    ] {
        source.insert(name, ramp_grid(x.clone(), y.clone(), a, b));
    }

    let mask = vec![
        2.0, 3.0, 2.0, 2.0, //
        2.0, 2.0, 2.0, 0.0, //
        2.0, 2.0, 0.0, 0.0, //
        2.0, 0.0, 0.0, 0.0,
    ];
    source.insert("mask", categorical_grid(x.clone(), y.clone(), mask));

    let provenance = vec![
        1.0, 1.0, 2.0, 2.0, //
        1.0, 1.0, 2.0, 2.0, //
        5.0, 5.0, 6.0, 6.0, //
        5.0, 5.0, 6.0, 6.0,
    ];
    source.insert("source", categorical_grid(x, y, provenance));

    source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_spacing() {
        assert_eq!(axis(0.0, 500.0, 3), vec![0.0, 500.0, 1000.0]);
        assert_eq!(axis(1000.0, -500.0, 3), vec![1000.0, 500.0, 0.0]);
    }

    #[test]
    fn test_ramp_grid_values() {
        let grid = ramp_grid(axis(0.0, 10.0, 3), axis(20.0, -10.0, 3), 1.0, 1.0);
        // Top-left cell is (x=0, y=20)
        assert_eq!(grid.get(0, 0), Some(20.0));
        // Bottom-right cell is (x=20, y=0)
        assert_eq!(grid.get(2, 2), Some(20.0));
    }

    #[test]
    fn test_full_dataset_has_all_stored_variables() {
        let source = full_dataset();
        for name in ["mask", "firn", "surface", "bed", "errbed", "geoid", "source"] {
            assert!(source.grid(name).is_ok(), "missing '{}'", name);
        }
        assert!(source.grid("ice_mask").is_err(), "ice_mask is derived, not stored");
    }
}
