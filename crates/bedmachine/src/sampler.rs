//! The variable-aware sampling entry points.

use std::path::Path;

use crate::error::{Result, SampleError};
use crate::grid::{RasterGrid, SampledGrid};
use crate::source::{NetcdfSource, RasterSource};
use crate::variable::Variable;

/// Result of a [`sample`] call; the shape depends on the requested mode.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleOutput {
    /// Point mode: one value per (to_x[i], to_y[i]) pair.
    Points(Vec<f64>),
    /// Grid mode: the full outer product, len(to_y) rows × len(to_x) columns.
    Grid(SampledGrid),
}

/// Sample `variable` at the given projected coordinates (meters).
///
/// The variable name is validated against the fixed set before any dataset
/// access; in point mode (`return_grid = false`) the coordinate slices must
/// pair up, and the result is one value per pair. In grid mode the result
/// covers the full outer product of the two coordinate axes.
///
/// # Arguments
/// * `to_x`, `to_y` - projected coordinates to sample at, meters
/// * `variable` - one of the names in [`Variable::ALL`]
/// * `return_grid` - false for point mode, true for grid mode
/// * `source` - the backing raster dataset
pub fn sample(
    to_x: &[f64],
    to_y: &[f64],
    variable: &str,
    return_grid: bool,
    source: &dyn RasterSource,
) -> Result<SampleOutput> {
    let variable: Variable = variable.parse()?;

    if return_grid {
        Ok(SampleOutput::Grid(sample_grid(to_x, to_y, variable, source)?))
    } else {
        Ok(SampleOutput::Points(sample_points(
            to_x, to_y, variable, source,
        )?))
    }
}

/// Sample `variable` from a NetCDF file at the given projected coordinates.
///
/// Same contract as [`sample`], but the dataset is opened here, scoped to
/// this call, and released on every exit path. Both the variable name and
/// the point-mode shape are validated before the file is touched.
pub fn sample_file<P: AsRef<Path>>(
    to_x: &[f64],
    to_y: &[f64],
    variable: &str,
    return_grid: bool,
    path: P,
) -> Result<SampleOutput> {
    let variable: Variable = variable.parse()?;
    if !return_grid && to_x.len() != to_y.len() {
        return Err(SampleError::ShapeMismatch {
            x_len: to_x.len(),
            y_len: to_y.len(),
        });
    }

    let source = NetcdfSource::open(path)?;
    if return_grid {
        Ok(SampleOutput::Grid(sample_grid(
            to_x, to_y, variable, &source,
        )?))
    } else {
        Ok(SampleOutput::Points(sample_points(
            to_x, to_y, variable, &source,
        )?))
    }
}

/// Sample `variable` at paired coordinates: one value per (to_x[i], to_y[i]).
pub fn sample_points(
    to_x: &[f64],
    to_y: &[f64],
    variable: Variable,
    source: &dyn RasterSource,
) -> Result<Vec<f64>> {
    if to_x.len() != to_y.len() {
        return Err(SampleError::ShapeMismatch {
            x_len: to_x.len(),
            y_len: to_y.len(),
        });
    }

    let grid = fetch(variable, source)?;
    grid.interp_points(to_x, to_y, variable.method())
}

/// Sample `variable` on the full outer product of the coordinate slices.
///
/// The output has `to_y.len()` rows and `to_x.len()` columns.
pub fn sample_grid(
    to_x: &[f64],
    to_y: &[f64],
    variable: Variable,
    source: &dyn RasterSource,
) -> Result<SampledGrid> {
    let grid = fetch(variable, source)?;
    Ok(grid.interp_grid(to_x, to_y, variable.method()))
}

/// Fetch the raster backing `variable`, applying its derivation if any.
fn fetch(variable: Variable, source: &dyn RasterSource) -> Result<RasterGrid> {
    let grid = source.grid(variable.storage_name())?;

    let grid = match variable {
        // The ice/ocean interface carries code 3; interpolating across it
        // can fabricate values of 1, so it is collapsed to 0 (no ice) first.
        Variable::IceMask => grid.map_values(|v| if v == 3.0 { 0.0 } else { v }),
        _ => grid,
    };

    tracing::debug!(
        variable = %variable,
        method = %variable.method(),
        width = grid.width(),
        height = grid.height(),
        "sampling raster"
    );
    Ok(grid)
}
