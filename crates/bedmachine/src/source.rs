//! Raster dataset providers.
//!
//! The sampler depends on datasets only through the [`RasterSource`] trait:
//! a named set of 2-D rasters indexed by x/y coordinate axes in meters.
//! [`NetcdfSource`] is the production implementation, reading BedMachine-style
//! NetCDF files via the `netcdf` crate.

use std::path::Path;

use crate::error::{Result, SampleError};
use crate::grid::RasterGrid;

/// A read-only provider of named, coordinate-indexed rasters.
pub trait RasterSource {
    /// Fetch the named raster together with its coordinate axes.
    ///
    /// Provider failures (missing file, missing variable, read errors) are
    /// propagated unchanged; nothing is retried.
    fn grid(&self, name: &str) -> Result<RasterGrid>;
}

/// A raster source backed by a NetCDF file.
///
/// Expects the BedMachine layout: 1-D coordinate variables `x` and `y`
/// (meters, polar stereographic) and 2-D data variables on (y, x). The file
/// handle is held read-only for the lifetime of the source and released when
/// it is dropped.
#[derive(Debug)]
pub struct NetcdfSource {
    file: netcdf::File,
}

impl NetcdfSource {
    /// Open a NetCDF dataset.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = netcdf::open(path)?;
        tracing::debug!(path = %path.display(), "opened raster dataset");
        Ok(Self { file })
    }

    fn coordinates(&self, name: &str) -> Result<Vec<f64>> {
        let var = self
            .file
            .variable(name)
            .ok_or_else(|| SampleError::MissingData(format!("coordinate variable '{}'", name)))?;
        let values: Vec<f64> = var.get_values(..)?;
        Ok(values)
    }
}

impl RasterSource for NetcdfSource {
    fn grid(&self, name: &str) -> Result<RasterGrid> {
        let var = self
            .file
            .variable(name)
            .ok_or_else(|| SampleError::MissingData(format!("variable '{}'", name)))?;
        let values: Vec<f64> = var.get_values(..)?;

        RasterGrid::new(self.coordinates("x")?, self.coordinates("y")?, values)
    }
}
