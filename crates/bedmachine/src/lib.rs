//! Variable-aware sampling of BedMachine-style polar raster datasets.
//!
//! This crate samples gridded ice-sheet rasters (bed elevation, surface,
//! firn, masks, ...) at arbitrary polar stereographic coordinates, choosing
//! the interpolation method per variable: categorical rasters use nearest
//! neighbor, continuous ones bilinear.
//!
//! # Architecture
//!
//! ```text
//! sample(to_x, to_y, variable, return_grid, source)
//!      │
//!      ├─► Validate the variable name (before any dataset access)
//!      │
//!      ├─► Point mode: check that to_x/to_y pair up
//!      │
//!      ├─► Fetch the backing raster from the RasterSource
//!      │         │
//!      │         └─► ice_mask: derive from `mask` (boundary code 3 → 0)
//!      │
//!      └─► Interpolate per the variable's method
//!               │
//!               ├─► point mode: one value per (x, y) pair
//!               └─► grid mode: len(to_y) × len(to_x) outer product
//! ```
//!
//! # Example
//!
//! ```ignore
//! use bedmachine::{sample_points, NetcdfSource, Variable};
//!
//! let source = NetcdfSource::open("BedMachineAntarctica_2019-11-05_v01.nc")?;
//! let bed = sample_points(&to_x, &to_y, Variable::Bed, &source)?;
//! ```

pub mod error;
pub mod grid;
pub mod interpolation;
pub mod sampler;
pub mod source;
pub mod testdata;
pub mod variable;

// Re-export commonly used types at crate root
pub use error::{Result, SampleError};
pub use grid::{RasterGrid, SampledGrid};
pub use interpolation::{bilinear_interpolate, nearest_interpolate, InterpolationMethod};
pub use sampler::{sample, sample_file, sample_grid, sample_points, SampleOutput};
pub use source::{NetcdfSource, RasterSource};
pub use variable::Variable;
