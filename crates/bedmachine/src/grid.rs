//! Coordinate-indexed raster grids.

use crate::error::{Result, SampleError};
use crate::interpolation::{
    axis_index, bilinear_interpolate, nearest_interpolate, InterpolationMethod,
};

/// A read-only 2-D raster indexed by coordinate axes x and y (meters).
///
/// Values are stored row-major in (y, x) order, matching the layout of the
/// backing dataset. Axes must be strictly monotonic; the y-axis of polar
/// datasets typically runs north-to-south (descending).
#[derive(Debug, Clone)]
pub struct RasterGrid {
    x: Vec<f64>,
    y: Vec<f64>,
    values: Vec<f64>,
}

impl RasterGrid {
    /// Create a raster from its coordinate axes and row-major values.
    ///
    /// # Arguments
    /// * `x` - x-axis coordinates (meters), strictly monotonic, len >= 2
    /// * `y` - y-axis coordinates (meters), strictly monotonic, len >= 2
    /// * `values` - row-major (y, x) cell values, len == x.len() * y.len()
    pub fn new(x: Vec<f64>, y: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        check_axis("x", &x)?;
        check_axis("y", &y)?;
        if values.len() != x.len() * y.len() {
            return Err(SampleError::InvalidGrid(format!(
                "expected {} values for a {}x{} grid, got {}",
                x.len() * y.len(),
                y.len(),
                x.len(),
                values.len()
            )));
        }
        Ok(Self { x, y, values })
    }

    /// Number of columns (x-axis length).
    pub fn width(&self) -> usize {
        self.x.len()
    }

    /// Number of rows (y-axis length).
    pub fn height(&self) -> usize {
        self.y.len()
    }

    /// The x-axis coordinates.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The y-axis coordinates.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Get the value at a specific grid cell.
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.width() || row >= self.height() {
            return None;
        }
        self.values.get(row * self.width() + col).copied()
    }

    /// Interpolate the raster at one coordinate pair (meters).
    ///
    /// Coordinates outside the axis ranges yield NaN.
    pub fn interp_point(&self, x: f64, y: f64, method: InterpolationMethod) -> f64 {
        let (Some(fx), Some(fy)) = (axis_index(&self.x, x), axis_index(&self.y, y)) else {
            return f64::NAN;
        };

        match method {
            InterpolationMethod::Nearest => {
                nearest_interpolate(&self.values, self.width(), self.height(), fx, fy)
            }
            InterpolationMethod::Bilinear => {
                bilinear_interpolate(&self.values, self.width(), self.height(), fx, fy)
            }
        }
    }

    /// Interpolate at paired coordinates: one output value per (x[i], y[i]).
    pub fn interp_points(
        &self,
        x: &[f64],
        y: &[f64],
        method: InterpolationMethod,
    ) -> Result<Vec<f64>> {
        if x.len() != y.len() {
            return Err(SampleError::ShapeMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(x.iter()
            .zip(y)
            .map(|(&px, &py)| self.interp_point(px, py, method))
            .collect())
    }

    /// Interpolate onto the full outer product of the coordinate axes.
    ///
    /// The output has `y.len()` rows and `x.len()` columns, row-major, the
    /// same orientation as the backing raster.
    pub fn interp_grid(&self, x: &[f64], y: &[f64], method: InterpolationMethod) -> SampledGrid {
        let mut data = Vec::with_capacity(x.len() * y.len());
        for &py in y {
            for &px in x {
                data.push(self.interp_point(px, py, method));
            }
        }
        SampledGrid {
            data,
            width: x.len(),
            height: y.len(),
        }
    }

    /// Return a copy of the raster with every value passed through `f`.
    ///
    /// Used for derived rasters (e.g. collapsing a mask category before
    /// interpolation). Axes are shared unchanged.
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> RasterGrid {
        RasterGrid {
            x: self.x.clone(),
            y: self.y.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }
}

fn check_axis(name: &str, axis: &[f64]) -> Result<()> {
    if axis.len() < 2 {
        return Err(SampleError::InvalidGrid(format!(
            "{} axis needs at least 2 points, got {}",
            name,
            axis.len()
        )));
    }
    let ascending = axis[1] > axis[0];
    let monotonic = axis
        .windows(2)
        .all(|w| if ascending { w[1] > w[0] } else { w[1] < w[0] });
    if !monotonic {
        return Err(SampleError::InvalidGrid(format!(
            "{} axis must be strictly monotonic",
            name
        )));
    }
    Ok(())
}

/// A dense sampling result in grid mode.
///
/// Row-major with `height` rows (one per requested y) and `width` columns
/// (one per requested x).
#[derive(Debug, Clone, PartialEq)]
pub struct SampledGrid {
    /// The sampled values (row-major order).
    pub data: Vec<f64>,
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl SampledGrid {
    /// Get the value at a specific output cell.
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Total number of sampled values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the result holds no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
