//! Polar stereographic projection on the Hughes ellipsoid.
//!
//! The forward transform maps geodetic (lat, lon) in degrees to projected
//! (x, y) in meters on the stereographic plane; the inverse recovers geodetic
//! coordinates from projected ones. Each hemisphere carries its own
//! conventional central meridian and standard parallel:
//! - north (sign = 1): meridian 45°, standard parallel 70°N
//! - south (sign = -1): meridian 0°, standard parallel 71°S
//!
//! The inverse latitude uses a fixed trigonometric series in the conformal
//! latitude rather than Newton iteration; with the Hughes eccentricity the
//! truncation error is far below the 1e-6 degree round-trip tolerance.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::ellipsoid::{eccentricity, EARTH_RADIUS_M, ECCENTRICITY_SQUARED};
use crate::error::{ProjectionError, Result};

/// Default central meridian / standard parallel for the northern hemisphere.
const NORTH_DEFAULTS: (f64, f64) = (45.0, 70.0);

/// Default central meridian / standard parallel for the southern hemisphere.
const SOUTH_DEFAULTS: (f64, f64) = (0.0, 71.0);

/// Immutable hemisphere configuration for the polar stereographic transform.
///
/// Selected per call; there is no process-wide projection state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarStereographic {
    /// Hemisphere sign: +1.0 north, -1.0 south.
    sign: f64,
    /// Central meridian (delta) in degrees.
    central_meridian: f64,
    /// Standard parallel in degrees (unsigned latitude of true scale).
    standard_parallel: f64,
}

impl PolarStereographic {
    /// North polar stereographic with the conventional parameters
    /// (standard parallel 70°N, central meridian 45°).
    pub fn north() -> Self {
        Self {
            sign: 1.0,
            central_meridian: NORTH_DEFAULTS.0,
            standard_parallel: NORTH_DEFAULTS.1,
        }
    }

    /// South polar stereographic with the conventional parameters
    /// (standard parallel 71°S, central meridian 0°).
    pub fn south() -> Self {
        Self {
            sign: -1.0,
            central_meridian: SOUTH_DEFAULTS.0,
            standard_parallel: SOUTH_DEFAULTS.1,
        }
    }

    /// Resolve a hemisphere configuration from a sign.
    ///
    /// # Arguments
    /// * `sign` - 1 for north latitude, -1 for south latitude
    pub fn from_sign(sign: i32) -> Result<Self> {
        Self::from_sign_with(sign, None, None)
    }

    /// Resolve a hemisphere configuration from a sign with optional
    /// central-meridian/standard-parallel overrides.
    ///
    /// Overrides must be supplied as a pair; passing exactly one is a usage
    /// error. When omitted, the hemisphere defaults apply.
    pub fn from_sign_with(
        sign: i32,
        central_meridian: Option<f64>,
        standard_parallel: Option<f64>,
    ) -> Result<Self> {
        let base = match sign {
            1 => Self::north(),
            -1 => Self::south(),
            other => return Err(ProjectionError::InvalidSign(other)),
        };

        let resolved = match (central_meridian, standard_parallel) {
            (None, None) => base,
            (Some(delta), Some(slat)) => Self {
                central_meridian: delta,
                standard_parallel: slat,
                ..base
            },
            _ => return Err(ProjectionError::IncompleteOverride),
        };

        tracing::debug!(
            hemisphere = if sign == 1 { "north" } else { "south" },
            standard_parallel = resolved.standard_parallel,
            central_meridian = resolved.central_meridian,
            "using polar stereographic convention"
        );

        Ok(resolved)
    }

    /// Hemisphere sign as a float (+1.0 or -1.0).
    pub fn sign(&self) -> f64 {
        self.sign
    }

    /// Central meridian in degrees.
    pub fn central_meridian(&self) -> f64 {
        self.central_meridian
    }

    /// Standard parallel in degrees.
    pub fn standard_parallel(&self) -> f64 {
        self.standard_parallel
    }

    /// Project a single geodetic point (degrees) to stereographic (x, y)
    /// meters.
    ///
    /// A point at exactly ±90° latitude maps to (0, 0) rather than through
    /// the trigonometric expression, which degenerates at the pole.
    pub fn project_point(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        let ex = eccentricity();
        let re = EARTH_RADIUS_M;

        let latitude = lat_deg.abs() * PI / 180.0;
        let longitude = (lon_deg + self.central_meridian) * PI / 180.0;

        if latitude >= FRAC_PI_2 {
            return (0.0, 0.0);
        }

        let t = (PI / 4.0 - latitude / 2.0).tan()
            / ((1.0 - ex * latitude.sin()) / (1.0 + ex * latitude.sin())).powf(ex / 2.0);

        let rho = if (90.0 - self.standard_parallel) < 1e-5 {
            // Standard parallel at the pole: simplified scale factor.
            2.0 * re * t / ((1.0 + ex).powf(1.0 + ex) * (1.0 - ex).powf(1.0 - ex)).sqrt()
        } else {
            let sl = self.standard_parallel * PI / 180.0;
            let tc = (PI / 4.0 - sl / 2.0).tan()
                / ((1.0 - ex * sl.sin()) / (1.0 + ex * sl.sin())).powf(ex / 2.0);
            let mc = sl.cos() / (1.0 - ECCENTRICITY_SQUARED * sl.sin().powi(2)).sqrt();
            re * mc * t / tc
        };

        let sgn = self.sign;
        let y = -rho * sgn * (sgn * longitude).cos();
        let x = rho * sgn * (sgn * longitude).sin();
        (x, y)
    }

    /// Recover a geodetic point (degrees) from stereographic (x, y) meters.
    ///
    /// A point within 0.1 m of the origin is reported as the pole
    /// (lat = sign·90°, lon = 0 before the central-meridian shift) rather
    /// than through the atan2/series path, which degenerates there.
    pub fn unproject_point(&self, x: f64, y: f64) -> (f64, f64) {
        let ex2 = ECCENTRICITY_SQUARED;
        let ex = eccentricity();
        let re = EARTH_RADIUS_M;
        let sgn = self.sign;

        let sl = self.standard_parallel * PI / 180.0;
        let rho = (x * x + y * y).sqrt();
        let cm = sl.cos() / (1.0 - ex2 * sl.sin().powi(2)).sqrt();
        let tc = (PI / 4.0 - sl / 2.0).tan()
            / ((1.0 - ex * sl.sin()) / (1.0 + ex * sl.sin())).powf(ex / 2.0);

        let t = if (self.standard_parallel - 90.0).abs() < 1e-5 {
            rho * ((1.0 + ex).powf(1.0 + ex) * (1.0 - ex).powf(1.0 - ex)).sqrt() / 2.0 / re
        } else {
            rho * tc / (re * cm)
        };

        // Conformal latitude, then the series expansion back to geodetic.
        let chi = FRAC_PI_2 - 2.0 * t.atan();
        let mut lat = chi
            + (ex2 / 2.0 + 5.0 * ex2.powi(2) / 24.0 + ex2.powi(3) / 12.0) * (2.0 * chi).sin()
            + (7.0 * ex2.powi(2) / 48.0 + 29.0 * ex2.powi(3) / 240.0) * (4.0 * chi).sin()
            + (7.0 * ex2.powi(3) / 120.0) * (6.0 * chi).sin();

        lat = sgn * lat;
        let mut lon = sgn * (sgn * x).atan2(-sgn * y);

        if rho <= 0.1 {
            lat = FRAC_PI_2 * sgn;
            lon = 0.0;
        }

        lon = lon * 180.0 / PI;
        lat = lat * 180.0 / PI;
        lon -= self.central_meridian;
        (lat, lon)
    }

    /// Project paired latitude/longitude slices (degrees) to (x, y) meters.
    ///
    /// Returns arrays of the same length as the inputs.
    pub fn project(&self, lat: &[f64], lon: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
        if lat.len() != lon.len() {
            return Err(ProjectionError::ShapeMismatch(lat.len(), lon.len()));
        }

        let mut xs = Vec::with_capacity(lat.len());
        let mut ys = Vec::with_capacity(lat.len());
        for (&la, &lo) in lat.iter().zip(lon) {
            let (x, y) = self.project_point(la, lo);
            xs.push(x);
            ys.push(y);
        }
        Ok((xs, ys))
    }

    /// Recover paired latitude/longitude slices (degrees) from (x, y) meters.
    pub fn unproject(&self, x: &[f64], y: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
        if x.len() != y.len() {
            return Err(ProjectionError::ShapeMismatch(x.len(), y.len()));
        }

        let mut lats = Vec::with_capacity(x.len());
        let mut lons = Vec::with_capacity(x.len());
        for (&px, &py) in x.iter().zip(y) {
            let (la, lo) = self.unproject_point(px, py);
            lats.push(la);
            lons.push(lo);
        }
        Ok((lats, lons))
    }
}

/// Convert geodetic latitude/longitude (degrees) to polar stereographic
/// (x, y) meters.
///
/// # Arguments
/// * `lat`, `lon` - coordinate slices of equal length, degrees
/// * `sign` - 1 for north latitude, -1 for south latitude
/// * `central_meridian`, `standard_parallel` - optional override pair;
///   hemisphere defaults apply when omitted
pub fn project(
    lat: &[f64],
    lon: &[f64],
    sign: i32,
    central_meridian: Option<f64>,
    standard_parallel: Option<f64>,
) -> Result<(Vec<f64>, Vec<f64>)> {
    PolarStereographic::from_sign_with(sign, central_meridian, standard_parallel)?
        .project(lat, lon)
}

/// Convert polar stereographic (x, y) meters to geodetic latitude/longitude
/// (degrees).
///
/// # Arguments
/// * `x`, `y` - coordinate slices of equal length, meters
/// * `sign` - 1 for north latitude, -1 for south latitude
/// * `central_meridian`, `standard_parallel` - optional override pair;
///   hemisphere defaults apply when omitted
pub fn unproject(
    x: &[f64],
    y: &[f64],
    sign: i32,
    central_meridian: Option<f64>,
    standard_parallel: Option<f64>,
) -> Result<(Vec<f64>, Vec<f64>)> {
    PolarStereographic::from_sign_with(sign, central_meridian, standard_parallel)?
        .unproject(x, y)
}
