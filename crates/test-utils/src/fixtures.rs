//! Common test fixtures for projection and sampling tests.
//!
//! This module provides pre-defined coordinates representing common
//! scenarios on the polar stereographic grids.

/// Reference geodetic points for round-trip testing.
pub mod points {
    /// Interior East Antarctic points (lat, lon in degrees), taken from a
    /// typical bed-elevation sampling session.
    pub const ANTARCTIC_INTERIOR: [(f64, f64); 4] = [
        (-84.72, 92.41),
        (-82.03, 85.11),
        (-83.96, 65.65),
        (-79.07, 77.67),
    ];

    /// Greenland and Arctic-basin points (lat, lon in degrees).
    pub const ARCTIC: [(f64, f64); 4] = [
        (72.58, -38.46),
        (78.0, -42.0),
        (80.5, 15.2),
        (66.6, -170.0),
    ];

    /// Points close to (but not at) each pole, where the projection radius
    /// is small and series truncation error is largest.
    pub const NEAR_POLE: [(f64, f64); 2] = [(89.9, 120.0), (-89.9, -60.0)];
}

/// Hemisphere conventions used by the projection.
pub mod hemisphere {
    /// Northern hemisphere sign.
    pub const NORTH: i32 = 1;

    /// Southern hemisphere sign.
    pub const SOUTH: i32 = -1;

    /// Default (central meridian, standard parallel) for sign = 1.
    pub const NORTH_DEFAULTS: (f64, f64) = (45.0, 70.0);

    /// Default (central meridian, standard parallel) for sign = -1.
    pub const SOUTH_DEFAULTS: (f64, f64) = (0.0, 71.0);
}

/// Round-trip tolerance in degrees for project/unproject pairs.
pub const ROUNDTRIP_TOLERANCE_DEG: f64 = 1e-6;
