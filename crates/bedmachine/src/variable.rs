//! The closed set of sampleable dataset variables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SampleError;
use crate::interpolation::InterpolationMethod;

/// A variable of a BedMachine-style dataset.
///
/// The set is fixed: requests for anything else are rejected at the sampler's
/// entry point, before any dataset access. Each variable carries its own
/// interpolation method — categorical rasters (`mask`, `source`, and the
/// derived `ice_mask`) snap to the nearest grid cell, continuous ones
/// interpolate bilinearly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    /// Surface classification code (ocean, ice-free land, ice, ...).
    Mask,
    /// Ice-presence mask derived from `mask`; not stored in the dataset.
    IceMask,
    /// Firn air content in meters.
    Firn,
    /// Surface elevation in meters.
    Surface,
    /// Bed elevation in meters.
    Bed,
    /// Bed elevation error estimate in meters.
    Errbed,
    /// Geoid height in meters.
    Geoid,
    /// Provenance code of the bed measurement.
    Source,
}

impl Variable {
    /// Every valid variable, in canonical order.
    pub const ALL: [Variable; 8] = [
        Variable::Mask,
        Variable::IceMask,
        Variable::Firn,
        Variable::Surface,
        Variable::Bed,
        Variable::Errbed,
        Variable::Geoid,
        Variable::Source,
    ];

    /// Canonical name, as it appears in sampling requests.
    pub fn name(&self) -> &'static str {
        match self {
            Variable::Mask => "mask",
            Variable::IceMask => "ice_mask",
            Variable::Firn => "firn",
            Variable::Surface => "surface",
            Variable::Bed => "bed",
            Variable::Errbed => "errbed",
            Variable::Geoid => "geoid",
            Variable::Source => "source",
        }
    }

    /// Name of the stored raster backing this variable.
    ///
    /// `ice_mask` is derived from the stored `mask`; every other variable is
    /// stored under its own name.
    pub fn storage_name(&self) -> &'static str {
        match self {
            Variable::IceMask => "mask",
            other => other.name(),
        }
    }

    /// Interpolation method for this variable.
    pub fn method(&self) -> InterpolationMethod {
        match self {
            Variable::Mask | Variable::IceMask | Variable::Source => InterpolationMethod::Nearest,
            _ => InterpolationMethod::Bilinear,
        }
    }

    /// Comma-separated list of all valid names, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Variable {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.name() == s)
            .copied()
            .ok_or_else(|| SampleError::UnknownVariable {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for v in Variable::ALL {
            assert_eq!(v.name().parse::<Variable>().unwrap(), v);
        }
    }

    #[test]
    fn test_unknown_variable_lists_valid_set() {
        let err = "not_a_variable".parse::<Variable>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("not_a_variable"));
        for v in Variable::ALL {
            assert!(msg.contains(v.name()), "message should list '{}'", v.name());
        }
    }

    #[test]
    fn test_method_selection() {
        assert_eq!(Variable::Mask.method(), InterpolationMethod::Nearest);
        assert_eq!(Variable::Source.method(), InterpolationMethod::Nearest);
        assert_eq!(Variable::IceMask.method(), InterpolationMethod::Nearest);
        for v in [
            Variable::Firn,
            Variable::Surface,
            Variable::Bed,
            Variable::Errbed,
            Variable::Geoid,
        ] {
            assert_eq!(v.method(), InterpolationMethod::Bilinear);
        }
    }

    #[test]
    fn test_ice_mask_reads_stored_mask() {
        assert_eq!(Variable::IceMask.storage_name(), "mask");
        assert_eq!(Variable::Bed.storage_name(), "bed");
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Variable::IceMask).unwrap();
        assert_eq!(json, "\"ice_mask\"");
        let back: Variable = serde_json::from_str("\"errbed\"").unwrap();
        assert_eq!(back, Variable::Errbed);
    }
}
