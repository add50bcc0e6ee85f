//! Path utilities for locating test data files.
//!
//! This module provides functions to find test data files across multiple
//! potential locations, supporting both local development and CI environments.

use std::path::PathBuf;

/// Returns the workspace root directory.
///
/// This is determined by walking up from the current crate's manifest directory
/// until we find the workspace Cargo.toml.
pub fn workspace_root() -> PathBuf {
    // Start from the test-utils crate manifest dir
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Returns the path to the testdata directory for a specific crate.
///
/// # Arguments
///
/// * `crate_name` - The name of the crate (e.g., "bedmachine", "polar-stereo")
///
/// # Returns
///
/// The path to `crates/{crate_name}/testdata/`
pub fn crate_testdata_dir(crate_name: &str) -> PathBuf {
    workspace_root()
        .join("crates")
        .join(crate_name)
        .join("testdata")
}

/// Searches for a test file in multiple locations.
///
/// This function checks the following locations in order:
/// 1. Environment variable `TEST_DATA_DIR` (if set)
/// 2. `crates/bedmachine/testdata/`
/// 3. `testdata/` at the workspace root
///
/// # Arguments
///
/// * `name` - The filename to search for (e.g., a BedMachine `.nc` file)
///
/// # Returns
///
/// `Some(PathBuf)` if the file is found, `None` otherwise.
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Check environment variable first
    if let Ok(test_data_dir) = std::env::var("TEST_DATA_DIR") {
        candidates.push(PathBuf::from(test_data_dir).join(name));
    }

    // Check common testdata directories
    let root = workspace_root();
    candidates.extend([
        root.join("crates/bedmachine/testdata").join(name),
        root.join("testdata").join(name), // workspace-level testdata
    ]);

    candidates.into_iter().find(|path| path.exists())
}

/// Creates a temporary directory for test output.
///
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}

/// Creates a temporary directory with a specific prefix.
///
/// # Arguments
///
/// * `prefix` - A prefix for the directory name (e.g., "netcdf_test")
pub fn temp_test_dir_with_prefix(prefix: &str) -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("Failed to create temporary test directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_is_valid() {
        let root = workspace_root();
        // Should contain Cargo.toml at workspace level
        assert!(
            root.join("Cargo.toml").exists(),
            "Workspace root should contain Cargo.toml: {:?}",
            root
        );
    }

    #[test]
    fn test_crate_testdata_dir() {
        let dir = crate_testdata_dir("bedmachine");
        assert!(dir.to_string_lossy().contains("bedmachine"));
        assert!(dir.to_string_lossy().contains("testdata"));
    }

    #[test]
    fn test_temp_test_dir() {
        let dir = temp_test_dir();
        assert!(dir.path().exists());
        // Dir is cleaned up when dropped
    }

    #[test]
    fn test_temp_test_dir_with_prefix() {
        let dir = temp_test_dir_with_prefix("bedmachine_test_");
        let path_str = dir.path().to_string_lossy();
        assert!(path_str.contains("bedmachine_test_"));
    }
}
