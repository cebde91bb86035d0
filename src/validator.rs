//! Marker-based validation of the written artifact.
//!
//! Markers are cheap validity proxies: their presence says the artifact has
//! the expected shape, not that it compiles. Validation is read-only and
//! never errors outward; a missing file is a failed report, not an error.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Required markers, in the order they are reported when missing.
pub const REQUIRED_MARKERS: [&str; 5] = [
    "use client",    // client-side rendering directive
    "export default", // named default export
    "useAppStore",   // state-store reference
    "onClick",       // at least one interactive handler
    "console.log",   // diagnostic logging
];

/// Outcome of a validation pass. `passed` holds iff `missing` is empty;
/// the only constructor enforces that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub passed: bool,
    pub missing: Vec<&'static str>,
}

impl ValidationReport {
    fn from_missing(missing: Vec<&'static str>) -> Self {
        Self {
            passed: missing.is_empty(),
            missing,
        }
    }
}

/// Check the artifact at `path` for every required marker. Safe to call
/// repeatedly and concurrently.
pub fn validate_artifact(path: &Path) -> ValidationReport {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!("Cannot read artifact {:?}: {}", path, err);
            return ValidationReport::from_missing(REQUIRED_MARKERS.to_vec());
        }
    };

    let missing: Vec<&'static str> = REQUIRED_MARKERS
        .iter()
        .copied()
        .filter(|marker| !content.contains(marker))
        .collect();

    if missing.is_empty() {
        debug!("Artifact {:?} passed validation", path);
    } else {
        warn!("Artifact {:?} is missing markers: {:?}", path, missing);
    }

    ValidationReport::from_missing(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::template::fallback_template;
    use tempfile::TempDir;

    fn write_temp(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("GeneratedUI.tsx");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_all_markers_present_passes() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, &fallback_template());

        let report = validate_artifact(&path);
        assert!(report.passed);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_each_missing_marker_is_reported_alone() {
        let dir = TempDir::new().unwrap();
        for marker in REQUIRED_MARKERS {
            let content = fallback_template().replace(marker, "REDACTED");
            let path = write_temp(&dir, &content);

            let report = validate_artifact(&path);
            assert!(!report.passed, "removing {:?} should fail", marker);
            assert_eq!(report.missing, vec![marker]);
        }
    }

    #[test]
    fn test_nonexistent_path_fails_without_error() {
        let dir = TempDir::new().unwrap();
        let report = validate_artifact(&dir.path().join("does_not_exist.tsx"));
        assert!(!report.passed);
        assert_eq!(report.missing, REQUIRED_MARKERS.to_vec());
    }

    #[test]
    fn test_empty_file_reports_every_marker() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "");
        let report = validate_artifact(&path);
        assert!(!report.passed);
        assert_eq!(report.missing.len(), REQUIRED_MARKERS.len());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, &fallback_template());
        assert_eq!(validate_artifact(&path), validate_artifact(&path));
    }
}
