//! Persists generated source to the fixed artifact location.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory under the project root that holds the artifact.
pub const OUTPUT_DIR: &str = "app";

/// Fixed artifact filename. Each generation overwrites it; there is no
/// history and no conflict detection.
pub const OUTPUT_FILENAME: &str = "GeneratedUI.tsx";

/// Write the source text to `<project_root>/app/GeneratedUI.tsx`, creating
/// the directory if needed, and return the resolved absolute path. This is
/// the only pipeline stage whose errors surface to the caller.
pub fn write_artifact(project_root: &Path, source: &str) -> Result<PathBuf> {
    let output_dir = project_root.join(OUTPUT_DIR);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;

    // Canonicalize after creation so relative project roots resolve too
    let output_dir = output_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve output directory {:?}", output_dir))?;

    let output_path = output_dir.join(OUTPUT_FILENAME);
    fs::write(&output_path, source)
        .with_context(|| format!("Failed to write artifact {:?}", output_path))?;

    info!("Wrote {} bytes to {:?}", source.len(), output_path);
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_missing_directory() {
        let root = TempDir::new().unwrap();
        assert!(!root.path().join(OUTPUT_DIR).exists());

        let path = write_artifact(root.path(), "const a = 1;").unwrap();
        assert!(path.ends_with("app/GeneratedUI.tsx"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "const a = 1;");
    }

    #[test]
    fn test_second_write_overwrites_first() {
        let root = TempDir::new().unwrap();
        let first = write_artifact(root.path(), "first").unwrap();
        let second = write_artifact(root.path(), "second").unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second).unwrap(), "second");
    }

    #[test]
    fn test_write_is_idempotent_for_existing_directory() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join(OUTPUT_DIR)).unwrap();
        // No error when the directory already exists
        write_artifact(root.path(), "content").unwrap();
    }

    #[test]
    fn test_returned_path_is_absolute() {
        let root = TempDir::new().unwrap();
        let path = write_artifact(root.path(), "x").unwrap();
        assert!(path.is_absolute());
    }
}
