//! Directory scanner for discovering line-table data files

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of scanning directories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Root directories that were scanned
    pub roots: Vec<PathBuf>,
    /// Discovered files, sorted by path
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    /// Get the number of files found
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Scan one or more directories for files with the given extension
///
/// The extension is matched case-insensitively and without a leading dot.
pub fn scan_directory<P: AsRef<Path>>(roots: &[P], extension: &str) -> Result<ScanResult> {
    let mut files = Vec::new();

    for root in roots {
        for entry in WalkDir::new(root.as_ref()).follow_links(true) {
            let entry = entry?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
            {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();

    Ok(ScanResult {
        roots: roots.iter().map(|r| r.as_ref().to_path_buf()).collect(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_finds_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.csv"), "A,1\n").unwrap();
        fs::write(dir.path().join("b.CSV"), "B,2\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignore\n").unwrap();

        let result = scan_directory(&[dir.path()], "csv").unwrap();
        assert_eq!(result.file_count(), 2);
        assert!(result.files.iter().all(|f| {
            f.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
        }));
    }

    #[test]
    fn test_scan_recurses_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("deep.csv"), "A,1\n").unwrap();

        let result = scan_directory(&[dir.path()], "csv").unwrap();
        assert_eq!(result.file_count(), 1);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = scan_directory(&[dir.path()], "csv").unwrap();
        assert!(result.files.is_empty());
        assert_eq!(result.roots.len(), 1);
    }
}
