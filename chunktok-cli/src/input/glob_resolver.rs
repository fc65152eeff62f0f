//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to a sorted, de-duplicated list of files
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoFilesMatched(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();

    log::debug!("resolved {} input file(s)", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_sorted_unique_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.csv"), "b").unwrap();
        fs::write(temp_dir.path().join("a.csv"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("dir.csv")).unwrap();

        let all = format!("{}/*.csv", temp_dir.path().display());
        let one = format!("{}/a.csv", temp_dir.path().display());
        let files = resolve_patterns(&[all, one]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_no_match_is_error() {
        let err = resolve_patterns(&["/nonexistent/*.csv".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
