//! Checking files of values, one value per line

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;

use crate::error::{Error, Result};
use crate::format::{validate_format, FormatName};

/// A line that did not match the requested format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// File the value came from
    pub path: PathBuf,
    /// 1-based line number
    pub line: usize,
    /// The offending value
    pub value: String,
}

/// Outcome of checking one or more files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of non-blank lines checked
    pub checked: usize,
    /// Lines that failed, in file then line order
    pub failures: Vec<LineFailure>,
}

impl CheckReport {
    /// True when every checked value matched
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn merge(&mut self, other: CheckReport) {
        self.checked += other.checked;
        self.failures.extend(other.failures);
    }
}

/// Expand glob patterns into a sorted list of paths
///
/// Arguments without glob characters are taken literally.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if !(pattern.contains('*') || pattern.contains('?') || pattern.contains('[')) {
            paths.push(PathBuf::from(pattern));
            continue;
        }

        let entries = glob(pattern).map_err(|e| Error::InvalidGlob(format!("{pattern}: {e}")))?;
        let mut matched = false;
        for entry in entries {
            match entry {
                Ok(path) => {
                    paths.push(path);
                    matched = true;
                }
                Err(e) => tracing::warn!(pattern = %pattern, error = %e, "glob entry unreadable"),
            }
        }
        if !matched {
            return Err(Error::NoFilesMatched(pattern.clone()));
        }
    }

    // Sort paths for consistent ordering
    paths.sort();

    Ok(paths)
}

/// Validate every non-blank line of `path` against `format`
pub fn check_file(path: &Path, format: FormatName) -> Result<CheckReport> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let mut report = CheckReport::default();

    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        report.checked += 1;
        if !validate_format(format, line) {
            report.failures.push(LineFailure {
                path: path.to_path_buf(),
                line: index + 1,
                value: line.to_string(),
            });
        }
    }

    tracing::debug!(
        path = %path.display(),
        %format,
        checked = report.checked,
        failed = report.failures.len(),
        "file checked"
    );

    Ok(report)
}

/// Validate several files and combine their reports
pub fn check_files(paths: &[PathBuf], format: FormatName) -> Result<CheckReport> {
    let mut report = CheckReport::default();
    for path in paths {
        report.merge(check_file(path, format)?);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_patterns_pass_through() {
        let paths = expand_patterns(&["b.txt".to_string(), "a.txt".to_string()]).unwrap();
        assert_eq!(paths, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn test_glob_without_matches() {
        let result = expand_patterns(&["/definitely/not/here/*.txt".to_string()]);
        assert!(matches!(result, Err(Error::NoFilesMatched(_))));
    }

    #[test]
    fn test_invalid_glob() {
        let result = expand_patterns(&["[".to_string()]);
        assert!(matches!(result, Err(Error::InvalidGlob(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = check_file(Path::new("no-such-file.txt"), FormatName::Email);
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_report_merge() {
        let mut report = CheckReport::default();
        assert!(report.is_clean());
        report.merge(CheckReport {
            checked: 2,
            failures: vec![LineFailure {
                path: PathBuf::from("x"),
                line: 2,
                value: "bad".to_string(),
            }],
        });
        assert_eq!(report.checked, 2);
        assert!(!report.is_clean());
    }
}
