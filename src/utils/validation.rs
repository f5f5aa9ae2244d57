//! Centralized limits and helper functions.

use std::path::Path;

/// Maximum number of data rows allowed in a single section (DOS protection)
pub const MAX_TABLE_ROWS: usize = 1_000_000;

/// Compression suffixes stripped before report suffixes
const COMPRESSION_SUFFIXES: &[&str] = &[".gz", ".bgz"];

/// Report file suffixes stripped when deriving a sample name, longest first
const REPORT_SUFFIXES: &[&str] = &[
    ".recal_data.table",
    ".recal_data.grp",
    ".recal.table",
    ".recal.grp",
    ".table",
    ".grp",
    ".txt",
];

/// Check if adding another row would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new row.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_row_limit(count: usize) -> Option<String> {
    if count >= MAX_TABLE_ROWS {
        Some(format!(
            "Too many rows: adding another would exceed maximum of {MAX_TABLE_ROWS}"
        ))
    } else {
        None
    }
}

/// Check if the path names a gzip/bgzip compressed file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
#[must_use]
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    COMPRESSION_SUFFIXES.iter().any(|s| path_str.ends_with(s))
}

/// Derive a sample name from a report file path.
///
/// Takes the file name and strips a compression suffix followed by one
/// recognised report suffix (matched case-insensitively).
/// Returns None if nothing is left.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use recal_report::utils::validation::sample_name_from_path;
///
/// assert_eq!(
///     sample_name_from_path(Path::new("/data/NA12878.recal_data.table")),
///     Some("NA12878".to_string())
/// );
/// assert_eq!(
///     sample_name_from_path(Path::new("HG002.table.gz")),
///     Some("HG002".to_string())
/// );
/// ```
#[must_use]
pub fn sample_name_from_path(path: &Path) -> Option<String> {
    let mut name = path.file_name()?.to_string_lossy().into_owned();

    for suffixes in [COMPRESSION_SUFFIXES, REPORT_SUFFIXES] {
        if let Some(suffix) = suffixes.iter().find(|s| ends_with_ignore_case(&name, s)) {
            name.truncate(name.len() - suffix.len());
        }
    }

    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn ends_with_ignore_case(name: &str, suffix: &str) -> bool {
    let Some(cut) = name.len().checked_sub(suffix.len()) else {
        return false;
    };
    name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_row_limit() {
        assert!(check_row_limit(0).is_none());
        assert!(check_row_limit(MAX_TABLE_ROWS - 1).is_none());
        assert!(check_row_limit(MAX_TABLE_ROWS).is_some());
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("sample.table.gz")));
        assert!(is_gzipped(Path::new("sample.table.BGZ")));
        assert!(!is_gzipped(Path::new("sample.table")));
    }

    #[test]
    fn test_sample_name_from_path() {
        assert_eq!(
            sample_name_from_path(Path::new("out/S1.recal.table")),
            Some("S1".to_string())
        );
        assert_eq!(
            sample_name_from_path(Path::new("S2.GRP")),
            Some("S2".to_string())
        );
        assert_eq!(
            sample_name_from_path(Path::new("S3.bqsr.txt.gz")),
            Some("S3.bqsr".to_string())
        );
        assert_eq!(
            sample_name_from_path(Path::new("no_suffix")),
            Some("no_suffix".to_string())
        );
        assert_eq!(sample_name_from_path(Path::new(".table")), None);
        assert_eq!(sample_name_from_path(Path::new("/")), None);
    }
}
