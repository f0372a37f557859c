//! Word-list file loading
//!
//! One word per line; blank lines and `#` comment lines are skipped.

use crate::io::error::{Result, WordSearchError};
use std::path::Path;

/// Load a dictionary from a word-list file
///
/// # Errors
///
/// Returns [`WordSearchError::WordListRead`] if the file cannot be read.
pub fn load_dictionary(path: &Path) -> Result<Vec<String>> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| WordSearchError::WordListRead {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_dictionary_skips_blanks_and_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap_or_else(|error| {
            unreachable!("failed to create temp file: {error}");
        });
        let written = writeln!(file, "# animals\ncat\n\n  dog  \nhorse");
        assert!(written.is_ok());

        let words = load_dictionary(file.path()).unwrap_or_else(|error| {
            unreachable!("failed to load dictionary: {error}");
        });
        assert_eq!(words, vec!["cat", "dog", "horse"]);
    }

    #[test]
    fn test_load_dictionary_missing_file_reports_the_path() {
        let result = load_dictionary(Path::new("no/such/wordlist.txt"));
        let Err(error) = result else {
            unreachable!("expected an error for a missing file");
        };
        assert!(error.to_string().contains("no/such/wordlist.txt"));
    }
}
