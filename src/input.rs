//! Link list input handling.

use std::collections::HashSet;
use std::path::Path;

use crate::{Result, SwordfishError};

/// Reads a newline-delimited link file.
///
/// Lines are trimmed; blank lines are dropped; duplicate links are removed
/// while preserving first-seen order. A missing or unreadable file is a
/// configuration error, surfaced before any scraping starts.
pub fn read_links(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        SwordfishError::Config(format!("cannot read input file {}: {e}", path.display()))
    })?;

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for line in contents.lines() {
        let link = line.trim();
        if link.is_empty() {
            continue;
        }
        if seen.insert(link.to_string()) {
            links.push(link.to_string());
        }
    }
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_links_basic() {
        let file = write_file("http://a.onion\nhttp://b.onion\n");
        let links = read_links(file.path()).unwrap();
        assert_eq!(links, vec!["http://a.onion", "http://b.onion"]);
    }

    #[test]
    fn test_read_links_skips_blanks_and_trims() {
        let file = write_file("  http://a.onion  \n\n   \nhttp://b.onion");
        let links = read_links(file.path()).unwrap();
        assert_eq!(links, vec!["http://a.onion", "http://b.onion"]);
    }

    #[test]
    fn test_read_links_deduplicates_in_order() {
        let file = write_file("http://a.onion\nhttp://b.onion\nhttp://a.onion\n");
        let links = read_links(file.path()).unwrap();
        assert_eq!(links, vec!["http://a.onion", "http://b.onion"]);
    }

    #[test]
    fn test_read_links_empty_file() {
        let file = write_file("");
        assert!(read_links(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_links_missing_file_is_config_error() {
        let result = read_links("/nonexistent/links.txt");
        assert!(matches!(result, Err(SwordfishError::Config(_))));
    }
}
