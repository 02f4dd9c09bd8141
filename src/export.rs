//! JSON export for search results and scraped content.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::{Result, ResultSet, ScrapeSet};

/// Returns a timestamp-derived default filename, e.g.
/// `results_2026-08-25_14-03-59.json`.
pub fn default_filename(prefix: &str) -> String {
    let now = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("{prefix}_{now}.json")
}

/// Appends a `.json` extension when the caller left it off.
pub fn with_json_extension(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    match path.extension() {
        Some(ext) if ext == "json" => path,
        _ => {
            let mut name = path.into_os_string();
            name.push(".json");
            PathBuf::from(name)
        }
    }
}

/// Writes a deduplicated result set as a JSON array of
/// `{title, link, engine}` objects.
pub fn export_results(results: &ResultSet, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(results)
        .map_err(|e| crate::SwordfishError::Parse(e.to_string()))?;
    std::fs::write(path.as_ref(), json)?;
    debug!("Exported {} results to {}", results.len(), path.as_ref().display());
    Ok(())
}

/// Writes scraped content as a JSON object mapping link to content, in the
/// same order the links were submitted. Failed links carry their
/// `Error: ...` marker so the export always covers the full input set.
pub fn export_scraped(scraped: &ScrapeSet, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(scraped)
        .map_err(|e| crate::SwordfishError::Parse(e.to_string()))?;
    std::fs::write(path.as_ref(), json)?;
    debug!("Exported {} pages to {}", scraped.len(), path.as_ref().display());
    Ok(())
}
