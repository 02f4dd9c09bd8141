//! Search query representation.

use serde::{Deserialize, Serialize};

/// A dark web search query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The raw search terms.
    pub query: String,
}

impl SearchQuery {
    /// Creates a new search query with the given terms.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Returns the query percent-encoded for use in an engine URL.
    pub fn encoded(&self) -> String {
        urlencoding::encode(self.query.trim()).into_owned()
    }
}
