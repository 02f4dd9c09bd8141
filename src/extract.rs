//! Visible-text extraction from fetched pages.

use std::sync::OnceLock;

use regex::Regex;
use scraper::Html;

fn noise_blocks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // regex has no backreferences, so each tag gets its own alternative.
        Regex::new(
            r"(?is)<script[^>]*>.*?</script>|<style[^>]*>.*?</style>|<noscript[^>]*>.*?</noscript>",
        )
        .unwrap()
    })
}

/// Extracts the visible text of an HTML page.
///
/// Script, style and noscript blocks are dropped; the remaining text nodes
/// are trimmed and joined with single newlines. An empty string is a valid
/// result for a page with no visible text, and is distinct from a fetch
/// failure.
pub fn extract_text(html: &str) -> String {
    let stripped = noise_blocks().replace_all(html, " ");
    let document = Html::parse_document(&stripped);

    let mut lines = Vec::new();
    for chunk in document.root_element().text() {
        let chunk = chunk.trim();
        if !chunk.is_empty() {
            lines.push(chunk);
        }
    }
    lines.join("\n")
}
