//! HTML markup helpers
//!
//! Text coming from the catalog is escaped before it lands in rendered HTML,
//! with one exception: show summaries are delivered as HTML by the catalog and
//! are inserted verbatim. That exception is spelled out in the type system via
//! [`TrustedMarkup`], the only value the page renderer writes without escaping.

use serde::Serialize;
use std::fmt;

/// HTML fragment that is inserted into rendered pages without escaping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    /// Marks markup delivered by the catalog service as trusted
    pub fn from_catalog(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Returns the raw markup
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the markup to plain text for terminal output
    pub fn to_plain_text(&self) -> String {
        nanohtml2text::html2text(&self.0).trim().to_string()
    }
}

impl fmt::Display for TrustedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes text for use in HTML element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Plain"), "Plain");
        assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape_html("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
        assert_eq!(escape_html("It's"), "It&#39;s");
    }

    #[test]
    fn test_trusted_markup_is_kept_verbatim() {
        let markup = TrustedMarkup::from_catalog("<p>A <b>bold</b> show</p>");
        assert_eq!(markup.as_str(), "<p>A <b>bold</b> show</p>");
        assert_eq!(markup.to_string(), "<p>A <b>bold</b> show</p>");
    }

    #[test]
    fn test_trusted_markup_plain_text() {
        let markup = TrustedMarkup::from_catalog("<p>No Summary Available</p>");
        assert_eq!(markup.to_plain_text(), "No Summary Available");
    }
}
