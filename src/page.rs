//! Page view-state and its projections
//!
//! A [`Page`] owns everything that is on screen: the search box, the show
//! list and the episode area. It can be projected into an HTML document using
//! the fixed element ids of the search page, or into plain terminal text.

use crate::markup::escape_html;
use crate::render::{EpisodeArea, ShowList};
use std::fmt::Write;

/// Element ids of the search page layout
pub const SEARCH_FORM_ID: &str = "search-form";
pub const SEARCH_QUERY_ID: &str = "search-query";
pub const SHOWS_LIST_ID: &str = "shows-list";
pub const EPISODES_AREA_ID: &str = "episodes-area";
pub const EPISODES_LIST_ID: &str = "episodes-list";

/// Everything displayed by the search page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Current text of the search box
    pub search_query: String,
    pub shows: ShowList,
    /// Starts out hidden
    pub episodes: EpisodeArea,
}

/// Renders the page as a standalone HTML document
pub fn render_html(page: &Page) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n");
    html.push_str("  <title>TV Show Search</title>\n</head>\n<body>\n");

    let _ = writeln!(
        html,
        "<form id=\"{SEARCH_FORM_ID}\">\n  <input id=\"{SEARCH_QUERY_ID}\" type=\"text\" value=\"{}\">\n  <button type=\"submit\">Go!</button>\n</form>",
        escape_html(&page.search_query)
    );

    let _ = writeln!(html, "<div id=\"{SHOWS_LIST_ID}\">");
    for block in page.shows.blocks() {
        let name = escape_html(&block.name);
        let _ = writeln!(
            html,
            "  <div data-show-id=\"{}\" class=\"Show\">\n    <img src=\"{}\" alt=\"{name}\">\n    <h5>{name}</h5>\n    <div><small>{}</small></div>\n    <button class=\"Show-getEpisodes\">{}</button>\n  </div>",
            escape_html(&block.show_id.to_string()),
            escape_html(&block.image),
            block.summary,
            block.control_label(),
        );
    }
    html.push_str("</div>\n");

    let style = if page.episodes.is_visible() {
        ""
    } else {
        " style=\"display: none\""
    };
    let _ = writeln!(html, "<section id=\"{EPISODES_AREA_ID}\"{style}>");
    html.push_str("  <h2>Episodes</h2>\n");
    let _ = writeln!(html, "  <ul id=\"{EPISODES_LIST_ID}\">");
    for entry in page.episodes.entries() {
        let _ = writeln!(html, "    <li>{}</li>", escape_html(&entry.text));
    }
    html.push_str("  </ul>\n");
    for notice in page.episodes.notices() {
        let _ = writeln!(html, "  <h3>{}</h3>", escape_html(notice));
    }
    html.push_str("</section>\n</body>\n</html>\n");

    html
}

/// Renders the page as plain text for terminal output
///
/// Blocks are numbered starting at 1. The episode area is only included
/// while visible.
pub fn render_text(page: &Page) -> String {
    let mut text = String::new();

    if page.shows.is_empty() {
        text.push_str("No shows found.\n");
    }

    for (index, block) in page.shows.blocks().iter().enumerate() {
        let _ = writeln!(text, "[{}] {} (id {})", index + 1, block.name, block.show_id);
        let _ = writeln!(text, "    Image: {}", block.image);
        for line in block.summary.to_plain_text().lines() {
            let _ = writeln!(text, "    {line}");
        }
        text.push('\n');
    }

    if page.episodes.is_visible() {
        text.push_str("=== Episodes ===\n");
        for entry in page.episodes.entries() {
            let _ = writeln!(text, "  {}", entry.text);
        }
        for notice in page.episodes.notices() {
            let _ = writeln!(text, "  {notice}");
        }
    }

    text
}
