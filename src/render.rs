//! Show and episode renderers
//!
//! The renderers project catalog records into view-state: the show list and
//! the episode area owned by the [`Page`](crate::page::Page). They never talk
//! to the catalog and never decide visibility; that is the controller's job.

use crate::catalog::{Episode, Show, ShowId};
use crate::markup::TrustedMarkup;

/// Label of the control that opens a show's episode listing
pub const EPISODES_CONTROL_LABEL: &str = "Episodes";

/// Notice shown in the episode area when a show has no episodes
pub const NO_EPISODES_NOTICE: &str = "No Episodes Available";

/// Rendered representation of a single show
///
/// The block carries the identifier of the show it was rendered from, so a
/// click on its "Episodes" control can be resolved without a separate lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowBlock {
    pub show_id: ShowId,
    pub name: String,
    pub image: String,
    pub summary: TrustedMarkup,
}

impl ShowBlock {
    /// Label of the block's episodes control
    pub fn control_label(&self) -> &'static str {
        EPISODES_CONTROL_LABEL
    }
}

impl From<Show> for ShowBlock {
    fn from(show: Show) -> Self {
        Self {
            show_id: show.id,
            name: show.name,
            image: show.image,
            summary: show.summary,
        }
    }
}

/// The show-list area
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowList {
    blocks: Vec<ShowBlock>,
}

impl ShowList {
    /// Rendered blocks in display order
    pub fn blocks(&self) -> &[ShowBlock] {
        &self.blocks
    }

    /// Returns the block at `index`, if any
    pub fn get(&self, index: usize) -> Option<&ShowBlock> {
        self.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A single line of the episode listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeEntry {
    pub episode_id: u64,
    pub text: String,
}

/// The episode area: a listing plus notices, hidden until a show is opened
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeArea {
    visible: bool,
    entries: Vec<EpisodeEntry>,
    notices: Vec<&'static str>,
}

impl EpisodeArea {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Removes all listing entries and notices
    pub fn clear(&mut self) {
        self.entries.clear();
        self.notices.clear();
    }

    pub fn entries(&self) -> &[EpisodeEntry] {
        &self.entries
    }

    pub fn notices(&self) -> &[&'static str] {
        &self.notices
    }
}

/// Formats an episode as `"<name>" (season <s>, episode <n>)`
///
/// Episodes without a number (specials) are listed as `special` instead.
pub fn episode_label(episode: &Episode) -> String {
    match episode.number {
        Some(number) => format!(
            "\"{}\" (season {}, episode {})",
            episode.name, episode.season, number
        ),
        None => format!("\"{}\" (season {}, special)", episode.name, episode.season),
    }
}

/// Replaces the content of the show list with one block per show
///
/// Blocks are appended in input order. An empty input leaves the list empty.
pub fn render_shows(list: &mut ShowList, shows: Vec<Show>) {
    list.blocks.clear();
    list.blocks.extend(shows.into_iter().map(ShowBlock::from));
}

/// Appends episodes to the episode area
///
/// Appends one entry per episode in input order, or a single
/// [`NO_EPISODES_NOTICE`] when `episodes` is empty. Existing content is kept;
/// callers clear the area first.
pub fn render_episodes(area: &mut EpisodeArea, episodes: &[Episode]) {
    if episodes.is_empty() {
        area.notices.push(NO_EPISODES_NOTICE);
        return;
    }

    area.entries.extend(episodes.iter().map(|episode| EpisodeEntry {
        episode_id: episode.id,
        text: episode_label(episode),
    }));
}
