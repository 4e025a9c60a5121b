/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
use super::ShowId;
use serde::Deserialize;

/// A single hit from the `/search/shows` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchHit {
    /// The matched show
    pub show: TvMazeShow,
}

/// Show object as embedded in search hits.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: ShowId,
    /// The name of the TV show
    pub name: String,
    /// Summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Artwork (may be null)
    pub image: Option<TvMazeImage>,
}

/// Artwork URLs of a show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    /// Full size image
    pub original: String,
}

/// A single episode from the `/shows/{id}/episodes` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number (0 for specials)
    pub season: u32,
    /// Episode number within the season (null for specials)
    pub number: Option<u32>,
}
