/// Data structures and traits for querying a tv show catalog.
///
/// This module provides the normalized show and episode records handed to the
/// renderers, as well as the trait implemented by catalog backends.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeCatalog;

use crate::markup::TrustedMarkup;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Summary markup used when the catalog has no summary for a show
pub const MISSING_SUMMARY: &str = "<p>No Summary Available</p>";

/// Image URL used when the catalog has no image for a show
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Errors that can occur while talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request to the catalog service failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse the service's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Opaque identifier of a show as handed out by the catalog.
///
/// The catalog may deliver numeric or textual ids. Callers may compare and
/// display them, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShowId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowId::Numeric(id) => write!(f, "{id}"),
            ShowId::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ShowId {
    fn from(id: u64) -> Self {
        ShowId::Numeric(id)
    }
}

impl From<&str> for ShowId {
    /// Digit-only input becomes a numeric id so that ids typed on the command
    /// line compare equal to the ones delivered by the service.
    fn from(id: &str) -> Self {
        match id.parse::<u64>() {
            Ok(numeric) => ShowId::Numeric(numeric),
            Err(_) => ShowId::Text(id.to_string()),
        }
    }
}

/// A show matched by a catalog search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Show {
    /// Identifier used to fetch the show's episodes
    pub id: ShowId,
    /// Display name
    pub name: String,
    /// HTML summary as delivered by the catalog (or the placeholder)
    pub summary: TrustedMarkup,
    /// Image URL (or the placeholder)
    pub image: String,
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Episode {
    /// Catalog identifier of the episode
    pub id: u64,
    /// The episode title
    pub name: String,
    /// The season number this episode belongs to (0 for specials)
    pub season: u32,
    /// The episode number within the season, absent for specials
    pub number: Option<u32>,
}

/// Trait for catalog backends that can search shows and list episodes.
///
/// Both operations are read-only. Implementations must keep the order the
/// backend returns and must not re-sort results.
pub trait Catalog {
    /// Searches the catalog for shows matching `term`.
    ///
    /// # Arguments
    ///
    /// * `term` - Free text, the empty string included
    ///
    /// # Returns
    ///
    /// The matched shows, normalized, in the order delivered by the catalog
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError>;

    /// Lists all episodes of the show identified by `id`.
    fn list_episodes(&self, id: &ShowId) -> Result<Vec<Episode>, CatalogError>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError> {
        (**self).search_shows(term)
    }

    fn list_episodes(&self, id: &ShowId) -> Result<Vec<Episode>, CatalogError> {
        (**self).list_episodes(id)
    }
}
