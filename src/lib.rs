//! ShowScout - Search the TVmaze catalog and browse episode listings
//!
//! This library provides the catalog client, the page view-state with its
//! show and episode renderers, and the controller that ties user interaction
//! to both.

mod catalog;
mod config;
mod controller;
mod markup;
mod page;
mod render;

pub use catalog::{
    Catalog, CatalogError, Episode, MISSING_IMAGE_URL, MISSING_SUMMARY, Show, ShowId,
    TvMazeCatalog,
};
pub use config::{ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, Settings};
pub use controller::{Controller, ControllerError, EpisodesTicket, Outcome, SearchTicket};
pub use markup::{TrustedMarkup, escape_html};
pub use page::{Page, render_html, render_text};
pub use render::{
    EPISODES_CONTROL_LABEL, EpisodeArea, EpisodeEntry, NO_EPISODES_NOTICE, ShowBlock, ShowList,
    episode_label, render_episodes, render_shows,
};

use thiserror::Error;

/// Top-level error type for ShowScout operations
#[derive(Debug, Error)]
pub enum ShowScoutError {
    /// Invalid settings
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error while talking to the catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error while handling user interaction
    #[error("Interaction error: {0}")]
    Controller(#[from] ControllerError),

    /// Failed to serialize output
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Creates a controller backed by the TVmaze catalog
///
/// # Examples
///
/// ```no_run
/// use show_scout::{Settings, connect, render_text};
///
/// let mut controller = connect(&Settings::default()).unwrap();
/// controller.type_query("Batman");
/// controller.submit_search().unwrap();
/// controller.open_episodes(0).unwrap();
/// println!("{}", render_text(controller.page()));
/// ```
pub fn connect(settings: &Settings) -> Result<Controller<TvMazeCatalog>, ShowScoutError> {
    let catalog = TvMazeCatalog::new(settings)?;
    Ok(Controller::new(catalog))
}
