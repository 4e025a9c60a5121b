//! Interaction controller
//!
//! Wires user interaction (search submission, clicks on a show's "Episodes"
//! control) to the catalog and the renderers. The controller is the only
//! place that mutates the [`Page`].
//!
//! Each interaction is split in two steps: `begin_*` applies the immediate
//! display changes and issues a ticket, `complete_*` applies the catalog
//! response. Tickets carry a generation number per interaction kind, and only
//! the response to the most recently issued ticket is applied, so a slow
//! response can never overwrite a newer one. The `submit_search` and
//! `open_episodes` shortcuts run both steps back to back.

use crate::catalog::{Catalog, CatalogError, Episode, Show, ShowId};
use crate::page::Page;
use crate::render::{render_episodes, render_shows};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while handling user interaction
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The catalog request failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The clicked show block does not exist
    #[error("No show at position {0}")]
    NoSuchShow(usize),
}

/// Whether a catalog response was applied to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was rendered
    Applied,
    /// A newer request of the same kind was issued meanwhile
    Stale,
}

/// Pending search issued by [`Controller::begin_search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    /// Search term read from the search box
    pub term: String,
}

/// Pending episode listing issued by [`Controller::begin_episodes`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodesTicket {
    generation: u64,
    /// Identifier recovered from the clicked show block
    pub show_id: ShowId,
}

/// Drives the search page on top of a catalog
pub struct Controller<C> {
    catalog: C,
    page: Page,
    search_generation: u64,
    episodes_generation: u64,
}

impl<C: Catalog> Controller<C> {
    /// Creates a controller with an empty page
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            page: Page::default(),
            search_generation: 0,
            episodes_generation: 0,
        }
    }

    /// Current view-state
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The catalog requests are sent to
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Replaces the text of the search box
    pub fn type_query(&mut self, text: impl Into<String>) {
        self.page.search_query = text.into();
    }

    /// Starts a search submission
    ///
    /// Reads the search box and hides the episode area. Searching always
    /// returns the page to the "show list only" state.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.search_generation += 1;
        self.page.episodes.hide();

        let ticket = SearchTicket {
            generation: self.search_generation,
            term: self.page.search_query.clone(),
        };
        debug!(generation = ticket.generation, term = %ticket.term, "search issued");
        ticket
    }

    /// Applies the catalog response to a search
    ///
    /// On success the show list is replaced and the search box cleared. On
    /// failure the error is returned and the show list stays as it was.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<Show>, CatalogError>,
    ) -> Result<Outcome, ControllerError> {
        if ticket.generation != self.search_generation {
            debug!(generation = ticket.generation, "discarding stale search response");
            return Ok(Outcome::Stale);
        }

        let shows = result?;
        info!(term = %ticket.term, count = shows.len(), "showing search results");
        render_shows(&mut self.page.shows, shows);
        self.page.search_query.clear();
        Ok(Outcome::Applied)
    }

    /// Handles a search submission end to end
    pub fn submit_search(&mut self) -> Result<Outcome, ControllerError> {
        let ticket = self.begin_search();
        let result = self.catalog.search_shows(&ticket.term);
        self.complete_search(ticket, result)
    }

    /// Starts opening the episode listing of the show block at `index`
    ///
    /// Shows the episode area, clears its listing and any stale notice, and
    /// recovers the show identifier from the clicked block.
    pub fn begin_episodes(&mut self, index: usize) -> Result<EpisodesTicket, ControllerError> {
        let show_id = self
            .page
            .shows
            .get(index)
            .map(|block| block.show_id.clone())
            .ok_or(ControllerError::NoSuchShow(index))?;

        self.episodes_generation += 1;
        self.page.episodes.show();
        self.page.episodes.clear();

        let ticket = EpisodesTicket {
            generation: self.episodes_generation,
            show_id,
        };
        debug!(generation = ticket.generation, show_id = %ticket.show_id, "episode listing issued");
        Ok(ticket)
    }

    /// Applies the catalog response to an episode listing
    pub fn complete_episodes(
        &mut self,
        ticket: EpisodesTicket,
        result: Result<Vec<Episode>, CatalogError>,
    ) -> Result<Outcome, ControllerError> {
        if ticket.generation != self.episodes_generation {
            debug!(generation = ticket.generation, "discarding stale episode response");
            return Ok(Outcome::Stale);
        }

        let episodes = result?;
        info!(show_id = %ticket.show_id, count = episodes.len(), "showing episodes");
        render_episodes(&mut self.page.episodes, &episodes);
        Ok(Outcome::Applied)
    }

    /// Handles a click on the "Episodes" control of the show block at `index`
    pub fn open_episodes(&mut self, index: usize) -> Result<Outcome, ControllerError> {
        let ticket = self.begin_episodes(index)?;
        let result = self.catalog.list_episodes(&ticket.show_id);
        self.complete_episodes(ticket, result)
    }
}
