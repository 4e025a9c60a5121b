/// TVMaze catalog implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchHit, TvMazeShow};
use super::{Catalog, CatalogError, Episode, MISSING_SUMMARY, Show, ShowId};
use crate::config::Settings;
use crate::markup::TrustedMarkup;
use reqwest::Url;
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Catalog backed by the TVMaze API.
///
/// Talks to https://api.tvmaze.com (or the configured base URL) using the
/// `/search/shows` and `/shows/{id}/episodes` endpoints.
pub struct TvMazeCatalog {
    client: reqwest::blocking::Client,
    base_url: Url,
    placeholder_image: String,
}

impl TvMazeCatalog {
    /// Creates a catalog client from the given settings.
    pub fn new(settings: &Settings) -> Result<Self, CatalogError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            placeholder_image: settings.placeholder_image.clone(),
        })
    }

    /// Converts a TVMaze show to our internal Show structure.
    ///
    /// Null or empty summaries and missing artwork are replaced by placeholders.
    fn convert_show(tvmaze_show: TvMazeShow, placeholder_image: &str) -> Show {
        let summary = tvmaze_show
            .summary
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| MISSING_SUMMARY.to_string());

        Show {
            id: tvmaze_show.id,
            name: tvmaze_show.name,
            summary: TrustedMarkup::from_catalog(summary),
            image: tvmaze_show
                .image
                .map(|image| image.original)
                .unwrap_or_else(|| placeholder_image.to_string()),
        }
    }

    /// Converts a TVMaze episode to our internal Episode structure.
    fn convert_episode(tvmaze_episode: TvMazeEpisode) -> Episode {
        Episode {
            id: tvmaze_episode.id,
            name: tvmaze_episode.name.unwrap_or_else(|| "Unknown".to_string()),
            season: tvmaze_episode.season,
            number: tvmaze_episode.number,
        }
    }

    /// Joins path segments onto the base URL, escaping each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                CatalogError::RequestError(format!("Invalid base URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Checks the response status and decodes the JSON body.
    fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, CatalogError> {
        if response.status() == 404 {
            return Err(CatalogError::NotFound(what.to_string()));
        }

        if !response.status().is_success() {
            return Err(CatalogError::RequestError(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json()
            .map_err(|e| CatalogError::ParseError(e.to_string()))
    }
}

impl Catalog for TvMazeCatalog {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError> {
        let url = self.endpoint(&["search", "shows"])?;
        debug!(%url, term, "searching shows");

        let response = self
            .client
            .get(url)
            .query(&[("q", term)])
            .send()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        let hits: Vec<TvMazeSearchHit> = Self::decode(response, &format!("search '{term}'"))?;
        debug!(count = hits.len(), "search returned");

        Ok(hits
            .into_iter()
            .map(|hit| Self::convert_show(hit.show, &self.placeholder_image))
            .collect())
    }

    fn list_episodes(&self, id: &ShowId) -> Result<Vec<Episode>, CatalogError> {
        let show_id = id.to_string();
        let url = self.endpoint(&["shows", &show_id, "episodes"])?;
        debug!(%url, "listing episodes");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        let episodes: Vec<TvMazeEpisode> = Self::decode(response, &format!("show {show_id}"))?;
        debug!(count = episodes.len(), "episode list returned");

        Ok(episodes.into_iter().map(Self::convert_episode).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn catalog_for(server_uri: &str) -> TvMazeCatalog {
        let settings = Settings {
            base_url: Url::parse(server_uri).unwrap(),
            ..Settings::default()
        };
        TvMazeCatalog::new(&settings).unwrap()
    }

    /// Runs the blocking client off the async test runtime.
    async fn with_catalog<T, F>(server: &MockServer, f: F) -> T
    where
        T: Send + 'static,
        F: FnOnce(&TvMazeCatalog) -> T + Send + 'static,
    {
        let uri = server.uri();
        tokio::task::spawn_blocking(move || f(&catalog_for(&uri)))
            .await
            .unwrap()
    }

    const SEARCH_BODY: &str = r#"[
        {"score": 0.9, "show": {"id": 975, "name": "Batman",
            "summary": "<p>The Caped Crusader.</p>",
            "image": {"medium": "https://img/m/975.jpg", "original": "https://img/o/975.jpg"}}},
        {"score": 0.7, "show": {"id": 481, "name": "Batman Beyond",
            "summary": null, "image": null}},
        {"score": 0.5, "show": {"id": 31, "name": "The Batman",
            "summary": "", "image": {"medium": "m", "original": "o"}}}
    ]"#;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_search_shows_normalizes_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .and(query_param("q", "Batman"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_BODY))
            .expect(1)
            .mount(&server)
            .await;

        let shows = with_catalog(&server, |c| c.search_shows("Batman"))
            .await
            .unwrap();

        assert_eq!(shows.len(), 3);
        assert_eq!(shows[0].id, ShowId::Numeric(975));
        assert_eq!(shows[0].name, "Batman");
        assert_eq!(shows[0].image, "https://img/o/975.jpg");
        assert_eq!(shows[0].summary.as_str(), "<p>The Caped Crusader.</p>");

        assert_eq!(shows[1].name, "Batman Beyond");
        assert_eq!(shows[1].image, "https://tinyurl.com/tv-missing");
        assert_eq!(shows[1].summary.as_str(), "<p>No Summary Available</p>");

        assert_eq!(shows[2].summary.as_str(), MISSING_SUMMARY);
        assert_eq!(shows[2].image, "o");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_search_shows_with_empty_term() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .and(query_param("q", ""))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let shows = with_catalog(&server, |c| c.search_shows("")).await.unwrap();
        assert!(shows.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_search_shows_propagates_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = with_catalog(&server, |c| c.search_shows("Batman"))
            .await
            .unwrap_err();
        match err {
            CatalogError::RequestError(msg) => assert_eq!(msg, "HTTP 500 Internal Server Error"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_search_shows_rejects_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"score": 1}]"#))
            .mount(&server)
            .await;

        let err = with_catalog(&server, |c| c.search_shows("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::ParseError(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_list_episodes_preserves_order() {
        let server = MockServer::start().await;
        let body = r#"[
            {"id": 2, "name": "Second", "season": 1, "number": 2},
            {"id": 1, "name": "Pilot", "season": 1, "number": 1},
            {"id": 9, "name": null, "season": 2, "number": null}
        ]"#;
        Mock::given(method("GET"))
            .and(path("/shows/42/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let episodes = with_catalog(&server, |c| c.list_episodes(&ShowId::Numeric(42)))
            .await
            .unwrap();

        assert_eq!(
            episodes,
            vec![
                Episode { id: 2, name: "Second".to_string(), season: 1, number: Some(2) },
                Episode { id: 1, name: "Pilot".to_string(), season: 1, number: Some(1) },
                Episode { id: 9, name: "Unknown".to_string(), season: 2, number: None },
            ]
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_list_episodes_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shows/7/episodes"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = with_catalog(&server, |c| c.list_episodes(&ShowId::Numeric(7)))
            .await
            .unwrap_err();
        match err {
            CatalogError::NotFound(what) => assert_eq!(what, "show 7"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_convert_show_uses_configured_placeholder() {
        let show = TvMazeCatalog::convert_show(
            TvMazeShow {
                id: ShowId::Numeric(1),
                name: "Nameless".to_string(),
                summary: None,
                image: None,
            },
            "https://example.org/none.png",
        );
        assert_eq!(show.image, "https://example.org/none.png");
        assert_eq!(show.summary.as_str(), MISSING_SUMMARY);
    }

    #[test]
    fn test_endpoint_escapes_text_ids() {
        let catalog = catalog_for("http://localhost:1234/api/");
        let url = catalog.endpoint(&["shows", "a b/c", "episodes"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/api/shows/a%20b%2Fc/episodes");
    }
}
