//! Read-through gateway to the external movie catalog.
//!
//! The catalog is consumed, not owned: nothing is cached or persisted and
//! every query re-fetches. Failures are translated into [`MovieError`]
//! kinds so callers can surface them without guessing at causes.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum MovieError {
    #[error("movie catalog request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("movie catalog returned HTTP {0}")]
    Status(u16),

    #[error("movie catalog response could not be decoded: {0}")]
    Decode(String),
}

impl MovieError {
    /// Stable kind tag, attached to GraphQL error extensions.
    pub fn kind(&self) -> &'static str {
        match self {
            MovieError::Network(_) => "NETWORK",
            MovieError::Status(_) => "HTTP_STATUS",
            MovieError::Decode(_) => "DECODE",
        }
    }
}

/// One movie as the external catalog describes it.
///
/// The shape is dictated by the catalog, so every field beyond the id is
/// optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub runtime: Option<i32>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub imdb_code: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub medium_cover_image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: ListData,
}

#[derive(Debug, Deserialize)]
struct ListData {
    #[serde(default)]
    movies: Vec<Movie>,
}

#[derive(Debug, Deserialize)]
struct DetailsEnvelope {
    data: DetailsData,
}

#[derive(Debug, Deserialize)]
struct DetailsData {
    movie: Option<Movie>,
}

#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError>;
    async fn movie_details(&self, id: &str) -> Result<Option<Movie>, MovieError>;
}

/// HTTP client for a YTS-style movie listing API.
pub struct YtsClient {
    client: reqwest::Client,
    base_url: String,
}

impl YtsClient {
    pub fn new(base_url: &str) -> Result<Self, MovieError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, MovieError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MovieError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MovieError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MovieCatalog for YtsClient {
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError> {
        let url = format!("{}/list_movies.json", self.base_url);
        let envelope: ListEnvelope = self.fetch_json(&url).await?;
        Ok(envelope.data.movies)
    }

    async fn movie_details(&self, id: &str) -> Result<Option<Movie>, MovieError> {
        let url = format!("{}/movie_details.json?movie_id={}", self.base_url, id);
        let envelope: DetailsEnvelope = self.fetch_json(&url).await?;

        // The catalog answers unknown ids with a placeholder movie of id 0.
        Ok(envelope.data.movie.filter(|movie| movie.id != 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_decodes_catalog_shape() {
        let body = r#"{
            "status": "ok",
            "data": {
                "movie_count": 1,
                "movies": [
                    {"id": 10, "title": "Oldboy", "year": 2003, "rating": 8.3,
                     "genres": ["Thriller"], "extra_field": true}
                ]
            }
        }"#;

        let envelope: ListEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.movies.len(), 1);
        let movie = &envelope.data.movies[0];
        assert_eq!(movie.id, 10);
        assert_eq!(movie.title.as_deref(), Some("Oldboy"));
        assert_eq!(movie.year, Some(2003));
    }

    #[test]
    fn details_envelope_tolerates_missing_movie() {
        let body = r#"{"status": "ok", "data": {"movie": null}}"#;
        let envelope: DetailsEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.data.movie.is_none());
    }
}
