use async_graphql::*;

use crate::movies;

/// Movie as reported by the external catalog; everything beyond the id is
/// optional because the shape belongs to the catalog, not to this service.
#[derive(SimpleObject, Clone)]
pub struct Movie {
    pub id: ID,
    pub title: Option<String>,
    pub title_english: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub runtime: Option<i32>,
    pub genres: Option<Vec<String>>,
    pub summary: Option<String>,
    pub language: Option<String>,
    pub imdb_code: Option<String>,
    pub url: Option<String>,
    pub medium_cover_image: Option<String>,
}

impl From<movies::Movie> for Movie {
    fn from(model: movies::Movie) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            title: model.title,
            title_english: model.title_english,
            year: model.year,
            rating: model.rating,
            runtime: model.runtime,
            genres: model.genres,
            summary: model.summary,
            language: model.language,
            imdb_code: model.imdb_code,
            url: model.url,
            medium_cover_image: model.medium_cover_image,
        }
    }
}
