//! Free-text film search.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use super::MetadataEnricher;
use crate::domain::entities::{Director, Film};
use crate::domain::like_graph::LikeGraph;
use crate::domain::query::{SearchField, SearchFields};
use crate::domain::repositories::{FilmRepository, MetadataRepository};
use crate::error::AppError;

/// Case-insensitive substring search over titles and director names.
pub struct SearchService {
    films: Arc<dyn FilmRepository>,
    metadata: Arc<dyn MetadataRepository>,
    graph: LikeGraph,
    enricher: MetadataEnricher,
}

impl SearchService {
    pub fn new(
        films: Arc<dyn FilmRepository>,
        metadata: Arc<dyn MetadataRepository>,
        graph: LikeGraph,
        enricher: MetadataEnricher,
    ) -> Self {
        Self {
            films,
            metadata,
            graph,
            enricher,
        }
    }

    /// Films whose title or director name contains `query`.
    ///
    /// Matching lowercases both sides. When `fields` holds both title and
    /// director, a film matching either one is returned. Ordered by like count
    /// descending, ties by film id ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `query` is blank.
    /// Returns [`AppError::Internal`] on storage errors.
    #[tracing::instrument(skip(self))]
    pub async fn search_films(
        &self,
        query: &str,
        fields: &SearchFields,
    ) -> Result<Vec<Film>, AppError> {
        if query.trim().is_empty() {
            return Err(AppError::bad_request(
                "Search query must not be blank",
                json!({ "query": query }),
            ));
        }
        let needle = query.to_lowercase();

        let catalog = self.films.find_all().await?;

        let directors = if fields.contains(SearchField::Director) && !catalog.is_empty() {
            let ids: Vec<i64> = catalog.iter().map(|film| film.id).collect();
            self.metadata.directors_for_films(&ids).await?
        } else {
            HashMap::new()
        };

        let matches: Vec<Film> = catalog
            .into_iter()
            .filter(|film| {
                (fields.contains(SearchField::Title) && film.title_contains(&needle))
                    || (fields.contains(SearchField::Director)
                        && directed_by_match(directors.get(&film.id), &needle))
            })
            .collect();
        tracing::debug!(matches = matches.len(), "Search matched films");

        let ranked = self.graph.rank_by_popularity(matches).await?;
        self.enricher.enrich(ranked).await
    }
}

fn directed_by_match(directors: Option<&Vec<Director>>, needle: &str) -> bool {
    directors.is_some_and(|directors| {
        directors
            .iter()
            .any(|director| director.name.to_lowercase().contains(needle))
    })
}
