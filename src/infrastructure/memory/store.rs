//! Collections-backed implementation of the repository traits.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Director, Film, Genre, User};
use crate::domain::repositories::{
    DirectorRepository, FilmFilter, FilmRepository, FriendRepository, LikeRepository,
    MetadataRepository, UserRepository,
};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Catalog {
    films: BTreeMap<i64, Film>,
    users: BTreeMap<i64, User>,
    directors: BTreeMap<i64, Director>,
    genres: BTreeMap<i64, Genre>,
    film_genres: HashMap<i64, BTreeSet<i64>>,
    film_directors: HashMap<i64, BTreeSet<i64>>,
    likes_by_film: HashMap<i64, HashSet<i64>>,
    likes_by_user: HashMap<i64, HashSet<i64>>,
    friends: HashMap<i64, BTreeSet<i64>>,
}

impl Catalog {
    fn matches(&self, film: &Film, filter: &FilmFilter) -> bool {
        let genre_ok = filter.genre_id.is_none_or(|genre_id| {
            self.film_genres
                .get(&film.id)
                .is_some_and(|genres| genres.contains(&genre_id))
        });
        let year_ok = filter
            .release_year
            .is_none_or(|year| film.release_year() == year);
        genre_ok && year_ok
    }
}

/// In-memory store holding a whole catalog snapshot.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    catalog: RwLock<Catalog>,
}

impl InMemoryStore {
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }
}

/// Populates an [`InMemoryStore`] before it is shared.
///
/// Films are stored bare; any genres or directors already attached to a film
/// passed to [`StoreBuilder::film`] are registered as associations.
#[derive(Debug, Default)]
pub struct StoreBuilder {
    catalog: Catalog,
}

impl StoreBuilder {
    pub fn genre(mut self, genre: Genre) -> Self {
        self.catalog.genres.insert(genre.id, genre);
        self
    }

    pub fn director(mut self, director: Director) -> Self {
        self.catalog.directors.insert(director.id, director);
        self
    }

    pub fn user(mut self, user: User) -> Self {
        self.catalog.users.insert(user.id, user);
        self
    }

    pub fn film(mut self, mut film: Film) -> Self {
        for genre in std::mem::take(&mut film.genres) {
            self.catalog
                .film_genres
                .entry(film.id)
                .or_default()
                .insert(genre.id);
            self.catalog.genres.entry(genre.id).or_insert(genre);
        }
        for director in std::mem::take(&mut film.directors) {
            self.catalog
                .film_directors
                .entry(film.id)
                .or_default()
                .insert(director.id);
            self.catalog.directors.entry(director.id).or_insert(director);
        }
        self.catalog.films.insert(film.id, film);
        self
    }

    pub fn film_genre(mut self, film_id: i64, genre_id: i64) -> Self {
        self.catalog
            .film_genres
            .entry(film_id)
            .or_default()
            .insert(genre_id);
        self
    }

    pub fn film_director(mut self, film_id: i64, director_id: i64) -> Self {
        self.catalog
            .film_directors
            .entry(film_id)
            .or_default()
            .insert(director_id);
        self
    }

    /// Records that `user_id` likes `film_id`. Repeated edges collapse into one.
    pub fn like(mut self, user_id: i64, film_id: i64) -> Self {
        self.catalog
            .likes_by_film
            .entry(film_id)
            .or_default()
            .insert(user_id);
        self.catalog
            .likes_by_user
            .entry(user_id)
            .or_default()
            .insert(film_id);
        self
    }

    /// Records the directed friend edge `user_id -> friend_id`.
    pub fn friend(mut self, user_id: i64, friend_id: i64) -> Self {
        self.catalog
            .friends
            .entry(user_id)
            .or_default()
            .insert(friend_id);
        self
    }

    pub fn build(self) -> InMemoryStore {
        InMemoryStore {
            catalog: RwLock::new(self.catalog),
        }
    }
}

#[async_trait]
impl FilmRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Film>, AppError> {
        Ok(self.catalog.read().await.films.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Film>, AppError> {
        Ok(self.catalog.read().await.films.values().cloned().collect())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Film>, AppError> {
        let catalog = self.catalog.read().await;
        let wanted: BTreeSet<i64> = ids.iter().copied().collect();
        Ok(wanted
            .into_iter()
            .filter_map(|id| catalog.films.get(&id).cloned())
            .collect())
    }

    async fn find_filtered(&self, filter: FilmFilter) -> Result<Vec<Film>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .films
            .values()
            .filter(|film| catalog.matches(film, &filter))
            .cloned()
            .collect())
    }

    async fn find_by_director(&self, director_id: i64) -> Result<Vec<Film>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .films
            .values()
            .filter(|film| {
                catalog
                    .film_directors
                    .get(&film.id)
                    .is_some_and(|directors| directors.contains(&director_id))
            })
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for InMemoryStore {
    async fn likers_of_film(&self, film_id: i64) -> Result<HashSet<i64>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .likes_by_film
            .get(&film_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn films_liked_by(&self, user_id: i64) -> Result<HashSet<i64>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .likes_by_user
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn like_counts(&self, film_ids: &[i64]) -> Result<HashMap<i64, u64>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(film_ids
            .iter()
            .filter_map(|id| {
                catalog
                    .likes_by_film
                    .get(id)
                    .map(|likers| (*id, likers.len() as u64))
            })
            .collect())
    }

    async fn likers_of_films(
        &self,
        film_ids: &[i64],
    ) -> Result<HashMap<i64, HashSet<i64>>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(film_ids
            .iter()
            .filter_map(|id| {
                catalog
                    .likes_by_film
                    .get(id)
                    .map(|likers| (*id, likers.clone()))
            })
            .collect())
    }
}

#[async_trait]
impl MetadataRepository for InMemoryStore {
    async fn genres_for_films(
        &self,
        film_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Genre>>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(film_ids
            .iter()
            .filter_map(|film_id| {
                let genres: Vec<Genre> = catalog
                    .film_genres
                    .get(film_id)?
                    .iter()
                    .filter_map(|genre_id| catalog.genres.get(genre_id).cloned())
                    .collect();
                Some((*film_id, genres))
            })
            .collect())
    }

    async fn directors_for_films(
        &self,
        film_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Director>>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(film_ids
            .iter()
            .filter_map(|film_id| {
                let directors: Vec<Director> = catalog
                    .film_directors
                    .get(film_id)?
                    .iter()
                    .filter_map(|director_id| catalog.directors.get(director_id).cloned())
                    .collect();
                Some((*film_id, directors))
            })
            .collect())
    }
}

#[async_trait]
impl DirectorRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Director>, AppError> {
        Ok(self.catalog.read().await.directors.get(&id).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, AppError> {
        let catalog = self.catalog.read().await;
        let wanted: BTreeSet<i64> = ids.iter().copied().collect();
        Ok(wanted
            .into_iter()
            .filter_map(|id| catalog.users.get(&id).cloned())
            .collect())
    }
}

#[async_trait]
impl FriendRepository for InMemoryStore {
    async fn friends_of(&self, user_id: i64) -> Result<HashSet<i64>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .friends
            .get(&user_id)
            .map(|friends| friends.iter().copied().collect())
            .unwrap_or_default())
    }
}
