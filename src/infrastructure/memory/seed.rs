//! JSON seed format for the in-memory store.
//!
//! ```json
//! {
//!   "genres": [{ "id": 1, "name": "Comedy" }],
//!   "directors": [{ "id": 1, "name": "Lana Wachowski" }],
//!   "users": [{ "id": 1, "login": "neo", "name": "Thomas", "birthday": "1971-09-13" }],
//!   "films": [{
//!     "id": 1, "name": "The Matrix", "description": "", "release_date": "1999-03-31",
//!     "duration": 136, "mpa": { "id": 4, "name": "R" },
//!     "genre_ids": [1], "director_ids": [1]
//!   }],
//!   "likes": [{ "user_id": 1, "film_id": 1 }],
//!   "friends": [{ "user_id": 1, "friend_id": 2 }]
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use super::store::{InMemoryStore, StoreBuilder};
use crate::domain::entities::{Director, Film, Genre, Mpa, User};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub genres: Vec<NamedRecord>,
    pub directors: Vec<NamedRecord>,
    pub users: Vec<UserRecord>,
    pub films: Vec<FilmRecord>,
    pub likes: Vec<LikeRecord>,
    pub friends: Vec<FriendRecord>,
}

#[derive(Debug, Deserialize)]
pub struct NamedRecord {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub name: String,
    pub birthday: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct FilmRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa: NamedRecord,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub director_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LikeRecord {
    pub user_id: i64,
    pub film_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct FriendRecord {
    pub user_id: i64,
    pub friend_id: i64,
}

impl SeedData {
    /// Reads and parses a seed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid seed JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid seed file {}", path.display()))
    }

    /// Parses seed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the seed format.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Builds a store holding exactly this seed.
    pub fn into_store(self) -> InMemoryStore {
        let mut builder = StoreBuilder::default();

        for genre in self.genres {
            builder = builder.genre(Genre::new(genre.id, genre.name));
        }
        for director in self.directors {
            builder = builder.director(Director::new(director.id, director.name));
        }
        for user in self.users {
            builder = builder.user(User::new(user.id, user.login, user.name, user.birthday));
        }
        for record in self.films {
            let film = Film::new(
                record.id,
                record.name,
                record.description,
                record.release_date,
                record.duration,
                Mpa::new(record.mpa.id, record.mpa.name),
            );
            builder = builder.film(film);
            for genre_id in record.genre_ids {
                builder = builder.film_genre(record.id, genre_id);
            }
            for director_id in record.director_ids {
                builder = builder.film_director(record.id, director_id);
            }
        }
        for like in self.likes {
            builder = builder.like(like.user_id, like.film_id);
        }
        for friend in self.friends {
            builder = builder.friend(friend.user_id, friend.friend_id);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{FilmRepository, LikeRepository, MetadataRepository};

    const SEED: &str = r#"{
        "genres": [{ "id": 1, "name": "Comedy" }],
        "directors": [{ "id": 3, "name": "Lana Wachowski" }],
        "films": [{
            "id": 10, "name": "The Matrix", "release_date": "1999-03-31",
            "duration": 136, "mpa": { "id": 4, "name": "R" },
            "genre_ids": [1], "director_ids": [3]
        }],
        "likes": [{ "user_id": 1, "film_id": 10 }, { "user_id": 2, "film_id": 10 }]
    }"#;

    #[tokio::test]
    async fn test_seed_builds_store() {
        let store = SeedData::from_json(SEED).unwrap().into_store();

        let film = store.find_by_id(10).await.unwrap().unwrap();
        assert_eq!(film.name, "The Matrix");
        assert_eq!(film.mpa.name, "R");

        assert_eq!(store.like_counts(&[10]).await.unwrap()[&10], 2);

        let directors = store.directors_for_films(&[10]).await.unwrap();
        assert_eq!(directors[&10][0].name, "Lana Wachowski");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let seed = SeedData::from_json("{}").unwrap();
        assert!(seed.films.is_empty());
        assert!(seed.likes.is_empty());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let raw = r#"{"films": [{"id": 1, "name": "x", "release_date": "yesterday",
                      "duration": 1, "mpa": {"id": 1, "name": "G"}}]}"#;
        assert!(SeedData::from_json(raw).is_err());
    }
}
