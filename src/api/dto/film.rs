//! Film response DTOs.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{Director, Film, Genre, Mpa};

/// A film as returned by every ranking endpoint.
///
/// # Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "The Matrix",
///   "description": "",
///   "releaseDate": "1999-03-31",
///   "duration": 136,
///   "mpa": { "id": 4, "name": "R" },
///   "genres": [{ "id": 6, "name": "Action" }],
///   "directors": [{ "id": 1, "name": "Lana Wachowski" }]
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa: NamedDto,
    pub genres: Vec<NamedDto>,
    pub directors: Vec<NamedDto>,
}

/// An `{id, name}` pair used for MPA ratings, genres, and directors.
#[derive(Debug, Serialize)]
pub struct NamedDto {
    pub id: i64,
    pub name: String,
}

impl From<Mpa> for NamedDto {
    fn from(mpa: Mpa) -> Self {
        Self {
            id: mpa.id,
            name: mpa.name,
        }
    }
}

impl From<Genre> for NamedDto {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
        }
    }
}

impl From<Director> for NamedDto {
    fn from(director: Director) -> Self {
        Self {
            id: director.id,
            name: director.name,
        }
    }
}

impl From<Film> for FilmDto {
    fn from(film: Film) -> Self {
        Self {
            id: film.id,
            name: film.name,
            description: film.description,
            release_date: film.release_date,
            duration: film.duration,
            mpa: film.mpa.into(),
            genres: film.genres.into_iter().map(NamedDto::from).collect(),
            directors: film.directors.into_iter().map(NamedDto::from).collect(),
        }
    }
}

/// Converts a service result into the response body.
pub fn to_film_dtos(films: Vec<Film>) -> Vec<FilmDto> {
    films.into_iter().map(FilmDto::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_dto_uses_camel_case() {
        let mut film = Film::new(
            7,
            "Heat",
            "Crime",
            NaiveDate::from_ymd_opt(1995, 12, 15).unwrap(),
            170,
            Mpa::new(4, "R"),
        );
        film.directors = vec![Director::new(3, "Michael Mann")];

        let json = serde_json::to_value(FilmDto::from(film)).unwrap();

        assert_eq!(json["releaseDate"], "1995-12-15");
        assert_eq!(json["mpa"]["name"], "R");
        assert_eq!(json["directors"][0]["id"], 3);
        assert_eq!(json["genres"], serde_json::json!([]));
    }
}
