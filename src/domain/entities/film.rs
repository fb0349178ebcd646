//! Film entity and its MPA rating.

use chrono::{Datelike, NaiveDate};

use super::{Director, Genre};

/// Motion Picture Association rating attached to every film.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mpa {
    pub id: i64,
    pub name: String,
}

impl Mpa {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A catalogued film.
///
/// `genres` are kept in genre id order without duplicates, `directors` in
/// director id order. Both are empty on films fetched straight from a
/// repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    /// Duration in minutes.
    pub duration: i32,
    pub mpa: Mpa,
    pub genres: Vec<Genre>,
    pub directors: Vec<Director>,
}

impl Film {
    /// Creates a bare film with no genres or directors attached.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        release_date: NaiveDate,
        duration: i32,
        mpa: Mpa,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            release_date,
            duration,
            mpa,
            genres: Vec::new(),
            directors: Vec::new(),
        }
    }

    pub fn release_year(&self) -> i32 {
        self.release_date.year()
    }

    /// Returns true if the film's title contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(name: &str) -> Film {
        Film::new(
            1,
            name,
            "",
            NaiveDate::from_ymd_opt(1999, 3, 31).unwrap(),
            136,
            Mpa::new(4, "R"),
        )
    }

    #[test]
    fn test_new_film_is_bare() {
        let film = film("The Matrix");
        assert!(film.genres.is_empty());
        assert!(film.directors.is_empty());
        assert_eq!(film.release_year(), 1999);
    }

    #[test]
    fn test_title_contains_is_case_insensitive() {
        let film = film("The Matrix");
        assert!(film.title_contains("mat"));
        assert!(film.title_contains("the matrix"));
        assert!(!film.title_contains("reloaded"));
    }

    #[test]
    fn test_title_contains_non_ascii() {
        let film = film("Ёлки");
        assert!(film.title_contains("ёлк"));
    }
}
