//! Closed vocabularies for query parameters.
//!
//! Free-form strings from callers are parsed into these types at the boundary,
//! so ranking code only ever sees a legal sort mode or field set.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde_json::json;

use crate::error::AppError;

/// Ordering applied to a director's filmography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorSort {
    /// Like count descending.
    Likes,
    /// Release year ascending.
    Year,
}

impl FromStr for DirectorSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "likes" => Ok(DirectorSort::Likes),
            "year" => Ok(DirectorSort::Year),
            _ => Err(AppError::bad_request(
                "Unknown sort mode",
                json!({ "sort_by": s, "allowed": ["likes", "year"] }),
            )),
        }
    }
}

impl fmt::Display for DirectorSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectorSort::Likes => f.write_str("likes"),
            DirectorSort::Year => f.write_str("year"),
        }
    }
}

/// A film attribute that free-text search can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchField {
    Title,
    Director,
}

impl FromStr for SearchField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "director" => Ok(SearchField::Director),
            _ => Err(AppError::bad_request(
                "Unknown search field",
                json!({ "by": s, "allowed": ["title", "director"] }),
            )),
        }
    }
}

/// Non-empty set of fields a search runs against.
///
/// Defaults to title only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFields(BTreeSet<SearchField>);

impl SearchFields {
    pub fn title() -> Self {
        Self(BTreeSet::from([SearchField::Title]))
    }

    pub fn all() -> Self {
        Self(BTreeSet::from([SearchField::Title, SearchField::Director]))
    }

    /// Parses an optional comma-separated list such as `"title,director"`.
    ///
    /// A missing or blank list means title only. Unknown tokens are rejected.
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = raw else {
            return Ok(Self::title());
        };

        let fields = raw
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(SearchField::from_str)
            .collect::<Result<BTreeSet<_>, _>>()?;

        if fields.is_empty() {
            Ok(Self::title())
        } else {
            Ok(Self(fields))
        }
    }

    pub fn contains(&self, field: SearchField) -> bool {
        self.0.contains(&field)
    }
}

impl Default for SearchFields {
    fn default() -> Self {
        Self::title()
    }
}

impl FromIterator<SearchField> for SearchFields {
    fn from_iter<I: IntoIterator<Item = SearchField>>(iter: I) -> Self {
        let fields: BTreeSet<_> = iter.into_iter().collect();
        if fields.is_empty() {
            Self::title()
        } else {
            Self(fields)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_sort_is_case_insensitive() {
        assert_eq!("likes".parse::<DirectorSort>().unwrap(), DirectorSort::Likes);
        assert_eq!("YEAR".parse::<DirectorSort>().unwrap(), DirectorSort::Year);
        assert_eq!(" Year ".parse::<DirectorSort>().unwrap(), DirectorSort::Year);
    }

    #[test]
    fn test_director_sort_unknown_is_validation_error() {
        let err = "rating".parse::<DirectorSort>().unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_search_fields_default_to_title() {
        assert_eq!(SearchFields::parse(None).unwrap(), SearchFields::title());
        assert_eq!(SearchFields::parse(Some("")).unwrap(), SearchFields::title());
        assert_eq!(SearchFields::parse(Some(" , ")).unwrap(), SearchFields::title());
    }

    #[test]
    fn test_search_fields_both_orders() {
        assert_eq!(
            SearchFields::parse(Some("title,director")).unwrap(),
            SearchFields::all()
        );
        assert_eq!(
            SearchFields::parse(Some("director, TITLE")).unwrap(),
            SearchFields::all()
        );
    }

    #[test]
    fn test_search_fields_director_only() {
        let fields = SearchFields::parse(Some("director")).unwrap();
        assert!(fields.contains(SearchField::Director));
        assert!(!fields.contains(SearchField::Title));
    }

    #[test]
    fn test_search_fields_unknown_token_rejected() {
        let err = SearchFields::parse(Some("title,genre")).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
