//! Query string parameters for the ranking endpoints.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

/// `GET /films/popular` parameters.
///
/// Uses `serde_with` to parse numbers from query strings.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PopularParams {
    /// Number of films to return (default: 10).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "count must be positive"))]
    pub count: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub genre_id: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub year: Option<i32>,
}

impl PopularParams {
    pub const DEFAULT_COUNT: i64 = 10;

    pub fn count(&self) -> i64 {
        self.count.unwrap_or(Self::DEFAULT_COUNT)
    }
}

/// `GET /films/director/{directorId}` parameters.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DirectorFilmsParams {
    /// `likes` or `year`, case-insensitive.
    #[validate(required(message = "sortBy is required"))]
    pub sort_by: Option<String>,
}

/// `GET /films/common` parameters.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommonFilmsParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(required(message = "userId is required"))]
    pub user_id: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(required(message = "friendId is required"))]
    pub friend_id: Option<i64>,
}

/// `GET /films/search` parameters.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(required(message = "query is required"))]
    pub query: Option<String>,

    /// Comma-separated fields: `title`, `director` (default: `title`).
    pub by: Option<String>,
}
