//! User response DTOs.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::User;

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub login: String,
    /// Falls back to the login when the user has no display name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let name = user.display_name().to_string();
        Self {
            id: user.id,
            login: user.login,
            name,
            birthday: user.birthday,
        }
    }
}
