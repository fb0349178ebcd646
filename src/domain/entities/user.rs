//! User entity.

use chrono::NaiveDate;

/// A catalog user.
///
/// The like graph only needs [`User::id`]; the remaining fields are carried for
/// responses that list users (common friends).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub login: String,
    pub name: String,
    pub birthday: Option<NaiveDate>,
}

impl User {
    pub fn new(
        id: i64,
        login: impl Into<String>,
        name: impl Into<String>,
        birthday: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            login: login.into(),
            name: name.into(),
            birthday,
        }
    }

    /// Name shown to other users, falling back to the login when no name is set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.login
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_login() {
        let user = User::new(1, "neo", "  ", None);
        assert_eq!(user.display_name(), "neo");

        let user = User::new(2, "trinity", "Trinity", None);
        assert_eq!(user.display_name(), "Trinity");
    }
}
