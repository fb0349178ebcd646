//! Director entity.

/// A film director.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Director {
    pub id: i64,
    pub name: String,
}

impl Director {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
