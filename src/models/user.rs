use serde::{Deserialize, Serialize};

/// User model
///
/// Doubles as the JSON body of `POST /user/` and `PUT /user/{id}`. Missing fields fall back to
/// their zero values, and any `id` sent by the client is overwritten before it is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub(crate) struct User {
    /// Assigned by the database on insert, never changed afterwards.
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) status: bool,
}

#[cfg(test)]
impl User {
    pub(crate) fn new(name: impl Into<String>, status: bool) -> Self {
        Self {
            id: 0,
            name: name.into(),
            status,
        }
    }
}
