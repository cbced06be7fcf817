//! Database models
//!
//! Note that these may have to be updated by hand to match `schema.sql`.

mod user;

pub(crate) use user::User;
