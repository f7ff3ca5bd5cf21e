//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use super::schema::{scores, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub telegram_id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub telegram_id: i64,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// Row struct for reading from the scores table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = scores)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ScoreRow {
    pub id: i32,
    pub user_id: i32,
    pub subject: String,
    pub score: i32,
}

/// Insertable struct for creating new score records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = scores)]
pub(crate) struct NewScoreRow<'a> {
    pub user_id: i32,
    pub subject: &'a str,
    pub score: i32,
}
