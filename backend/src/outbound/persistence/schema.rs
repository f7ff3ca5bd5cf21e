//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations in `migrations/` exactly;
//! Diesel uses them for type-safe SQL generation.

diesel::table! {
    /// Registered students keyed by chat-platform identity.
    users (id) {
        /// Primary key, store-assigned.
        id -> Int4,
        /// Chat-platform user identifier, unique across students.
        telegram_id -> Int8,
        first_name -> Text,
        last_name -> Text,
    }
}

diesel::table! {
    /// Exam scores, one row per (student, subject) pair.
    scores (id) {
        /// Primary key, store-assigned; insertion order for listings.
        id -> Int4,
        /// Owning student; rows are removed with their owner.
        user_id -> Int4,
        subject -> Text,
        score -> Int4,
    }
}

diesel::joinable!(scores -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(scores, users);
