//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match the migrations exactly; Diesel uses them for type-safe
//! SQL generation. Regenerate with `diesel print-schema` after a migration
//! changes the table.

diesel::table! {
    /// User records table.
    users (id) {
        /// Primary key assigned by the database sequence.
        id -> Int4,
        /// Unique contact email.
        email -> Varchar,
        /// Display name, 1 to 100 characters.
        name -> Varchar,
        /// Set once when the row is inserted.
        created_at -> Timestamptz,
        /// Refreshed on every successful update.
        updated_at -> Timestamptz,
    }
}
