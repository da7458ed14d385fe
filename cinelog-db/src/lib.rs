//! SQLite persistence layer for the movie catalog.
//!
//! Provides schema creation and CRUD operations backed by SQLite
//! (via rusqlite with bundled feature).

pub mod operations;
pub mod schema;

pub use rusqlite::Connection;

pub use operations::{
    delete_movie, get_movie, insert_movie, list_movies, update_movie, OperationError,
};
pub use schema::{open_database, open_memory, SchemaError};
