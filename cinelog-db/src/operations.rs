//! CRUD operations for the movie table.
//!
//! Not-found is signaled through `Option` and row-affected counts, never
//! through errors; `OperationError` only carries storage failures.

use cinelog_catalog::{Movie, MovieDraft};
use rusqlite::{params, Connection, Row};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Insert a new movie. Returns the generated id.
pub fn insert_movie(conn: &Connection, draft: &MovieDraft) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO movies (title, director, duration_minutes, release_date, genre)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            draft.title,
            draft.director,
            draft.duration_minutes,
            draft.release_date,
            draft.genre,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Fetch a single movie by id.
pub fn get_movie(conn: &Connection, id: i64) -> Result<Option<Movie>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, director, duration_minutes, release_date, genre
         FROM movies WHERE id = ?1",
    )?;
    let result = stmt.query_row(params![id], movie_from_row);
    match result {
        Ok(movie) => Ok(Some(movie)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// List all movies in insertion order.
pub fn list_movies(conn: &Connection) -> Result<Vec<Movie>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, director, duration_minutes, release_date, genre
         FROM movies ORDER BY id",
    )?;
    let rows = stmt.query_map([], movie_from_row)?;
    let mut movies = Vec::new();
    for row in rows {
        movies.push(row?);
    }
    Ok(movies)
}

/// Replace all fields of the movie with the given id.
///
/// Full-replace semantics: an absent optional field in the draft clears the
/// stored value. Returns the number of rows affected (0 = no such id).
pub fn update_movie(
    conn: &Connection,
    id: i64,
    draft: &MovieDraft,
) -> Result<usize, OperationError> {
    let changed = conn.execute(
        "UPDATE movies SET
             title = ?2, director = ?3, duration_minutes = ?4,
             release_date = ?5, genre = ?6
         WHERE id = ?1",
        params![
            id,
            draft.title,
            draft.director,
            draft.duration_minutes,
            draft.release_date,
            draft.genre,
        ],
    )?;
    Ok(changed)
}

/// Delete the movie with the given id. Returns the number of rows affected.
pub fn delete_movie(conn: &Connection, id: i64) -> Result<usize, OperationError> {
    let changed = conn.execute("DELETE FROM movies WHERE id = ?1", params![id])?;
    Ok(changed)
}

fn movie_from_row(row: &Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get(0)?,
        title: row.get(1)?,
        director: row.get(2)?,
        duration_minutes: row.get(3)?,
        release_date: row.get(4)?,
        genre: row.get(5)?,
    })
}
