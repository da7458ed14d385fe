//! Data model types for the movie catalog.

use chrono::NaiveDate;

/// A persisted movie record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    /// Assigned by the store on insert; never reused after deletion.
    pub id: i64,
    pub title: String,
    pub director: String,
    pub duration_minutes: u32,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
}

/// The validated field set supplied to create and update.
///
/// Callers are expected to have run the rules in [`crate::fields`] first:
/// title and director non-blank, duration above zero. Update semantics are
/// full replace, so an absent optional field clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub duration_minutes: u32,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
}
