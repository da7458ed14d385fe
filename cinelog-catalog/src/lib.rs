//! Data model and field rules for the movie catalog.
//!
//! Holds the `Movie` entity, the validated field set used for create/update,
//! and the pure parsing/normalization rules the interactive prompts enforce.

pub mod fields;
pub mod types;

pub use fields::{non_blank, normalize_optional, parse_duration, parse_release_date};
pub use types::{Movie, MovieDraft};
