//! Interactive console front end for the movie catalog.
//!
//! The menu loop, prompt loops, and operation observer live here so session
//! flows can be exercised with scripted input; the binary wires them to
//! stdin/stdout.

pub mod error;
pub mod menu;
pub mod observer;
pub mod prompt;

pub use error::CliError;
