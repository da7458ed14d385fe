use thiserror::Error;

/// Errors that abort the interactive session.
///
/// Everything recoverable (blank fields, bad numbers, unknown menu tokens,
/// missing ids) is handled inside the loop and never becomes a `CliError`.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error on the console streams
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened or initialized
    #[error("Database error: {0}")]
    Schema(#[from] cinelog_db::SchemaError),

    /// A storage operation failed
    #[error("Database error: {0}")]
    Operation(#[from] cinelog_db::OperationError),
}
