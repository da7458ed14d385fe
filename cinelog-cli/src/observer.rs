//! Operation outcome notifications, decoupled from the store.

use std::error::Error;

/// Receives lifecycle notifications for each store operation.
///
/// The menu loop notifies the observer around every store call; the store
/// itself stays observability-free. Dropping the observer (or using a no-op
/// implementation) changes nothing the user sees.
pub trait OperationObserver {
    fn started(&self, operation: &str);
    fn succeeded(&self, operation: &str, detail: &str);
    fn not_found(&self, operation: &str, id: i64);
    fn failed(&self, operation: &str, error: &dyn Error);
}

/// Forwards operation outcomes to the `log` facade.
pub struct LogObserver;

impl OperationObserver for LogObserver {
    fn started(&self, operation: &str) {
        log::debug!("{operation}: started");
    }

    fn succeeded(&self, operation: &str, detail: &str) {
        log::info!("{operation}: {detail}");
    }

    fn not_found(&self, operation: &str, id: i64) {
        log::warn!("{operation}: no movie with id {id}");
    }

    fn failed(&self, operation: &str, error: &dyn Error) {
        log::error!("{operation}: {error}");
    }
}
