//! Destinations for per-request outcome records.
mod lines;


pub use lines::LineSink;

use crate::error::SinkError;
use crate::http::RequestOutcome;

/// Receives every outcome as soon as the owning worker has classified it.
///
/// Implementations are shared by all workers and must not reorder records
/// produced by a single worker.
pub trait OutcomeSink: Send + Sync {
    /// Persists one outcome record.
    ///
    /// # Errors
    ///
    /// Returns an error when the record cannot be written.
    fn record(&self, outcome: &RequestOutcome) -> Result<(), SinkError>;
}
