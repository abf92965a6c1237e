// Ports define what callers need from the index, without implementing it.
//
// Purpose
// - Describe the event index surface as a trait so callers code against the
//   abstraction, not a concrete store.
//
// Responsibilities
// - Keep the core independent of any particular backing structure.
//
// Boundaries
// - No concrete storage here. Adapters implement this trait in the adapters
//   layer.
//
// Testing guidance
// - Exercise the in memory implementation through this trait from the
//   integration tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::event::Event;

#[derive(Debug, Error)]
pub enum EventIndexError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// The store surface. Writers are `insert` and `remove_all` and take the
/// index exclusively; readers are `query` and `snapshot` and may run
/// concurrently with each other. A call that cannot acquire the index in the
/// required mode waits until it can, with no timeout.
#[async_trait]
pub trait EventIndex: Send + Sync {
    /// Add one event under its type. Creates the type bucket on first use
    /// and keeps duplicate timestamps.
    async fn insert(&self, event: Event) -> Result<(), EventIndexError>;

    /// Delete every timestamp stored under `event_type`. A type with no
    /// entries is a no-op, not an error.
    async fn remove_all(&self, event_type: &str) -> Result<(), EventIndexError>;

    /// Return owned copies of every event of `event_type` whose timestamp t
    /// satisfies `start_time <= t < end_time`. Absent types, empty intervals
    /// and empty matches all yield an empty Vec. Order is unspecified.
    async fn query(
        &self,
        event_type: &str,
        start_time: i64,
        end_time: i64,
    ) -> Result<Vec<Event>, EventIndexError>;

    /// Return every stored (type, timestamp) pair, for diagnostics. Order is
    /// unspecified.
    async fn snapshot(&self) -> Result<Vec<Event>, EventIndexError>;
}
