// In memory implementation of the EventIndex port.
//
// Purpose
// - The one concrete store: a type -> timestamps map behind a single
//   reader/writer lock.
//
// Responsibilities
// - Serialize writers, let readers run concurrently, and keep query cost
//   proportional to one type bucket rather than the whole map.
//
// Notes
// - One global lock over the whole map, not per-type sharding. The intended
//   workload is many concurrent reads and comparatively rare writes; a
//   write-heavy caller would serialize on the write guard.
// - tokio's RwLock is write-preferring: a queued writer blocks newly
//   arriving readers, so sustained reads cannot starve it.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::core::event::Event;
use crate::core::ports::{EventIndex, EventIndexError};

/// Buckets are plain Vecs: unordered multisets of timestamps. Insert is an
/// O(1) push, query scans one bucket, remove_all drops the key.
#[derive(Default)]
pub struct InMemoryEventIndex {
    inner: RwLock<HashMap<String, Vec<i64>>>,
}

impl InMemoryEventIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl EventIndex for InMemoryEventIndex {
    async fn insert(&self, event: Event) -> Result<(), EventIndexError> {
        let mut guard = self.inner.write().await;
        guard.entry(event.event_type).or_default().push(event.timestamp);
        Ok(())
    }

    async fn remove_all(&self, event_type: &str) -> Result<(), EventIndexError> {
        let mut guard = self.inner.write().await;
        guard.remove(event_type);
        Ok(())
    }

    async fn query(
        &self,
        event_type: &str,
        start_time: i64,
        end_time: i64,
    ) -> Result<Vec<Event>, EventIndexError> {
        let guard = self.inner.read().await;
        let Some(bucket) = guard.get(event_type) else {
            return Ok(Vec::new());
        };
        let events = bucket
            .iter()
            .filter(|&&timestamp| timestamp >= start_time && timestamp < end_time)
            .map(|&timestamp| Event::new(event_type, timestamp))
            .collect();
        Ok(events)
    }

    async fn snapshot(&self) -> Result<Vec<Event>, EventIndexError> {
        let guard = self.inner.read().await;
        let mut events = Vec::new();
        for (event_type, bucket) in guard.iter() {
            for &timestamp in bucket {
                events.push(Event::new(event_type.clone(), timestamp));
            }
        }
        Ok(events)
    }
}
