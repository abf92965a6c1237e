// Demonstration driver. Not part of the store contract; any caller can
// replace it.
//
// Responsibilities
// - Read logging config from the environment.
// - Wire the in memory index behind the EventIndex port.
// - Spawn the demo writer and one reader per event label, then join them.
// - Dump the final snapshot.

use std::sync::Arc;

use event_store::adapters::in_memory::in_memory_event_index::InMemoryEventIndex;
use event_store::core::ports::EventIndex;
use tracing_subscriber::{EnvFilter, fmt};

mod workers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let index: Arc<dyn EventIndex> = Arc::new(InMemoryEventIndex::new());
    let base_time = chrono::Utc::now().timestamp_millis();

    let mut handles = Vec::new();
    handles.push(tokio::spawn(workers::run_writer(index.clone(), base_time)));
    for label_index in 0..workers::NUM_EVENT_LABELS {
        handles.push(tokio::spawn(workers::run_reader(
            index.clone(),
            label_index,
            base_time,
        )));
    }
    for handle in handles {
        handle.await??;
    }

    let snapshot = index.snapshot().await?;
    tracing::info!(stored = snapshot.len(), "final snapshot");
    tracing::debug!(
        contents = %serde_json::to_string(&snapshot)?,
        "snapshot contents"
    );
    Ok(())
}
