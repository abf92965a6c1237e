// Worker tasks for the demonstration driver.
//
// Responsibilities
// - Writer: insert batches of events spread across a fixed set of labels,
//   then wipe one label.
// - Reader: repeatedly query one label over a wide window and log how many
//   events matched.

use std::sync::Arc;
use std::time::Duration;

use event_store::core::event::Event;
use event_store::core::ports::EventIndex;
use rand::Rng;

pub const NUM_EVENT_LABELS: usize = 12;

const NUM_BATCHES: usize = 32;
const EVENTS_PER_BATCH: usize = 128;
const QUERY_WINDOW_MILLIS: i64 = 400;

fn label(index: usize) -> String {
    format!("event_label_{index}")
}

/// Inserts NUM_BATCHES batches, each shifted by a random offset so batches
/// overlap the readers' query window unevenly, then removes one label
/// entirely while the readers are still running.
pub async fn run_writer(index: Arc<dyn EventIndex>, base_time: i64) -> anyhow::Result<()> {
    for batch in 0..NUM_BATCHES {
        let time_shift: i64 = rand::rng().random_range(0..600);
        for offset in 0..EVENTS_PER_BATCH {
            let jitter: i64 = rand::rng().random_range(0..20);
            let event = Event::new(
                label(offset % NUM_EVENT_LABELS),
                base_time + time_shift + jitter,
            );
            index.insert(event).await?;
        }
        tracing::debug!(batch, time_shift, "batch inserted");
        tokio::time::sleep(Duration::from_micros(100)).await;
    }

    index.remove_all(&label(1)).await?;
    tracing::info!(label = %label(1), "label wiped");
    Ok(())
}

pub async fn run_reader(
    index: Arc<dyn EventIndex>,
    label_index: usize,
    base_time: i64,
) -> anyhow::Result<()> {
    let event_type = label(label_index);
    for _ in 0..NUM_BATCHES {
        let events = index
            .query(&event_type, base_time, base_time + QUERY_WINDOW_MILLIS)
            .await?;
        tracing::info!(label = %event_type, matched = events.len(), "window queried");

        let nap: u64 = rand::rng().random_range(100..120);
        tokio::time::sleep(Duration::from_micros(nap)).await;
    }
    Ok(())
}
