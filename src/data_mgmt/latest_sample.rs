use std::sync::Arc;

use arc_swap::ArcSwapOption;

use super::record::TelemetryRecord;

/// Single-slot store for the most recently accepted telemetry record.
///
/// Records are replaced wholesale by swapping an `Arc`, so readers never take
/// a lock and never observe a partially written record. No history is kept.
///
/// Writers are ordered only by the swap itself: when two `put` calls race,
/// whichever swap lands last is what every later `get` sees, regardless of
/// which sample the device produced first. Samples carry no sequence number
/// to order them by.
#[derive(Debug)]
pub struct LatestSample {
    slot: ArcSwapOption<TelemetryRecord>,
}

impl LatestSample {
    pub fn new() -> Self {
        Self {
            slot: ArcSwapOption::empty(),
        }
    }

    /// Replace the held record, returning the handle now being served
    pub fn put(&self, record: TelemetryRecord) -> Arc<TelemetryRecord> {
        let record = Arc::new(record);
        self.slot.store(Some(Arc::clone(&record)));
        record
    }

    pub fn get(&self) -> Option<Arc<TelemetryRecord>> {
        self.slot.load_full()
    }

    pub fn has_data(&self) -> bool {
        self.slot.load().is_some()
    }
}

impl Default for LatestSample {
    fn default() -> Self {
        LatestSample::new()
    }
}
