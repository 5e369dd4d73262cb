//! Bounded, most-recent-first conversion log

use std::collections::VecDeque;

use crate::config::DEFAULT_HISTORY_LIMIT;
use crate::core::ConversionRecord;

/// Ordered conversion history with a fixed capacity
///
/// New records go to the front. Once the limit is exceeded the oldest
/// record (at the back) is evicted. Records are never modified in place.
#[derive(Clone, Debug)]
pub struct History {
    records: VecDeque<ConversionRecord>,
    limit: usize,
}

impl History {
    /// Creates an empty history holding at most `limit` records
    ///
    /// A limit of zero is raised to one; `AppConfig::validate` rejects it
    /// before it gets here.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            records: VecDeque::with_capacity(limit + 1),
            limit,
        }
    }

    /// Prepends a record, returning the evicted one if the cap was exceeded
    pub fn push(&mut self, record: ConversionRecord) -> Option<ConversionRecord> {
        self.records.push_front(record);

        if self.records.len() > self.limit {
            self.records.pop_back()
        } else {
            None
        }
    }

    /// Records from most recent to oldest
    pub fn iter(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.records.iter()
    }

    /// Most recent record
    pub fn latest(&self) -> Option<&ConversionRecord> {
        self.records.front()
    }

    pub fn get(&self, index: usize) -> Option<&ConversionRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
