//! Generic grouping and counting.
//!
//! [`group_by`] keeps keys in first-seen order, the insertion order of a
//! counting map. It never sorts. Callers that want the largest groups first
//! pass the result through [`sort_by_count_desc`].

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of items sharing one key. `count` is always at least 1.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct AggregateEntry {
    pub key: String,
    pub count: usize,
}

impl AggregateEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Count items per distinct key, ordered by first appearance.
///
/// `key_of` may borrow the key from the item or compute an owned one. The
/// counts always sum to `items.len()`. An empty slice yields an empty result.
pub fn group_by<'a, T, K, F>(items: &'a [T], mut key_of: F) -> Vec<AggregateEntry>
where
    F: FnMut(&'a T) -> K,
    K: AsRef<str>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<AggregateEntry> = Vec::new();

    for item in items {
        let key = key_of(item);
        let key = key.as_ref();
        if let Some(&index) = positions.get(key) {
            entries[index].count += 1;
        } else {
            positions.insert(key.to_string(), entries.len());
            entries.push(AggregateEntry::new(key, 1));
        }
    }

    entries
}

/// Order entries by count, largest first. Ties keep their incoming order.
#[must_use]
pub fn sort_by_count_desc(mut entries: Vec<AggregateEntry>) -> Vec<AggregateEntry> {
    // `sort_by` is stable, so first-seen order survives among equal counts.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
