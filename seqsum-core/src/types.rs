use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A substring occurrence count paired with the scan order in which the
/// substring was first encountered.
///
/// The `first_seen` rank is the explicit secondary sort key that makes
/// top-N rankings deterministic: ties on count are broken by whichever key
/// appeared earlier in the scan, never by hash-map iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    count: u64,
    first_seen: usize,
}

/// An occurrence count for a single key, as exposed in rankings and in the
/// final summary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    /// The counted substring (base, dinucleotide, k-mer, or repeat window).
    pub key: String,
    /// Number of occurrences across the scanned positions.
    pub count: u64,
}

impl fmt::Display for FrequencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.count)
    }
}

/// A counting table over discrete substring keys.
///
/// Every recorded key remembers the order in which it was first seen, so
/// rankings derived from the table are stable with respect to scan order.
/// Merging two tables sums counts key-wise; keys new to the left table are
/// appended in the right table's first-seen order, which keeps a sequential
/// left-to-right fold of per-sequence tables fully deterministic.
///
/// # Examples
///
/// ```rust
/// use seqsum_core::types::FrequencyTable;
///
/// let mut table = FrequencyTable::new();
/// table.record("AG");
/// table.record("GC");
/// table.record("AG");
///
/// assert_eq!(table.get("AG"), 2);
/// assert_eq!(table.total(), 3);
/// assert_eq!(table.top_n(1)[0].key, "AG");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    slots: HashMap<String, Slot>,
    next_rank: usize,
}

impl FrequencyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `key`.
    pub fn record(&mut self, key: &str) {
        self.add(key, 1);
    }

    /// Adds `count` occurrences of `key`.
    pub fn add(&mut self, key: &str, count: u64) {
        if let Some(slot) = self.slots.get_mut(key) {
            slot.count += count;
        } else {
            let rank = self.next_rank;
            self.next_rank += 1;
            self.slots.insert(
                key.to_string(),
                Slot {
                    count,
                    first_seen: rank,
                },
            );
        }
    }

    /// Returns the count for `key`, zero if it was never recorded.
    #[must_use]
    pub fn get(&self, key: &str) -> u64 {
        self.slots.get(key).map_or(0, |slot| slot.count)
    }

    /// Number of distinct keys in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table holds no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sum of all counts. For a single sliding-window scan this equals the
    /// number of window positions visited.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.slots.values().map(|slot| slot.count).sum()
    }

    /// All entries in first-seen order.
    #[must_use]
    pub fn entries(&self) -> Vec<FrequencyEntry> {
        let mut slots: Vec<(&String, &Slot)> = self.slots.iter().collect();
        slots.sort_by_key(|(_, slot)| slot.first_seen);
        slots
            .into_iter()
            .map(|(key, slot)| FrequencyEntry {
                key: key.clone(),
                count: slot.count,
            })
            .collect()
    }

    /// The `n` highest-count entries, ties broken by first-seen scan order.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<FrequencyEntry> {
        let mut slots: Vec<(&String, &Slot)> = self.slots.iter().collect();
        slots.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        slots
            .into_iter()
            .take(n)
            .map(|(key, slot)| FrequencyEntry {
                key: key.clone(),
                count: slot.count,
            })
            .collect()
    }

    /// Sums `other` into `self` key-wise. Keys unknown to `self` are
    /// appended in `other`'s first-seen order.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for entry in other.entries() {
            self.add(&entry.key, entry.count);
        }
    }
}

impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries() == other.entries()
    }
}

/// A mirror-palindrome hit tagged with the sequence it came from.
///
/// The index refers to the position of the sequence in the input collection,
/// regardless of the order in which sequences were processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalindromeRecord {
    /// Zero-based index of the originating sequence in the collection.
    pub sequence_index: usize,
    /// The qualifying palindromic substring.
    pub substring: String,
}

/// Error types that can occur during sequence-collection analysis.
///
/// All variants are deterministic input-validation failures detected eagerly
/// at the boundary of the offending operation; none are transient, so there
/// is no retry path and no partial-summary fallback.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The collection holds zero sequences, so means and extrema are undefined.
    #[error("empty collection: at least one sequence is required")]
    EmptyCollection,
    /// A zero-length sequence was passed to GC-content calculation.
    #[error("empty sequence: GC content is undefined (division by zero)")]
    EmptySequence,
    /// A k-mer or repeat window length of zero was requested.
    #[error("invalid window length: must be at least 1")]
    InvalidWindow,
    /// Failed to size the rayon thread pool.
    #[error("failed to configure thread pool: {0}")]
    ThreadPool(String),
    /// File I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing an input file.
    #[error("parse error: {0}")]
    Parse(String),
}
