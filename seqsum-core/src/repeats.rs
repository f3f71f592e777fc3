//! Collection-wide repeated-substring detection.
//!
//! The repeat finder slides a fixed-width window (20 bases by default)
//! across every sequence in the collection and tallies all visited
//! substrings into a single table. Counts are summed across sequences: a
//! window appearing in two sequences, or twice within one, counts twice.
//! Sequences shorter than the window contribute nothing.

use crate::types::{AnalysisError, FrequencyTable};

/// Tallies every contiguous length-`window` substring across the whole
/// collection.
///
/// The merge underlying this scan is commutative and associative on counts,
/// so partitioning the collection, scanning the parts, and summing the
/// partial tables yields the same counts as one pass over everything.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidWindow`] when `window` is zero.
pub fn repeat_frequencies(
    sequences: &[String],
    window: usize,
) -> Result<FrequencyTable, AnalysisError> {
    if window == 0 {
        return Err(AnalysisError::InvalidWindow);
    }
    let mut table = FrequencyTable::new();
    for sequence in sequences {
        let bytes = sequence.as_bytes();
        if bytes.len() >= window {
            for span in bytes.windows(window) {
                table.record(&String::from_utf8_lossy(span));
            }
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(sequences: &[&str]) -> Vec<String> {
        sequences.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_counts_sum_across_sequences() {
        let sequences = collection(&["ACGTACGT", "ACGTACGT"]);
        let table = repeat_frequencies(&sequences, 4).unwrap();
        // "ACGT" occurs twice per sequence (positions 0 and 4).
        assert_eq!(table.get("ACGT"), 4);
        // 5 windows per 8-base sequence, two sequences.
        assert_eq!(table.total(), 10);
    }

    #[test]
    fn test_repeated_window_within_one_sequence_counts_twice() {
        let sequences = collection(&["AAAAA"]);
        let table = repeat_frequencies(&sequences, 4).unwrap();
        assert_eq!(table.get("AAAA"), 2);
    }

    #[test]
    fn test_short_sequences_contribute_nothing() {
        let sequences = collection(&["ACG", "ACGTACGT"]);
        let table = repeat_frequencies(&sequences, 4).unwrap();
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_all_sequences_shorter_than_window_is_not_an_error() {
        let sequences = collection(&["ACG"]);
        let table = repeat_frequencies(&sequences, 20).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_zero_window_is_an_error() {
        let sequences = collection(&["ACGT"]);
        assert!(matches!(
            repeat_frequencies(&sequences, 0),
            Err(AnalysisError::InvalidWindow)
        ));
    }

    #[test]
    fn test_partitioned_scan_equals_whole_scan() {
        let sequences = collection(&["ACGTACGTACGT", "TTTTACGTTTTT", "GGGACGTACGGG"]);

        let whole = repeat_frequencies(&sequences, 4).unwrap();

        let mut merged = FrequencyTable::new();
        for part in sequences.chunks(1) {
            merged.merge(&repeat_frequencies(part, 4).unwrap());
        }

        for entry in whole.entries() {
            assert_eq!(merged.get(&entry.key), entry.count);
        }
        assert_eq!(whole.len(), merged.len());
        assert_eq!(whole.total(), merged.total());
    }

    #[test]
    fn test_top_n_uses_first_seen_tie_break() {
        let sequences = collection(&["ACGT"]);
        let table = repeat_frequencies(&sequences, 2).unwrap();
        let top: Vec<String> = table.top_n(2).into_iter().map(|e| e.key).collect();
        assert_eq!(top, vec!["AC", "CG"]);
    }
}
