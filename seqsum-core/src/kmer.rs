//! Sliding-window k-mer tallying.
//!
//! A k-mer scan advances a fixed-width window one position at a time across
//! a sequence and counts every substring it visits: a sequence of length `n`
//! yields exactly `n - k + 1` windows (zero when `n < k`), so the counts of
//! the resulting table always sum to the number of visited positions.
//!
//! Rankings over the table use [`FrequencyTable::top_n`], whose tie-break is
//! the first-seen scan order rather than container iteration order, so the
//! "most common k-mers" lists in the summary are reproducible run to run.

use crate::types::{AnalysisError, FrequencyTable};

/// Tallies every contiguous length-`k` substring of `sequence`.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidWindow`] when `k` is zero. A sequence
/// shorter than `k` is not an error; it simply produces an empty table.
///
/// # Examples
///
/// ```rust
/// use seqsum_core::kmer::kmer_frequencies;
///
/// let table = kmer_frequencies("AGCTAGCTA", 3)?;
/// assert_eq!(table.total(), 7); // len - k + 1 windows
/// assert_eq!(table.get("AGC"), 2);
/// # Ok::<(), seqsum_core::types::AnalysisError>(())
/// ```
pub fn kmer_frequencies(sequence: &str, k: usize) -> Result<FrequencyTable, AnalysisError> {
    if k == 0 {
        return Err(AnalysisError::InvalidWindow);
    }
    let mut table = FrequencyTable::new();
    let bytes = sequence.as_bytes();
    if bytes.len() >= k {
        for window in bytes.windows(k) {
            table.record(&String::from_utf8_lossy(window));
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_count_invariant() {
        for k in 1..=6 {
            let sequence = "ACGTACGTACGT";
            let table = kmer_frequencies(sequence, k).unwrap();
            assert_eq!(table.total() as usize, sequence.len() - k + 1);
        }
    }

    #[test]
    fn test_sequence_shorter_than_window() {
        let table = kmer_frequencies("ACG", 5).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_zero_window_is_an_error() {
        assert!(matches!(
            kmer_frequencies("ACGT", 0),
            Err(AnalysisError::InvalidWindow)
        ));
    }

    #[test]
    fn test_tandem_repeat_top_trimers() {
        // "AGCTAGCTAGCTAGCTAGCTA": the repeating AGCT unit makes AGC, GCT,
        // and CTA the dominant 3-mers, five occurrences each.
        let table = kmer_frequencies("AGCTAGCTAGCTAGCTAGCTA", 3).unwrap();
        assert_eq!(table.get("AGC"), 5);
        assert_eq!(table.get("GCT"), 5);
        assert_eq!(table.get("CTA"), 5);

        let top: Vec<String> = table.top_n(3).into_iter().map(|e| e.key).collect();
        assert!(top.contains(&"AGC".to_string()));
        assert!(top.contains(&"GCT".to_string()));
        assert!(top.contains(&"CTA".to_string()));
    }

    #[test]
    fn test_top_n_tie_break_matches_scan_order() {
        // Every 2-mer in "ACGT" occurs once; the ranking must list them in
        // the order the scan first met them.
        let table = kmer_frequencies("ACGT", 2).unwrap();
        let top: Vec<String> = table.top_n(3).into_iter().map(|e| e.key).collect();
        assert_eq!(top, vec!["AC", "CG", "GT"]);
    }

    #[test]
    fn test_single_position_window() {
        let table = kmer_frequencies("AACCG", 5).unwrap();
        assert_eq!(table.total(), 1);
        assert_eq!(table.get("AACCG"), 1);
    }
}
