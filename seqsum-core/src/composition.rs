//! Per-sequence composition statistics.
//!
//! The composition counter is the foundation for GC-content and
//! nucleotide-composition reporting: it counts single bases, overlapping
//! base pairs (dinucleotides), and the G+C fraction of one sequence. All
//! functions here are pure; they take a sequence and return counts without
//! touching any shared state.

use crate::types::{AnalysisError, FrequencyTable};

/// Calculates the GC content of a sequence.
///
/// Returns the fraction of positions holding `G` or `C`. Lowercase bases and
/// ambiguity codes are not credited; ingestion is expected to normalize to
/// uppercase A/C/G/T.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptySequence`] for a zero-length sequence,
/// where the fraction would be a division by zero. The failure is explicit
/// rather than a silent NaN or zero.
///
/// # Examples
///
/// ```rust
/// use seqsum_core::composition::gc_fraction;
///
/// let gc = gc_fraction("AGCTAGCTAGCTAGCTAGCTA")?;
/// assert!((gc - 10.0 / 21.0).abs() < 1e-12);
/// # Ok::<(), seqsum_core::types::AnalysisError>(())
/// ```
pub fn gc_fraction(sequence: &str) -> Result<f64, AnalysisError> {
    if sequence.is_empty() {
        return Err(AnalysisError::EmptySequence);
    }
    let gc_count = sequence
        .bytes()
        .filter(|&base| base == b'G' || base == b'C')
        .count();
    Ok(gc_count as f64 / sequence.len() as f64)
}

/// Counts every single-character base occurrence in a sequence.
#[must_use]
pub fn base_counts(sequence: &str) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    let bytes = sequence.as_bytes();
    for window in bytes.windows(1) {
        table.record(&String::from_utf8_lossy(window));
    }
    table
}

/// Tallies every overlapping length-2 substring of a sequence.
///
/// A sequence of length `n` produces exactly `n - 1` windows; sequences of
/// length 0 or 1 produce an empty table.
#[must_use]
pub fn dinucleotide_frequencies(sequence: &str) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    let bytes = sequence.as_bytes();
    for window in bytes.windows(2) {
        table.record(&String::from_utf8_lossy(window));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gc_fraction_basic() {
        let gc = gc_fraction("ATCG").unwrap();
        assert!((gc - 0.5).abs() < 1e-12);

        let gc = gc_fraction("AAAA").unwrap();
        assert!(gc.abs() < 1e-12);

        let gc = gc_fraction("GGCC").unwrap();
        assert!((gc - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_gc_fraction_odd_length() {
        // 21-character sequence with 10 G/C positions.
        let gc = gc_fraction("AGCTAGCTAGCTAGCTAGCTA").unwrap();
        assert!((gc - 10.0 / 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_gc_fraction_empty_sequence_errors() {
        let result = gc_fraction("");
        assert!(matches!(result, Err(AnalysisError::EmptySequence)));
    }

    #[test]
    fn test_gc_fraction_matches_direct_count() {
        let sequence = "GATTACAGGCCATTACAGC";
        let expected = sequence.bytes().filter(|&b| b == b'G' || b == b'C').count() as f64
            / sequence.len() as f64;
        assert!((gc_fraction(sequence).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_base_counts() {
        let counts = base_counts("AACCG");
        assert_eq!(counts.get("A"), 2);
        assert_eq!(counts.get("C"), 2);
        assert_eq!(counts.get("G"), 1);
        assert_eq!(counts.get("T"), 0);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_dinucleotide_window_count() {
        let table = dinucleotide_frequencies("ATCGA");
        // length - 1 overlapping windows
        assert_eq!(table.total(), 4);
        assert_eq!(table.get("AT"), 1);
        assert_eq!(table.get("TC"), 1);
        assert_eq!(table.get("CG"), 1);
        assert_eq!(table.get("GA"), 1);
    }

    #[test]
    fn test_dinucleotide_overlap() {
        let table = dinucleotide_frequencies("AAAA");
        assert_eq!(table.get("AA"), 3);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_dinucleotide_short_sequences() {
        assert!(dinucleotide_frequencies("").is_empty());
        assert!(dinucleotide_frequencies("A").is_empty());
    }
}
