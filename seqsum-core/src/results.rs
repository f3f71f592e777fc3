//! Result records produced by a sequence-collection analysis run.
//!
//! [`AnalysisSummary`] is a plain structured value: it carries no
//! presentation logic and is constructed exactly once per run, immutable
//! thereafter. Rendering it into a report is the job of the [`crate::output`]
//! module or of an external consumer; every type here serializes with serde
//! so downstream tooling can take the record as-is.

use serde::Serialize;

use crate::types::{FrequencyEntry, PalindromeRecord};

/// One bin of the GC-content distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GcBin {
    /// Bin center, a multiple of 0.05 in [0, 1].
    pub center: f64,
    /// Number of sequences whose GC fraction falls nearest this center.
    pub count: usize,
}

/// GC-content statistics across the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GcStatistics {
    /// Mean GC fraction over all sequences.
    pub mean: f64,
    /// Lowest per-sequence GC fraction.
    pub min: f64,
    /// Highest per-sequence GC fraction.
    pub max: f64,
    /// Fixed-width histogram: 21 bins spanning [0, 1] at 0.05 resolution.
    pub distribution: Vec<GcBin>,
}

/// The most common k-mers for one window length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KmerRanking {
    /// Window length the ranking was computed for.
    pub k: usize,
    /// Highest-count k-mers, ties broken by first-seen scan order.
    pub top: Vec<FrequencyEntry>,
}

/// Sequence-length statistics.
///
/// Collections in which every sequence has the same length report that
/// single shared value; mixed collections report average and extrema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LengthStatistics {
    /// Every sequence has the same length.
    Uniform {
        /// The shared length in base pairs.
        length: usize,
    },
    /// Lengths differ across the collection.
    Varied {
        /// Mean length in base pairs.
        average: f64,
        /// Shortest sequence length.
        min: usize,
        /// Longest sequence length.
        max: usize,
    },
}

/// All qualifying palindromes found in the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PalindromeSummary {
    /// Minimum span length that was required to qualify.
    pub min_length: usize,
    /// Minimum distinct-character count that was required to qualify.
    pub min_diversity: usize,
    /// Every qualifying span, tagged with its originating sequence index.
    pub records: Vec<PalindromeRecord>,
}

impl PalindromeSummary {
    /// Total number of qualifying spans, nested duplicates included.
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }
}

/// Collection-wide repeated-substring statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepeatSummary {
    /// Window length the scan used.
    pub window: usize,
    /// Number of distinct windows observed.
    pub unique: usize,
    /// Highest-count windows, ties broken by first-seen scan order.
    pub top: Vec<FrequencyEntry>,
}

/// Overall share of one base across the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseComposition {
    /// The base character.
    pub base: String,
    /// Raw occurrence count across all sequences.
    pub count: u64,
    /// Occurrences divided by the total character count of the collection.
    pub fraction: f64,
}

/// The aggregate record of one analysis run.
///
/// # Examples
///
/// ```rust
/// use seqsum_core::{SummaryAnalyzer, config::AnalysisConfig};
///
/// let analyzer = SummaryAnalyzer::new(AnalysisConfig {
///     quiet: true,
///     ..Default::default()
/// });
/// let sequences = vec!["AGCTAGCTAGCTAGCTAGCTA".to_string()];
/// let summary = analyzer.analyze(&sequences)?;
///
/// assert_eq!(summary.sequence_count, 1);
/// assert!((summary.gc.mean - 10.0 / 21.0).abs() < 1e-12);
/// # Ok::<(), seqsum_core::types::AnalysisError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    /// Number of sequences analyzed.
    pub sequence_count: usize,
    /// GC-content mean, extrema, and binned distribution.
    pub gc: GcStatistics,
    /// Collection-wide dinucleotide frequencies, in first-seen order.
    pub dinucleotides: Vec<FrequencyEntry>,
    /// Top k-mers per configured window length.
    pub kmer_rankings: Vec<KmerRanking>,
    /// Full palindrome listing with the thresholds that produced it.
    pub palindromes: PalindromeSummary,
    /// Sequence-length statistics.
    pub lengths: LengthStatistics,
    /// Repeated-substring statistics.
    pub repeats: RepeatSummary,
    /// Nucleotide composition as fractions of all characters.
    pub composition: Vec<BaseComposition>,
}
