//! Cross-sequence reduction into the final summary record.
//!
//! The aggregator takes one [`SequenceProfile`] per input sequence plus the
//! collection-wide repeat table and reduces them into an
//! [`AnalysisSummary`]: GC statistics with a fixed-width histogram, key-wise
//! merged frequency tables, concatenated palindrome listings, length
//! statistics, and normalized composition fractions.
//!
//! All merges run as a sequential left-to-right fold over the profiles in
//! input order. The counts would come out the same under any order (the
//! merge is commutative and associative), but folding in input order also
//! fixes the first-seen order of merged keys, which is what keeps ranking
//! tie-breaks identical from run to run.

use crate::config::AnalysisConfig;
use crate::results::{
    AnalysisSummary, BaseComposition, GcBin, GcStatistics, KmerRanking, LengthStatistics,
    PalindromeSummary, RepeatSummary,
};
use crate::types::{AnalysisError, FrequencyTable, PalindromeRecord};

/// Number of bins in the GC-content histogram.
pub const GC_BIN_COUNT: usize = 21;

/// Width of one GC histogram bin.
pub const GC_BIN_WIDTH: f64 = 0.05;

/// Per-sequence scan outputs, before cross-sequence reduction.
///
/// Built independently for each sequence (and therefore safely in
/// parallel); the aggregator is the only consumer.
#[derive(Debug, Clone)]
pub struct SequenceProfile {
    /// GC fraction of the sequence.
    pub gc: f64,
    /// Sequence length in base pairs.
    pub length: usize,
    /// Dinucleotide frequencies of the sequence.
    pub dinucleotides: FrequencyTable,
    /// One k-mer table per configured window length, in config order.
    pub kmers: Vec<FrequencyTable>,
    /// Qualifying palindromic spans, in center order.
    pub palindromes: Vec<String>,
    /// Single-base counts of the sequence.
    pub bases: FrequencyTable,
}

/// Center of histogram bin `index`, rounded to the 0.05 grid.
#[must_use]
pub fn gc_bin_center(index: usize) -> f64 {
    (index as f64 * GC_BIN_WIDTH * 100.0).round() / 100.0
}

/// Index of the bin whose center is nearest to `value`.
///
/// Ties go to the lower index: the scan only replaces the current best on a
/// strictly smaller distance.
#[must_use]
pub fn nearest_gc_bin(value: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for bin in 0..GC_BIN_COUNT {
        let distance = (value - gc_bin_center(bin)).abs();
        if distance < best_distance {
            best_distance = distance;
            best = bin;
        }
    }
    best
}

/// Reduces per-sequence profiles and the collection-wide repeat table into
/// the final summary record.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyCollection`] when `profiles` is empty;
/// means and extrema are undefined for zero sequences.
pub fn summarize(
    profiles: &[SequenceProfile],
    repeats: &FrequencyTable,
    config: &AnalysisConfig,
) -> Result<AnalysisSummary, AnalysisError> {
    if profiles.is_empty() {
        return Err(AnalysisError::EmptyCollection);
    }

    Ok(AnalysisSummary {
        sequence_count: profiles.len(),
        gc: gc_statistics(profiles),
        dinucleotides: merged_tables(profiles.iter().map(|p| &p.dinucleotides)).entries(),
        kmer_rankings: kmer_rankings(profiles, config),
        palindromes: palindrome_summary(profiles, config),
        lengths: length_statistics(profiles),
        repeats: RepeatSummary {
            window: config.repeat_window,
            unique: repeats.len(),
            top: repeats.top_n(config.repeat_top_n),
        },
        composition: composition_fractions(profiles),
    })
}

fn gc_statistics(profiles: &[SequenceProfile]) -> GcStatistics {
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut bins = [0usize; GC_BIN_COUNT];

    for profile in profiles {
        sum += profile.gc;
        min = min.min(profile.gc);
        max = max.max(profile.gc);
        bins[nearest_gc_bin(profile.gc)] += 1;
    }

    GcStatistics {
        mean: sum / profiles.len() as f64,
        min,
        max,
        distribution: bins
            .iter()
            .enumerate()
            .map(|(index, &count)| GcBin {
                center: gc_bin_center(index),
                count,
            })
            .collect(),
    }
}

fn merged_tables<'a, I>(tables: I) -> FrequencyTable
where
    I: Iterator<Item = &'a FrequencyTable>,
{
    let mut merged = FrequencyTable::new();
    for table in tables {
        merged.merge(table);
    }
    merged
}

fn kmer_rankings(profiles: &[SequenceProfile], config: &AnalysisConfig) -> Vec<KmerRanking> {
    config
        .kmer_lengths
        .iter()
        .enumerate()
        .map(|(slot, &k)| KmerRanking {
            k,
            top: merged_tables(profiles.iter().map(|p| &p.kmers[slot]))
                .top_n(config.kmer_top_n),
        })
        .collect()
}

fn palindrome_summary(profiles: &[SequenceProfile], config: &AnalysisConfig) -> PalindromeSummary {
    let records = profiles
        .iter()
        .enumerate()
        .flat_map(|(sequence_index, profile)| {
            profile.palindromes.iter().map(move |span| PalindromeRecord {
                sequence_index,
                substring: span.clone(),
            })
        })
        .collect();

    PalindromeSummary {
        min_length: config.palindrome_min_length,
        min_diversity: config.palindrome_min_diversity,
        records,
    }
}

fn length_statistics(profiles: &[SequenceProfile]) -> LengthStatistics {
    let min = profiles.iter().map(|p| p.length).min().unwrap_or(0);
    let max = profiles.iter().map(|p| p.length).max().unwrap_or(0);

    if min == max {
        LengthStatistics::Uniform { length: min }
    } else {
        let total: usize = profiles.iter().map(|p| p.length).sum();
        LengthStatistics::Varied {
            average: total as f64 / profiles.len() as f64,
            min,
            max,
        }
    }
}

fn composition_fractions(profiles: &[SequenceProfile]) -> Vec<BaseComposition> {
    let merged = merged_tables(profiles.iter().map(|p| &p.bases));
    let total = merged.total();

    merged
        .entries()
        .into_iter()
        .map(|entry| BaseComposition {
            base: entry.key,
            fraction: if total == 0 {
                0.0
            } else {
                entry.count as f64 / total as f64
            },
            count: entry.count,
        })
        .collect()
}
