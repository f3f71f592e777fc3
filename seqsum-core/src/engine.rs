//! Main analysis engine.
//!
//! [`SummaryAnalyzer`] ties the per-sequence scanners together: it profiles
//! every sequence of the collection in parallel (composition, k-mers,
//! palindromes), runs the collection-wide repeat scan, and hands everything
//! to the aggregator for the final reduction.
//!
//! The engine is computationally pure once given its input: no I/O, no
//! shared mutable state. Per-sequence profiling is a rayon parallel map;
//! the cross-sequence merge is a sequential left-to-right fold so the
//! first-seen order behind every ranking tie-break is deterministic, and
//! two runs over the same input produce identical summaries.

use std::path::Path;

use rayon::prelude::*;

use crate::aggregate::{summarize, SequenceProfile};
use crate::composition::{base_counts, dinucleotide_frequencies, gc_fraction};
use crate::config::AnalysisConfig;
use crate::ingest::{read_fasta_sequences, read_json_sequences};
use crate::kmer::kmer_frequencies;
use crate::palindrome::find_palindromes;
use crate::progress::{Progress, SilentProgress, StderrProgress};
use crate::repeats::repeat_frequencies;
use crate::results::AnalysisSummary;
use crate::types::AnalysisError;

/// High-level analyzer for sequence collections.
///
/// # Examples
///
/// ## Analyze an in-memory collection
///
/// ```rust
/// use seqsum_core::{SummaryAnalyzer, config::AnalysisConfig};
///
/// let analyzer = SummaryAnalyzer::new(AnalysisConfig {
///     quiet: true,
///     ..Default::default()
/// });
///
/// let sequences = vec![
///     "AGCTAGCTAGCTAGCTAGCTA".to_string(),
///     "ACGTACGTACGTACGTACGTA".to_string(),
/// ];
/// let summary = analyzer.analyze(&sequences)?;
///
/// assert_eq!(summary.sequence_count, 2);
/// # Ok::<(), seqsum_core::types::AnalysisError>(())
/// ```
///
/// ## With a custom progress observer
///
/// ```rust
/// use seqsum_core::{SummaryAnalyzer, config::AnalysisConfig};
/// use seqsum_core::progress::SilentProgress;
///
/// let analyzer = SummaryAnalyzer::with_progress(
///     AnalysisConfig::default(),
///     Box::new(SilentProgress),
/// );
/// ```
pub struct SummaryAnalyzer {
    /// Configuration for this analyzer.
    pub config: AnalysisConfig,
    progress: Box<dyn Progress>,
}

impl std::fmt::Debug for SummaryAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryAnalyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SummaryAnalyzer {
    /// Creates an analyzer with the given configuration.
    ///
    /// Progress goes to stderr unless `config.quiet` is set.
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        let progress: Box<dyn Progress> = if config.quiet {
            Box::new(SilentProgress)
        } else {
            Box::new(StderrProgress)
        };
        Self { config, progress }
    }

    /// Creates an analyzer that reports through the given observer,
    /// ignoring `config.quiet`.
    #[must_use]
    pub fn with_progress(config: AnalysisConfig, progress: Box<dyn Progress>) -> Self {
        Self { config, progress }
    }

    /// Creates an analyzer and sizes the global rayon thread pool from
    /// `config.num_threads`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ThreadPool`] if the pool was already built
    /// with a different size.
    pub fn with_thread_pool(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        if let Some(num_threads) = config.num_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()
                .map_err(|e| AnalysisError::ThreadPool(e.to_string()))?;
        }
        Ok(Self::new(config))
    }

    /// Analyzes a collection of sequences and produces the summary record.
    ///
    /// Sequences are profiled in parallel; palindrome records keep the
    /// index of their originating sequence regardless of completion order.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::EmptyCollection`] for a zero-sequence collection.
    /// - [`AnalysisError::EmptySequence`] if any sequence has length zero.
    /// - [`AnalysisError::InvalidWindow`] if a configured k-mer length or
    ///   the repeat window is zero.
    pub fn analyze(&self, sequences: &[String]) -> Result<AnalysisSummary, AnalysisError> {
        if sequences.is_empty() {
            return Err(AnalysisError::EmptyCollection);
        }

        self.progress.phase("Analyzing sequences");
        let total = sequences.len();
        let profiles: Vec<SequenceProfile> = sequences
            .par_iter()
            .enumerate()
            .map(|(index, sequence)| {
                self.progress.sequence(index, total);
                profile_sequence(sequence, &self.config)
            })
            .collect::<Result<_, _>>()?;

        self.progress.phase("Finding repeat sequences");
        let repeats = repeat_frequencies(sequences, self.config.repeat_window)?;

        self.progress.phase("Generating summary");
        let summary = summarize(&profiles, &repeats, &self.config)?;

        self.progress.phase("Analysis complete");
        Ok(summary)
    }

    /// Reads a `{"sequences": [...]}` JSON file and analyzes it.
    ///
    /// # Errors
    ///
    /// Propagates I/O and parse failures from ingestion plus any
    /// [`analyze`](Self::analyze) error.
    pub fn analyze_json_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<AnalysisSummary, AnalysisError> {
        let sequences = read_json_sequences(path)?;
        self.analyze(&sequences)
    }

    /// Reads a FASTA file and analyzes its sequences.
    ///
    /// # Errors
    ///
    /// Propagates I/O and parse failures from ingestion plus any
    /// [`analyze`](Self::analyze) error.
    pub fn analyze_fasta_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<AnalysisSummary, AnalysisError> {
        let sequences = read_fasta_sequences(path)?;
        self.analyze(&sequences)
    }
}

/// Runs every per-sequence scanner over one sequence.
fn profile_sequence(
    sequence: &str,
    config: &AnalysisConfig,
) -> Result<SequenceProfile, AnalysisError> {
    let gc = gc_fraction(sequence)?;

    let kmers = config
        .kmer_lengths
        .iter()
        .map(|&k| kmer_frequencies(sequence, k))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SequenceProfile {
        gc,
        length: sequence.len(),
        dinucleotides: dinucleotide_frequencies(sequence),
        kmers,
        palindromes: find_palindromes(
            sequence,
            config.palindrome_min_length,
            config.palindrome_min_diversity,
        ),
        bases: base_counts(sequence),
    })
}
