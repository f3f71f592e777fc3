/// Configuration settings for a sequence-collection analysis run.
///
/// Controls the window lengths, thresholds, and ranking sizes of every
/// scanner, plus the parallelism and progress-reporting behavior of the
/// engine. The algorithmic defaults are k-mers of length 3, 4, and 5 ranked
/// top-5, palindromes of at least 20 bases with at least 3 distinct bases,
/// and 20-base repeat windows ranked top-10.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use seqsum_core::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.kmer_lengths, vec![3, 4, 5]);
/// ```
///
/// ## Custom thresholds
///
/// ```rust
/// use seqsum_core::config::AnalysisConfig;
///
/// let config = AnalysisConfig {
///     palindrome_min_length: 8,
///     repeat_top_n: 5,
///     quiet: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Window lengths to tally k-mer frequencies for.
    ///
    /// Each length produces its own collection-wide ranking in the summary.
    ///
    /// **Default**: `[3, 4, 5]`
    pub kmer_lengths: Vec<usize>,

    /// How many entries each k-mer ranking keeps.
    ///
    /// **Default**: `5`
    pub kmer_top_n: usize,

    /// Minimum span length for a palindrome to qualify.
    ///
    /// **Default**: `20`
    pub palindrome_min_length: usize,

    /// Minimum number of distinct characters a palindrome must contain.
    ///
    /// With the four-letter alphabet, values above 4 make hits impossible.
    ///
    /// **Default**: `3`
    pub palindrome_min_diversity: usize,

    /// Window length for the collection-wide repeat scan.
    ///
    /// Sequences shorter than this contribute no repeat windows.
    ///
    /// **Default**: `20`
    pub repeat_window: usize,

    /// How many entries the repeat ranking keeps.
    ///
    /// **Default**: `10`
    pub repeat_top_n: usize,

    /// Number of threads for parallel per-sequence profiling.
    ///
    /// When set, the engine configures the global rayon thread pool.
    /// Set to `None` for automatic detection.
    ///
    /// **Default**: `None` (use all available cores)
    pub num_threads: Option<usize>,

    /// Suppress progress reporting on stderr.
    ///
    /// Progress is purely observational and never affects results.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            kmer_lengths: vec![3, 4, 5],
            kmer_top_n: 5,
            palindrome_min_length: 20,
            palindrome_min_diversity: 3,
            repeat_window: 20,
            repeat_top_n: 10,
            num_threads: None,
            quiet: false,
        }
    }
}
