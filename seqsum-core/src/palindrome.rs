//! Mirror-palindrome detection by center expansion.
//!
//! A span qualifies when it reads identically forwards and backwards
//! (character reversal, not biological reverse-complement), is at least
//! `min_length` characters long, and contains at least `min_diversity`
//! distinct characters. The scan expands symmetrically from every possible
//! center: each single position for odd-length candidates and each adjacent
//! pair for even-length candidates.
//!
//! Every expansion step that satisfies both filters emits a span, so one
//! center can contribute several overlapping, nested results (lengths 20,
//! 22, 24 from the same expansion, for example). The nested spans are part
//! of the contract: reported totals count every qualifying span, not just
//! maximal ones. A future revision may want to deduplicate them.
//!
//! Worst-case cost is O(n^2) per sequence: each of the O(n) centers may
//! expand O(n) steps. This is a known scaling limit of the exact
//! center-expansion approach.

/// Returns every qualifying palindromic span of `sequence`, in center order.
///
/// Empty and single-character sequences yield no results under any
/// realistic thresholds.
///
/// # Examples
///
/// ```rust
/// use seqsum_core::palindrome::find_palindromes;
///
/// // "ACGTGCA" mirrors around the central T and uses all four bases.
/// let hits = find_palindromes("ACGTGCA", 4, 3);
/// assert!(hits.contains(&"ACGTGCA".to_string()));
/// ```
#[must_use]
pub fn find_palindromes(sequence: &str, min_length: usize, min_diversity: usize) -> Vec<String> {
    let bytes = sequence.as_bytes();
    let mut palindromes = Vec::new();

    for center in 0..bytes.len() {
        // Odd-length candidates centered on one position.
        expand_center(bytes, center, center, min_length, min_diversity, &mut palindromes);
        // Even-length candidates centered between adjacent positions.
        expand_center(
            bytes,
            center,
            center + 1,
            min_length,
            min_diversity,
            &mut palindromes,
        );
    }

    palindromes
}

/// Expands symmetrically outward from one center while the boundary
/// characters match, emitting every span that passes both filters.
///
/// Distinct-character counts are maintained incrementally as the boundaries
/// move, so the diversity check is O(1) per step.
fn expand_center(
    bytes: &[u8],
    start_left: usize,
    start_right: usize,
    min_length: usize,
    min_diversity: usize,
    out: &mut Vec<String>,
) {
    let mut counts = [0u32; 256];
    let mut distinct = 0usize;
    let mut left = start_left as isize;
    let mut right = start_right;

    while left >= 0 && right < bytes.len() && bytes[left as usize] == bytes[right] {
        let left_index = left as usize;

        // The two boundary characters are equal; count one byte for an odd
        // seed step (left == right) and two otherwise.
        bump(&mut counts, &mut distinct, bytes[right]);
        if left_index != right {
            bump(&mut counts, &mut distinct, bytes[right]);
        }

        let span_length = right - left_index + 1;
        if span_length >= min_length && distinct >= min_diversity {
            out.push(String::from_utf8_lossy(&bytes[left_index..=right]).into_owned());
        }

        left -= 1;
        right += 1;
    }
}

fn bump(counts: &mut [u32; 256], distinct: &mut usize, byte: u8) {
    if counts[byte as usize] == 0 {
        *distinct += 1;
    }
    counts[byte as usize] += 1;
}
