//! Similarity primitives used by Stage C scoring
//!
//! All functions operate on `char`s, so lengths and windows count Unicode
//! scalar values rather than bytes.

use ahash::AHashSet;

/// Window size for character n-grams
pub const NGRAM_SIZE: usize = 2;

/// Case-fold and trim a name or query for comparison
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Character n-grams of `text`, padded with one space on each side.
///
/// `"bob"` becomes `" bob "` and yields `{" b", "bo", "ob", "b "}`.
pub fn char_ngrams(text: &str) -> AHashSet<String> {
    let padded: Vec<char> = std::iter::once(' ')
        .chain(text.chars())
        .chain(std::iter::once(' '))
        .collect();

    padded
        .windows(NGRAM_SIZE)
        .map(|window| window.iter().collect())
        .collect()
}

/// Cosine similarity between two sets: `|A ∩ B| / (sqrt|A| * sqrt|B|)`.
///
/// Returns 0.0 if either set is empty.
pub fn set_cosine(a: &AHashSet<String>, b: &AHashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|gram| large.contains(*gram)).count();

    intersection as f64 / ((a.len() as f64).sqrt() * (b.len() as f64).sqrt())
}

/// Ratcliff-Obershelp similarity: `2 * M / (len(a) + len(b))`, where `M` is
/// the number of characters covered by recursively found longest common
/// blocks. Two empty strings are identical (1.0).
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Sum of the lengths of all matching blocks between `a` and `b`
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(a, b)];

    while let Some((a, b)) = pending.pop() {
        let (i, j, k) = longest_match(a, b);
        if k == 0 {
            continue;
        }
        matched += k;
        pending.push((&a[..i], &b[..j]));
        pending.push((&a[i + k..], &b[j + k..]));
    }

    matched
}

/// Longest common contiguous block as `(start_in_a, start_in_b, len)`.
///
/// Among equally long blocks the one starting earliest in `a` wins, then the
/// one starting earliest in `b`.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // prev[j + 1] = length of the common suffix of a[..i] and b[..=j]
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                let k = prev[j] + 1;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
                k
            } else {
                0
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
