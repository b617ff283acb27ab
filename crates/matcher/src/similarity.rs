//! Edit-distance helpers used for fuzzy matching.

/// Levenshtein distance between two strings, counted over Unicode scalar
/// values. Insertions, deletions and substitutions all cost 1.
///
/// Classic dynamic-programming formulation, keeping only two rows of the
/// table.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Whether `a` and `b` are within `threshold` edits of each other.
///
/// The length difference is a lower bound on the distance, so pairs that
/// differ in length by more than `threshold` skip the table entirely.
pub fn is_similar(a: &str, b: &str, threshold: usize) -> bool {
    if a == b {
        return true;
    }
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a.abs_diff(len_b) > threshold {
        return false;
    }
    levenshtein(a, b) <= threshold
}
