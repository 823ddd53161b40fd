//! Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `s0` into `s1`.
///
/// Classic dynamic programming over two rolling rows of length
/// `len(s0) + 1`. Characters are Unicode scalar values, so `"é"` and `"e"`
/// differ by one substitution regardless of their UTF-8 width.
pub fn levenshtein(s0: &str, s1: &str) -> usize {
    let a: Vec<char> = s0.chars().collect();
    let len0 = a.len() + 1;

    // Cost of skipping a prefix of s0
    let mut cost: Vec<usize> = (0..len0).collect();
    let mut new_cost: Vec<usize> = vec![0; len0];

    for (j, cb) in s1.chars().enumerate() {
        new_cost[0] = j + 1;

        for i in 1..len0 {
            let mismatch = usize::from(a[i - 1] != cb);
            let replace = cost[i - 1] + mismatch;
            let insert = cost[i] + 1;
            let delete = new_cost[i - 1] + 1;
            new_cost[i] = replace.min(insert).min(delete);
        }

        std::mem::swap(&mut cost, &mut new_cost);
    }

    cost[len0 - 1]
}

/// Whether two labels are exactly one edit apart.
///
/// Rejects on length difference before running the full distance.
pub fn is_one_edit(s0: &str, s1: &str) -> bool {
    let (l0, l1) = (s0.chars().count(), s1.chars().count());
    if l0.abs_diff(l1) > 1 {
        return false;
    }
    levenshtein(s0, s1) == 1
}
