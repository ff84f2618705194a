//! Least-rotation computation (Booth's algorithm).
//!
//! Runs over the conceptual doubling `seq ++ seq` without materializing it:
//! positions at or beyond `n` index the input modulo `n`. The failure array
//! is the only allocation, is local to the call, and never escapes, so
//! concurrent calls cannot observe each other's scratch state.

/// Returns the smallest offset `k` in `[0, n)` such that rotating `seq` left
/// by `k` yields the lexicographically smallest of all its rotations. Ties
/// (periodic inputs) resolve to the smallest such `k`; a length-1 input
/// returns 0.
///
/// O(n) time, O(n) auxiliary space. Every position of the doubled sequence
/// is processed exactly once - there is no early exit, because a later
/// position can still redirect the best candidate.
///
/// # Panics
///
/// Panics if `seq` is empty. Rings uphold the non-empty invariant by
/// construction, so reaching that panic means a broken invariant, not bad
/// input.
pub fn least_rotation<T: Ord>(seq: &[T]) -> usize {
    let n = seq.len();
    assert!(n > 0, "least_rotation requires a non-empty sequence!");

    let at = |i: usize| &seq[i % n];

    // Failure function over the doubled sequence, -1 meaning "no border",
    // maintained relative to the current best candidate k.
    let mut f: Vec<isize> = vec![-1; 2 * n];
    let mut k: usize = 0;

    for j in 1..2 * n {
        let mut i = f[j - k - 1];
        while i != -1 && at(j) != at(k + i as usize + 1) {
            if at(j) < at(k + i as usize + 1) {
                k = j - i as usize - 1;
            }
            i = f[i as usize];
        }
        if i == -1 && at(j) != at(k) {
            if at(j) < at(k) {
                k = j;
            }
            f[j - k] = -1;
        } else {
            f[j - k] = i + 1;
        }
    }

    debug_assert!(k < n, "least rotation offset {} out of range (length {})", k, n);
    k
}
