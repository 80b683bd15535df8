//! Longest common run search.

use core::ops::Range;

use crate::comparer::EqualityComparer;
use crate::sequence::Sequence;

/// The best run of equal, positionally aligned elements found in a window pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LongestCommonRun {
    pub found: bool,
    pub position_in_a: usize,
    pub position_in_b: usize,
    pub length: usize,
}

impl LongestCommonRun {
    const fn new(position_in_a: usize, position_in_b: usize, length: usize) -> Self {
        Self {
            found: true,
            position_in_a,
            position_in_b,
            length,
        }
    }
}

/// Counts how many elements match walking forward from `a_pos` and `b_pos`,
/// stopping at the window ends.
pub(crate) fn count_equal<A, B, C>(
    a: &A,
    mut a_pos: usize,
    a_end: usize,
    b: &B,
    mut b_pos: usize,
    b_end: usize,
    cmp: &C,
) -> usize
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    C: EqualityComparer<A::Item> + ?Sized,
{
    let mut count = 0;
    while a_pos < a_end && b_pos < b_end && cmp.equals(a.item(a_pos), b.item(b_pos)) {
        count += 1;
        a_pos += 1;
        b_pos += 1;
    }
    count
}

/// Scans every `(i, j)` pair, outer loop over `a`, and keeps the strictly
/// longest run. Ties go to the first run found, i.e. lowest `i` then lowest `j`.
pub(crate) fn find_longest_common_run<A, B, C>(
    a: &A,
    a_window: Range<usize>,
    b: &B,
    b_window: Range<usize>,
    cmp: &C,
) -> LongestCommonRun
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    C: EqualityComparer<A::Item> + ?Sized,
{
    let mut best = LongestCommonRun::default();
    for i in a_window.clone() {
        for j in b_window.clone() {
            if !cmp.equals(a.item(i), b.item(j)) {
                continue;
            }
            let length = count_equal(a, i, a_window.end, b, j, b_window.end, cmp);
            if length > best.length {
                best = LongestCommonRun::new(i, j, length);
            }
        }
    }
    best
}
