use std::cmp::Ordering;

use crate::merge::merge;

sort_impl!("rust_merge_stable");

/// Top-down merge sort. Splits at `len / 2`, sorts both halves and merges them.
///
/// This sort is stable and *O*(*n* \* log(*n*)) worst-case. Every level of the recursion
/// allocates its own buffers, nothing is merged in place.
pub fn sort(input: &[i64]) -> Vec<i64> {
    merge_sort(input, &mut |a, b| a.lt(b))
}

pub fn sort_by<F: FnMut(&i64, &i64) -> Ordering>(input: &[i64], mut compare: F) -> Vec<i64> {
    merge_sort(input, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn merge_sort<F>(input: &[i64], is_less: &mut F) -> Vec<i64>
where
    F: FnMut(&i64, &i64) -> bool,
{
    let mid = input.len() / 2;
    if mid == 0 {
        return input.to_vec();
    }

    let left = merge_sort(&input[..mid], is_less);
    let right = merge_sort(&input[mid..], is_less);

    merge(&left, &right, is_less)
}
