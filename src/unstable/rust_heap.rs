use std::cmp::Ordering;

use crate::heap::{build_max_heap, sift_down};

sort_impl!("rust_heap_unstable");

/// Sorts `input` into a new `Vec` using heapsort.
///
/// This sort is unstable and *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// The heap is built by inserting the elements one at a time and sifting each one up. The sorted
/// suffix then grows by swapping the root with the last heap element and restoring the heap over
/// the shrunken prefix with a single sift-down, instead of rebuilding the whole heap every step.
pub fn sort(input: &[i64]) -> Vec<i64> {
    heapsort(input, &mut |a, b| a.lt(b))
}

pub fn sort_by<F: FnMut(&i64, &i64) -> Ordering>(input: &[i64], mut compare: F) -> Vec<i64> {
    heapsort(input, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn heapsort<F>(input: &[i64], is_less: &mut F) -> Vec<i64>
where
    F: FnMut(&i64, &i64) -> bool,
{
    let mut v = build_max_heap(input, is_less);

    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, is_less);
    }

    v
}
