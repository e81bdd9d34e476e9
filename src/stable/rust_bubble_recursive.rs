use std::cmp::Ordering;

sort_impl!("rust_bubble_recursive_stable");

/// Recursive variant of bubble sort: sorts everything after the first element, then bubbles the
/// first element into place with one full pass.
///
/// This sort is stable and *O*(*n*^2) in all cases, recursion depth is *O*(*n*).
pub fn sort(input: &[i64]) -> Vec<i64> {
    let mut v = input.to_vec();
    bubble_sort_recursive(&mut v, &mut |a, b| a.lt(b));
    v
}

pub fn sort_by<F: FnMut(&i64, &i64) -> Ordering>(input: &[i64], mut compare: F) -> Vec<i64> {
    let mut v = input.to_vec();
    bubble_sort_recursive(&mut v, &mut |a, b| compare(a, b) == Ordering::Less);
    v
}

// Recurses over sub-slices of the caller's working copy, no per level allocation.
fn bubble_sort_recursive<F>(v: &mut [i64], is_less: &mut F)
where
    F: FnMut(&i64, &i64) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    bubble_sort_recursive(&mut v[1..], is_less);

    for i in 0..len - 1 {
        if is_less(&v[i + 1], &v[i]) {
            v.swap(i, i + 1);
        }
    }
}
