use std::cmp::Ordering;

sort_impl!("rust_insertion_recursive_stable");

/// Recursive variant of insertion sort: sorts the first `n - 1` elements, then sinks the last
/// element into place one swap at a time.
///
/// This sort is stable and *O*(*n*^2) worst-case, recursion depth is *O*(*n*).
pub fn sort(input: &[i64]) -> Vec<i64> {
    let mut v = input.to_vec();
    insertion_sort_recursive(&mut v, &mut |a, b| a.lt(b));
    v
}

pub fn sort_by<F: FnMut(&i64, &i64) -> Ordering>(input: &[i64], mut compare: F) -> Vec<i64> {
    let mut v = input.to_vec();
    insertion_sort_recursive(&mut v, &mut |a, b| compare(a, b) == Ordering::Less);
    v
}

fn insertion_sort_recursive<F>(v: &mut [i64], is_less: &mut F)
where
    F: FnMut(&i64, &i64) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    insertion_sort_recursive(&mut v[..len - 1], is_less);

    for i in (1..len).rev() {
        if !is_less(&v[i], &v[i - 1]) {
            break;
        }

        v.swap(i, i - 1);
    }
}
