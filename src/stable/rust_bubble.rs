use std::cmp::Ordering;

sort_impl!("rust_bubble_stable");

/// Sorts `input` into a new `Vec` by repeatedly swapping adjacent elements that are out of order.
///
/// This sort is stable, *O*(*n*^2) worst-case and *O*(*n*) if `input` is already sorted: the first
/// pass without a swap ends the sort.
pub fn sort(input: &[i64]) -> Vec<i64> {
    bubble_sort(input, |a, b| a.lt(b))
}

pub fn sort_by<F: FnMut(&i64, &i64) -> Ordering>(input: &[i64], mut compare: F) -> Vec<i64> {
    bubble_sort(input, |a, b| compare(a, b) == Ordering::Less)
}

fn bubble_sort<F>(input: &[i64], mut is_less: F) -> Vec<i64>
where
    F: FnMut(&i64, &i64) -> bool,
{
    let mut v = input.to_vec();
    let len = v.len();

    // After pass `n` the `n` largest elements are in their final place, so at most `len - 1`
    // passes are needed and each one can stop before the settled tail.
    for pass in 1..len {
        let mut swapped = false;

        for i in 0..len - pass {
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    v
}
