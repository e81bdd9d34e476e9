use std::cmp::Ordering;

sort_impl!("rust_quick_unstable");

/// Sorts `input` into a new `Vec` using quicksort.
///
/// This sort is unstable, *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Lomuto partition around the middle element. Only the shorter side of each partition is
/// sorted recursively, the longer one is handled by the loop, so the stack depth stays
/// *O*(log(*n*)) even for adversarial input.
pub fn sort(input: &[i64]) -> Vec<i64> {
    let mut v = input.to_vec();
    quicksort(&mut v, &mut |a, b| a.lt(b));
    v
}

pub fn sort_by<F: FnMut(&i64, &i64) -> Ordering>(input: &[i64], mut compare: F) -> Vec<i64> {
    let mut v = input.to_vec();
    quicksort(&mut v, &mut |a, b| compare(a, b) == Ordering::Less);
    v
}

fn quicksort<F>(mut v: &mut [i64], is_less: &mut F)
where
    F: FnMut(&i64, &i64) -> bool,
{
    while v.len() > 1 {
        let divider = partition(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(divider);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Moves the middle element of `v` to its final position and returns that position.
///
/// Everything left of the returned index compares less than the pivot, everything right of it
/// does not.
fn partition<F>(v: &mut [i64], is_less: &mut F) -> usize
where
    F: FnMut(&i64, &i64) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    // Place the pivot at the end of slice.
    let last = len - 1;
    v.swap(len / 2, last);

    let mut divider = 0;
    for i in 0..last {
        if is_less(&v[i], &v[last]) {
            v.swap(i, divider);
            divider += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(divider, last);

    divider
}
