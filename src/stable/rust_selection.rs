use std::cmp::Ordering;

sort_impl!("rust_selection_stable");

/// Sorts `input` into a new `Vec` by repeatedly moving the minimum of the unsorted remainder to
/// the output.
///
/// This sort is stable and *O*(*n*^2) in all cases.
pub fn sort(input: &[i64]) -> Vec<i64> {
    selection_sort(input, |a, b| a.lt(b))
}

pub fn sort_by<F: FnMut(&i64, &i64) -> Ordering>(input: &[i64], mut compare: F) -> Vec<i64> {
    selection_sort(input, |a, b| compare(a, b) == Ordering::Less)
}

fn selection_sort<F>(input: &[i64], mut is_less: F) -> Vec<i64>
where
    F: FnMut(&i64, &i64) -> bool,
{
    let mut unsorted = input.to_vec();
    let mut sorted = Vec::with_capacity(unsorted.len());

    while !unsorted.is_empty() {
        // The first occurrence of the minimum wins ties.
        let mut min_idx = 0;
        for i in 1..unsorted.len() {
            if is_less(&unsorted[i], &unsorted[min_idx]) {
                min_idx = i;
            }
        }

        // `remove` shifts the tail left, so the rest keeps its relative order.
        sorted.push(unsorted.remove(min_idx));
    }

    sorted
}
