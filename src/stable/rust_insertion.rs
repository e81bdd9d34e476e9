use std::cmp::Ordering;

sort_impl!("rust_insertion_stable");

/// Sorts `input` into a new `Vec` by inserting every element into the sorted prefix before it.
///
/// This sort is stable, *O*(*n*^2) worst-case and *O*(*n*) for nearly sorted input.
pub fn sort(input: &[i64]) -> Vec<i64> {
    insertion_sort(input, |a, b| a.lt(b))
}

pub fn sort_by<F: FnMut(&i64, &i64) -> Ordering>(input: &[i64], mut compare: F) -> Vec<i64> {
    insertion_sort(input, |a, b| compare(a, b) == Ordering::Less)
}

fn insertion_sort<F>(input: &[i64], mut is_less: F) -> Vec<i64>
where
    F: FnMut(&i64, &i64) -> bool,
{
    let mut v = input.to_vec();

    for i in 1..v.len() {
        let key = v[i];

        // Shift every element strictly greater than `key` one to the right. The comparison is
        // always against `key`, never against the shifted values.
        let mut hole = i;
        while hole > 0 && is_less(&key, &v[hole - 1]) {
            v[hole] = v[hole - 1];
            hole -= 1;
        }

        v[hole] = key;
    }

    v
}
