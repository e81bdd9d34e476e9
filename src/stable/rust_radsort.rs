use std::cmp::Ordering;

sort_impl!("rust_radsort_radix");

pub fn sort(input: &[i64]) -> Vec<i64> {
    let mut v = input.to_vec();
    radsort::sort(&mut v);
    v
}

// Radix sort has no use for a comparator.
pub fn sort_by<F: FnMut(&i64, &i64) -> Ordering>(input: &[i64], compare: F) -> Vec<i64> {
    let mut v = input.to_vec();
    v.sort_by(compare);
    v
}
