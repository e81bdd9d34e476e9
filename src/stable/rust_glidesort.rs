use std::cmp::Ordering;

sort_impl!("rust_glidesort_stable");

pub fn sort(input: &[i64]) -> Vec<i64> {
    let mut v = input.to_vec();
    glidesort::sort(&mut v);
    v
}

pub fn sort_by<F: FnMut(&i64, &i64) -> Ordering>(input: &[i64], compare: F) -> Vec<i64> {
    let mut v = input.to_vec();
    glidesort::sort_by(&mut v, compare);
    v
}
