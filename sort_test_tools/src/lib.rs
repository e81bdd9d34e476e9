use std::cmp::Ordering;

pub use paste;

/// Common handle for one sort implementation.
///
/// Implementations never modify `input`, the result is always a freshly allocated `Vec`.
pub trait Sort {
    fn name() -> String;

    fn sort(input: &[i64]) -> Vec<i64>;

    fn sort_by<F>(input: &[i64], compare: F) -> Vec<i64>
    where
        F: FnMut(&i64, &i64) -> Ordering;
}

pub mod patterns;
pub mod tests;
