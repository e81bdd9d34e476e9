//! Classical comparison sorts over `i64` sequences.
//!
//! Every sort module exposes the same surface:
//!
//! - `sort(input: &[i64]) -> Vec<i64>`, ascending order.
//! - `sort_by(input: &[i64], compare) -> Vec<i64>`, order given by `compare`.
//! - `SortImpl`, implementing [`sort_test_tools::Sort`].
//!
//! The input is only ever borrowed, every call allocates and returns its own result.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(input: &[i64]) -> Vec<i64> {
                sort(input)
            }

            #[inline]
            fn sort_by<F>(input: &[i64], compare: F) -> Vec<i64>
            where
                F: FnMut(&i64, &i64) -> std::cmp::Ordering,
            {
                sort_by(input, compare)
            }
        }
    };
}

pub mod heap;
pub mod merge;

pub mod stable;
pub mod unstable;
