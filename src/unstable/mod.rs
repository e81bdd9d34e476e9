// Sorts that may reorder elements the comparator considers equal.

pub mod rust_heap;
pub mod rust_quick;

// Reference implementation, `slice::sort_unstable`.
pub mod rust_std;

#[cfg(feature = "rust_tinysort")]
pub mod rust_tinysort;
