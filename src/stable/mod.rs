// Sorts that never reorder elements the comparator considers equal.

pub mod rust_bubble;
pub mod rust_bubble_recursive;
pub mod rust_insertion;
pub mod rust_insertion_recursive;
pub mod rust_merge;
pub mod rust_selection;

// Reference implementation, `slice::sort`.
pub mod rust_std;

#[cfg(feature = "rust_glidesort")]
pub mod rust_glidesort;

#[cfg(feature = "rust_radsort")]
pub mod rust_radsort;

#[cfg(feature = "rust_tinysort")]
pub mod rust_tinysort;
