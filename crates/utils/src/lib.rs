pub mod multiset;
pub mod test_utils;

// re-exported so that the macros in `test_utils` resolve `paste` from any crate
#[doc(hidden)]
pub use paste;
