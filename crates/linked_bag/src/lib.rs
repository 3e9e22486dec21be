//! A bag (multiset) keeping its elements in insertion order on a singly
//! linked list.
//!
//! Duplicates are kept as distinct entries, lookups are linear scans and only
//! [`PartialEq`] is ever required of the elements.
//!
//! ```
//! use linked_bag::Bag;
//!
//! let mut bag = Bag::new();
//! bag.add(1);
//! bag.add(2);
//! bag.add(2);
//! assert!(bag.remove(&2));
//! assert_eq!(bag.iter().copied().collect::<Vec<_>>(), [1, 2]);
//! ```

mod bag;
mod error;
mod iter;
#[cfg(feature = "serde")]
mod serialization;

pub use bag::Bag;
pub use error::{BagError, InvalidArgument};
pub use iter::{IntoIter, Iter};
