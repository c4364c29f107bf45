//! Linked sequence containers.
//!
//! [`UnrolledLinkedList`] stores a small fixed-capacity block of values in every node, which keeps
//! neighboring values in the same cache lines and spends one pair of links per block instead of
//! one per value. [`LinkedList`] is the plain one-value-per-node variant.
//!
//! ```
//! use unrolled_linked_list::UnrolledLinkedList;
//!
//! let mut list = UnrolledLinkedList::new(4).unwrap();
//! list.extend(0..5);
//! assert_eq!(list.node_lens(), [2, 3]);
//! assert_eq!(list.get(3), Ok(&3));
//! assert_eq!(list.pop(), Some(4));
//! ```

pub mod base;
pub mod error;
pub mod unrolled;

pub use base::LinkedList;
pub use error::{Error, Result};
pub use unrolled::{Config, Cursor, UnrolledLinkedList};
