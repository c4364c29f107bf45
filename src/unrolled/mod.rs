//! Unrolled linked list: a chain of nodes that each hold a bounded block of values.

mod config;
mod cursor;
mod iter;
mod list;
mod locate;
mod node;

pub use config::{Config, DEFAULT_NODE_CAPACITY};
pub use cursor::Cursor;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::UnrolledLinkedList;
