use std::{marker::PhantomData, ptr::NonNull};

use super::{list::UnrolledLinkedList, node::Node};

/// Read-only position inside an [`UnrolledLinkedList`] that steps over node boundaries.
///
/// A cursor borrows its list, so the list cannot be mutated while the cursor is alive.
pub struct Cursor<'a, T> {
    state: State<T>,
    _marker: PhantomData<&'a UnrolledLinkedList<T>>,
}

enum State<T> {
    Positioned { node: NonNull<Node<T>>, offset: usize },
    Exhausted,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for State<T> {}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    /// `offset` must index into `node`'s values, and `node` must be owned by the list the
    /// cursor borrows.
    pub(super) fn new(position: Option<(NonNull<Node<T>>, usize)>) -> Self {
        let state = match position {
            Some((node, offset)) => {
                debug_assert!(offset < unsafe { node.as_ref() }.len());
                State::Positioned { node, offset }
            }
            None => State::Exhausted,
        };
        Self {
            state,
            _marker: PhantomData,
        }
    }

    /// The value under the cursor, or `None` once exhausted.
    pub fn value(&self) -> Option<&'a T> {
        match self.state {
            State::Positioned { node, offset } => {
                Some(unsafe { &(*node.as_ptr()).values()[offset] })
            }
            State::Exhausted => None,
        }
    }

    pub const fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }

    /// Steps to the following value. Returns `false` and becomes exhausted when there is none.
    pub fn move_next(&mut self) -> bool {
        let State::Positioned { node, offset } = self.state else {
            return false;
        };
        let current = unsafe { node.as_ref() };
        self.state = if offset + 1 < current.len() {
            State::Positioned {
                node,
                offset: offset + 1,
            }
        } else {
            match current.next {
                Some(next) => State::Positioned {
                    node: next,
                    offset: 0,
                },
                None => State::Exhausted,
            }
        };
        !self.is_exhausted()
    }

    /// Steps to the preceding value. Returns `false` and becomes exhausted when there is none.
    pub fn move_prev(&mut self) -> bool {
        let State::Positioned { node, offset } = self.state else {
            return false;
        };
        self.state = if offset > 0 {
            State::Positioned {
                node,
                offset: offset - 1,
            }
        } else {
            match unsafe { node.as_ref() }.prev {
                Some(prev) => State::Positioned {
                    node: prev,
                    offset: unsafe { prev.as_ref() }.len() - 1,
                },
                None => State::Exhausted,
            }
        };
        !self.is_exhausted()
    }
}
