use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// A block of up to `capacity` values. The buffer is allocated once at full capacity and never
/// grows, so inserting into a full node is refused instead of reallocating.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) prev: Link<T>,
    pub(crate) next: Link<T>,
    capacity: usize,
    values: Vec<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            prev: None,
            next: None,
            capacity,
            values: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn from_slice(values: &[T], capacity: usize) -> Self
    where
        T: Clone,
    {
        debug_assert!(values.len() <= capacity);
        let mut node = Self::new(capacity);
        node.values.extend_from_slice(values);
        node
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }

    pub(crate) fn values(&self) -> &[T] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Raw pointer to the first slot, without going through a slice reference.
    pub(crate) fn as_ptr(&self) -> *const T {
        self.values.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.values.as_mut_ptr()
    }

    /// Hands `value` back if the node is full.
    pub(crate) fn push_back(&mut self, value: T) -> Result<(), T> {
        let len = self.len();
        self.insert(len, value)
    }

    /// Hands `value` back if the node is full.
    pub(crate) fn push_front(&mut self, value: T) -> Result<(), T> {
        self.insert(0, value)
    }

    /// Hands `value` back if the node is full.
    ///
    /// # Panics
    /// `offset > self.len()`
    pub(crate) fn insert(&mut self, offset: usize, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.values.insert(offset, value);
        Ok(())
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        self.values.pop()
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.remove(0))
        }
    }

    /// # Panics
    /// `offset >= self.len()`
    pub(crate) fn remove(&mut self, offset: usize) -> T {
        self.values.remove(offset)
    }

    /// Moves the values from `capacity / 2` onward into a new, unlinked node.
    ///
    /// On odd capacities this node keeps the smaller half. The caller links the returned node
    /// right after this one.
    pub(crate) fn split(&mut self) -> Node<T> {
        debug_assert!(self.is_full());
        let mut upper = Node::new(self.capacity);
        upper.values.extend(self.values.drain(self.capacity / 2..));
        upper
    }

    pub(crate) fn can_merge_with(&self, other: &Node<T>) -> bool {
        self.len() + other.len() <= self.capacity
    }

    /// Moves every value of `other` to the end of this node, leaving `other` empty.
    pub(crate) fn absorb(&mut self, other: &mut Node<T>) {
        debug_assert!(self.can_merge_with(other));
        self.values.append(&mut other.values);
    }
}
