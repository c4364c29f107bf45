use std::{
    fmt::{self, Debug},
    marker::PhantomData,
    mem,
    ptr::NonNull,
};

use super::{
    config::Config,
    cursor::Cursor,
    iter::{IntoIter, Iter, IterMut, NodePtrs, RawIter},
    node::{Link, Node},
};
use crate::error::Result;

/// A sequence stored as a doubly linked chain of fixed-capacity blocks.
///
/// Every node holds between 1 and `node_capacity` values. Inserting into a full node splits it
/// first; the new successor takes the values from `node_capacity / 2` onward. Removing the last
/// value of a node unlinks it.
///
/// Searching compares values structurally with [`PartialEq`].
pub struct UnrolledLinkedList<T> {
    pub(super) head: Link<T>,
    pub(super) tail: Link<T>,
    pub(super) len: usize,
    node_count: usize,
    config: Config,
    _marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for UnrolledLinkedList<T> {}
unsafe impl<T: Sync> Sync for UnrolledLinkedList<T> {}

impl<T> UnrolledLinkedList<T> {
    /// Fails with [`Error::InvalidCapacity`](crate::Error::InvalidCapacity) when `node_capacity`
    /// is zero.
    pub fn new(node_capacity: usize) -> Result<Self> {
        Self::with_config(Config::new(node_capacity))
    }

    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    const fn empty(config: Config) -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            node_count: 0,
            config,
            _marker: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn node_capacity(&self) -> usize {
        self.config.node_capacity
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Occupancy of every node, front to back.
    pub fn node_lens(&self) -> Vec<usize> {
        self.node_ptrs()
            .map(|node| unsafe { node.as_ref() }.len())
            .collect()
    }

    /// Cursor at the first value, or an exhausted cursor on an empty list.
    pub fn first(&self) -> Cursor<'_, T> {
        Cursor::new(self.head.map(|head| (head, 0)))
    }

    /// Cursor at the last value, or an exhausted cursor on an empty list.
    pub fn last(&self) -> Cursor<'_, T> {
        Cursor::new(
            self.tail
                .map(|tail| (tail, unsafe { tail.as_ref() }.len() - 1)),
        )
    }

    pub fn cursor_at(&self, index: usize) -> Result<Cursor<'_, T>> {
        self.locate(index).map(|position| Cursor::new(Some(position)))
    }

    pub fn front(&self) -> Option<&T> {
        self.first().value()
    }

    pub fn back(&self) -> Option<&T> {
        self.last().value()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.raw_iter())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.raw_iter())
    }

    pub(super) fn node_ptrs(&self) -> NodePtrs<T> {
        NodePtrs::new(self.head)
    }

    fn raw_iter(&self) -> RawIter<T> {
        RawIter::new(self.head, self.tail, self.len)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let (node, offset) = self.locate(index)?;
        Ok(unsafe { &(*node.as_ptr()).values()[offset] })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let (node, offset) = self.locate(index)?;
        Ok(unsafe { &mut (*node.as_ptr()).values_mut()[offset] })
    }

    /// Replaces the value at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut cursor = self.first();
        let mut index = 0;
        while let Some(current) = cursor.value() {
            if current == value {
                return Some(index);
            }
            index += 1;
            cursor.move_next();
        }
        None
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut cursor = self.last();
        let mut index = self.len;
        while let Some(current) = cursor.value() {
            index -= 1;
            if current == value {
                return Some(index);
            }
            cursor.move_prev();
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// First value matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// Replaces the first value matching `predicate` and returns it. `value` is dropped when
    /// nothing matches.
    pub fn replace_first<P>(&mut self, mut predicate: P, value: T) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter_mut()
            .find(|current| predicate(current))
            .map(|slot| mem::replace(slot, value))
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> UnrolledLinkedList<T> {
    fn new_node_ptr(node: Node<T>) -> NonNull<Node<T>> {
        Box::leak(Box::new(node)).into()
    }

    /// # Safety
    /// * `at`, if any, is a node owned by `self`
    /// * `new` is a freshly allocated node that is not linked anywhere
    unsafe fn link_after(&mut self, at: Link<T>, new: NonNull<Node<T>>) {
        let next = match at {
            Some(at) => (*at.as_ptr()).next.replace(new),
            // `at` being `None` means the new node becomes the head
            None => self.head.replace(new),
        };
        (*new.as_ptr()).prev = at;
        (*new.as_ptr()).next = next;
        match next {
            Some(next) => (*next.as_ptr()).prev = Some(new),
            None => self.tail = Some(new),
        }
        self.node_count += 1;
    }

    /// # Safety
    /// Same as [`Self::link_after`], with `at` required.
    unsafe fn link_before(&mut self, at: NonNull<Node<T>>, new: NonNull<Node<T>>) {
        self.link_after(at.as_ref().prev, new);
    }

    /// Allocates an empty node and links it after `at`.
    ///
    /// # Safety
    /// `at`, if any, is a node owned by `self`
    unsafe fn push_node_after(&mut self, at: Link<T>) -> NonNull<Node<T>> {
        let node = Self::new_node_ptr(Node::new(self.config.node_capacity));
        self.link_after(at, node);
        node
    }

    /// # Safety
    /// `node` is owned by `self`; it is freed once the returned box is dropped.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let (prev, next) = {
            let node = node.as_ref();
            (node.prev, node.next)
        };

        match prev {
            Some(prev) => (*prev.as_ptr()).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => (*next.as_ptr()).prev = prev,
            None => self.tail = prev,
        }
        self.node_count -= 1;
        tracing::trace!(node_count = self.node_count, "unlink node");

        let mut node = Box::from_raw(node.as_ptr());
        node.prev = None;
        node.next = None;
        node
    }

    /// Returns a node and offset where one more value can be inserted so that it lands at
    /// `offset` of `node`, splitting `node` first if it is full.
    ///
    /// # Safety
    /// `node` is owned by `self` and `offset <= node.len()`
    unsafe fn make_room(
        &mut self,
        node: NonNull<Node<T>>,
        offset: usize,
    ) -> (NonNull<Node<T>>, usize) {
        if !node.as_ref().is_full() {
            return (node, offset);
        }

        let capacity = self.config.node_capacity;
        if capacity == 1 {
            // A single slot cannot be split into two non-empty halves.
            let fresh = Self::new_node_ptr(Node::new(capacity));
            if offset == 0 {
                self.link_before(node, fresh);
            } else {
                self.link_after(Some(node), fresh);
            }
            return (fresh, 0);
        }

        let upper = Self::new_node_ptr((*node.as_ptr()).split());
        self.link_after(Some(node), upper);
        let mid = capacity / 2;
        tracing::trace!(
            capacity,
            kept = mid,
            moved = capacity - mid,
            node_count = self.node_count,
            "split node"
        );
        if offset <= mid {
            (node, offset)
        } else {
            (upper, offset - mid)
        }
    }

    /// Restores the invariants around `node` after a value was removed from its interior.
    ///
    /// # Safety
    /// `node` is owned by `self`
    unsafe fn compact(&mut self, node: NonNull<Node<T>>) {
        if node.as_ref().is_empty() {
            drop(self.unlink(node));
            return;
        }
        if !self.config.merge_on_remove || node.as_ref().len() >= self.config.merge_threshold() {
            return;
        }
        if let Some(next) = node.as_ref().next {
            if node.as_ref().can_merge_with(next.as_ref()) {
                self.merge(node, next);
                return;
            }
        }
        if let Some(prev) = node.as_ref().prev {
            if prev.as_ref().can_merge_with(node.as_ref()) {
                self.merge(prev, node);
            }
        }
    }

    /// Moves all of `from`'s values into its predecessor `into` and frees `from`.
    ///
    /// # Safety
    /// `into` and `from` are adjacent nodes owned by `self`, `from` following `into`
    unsafe fn merge(&mut self, into: NonNull<Node<T>>, from: NonNull<Node<T>>) {
        debug_assert_eq!(into.as_ref().next, Some(from));
        (*into.as_ptr()).absorb(&mut *from.as_ptr());
        tracing::trace!(len = into.as_ref().len(), "merge nodes");
        drop(self.unlink(from));
    }
}

impl<T> UnrolledLinkedList<T> {
    /// Appends `value` as the new last element.
    pub fn push(&mut self, value: T) {
        unsafe {
            let node = match self.tail {
                Some(tail) => self.make_room(tail, tail.as_ref().len()).0,
                None => self.push_node_after(None),
            };
            if (*node.as_ptr()).push_back(value).is_err() {
                unreachable!("no room in tail node after split");
            }
        }
        self.len += 1;
    }

    /// Prepends `value` as the new first element.
    pub fn unshift(&mut self, value: T) {
        unsafe {
            let node = match self.head {
                Some(head) => self.make_room(head, 0).0,
                None => self.push_node_after(None),
            };
            if (*node.as_ptr()).push_front(value).is_err() {
                unreachable!("no room in head node after split");
            }
        }
        self.len += 1;
    }

    /// Removes the last element. Never merges nodes.
    pub fn pop(&mut self) -> Option<T> {
        let tail = self.tail?;
        unsafe {
            let value = (*tail.as_ptr()).pop_back()?;
            self.len -= 1;
            if tail.as_ref().is_empty() {
                drop(self.unlink(tail));
            }
            Some(value)
        }
    }

    /// Removes the first element. Never merges nodes.
    pub fn shift(&mut self) -> Option<T> {
        let head = self.head?;
        unsafe {
            let value = (*head.as_ptr()).pop_front()?;
            self.len -= 1;
            if head.as_ref().is_empty() {
                drop(self.unlink(head));
            }
            Some(value)
        }
    }

    /// Inserts `value` so that it ends up at `index`, for `index <= len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index == self.len {
            self.push(value);
            return Ok(());
        }
        let (node, offset) = self.locate(index)?;
        unsafe {
            let (node, offset) = self.make_room(node, offset);
            if (*node.as_ptr()).insert(offset, value).is_err() {
                unreachable!("no room in node after split");
            }
        }
        self.len += 1;
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let (node, offset) = self.locate(index)?;
        let value = unsafe { (*node.as_ptr()).remove(offset) };
        self.len -= 1;
        unsafe { self.compact(node) };
        Ok(value)
    }

    pub fn remove_first_occurrence(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(value)?;
        self.remove_at(index).ok()
    }

    pub fn remove_last_occurrence(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.last_index_of(value)?;
        self.remove_at(index).ok()
    }

    /// Moves every value of `other` to the end of `self`, leaving `other` empty.
    ///
    /// Lists with the same node capacity are joined by linking their chains.
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        if self.config.node_capacity != other.config.node_capacity {
            while let Some(value) = other.shift() {
                self.push(value);
            }
            return;
        }

        let (Some(other_head), Some(other_tail)) = (other.head.take(), other.tail.take()) else {
            return;
        };
        unsafe {
            match self.tail {
                Some(tail) => {
                    (*tail.as_ptr()).next = Some(other_head);
                    (*other_head.as_ptr()).prev = Some(tail);
                }
                None => self.head = Some(other_head),
            }
        }
        self.tail = Some(other_tail);
        self.len += mem::take(&mut other.len);
        self.node_count += mem::take(&mut other.node_count);
        tracing::trace!(
            len = self.len,
            node_count = self.node_count,
            "splice node chain"
        );
    }

    /// Unshifts each value in turn, so they end up at the front in reverse order.
    pub fn unshift_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.unshift(value);
        }
    }

    /// Drops every value and frees every node.
    pub fn clear(&mut self) {
        if self.node_count > 0 {
            tracing::trace!(len = self.len, node_count = self.node_count, "clear");
        }
        let mut link = self.head.take();
        while let Some(node) = link {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            link = node.next;
        }
        self.tail = None;
        self.len = 0;
        self.node_count = 0;
    }
}

impl<T> Drop for UnrolledLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Deep copy with the same node layout.
impl<T: Clone> Clone for UnrolledLinkedList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::empty(self.config);
        for node in self.node_ptrs() {
            let values = unsafe { node.as_ref() }.values();
            let new = Self::new_node_ptr(Node::from_slice(values, self.config.node_capacity));
            unsafe { copy.link_after(copy.tail, new) };
            copy.len += values.len();
        }
        copy
    }
}

impl<T> Default for UnrolledLinkedList<T> {
    fn default() -> Self {
        Self::empty(Config::default())
    }
}

impl<T> Extend<T> for UnrolledLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> IntoIterator for UnrolledLinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a UnrolledLinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut UnrolledLinkedList<T> {
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Debug> Debug for UnrolledLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Compares the sequences only; node layout and configuration are ignored.
impl<T: PartialEq> PartialEq for UnrolledLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for UnrolledLinkedList<T> {}
