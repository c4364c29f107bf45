use std::{
    fmt::{self, Debug},
    marker::PhantomData,
    mem,
    ops::Deref,
    ptr::NonNull,
};

use crate::error::{self, Result};

/// Singly linked list holding one value per node.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

type Link<T> = Option<NonNull<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    next: Link<T>,
    value: T,
}

impl<T> LinkedList<T> {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    fn new_node_ptr(node: Node<T>) -> NonNull<Node<T>> {
        Box::leak(Box::new(node)).into()
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn first(&self) -> Option<Cursor<'_, T>> {
        self.head.map(|head| Cursor(head, PhantomData))
    }

    pub fn last(&self) -> Option<Cursor<'_, T>> {
        self.tail.map(|tail| Cursor(tail, PhantomData))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            len: self.len,
            _marker: PhantomData,
        }
    }

    pub fn push(&mut self, value: T) {
        let new_node = Self::new_node_ptr(Node { next: None, value });
        if let Some(tail) = self.tail {
            unsafe {
                (*tail.as_ptr()).next = Some(new_node);
            }
        } else {
            self.head = Some(new_node);
        }
        self.tail = Some(new_node);
        self.len += 1;
    }

    pub fn unshift(&mut self, value: T) {
        let new_node = Self::new_node_ptr(Node {
            next: self.head,
            value,
        });
        if self.head.is_none() {
            self.tail = Some(new_node);
        }
        self.head = Some(new_node);
        self.len += 1;
    }

    /// Removes the last value. Walks to the predecessor of the tail, so this is O(n).
    pub fn pop(&mut self) -> Option<T> {
        let parent = match self.len {
            0 => return None,
            1 => None,
            len => Some(self.node_at(len - 2)),
        };
        unsafe { self.cut_after(parent) }.map(|node| node.value)
    }

    pub fn shift(&mut self) -> Option<T> {
        unsafe { self.cut_after(None) }.map(|node| node.value)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        error::check_index(index, self.len)?;
        Ok(unsafe { &(*self.node_at(index).as_ptr()).value })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        error::check_index(index, self.len)?;
        Ok(unsafe { &mut (*self.node_at(index).as_ptr()).value })
    }

    /// Replaces the value at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        error::check_index(index, self.len)?;
        let parent = index.checked_sub(1).map(|i| self.node_at(i));
        match unsafe { self.cut_after(parent) } {
            Some(node) => Ok(node.value),
            None => unreachable!("index checked against len"),
        }
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|current| current == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(node) = link {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            link = node.next;
        }
        self.tail = None;
        self.len = 0;
    }

    /// # Panics
    /// `index >= self.len`
    fn node_at(&self, index: usize) -> NonNull<Node<T>> {
        let mut link = self.head;
        let mut i = 0;
        while let Some(node) = link {
            if i == index {
                return node;
            }
            link = unsafe { node.as_ref() }.next;
            i += 1;
        }
        unreachable!("index checked against len");
    }

    /// Unlinks the node following `parent`, or the head when `parent` is `None`.
    ///
    /// # Safety
    /// `parent`, if any, is a node owned by `self`
    unsafe fn cut_after(&mut self, parent: Link<T>) -> Option<Box<Node<T>>> {
        let slot = match parent {
            Some(parent) => &mut (*parent.as_ptr()).next,
            None => &mut self.head,
        };
        let node = slot.take()?;
        let boxed = Box::from_raw(node.as_ptr());
        *slot = boxed.next;
        if self.tail == Some(node) {
            self.tail = parent;
        }
        self.len -= 1;
        Some(boxed)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    next: Link<T>,
    len: usize,
    _marker: PhantomData<&'a LinkedList<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| unsafe {
            self.next = node.as_ref().next;
            self.len -= 1;
            &(*node.as_ptr()).value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// Shared handle to one node of a [`LinkedList`].
pub struct Cursor<'a, T>(NonNull<Node<T>>, PhantomData<&'a LinkedList<T>>);

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &(*self.0.as_ptr()).value }
    }
}

impl<'a, T> Cursor<'a, T> {
    pub fn value(self) -> &'a T {
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// Cursor at the following node, or `None` at the end of the list.
    pub fn next(self) -> Option<Self> {
        unsafe { self.0.as_ref().next.map(|next| Self(next, PhantomData)) }
    }
}
