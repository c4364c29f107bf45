use std::{marker::PhantomData, ptr::NonNull};

use super::{
    list::UnrolledLinkedList,
    node::{Link, Node},
};

/// Walks the node chain front to back.
pub(crate) struct NodePtrs<T> {
    next: Link<T>,
}

impl<T> NodePtrs<T> {
    pub(crate) fn new(head: Link<T>) -> Self {
        Self { next: head }
    }
}

impl<T> Iterator for NodePtrs<T> {
    type Item = NonNull<Node<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = unsafe { node.as_ref() }.next;
            node
        })
    }
}

/// Yields `(node, offset)` for every value, from both ends. `len` keeps the two ends from
/// crossing.
pub(crate) struct RawIter<T> {
    front: Link<T>,
    front_offset: usize,
    back: Link<T>,
    // one past the next value yielded from the back
    back_offset: usize,
    len: usize,
}

impl<T> Clone for RawIter<T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            front_offset: self.front_offset,
            back: self.back,
            back_offset: self.back_offset,
            len: self.len,
        }
    }
}

impl<T> RawIter<T> {
    pub(crate) fn new(head: Link<T>, tail: Link<T>, len: usize) -> Self {
        Self {
            front: head,
            front_offset: 0,
            back: tail,
            back_offset: tail.map_or(0, |tail| unsafe { tail.as_ref() }.len()),
            len,
        }
    }
}

impl<T> Iterator for RawIter<T> {
    type Item = (NonNull<Node<T>>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let mut node = self.front?;
        unsafe {
            if self.front_offset == node.as_ref().len() {
                node = node.as_ref().next?;
                self.front = Some(node);
                self.front_offset = 0;
            }
        }
        let offset = self.front_offset;
        self.front_offset += 1;
        self.len -= 1;
        Some((node, offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for RawIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let mut node = self.back?;
        unsafe {
            if self.back_offset == 0 {
                node = node.as_ref().prev?;
                self.back = Some(node);
                self.back_offset = node.as_ref().len();
            }
        }
        self.back_offset -= 1;
        self.len -= 1;
        Some((node, self.back_offset))
    }
}

impl<T> ExactSizeIterator for RawIter<T> {
    fn len(&self) -> usize {
        self.len
    }
}

pub struct Iter<'a, T> {
    raw: RawIter<T>,
    _marker: PhantomData<&'a UnrolledLinkedList<T>>,
}

impl<T> Iter<'_, T> {
    pub(crate) fn new(raw: RawIter<T>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.raw.clone())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.raw
            .next()
            .map(|(node, offset)| unsafe { &*(*node.as_ptr()).as_ptr().add(offset) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.raw
            .next_back()
            .map(|(node, offset)| unsafe { &*(*node.as_ptr()).as_ptr().add(offset) })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.raw.len()
    }
}

pub struct IterMut<'a, T> {
    raw: RawIter<T>,
    _marker: PhantomData<&'a mut UnrolledLinkedList<T>>,
}

impl<T> IterMut<'_, T> {
    pub(crate) fn new(raw: RawIter<T>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.raw
            .next()
            .map(|(node, offset)| unsafe { &mut *(*node.as_ptr()).as_mut_ptr().add(offset) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.raw
            .next_back()
            .map(|(node, offset)| unsafe { &mut *(*node.as_ptr()).as_mut_ptr().add(offset) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.raw.len()
    }
}

pub struct IntoIter<T> {
    list: UnrolledLinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: UnrolledLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.shift()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}
