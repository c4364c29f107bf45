use std::ptr::NonNull;

use super::{list::UnrolledLinkedList, node::Node};
use crate::error::{self, Result};

impl<T> UnrolledLinkedList<T> {
    /// Resolves a global index to the node holding it and the offset inside that node.
    ///
    /// Indices in the upper half are walked from the tail, so at most half of the nodes are
    /// visited.
    pub(crate) fn locate(&self, index: usize) -> Result<(NonNull<Node<T>>, usize)> {
        error::check_index(index, self.len)?;
        Ok(if index < self.len / 2 {
            self.locate_forward(index)
        } else {
            self.locate_backward(index)
        })
    }

    fn locate_forward(&self, index: usize) -> (NonNull<Node<T>>, usize) {
        let mut seen = 0;
        for node in self.node_ptrs() {
            let len = unsafe { node.as_ref() }.len();
            if seen + len > index {
                return (node, index - seen);
            }
            seen += len;
        }
        unreachable!("node chain holds fewer values than len");
    }

    fn locate_backward(&self, index: usize) -> (NonNull<Node<T>>, usize) {
        let mut end = self.len;
        let mut link = self.tail;
        while let Some(node) = link {
            let current = unsafe { node.as_ref() };
            let start = end - current.len();
            if index >= start {
                return (node, index - start);
            }
            end = start;
            link = current.prev;
        }
        unreachable!("node chain holds fewer values than len");
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, UnrolledLinkedList};

    #[test]
    fn both_walks_agree() {
        let mut list = UnrolledLinkedList::new(4).unwrap();
        list.extend(0..10usize);
        assert_eq!(list.node_lens(), [2, 2, 2, 4]);

        for index in 0..10 {
            let forward = list.locate_forward(index);
            let backward = list.locate_backward(index);
            assert_eq!(forward, backward);
            let (node, offset) = list.locate(index).unwrap();
            assert_eq!((node, offset), forward);
            assert_eq!(unsafe { node.as_ref() }.values()[offset], index);
        }
    }

    #[test]
    fn offsets_within_node() {
        let mut list = UnrolledLinkedList::new(4).unwrap();
        list.extend(0..10usize);
        let offsets = (0..10)
            .map(|i| list.locate(i).unwrap().1)
            .collect::<Vec<_>>();
        assert_eq!(offsets, [0, 1, 0, 1, 0, 1, 0, 1, 2, 3]);
    }

    #[test]
    fn out_of_range() {
        let mut list = UnrolledLinkedList::new(4).unwrap();
        assert_eq!(
            list.locate(0).unwrap_err(),
            Error::IndexOutOfRange { index: 0, len: 0 }
        );
        list.push('a');
        assert!(list.locate(0).is_ok());
        assert_eq!(
            list.locate(1).unwrap_err(),
            Error::IndexOutOfRange { index: 1, len: 1 }
        );
    }
}
