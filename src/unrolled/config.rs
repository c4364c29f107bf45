use snafu::prelude::*;

use crate::error::{InvalidCapacitySnafu, Result};

pub const DEFAULT_NODE_CAPACITY: usize = 16;

/// Construction parameters of an [`UnrolledLinkedList`](super::UnrolledLinkedList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of values a single node holds. Must be positive.
    pub node_capacity: usize,
    /// Merge a node that drops below half occupancy after an interior removal into a neighbor.
    ///
    /// Only affects memory density; the observable sequence is the same either way.
    pub merge_on_remove: bool,
}

impl Config {
    pub const fn new(node_capacity: usize) -> Self {
        Self {
            node_capacity,
            merge_on_remove: true,
        }
    }

    pub const fn node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    pub const fn merge_on_remove(mut self, merge_on_remove: bool) -> Self {
        self.merge_on_remove = merge_on_remove;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.node_capacity > 0,
            InvalidCapacitySnafu {
                capacity: self.node_capacity
            }
        );
        Ok(())
    }

    /// Occupancy below which a node is a merge candidate.
    pub(crate) const fn merge_threshold(&self) -> usize {
        self.node_capacity / 2
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_CAPACITY)
    }
}
