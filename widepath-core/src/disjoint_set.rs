//! Union-find (disjoint set union) used while growing the spanning forest.
//!
//! Parents are stored as indices into a single backing vector; a
//! representative points at itself. `find` compresses paths in two passes
//! without a scratch buffer and `merge` attaches the lower-rank root under
//! the higher-rank one.

use std::cmp::Ordering;

use thiserror::Error;

use crate::error::define_error_codes;

/// Errors returned by [`DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// A node id was outside the universe the set was built for.
    #[error("node {node} is out of range for a disjoint set of {len} nodes")]
    OutOfRange {
        /// The offending node id.
        node: usize,
        /// Number of nodes in the set.
        len: usize,
    },
    /// `merge` was called with a node that is not a partition representative.
    #[error("node {node} is not a partition representative")]
    NotRepresentative {
        /// The node that was expected to be a root.
        node: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// A node id was outside the universe the set was built for.
        OutOfRange => OutOfRange { .. } => "DISJOINT_SET_OUT_OF_RANGE",
        /// `merge` was called with a non-representative node.
        NotRepresentative => NotRepresentative { .. } => "DISJOINT_SET_NOT_REPRESENTATIVE",
    }
}

/// Partitions `0..len` into disjoint sets.
///
/// The universe is fixed at construction and never resizes.
///
/// # Examples
/// ```
/// use widepath_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert_eq!(set.partition_count(), 4);
/// let left = set.find(0)?;
/// let right = set.find(1)?;
/// assert!(set.merge(left, right)?);
/// assert!(set.connected(0, 1)?);
/// assert_eq!(set.partition_count(), 3);
/// # Ok::<(), widepath_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parents: Vec<usize>,
    ranks: Vec<u32>,
    partitions: usize,
}

impl DisjointSet {
    /// Creates `node_count` singleton partitions.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            parents: (0..node_count).collect(),
            ranks: vec![0; node_count],
            partitions: node_count,
        }
    }

    /// Returns the size of the universe.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parents.len() }

    /// Returns `true` when the universe is empty.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    /// Returns the number of disjoint partitions that remain.
    #[must_use]
    #[rustfmt::skip]
    pub fn partition_count(&self) -> usize { self.partitions }

    /// Returns the rank of `node`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] for ids outside the universe.
    pub fn rank(&self, node: usize) -> Result<u32, DisjointSetError> {
        self.ranks
            .get(node)
            .copied()
            .ok_or(DisjointSetError::OutOfRange {
                node,
                len: self.len(),
            })
    }

    /// Returns `true` when `node` is the representative of its partition.
    #[must_use]
    pub fn is_representative(&self, node: usize) -> bool {
        self.parents.get(node) == Some(&node)
    }

    /// Returns the representative of the partition containing `node`.
    ///
    /// Every node on the walk is re-pointed at the representative.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] for ids outside the universe.
    pub fn find(&mut self, node: usize) -> Result<usize, DisjointSetError> {
        self.check(node)?;

        let mut root = node;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut current = node;
        while self.parents[current] != current {
            let parent = self.parents[current];
            self.parents[current] = root;
            current = parent;
        }

        Ok(root)
    }

    /// Unions the partitions represented by `left` and `right`.
    ///
    /// The lower-rank root becomes a child of the higher-rank root. On a tie
    /// `right` becomes the child and `left` gains one rank. Returns `false`
    /// when both arguments name the same partition.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] for ids outside the universe
    /// and [`DisjointSetError::NotRepresentative`] when either id is not the
    /// current root of its partition.
    pub fn merge(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        self.check_representative(left)?;
        self.check_representative(right)?;
        if left == right {
            return Ok(false);
        }

        let (parent, child) = match self.ranks[left].cmp(&self.ranks[right]) {
            Ordering::Greater => (left, right),
            Ordering::Less => (right, left),
            Ordering::Equal => {
                self.ranks[left] = self.ranks[left].saturating_add(1);
                (left, right)
            }
        };
        self.parents[child] = parent;
        self.partitions -= 1;
        Ok(true)
    }

    /// Resolves both nodes and merges their partitions.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] for ids outside the universe.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        self.merge(left_root, right_root)
    }

    /// Returns `true` when both nodes share a partition.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] for ids outside the universe.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, node: usize) -> Result<(), DisjointSetError> {
        if node < self.len() {
            Ok(())
        } else {
            Err(DisjointSetError::OutOfRange {
                node,
                len: self.len(),
            })
        }
    }

    fn check_representative(&self, node: usize) -> Result<(), DisjointSetError> {
        self.check(node)?;
        if self.is_representative(node) {
            Ok(())
        } else {
            Err(DisjointSetError::NotRepresentative { node })
        }
    }
}
