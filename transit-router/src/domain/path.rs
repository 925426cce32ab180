//! Node paths produced by the path finder.

use super::{DomainError, NodeId};

/// A non-empty sequence of nodes, from a start candidate to a goal candidate.
///
/// # Examples
///
/// ```
/// use transit_router::domain::{NodeId, Path};
///
/// let path = Path::new(vec![NodeId(1), NodeId(2), NodeId(3)]).unwrap();
/// assert_eq!(path.hop_count(), 2);
/// assert_eq!(path.start(), NodeId(1));
/// assert_eq!(path.goal(), NodeId(3));
///
/// assert!(Path::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<NodeId>);

impl Path {
    /// Creates a path, rejecting an empty node list.
    pub fn new(nodes: Vec<NodeId>) -> Result<Self, DomainError> {
        if nodes.is_empty() {
            return Err(DomainError::EmptyPath);
        }
        Ok(Self(nodes))
    }

    /// Wraps a node list the caller has already checked to be non-empty.
    pub(crate) fn from_nodes(nodes: Vec<NodeId>) -> Self {
        debug_assert!(!nodes.is_empty());
        Self(nodes)
    }

    /// Returns the nodes in travel order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    /// The first node (a start candidate).
    pub fn start(&self) -> NodeId {
        self.0[0]
    }

    /// The last node (a goal candidate).
    pub fn goal(&self) -> NodeId {
        self.0[self.0.len() - 1]
    }

    /// Number of edges needed to walk the path.
    pub fn hop_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Consecutive `(from, to)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Splits the pairs into parallel `from` and `to` sequences.
    pub fn unzip_pairs(&self) -> (Vec<NodeId>, Vec<NodeId>) {
        self.pairs().unzip()
    }
}
