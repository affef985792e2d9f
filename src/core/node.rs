/// Node and transition model for the chain arena.
use serde::{Deserialize, Serialize};

/// Stable handle to a state stored in a chain's arena.
///
/// Ids are positional: they encode insertion order and remain valid for
/// the lifetime of the chain (states are never removed individually).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A weighted edge to one target state.
///
/// Edges never own their target; they address it by arena index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub target: NodeId,
    /// How many times this transition was observed. Always >= 1.
    pub frequency: u32,
}

/// One state in the chain: an owned payload plus its outgoing edges.
///
/// Identity is payload equality, enforced at insertion by the chain;
/// two nodes in the same arena never hold equal payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateNode<S> {
    payload: S,
    transitions: Vec<Transition>,
}

impl<S> StateNode<S> {
    pub(crate) fn new(payload: S) -> Self {
        Self {
            payload,
            transitions: Vec::new(),
        }
    }

    pub fn payload(&self) -> &S {
        &self.payload
    }

    /// Outgoing transitions in first-observed order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn out_degree(&self) -> usize {
        self.transitions.len()
    }

    /// A leaf has no successors; traversal stops here.
    pub fn is_leaf(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Total observation count across all outgoing transitions.
    ///
    /// Summed in u64 so a node with many saturated edges cannot overflow
    /// the sampling range.
    pub fn total_frequency(&self) -> u64 {
        self.transitions
            .iter()
            .map(|t| u64::from(t.frequency))
            .sum()
    }

    /// Record one observation of an edge toward `target`.
    ///
    /// An existing entry for the same target has its frequency bumped;
    /// otherwise a fresh entry with frequency 1 is appended. At most one
    /// entry per distinct target ever exists.
    pub(crate) fn record(&mut self, target: NodeId) {
        if let Some(t) = self.transitions.iter_mut().find(|t| t.target == target) {
            t.frequency += 1;
        } else {
            self.transitions.push(Transition {
                target,
                frequency: 1,
            });
        }
    }
}
