/// Chain facade: insertion, transition recording, and generation.
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::Hash;
use thiserror::Error;

use crate::core::node::{NodeId, StateNode};
use crate::core::sampler;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("chain has no states")]
    Empty,
    #[error("no state has outgoing transitions to start from")]
    NoOpenState,
    #[error("unknown node id {0}")]
    UnknownNode(usize),
    #[error("maximum sequence length must be at least 1")]
    ZeroLength,
}

/// Capability set a payload must carry to live in a chain.
///
/// Replaces a runtime callback bundle with compile-time bounds:
/// `Clone` makes the owned copy taken at insertion, `Eq + Hash` define
/// state identity, `Display` is the emission surface.
pub trait ChainState: Clone + Eq + Hash + Display {
    /// Content-level end marker. Producers consult this when wiring
    /// transitions (a terminal word links to nothing); traversal itself
    /// stops only at zero out-degree, never on this predicate.
    fn is_terminal(&self) -> bool {
        false
    }
}

/// A frequency-weighted Markov chain over payloads of type `S`.
///
/// States live in an insertion-ordered arena and are addressed by
/// [`NodeId`]; a hash index enforces payload uniqueness and keeps
/// lookup O(1). The chain is the unit of ownership: dropping it
/// releases every node, payload copy, and transition at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkovChain<S: ChainState> {
    nodes: Vec<StateNode<S>>,
    index: FxHashMap<S, NodeId>,
}

impl<S: ChainState> Default for MarkovChain<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ChainState> MarkovChain<S> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Number of distinct states.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a payload, or return the node already holding an equal one.
    ///
    /// The payload is cloned only on first sight; the clone is owned by
    /// the chain until the chain is dropped. Re-inserting an equal
    /// payload returns the same id and leaves the chain unchanged.
    pub fn insert(&mut self, payload: &S) -> NodeId {
        if let Some(&id) = self.index.get(payload) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(StateNode::new(payload.clone()));
        self.index.insert(payload.clone(), id);
        id
    }

    /// Find the node holding a payload equal to the given one.
    pub fn lookup(&self, payload: &S) -> Option<NodeId> {
        self.index.get(payload).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&StateNode<S>> {
        self.nodes.get(id.0)
    }

    pub fn payload(&self, id: NodeId) -> Option<&S> {
        self.nodes.get(id.0).map(StateNode::payload)
    }

    /// Record one observed transition `from -> to`.
    ///
    /// Repeated observations of the same pair collapse into a single
    /// edge with an incremented frequency. Fails without mutating
    /// anything when either handle is unknown.
    pub fn record_transition(&mut self, from: NodeId, to: NodeId) -> Result<(), ChainError> {
        if to.0 >= self.nodes.len() {
            return Err(ChainError::UnknownNode(to.0));
        }
        let node = self
            .nodes
            .get_mut(from.0)
            .ok_or(ChainError::UnknownNode(from.0))?;
        node.record(to);
        Ok(())
    }

    /// Iterate states in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &StateNode<S>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }

    /// Whether any state has at least one outgoing transition.
    pub fn has_open_state(&self) -> bool {
        self.nodes.iter().any(|n| !n.is_leaf())
    }

    /// Generate a random sequence of node ids.
    ///
    /// Starts at `start` if given, otherwise at a state chosen by
    /// rejection sampling over insertion-order positions (leaves are
    /// rejected). Each following step picks a successor with probability
    /// proportional to its observed frequency. The sequence holds at
    /// least one id and at most `max_len`; it ends early exactly when a
    /// state with zero out-degree is reached.
    pub fn walk<R: Rng>(
        &self,
        rng: &mut R,
        start: Option<NodeId>,
        max_len: usize,
    ) -> Result<Vec<NodeId>, ChainError> {
        if max_len == 0 {
            return Err(ChainError::ZeroLength);
        }
        if self.nodes.is_empty() {
            return Err(ChainError::Empty);
        }

        let mut current = match start {
            Some(id) => {
                if id.0 >= self.nodes.len() {
                    return Err(ChainError::UnknownNode(id.0));
                }
                id
            }
            None => sampler::random_open_node(self, rng).ok_or(ChainError::NoOpenState)?,
        };

        let mut path = Vec::with_capacity(max_len);
        path.push(current);
        while path.len() < max_len {
            match sampler::next_from(&self.nodes[current.0], rng) {
                Some(next) => {
                    path.push(next);
                    current = next;
                }
                None => break,
            }
        }
        Ok(path)
    }

    /// Generate a random sequence and hand each payload to `emit`.
    ///
    /// Returns the number of payloads emitted.
    pub fn generate_with<R, F>(
        &self,
        rng: &mut R,
        start: Option<NodeId>,
        max_len: usize,
        mut emit: F,
    ) -> Result<usize, ChainError>
    where
        R: Rng,
        F: FnMut(&S),
    {
        let path = self.walk(rng, start, max_len)?;
        for id in &path {
            emit(self.nodes[id.0].payload());
        }
        Ok(path.len())
    }
}
