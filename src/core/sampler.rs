/// Weighted transition sampling and start-state selection.
use rand::Rng;

use crate::core::chain::{ChainState, MarkovChain};
use crate::core::node::{NodeId, StateNode};

/// Pick a successor of `node`, weighted by observation frequency.
///
/// Draws one integer uniformly in `[0, total_frequency)` and walks the
/// transition list in order, subtracting each frequency until the draw
/// lands inside an edge's bucket (inverse-CDF sampling over the
/// discrete distribution). Returns `None` when the node is a leaf.
pub(crate) fn next_from<S, R: Rng>(node: &StateNode<S>, rng: &mut R) -> Option<NodeId> {
    let total = node.total_frequency();
    if total == 0 {
        return None;
    }

    let mut draw = rng.gen_range(0..total);
    for transition in node.transitions() {
        let weight = u64::from(transition.frequency);
        if draw < weight {
            return Some(transition.target);
        }
        draw -= weight;
    }

    // Unreachable while frequencies sum to `total`; kept for safety.
    node.transitions().last().map(|t| t.target)
}

/// Pick a start state by rejection sampling over arena positions.
///
/// Uniformly draws insertion-order indices and accepts the first state
/// with at least one outgoing transition. Returns `None` when every
/// state is a leaf (or the chain is empty), instead of looping forever.
pub(crate) fn random_open_node<S: ChainState, R: Rng>(
    chain: &MarkovChain<S>,
    rng: &mut R,
) -> Option<NodeId> {
    if !chain.has_open_state() {
        return None;
    }
    loop {
        let id = NodeId(rng.gen_range(0..chain.len()));
        if let Some(node) = chain.node(id) {
            if !node.is_leaf() {
                return Some(id);
            }
        }
    }
}
