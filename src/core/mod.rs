/// Markov chain engine: arena storage, transition recording, and
/// weighted random traversal.

/// Chain facade and the `ChainState` capability trait.
pub mod chain;

/// Node and transition model.
pub mod node;

/// Weighted sampling and start-state selection.
///
/// Not exposed; traversal goes through `MarkovChain::walk`.
mod sampler;
