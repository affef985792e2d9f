//! Chainwalk: frequency-weighted Markov chain generation.
//!
//! Builds a directed graph of opaque state payloads from observed
//! transitions and generates sequences by weighted random traversal,
//! with no notion of training beyond frequency counting. Two thin
//! producers feed the engine: a text-corpus ingester for tweet-style
//! generation and a fixed snakes-and-ladders board walker.

pub mod board;
pub mod core;
pub mod corpus;
