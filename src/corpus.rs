/// Corpus ingestion: tokenizes text into words and feeds consecutive
/// pairs into a word chain for tweet-style generation.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

use rand::Rng;

use crate::core::chain::{ChainError, ChainState, MarkovChain};
use crate::core::node::NodeId;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),
}

/// A single whitespace-delimited token from the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word(String);

impl Word {
    pub fn new(text: &str) -> Self {
        Self(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ChainState for Word {
    /// A word ending with a dot closes its sentence; no transition is
    /// recorded from it to the following word.
    fn is_terminal(&self) -> bool {
        self.0.ends_with('.')
    }
}

/// Chain specialized to corpus words.
pub type WordChain = MarkovChain<Word>;

/// Feed whitespace-delimited words from `text` into the chain.
///
/// Words are inserted in file order and each consecutive pair is
/// recorded as a transition, except across a sentence boundary: a
/// sentence-terminal word links to nothing. The previous word carries
/// across line breaks, so a sentence may span lines. With
/// `word_limit = Some(n)` ingestion stops after `n` words.
///
/// Returns the number of words consumed.
pub fn feed_text(
    chain: &mut WordChain,
    text: &str,
    word_limit: Option<usize>,
) -> Result<usize, ChainError> {
    let mut previous: Option<NodeId> = None;
    let mut consumed = 0usize;

    for raw in text.split_whitespace() {
        if word_limit.is_some_and(|limit| consumed >= limit) {
            break;
        }
        let word = Word::new(raw);
        let id = chain.insert(&word);
        if let Some(prev) = previous {
            let prev_terminal = chain.payload(prev).map_or(true, Word::is_terminal);
            if !prev_terminal {
                chain.record_transition(prev, id)?;
            }
        }
        previous = Some(id);
        consumed += 1;
    }
    Ok(consumed)
}

/// Read a corpus file and feed it into the chain.
pub fn feed_file(
    chain: &mut WordChain,
    path: &Path,
    word_limit: Option<usize>,
) -> Result<usize, CorpusError> {
    let text = std::fs::read_to_string(path)?;
    Ok(feed_text(chain, &text, word_limit)?)
}

/// Generate one tweet of at most `max_words` words.
///
/// Starts at a random word with successors and walks the chain,
/// stopping early at a word that was never observed leading anywhere.
pub fn generate_tweet<R: Rng>(
    chain: &WordChain,
    rng: &mut R,
    max_words: usize,
) -> Result<String, ChainError> {
    let path = chain.walk(rng, None, max_words)?;
    let words: Vec<&str> = path
        .iter()
        .filter_map(|&id| chain.payload(id))
        .map(Word::as_str)
        .collect();
    Ok(words.join(" "))
}
