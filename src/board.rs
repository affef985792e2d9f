/// Snakes-and-ladders board: one hundred cells wired into a chain with
/// dice fan-out edges and single ladder/snake jump edges.
use serde::{Deserialize, Serialize};
use std::fmt;

use rand::Rng;

use crate::core::chain::{ChainError, ChainState, MarkovChain};
use crate::core::node::NodeId;

pub const BOARD_SIZE: u32 = 100;
pub const DICE_MAX: u32 = 6;
/// Cap on walk length used by the board binary.
pub const MAX_WALK_STEPS: usize = 60;

/// Fixed jump table. Each `(from, to)` is a ladder when `from < to`
/// and a snake otherwise.
const JUMPS: [(u32, u32); 20] = [
    (13, 4),
    (85, 17),
    (95, 67),
    (97, 58),
    (66, 89),
    (87, 31),
    (57, 83),
    (91, 25),
    (28, 50),
    (35, 11),
    (8, 30),
    (41, 62),
    (81, 43),
    (69, 32),
    (20, 39),
    (33, 70),
    (79, 99),
    (23, 76),
    (15, 47),
    (61, 14),
];

/// A board cell, numbered 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub number: u32,
    /// Forced destination when the cell carries a ladder (`jump_to`
    /// above `number`) or a snake (below). `None` for plain cells.
    pub jump_to: Option<u32>,
}

impl Cell {
    pub fn is_ladder(&self) -> bool {
        matches!(self.jump_to, Some(to) if to > self.number)
    }

    pub fn is_snake(&self) -> bool {
        matches!(self.jump_to, Some(to) if to < self.number)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.number)?;
        if let Some(to) = self.jump_to {
            if to > self.number {
                write!(f, "-ladder to {}", to)?;
            } else {
                write!(f, "-snake to {}", to)?;
            }
        }
        Ok(())
    }
}

impl ChainState for Cell {
    /// The last cell ends the game.
    fn is_terminal(&self) -> bool {
        self.number == BOARD_SIZE
    }
}

/// Chain specialized to board cells.
pub type BoardChain = MarkovChain<Cell>;

/// Build the fixed board: cells 1..=100 with the jump table applied.
pub fn build_board() -> Vec<Cell> {
    let mut cells: Vec<Cell> = (1..=BOARD_SIZE)
        .map(|number| Cell {
            number,
            jump_to: None,
        })
        .collect();
    for (from, to) in JUMPS {
        cells[(from - 1) as usize].jump_to = Some(to);
    }
    cells
}

/// Build the board chain.
///
/// Cells are inserted in board order. A jump cell records exactly one
/// transition to its forced destination; every other cell records one
/// transition per die face toward the next six cells, truncated at the
/// board boundary. Cell 100 ends up a leaf.
pub fn build_chain() -> Result<BoardChain, ChainError> {
    let cells = build_board();
    let mut chain = BoardChain::new();
    let ids: Vec<NodeId> = cells.iter().map(|cell| chain.insert(cell)).collect();

    for (i, cell) in cells.iter().enumerate() {
        if let Some(to) = cell.jump_to {
            chain.record_transition(ids[i], ids[(to - 1) as usize])?;
        } else {
            for face in 1..=DICE_MAX {
                let target = cell.number + face;
                if target > BOARD_SIZE {
                    break;
                }
                chain.record_transition(ids[i], ids[(target - 1) as usize])?;
            }
        }
    }
    Ok(chain)
}

/// Play one random game from cell 1, rendered as an arrow-joined path.
pub fn random_walk<R: Rng>(
    chain: &BoardChain,
    rng: &mut R,
    max_steps: usize,
) -> Result<String, ChainError> {
    let (start, _) = chain.iter().next().ok_or(ChainError::Empty)?;
    let path = chain.walk(rng, Some(start), max_steps)?;
    let rendered: Vec<String> = path
        .iter()
        .filter_map(|&id| chain.payload(id))
        .map(Cell::to_string)
        .collect();
    Ok(rendered.join(" -> "))
}
