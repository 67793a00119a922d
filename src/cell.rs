#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellState {
    Alive,
    Empty,
}

impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Empty
        }
    }
}
