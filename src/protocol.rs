use crate::CellState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A request to read one cell. The coordinate may lie anywhere; it wraps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Query {
    pub row: isize,
    pub col: isize,
}

/// The computed next state of one in-range cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transition {
    pub row: isize,
    pub col: isize,
    pub next_state: CellState,
}

/// Everything the generation driver can hand to the runner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Message {
    Query(Query),
    Transition(Transition),
    /// Every cell of the grid has received its transition.
    SweepComplete,
}

impl Query {
    #[inline]
    pub fn new(row: isize, col: isize) -> Self {
        Query { row, col }
    }
}

impl From<Query> for Message {
    #[inline]
    fn from(query: Query) -> Self {
        Message::Query(query)
    }
}

impl From<Transition> for Message {
    #[inline]
    fn from(transition: Transition) -> Self {
        Message::Transition(transition)
    }
}
