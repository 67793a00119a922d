use crate::CellState;

/// Conway's rule: survive on 2 or 3 live neighbors, birth on exactly 3.
#[inline]
pub fn next_state(state: CellState, live_neighbors: u8) -> CellState {
    match (state, live_neighbors) {
        (CellState::Alive, n) if n < 2 => CellState::Empty,
        (CellState::Alive, n) if n > 3 => CellState::Empty,
        (CellState::Empty, 3) => CellState::Alive,
        (state, _) => state,
    }
}
