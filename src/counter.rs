use crate::routine::{expect_no_response, expect_response};
use crate::{CellState, Direction, ProtocolError, Query, Routine, Step};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Start,
    /// Waiting on the state of the `n`th neighbor.
    Awaiting(usize),
    Done,
}

/// Counts the live neighbors of one cell by querying each of the eight
/// Moore neighbors in turn. Completes with the count after the eighth
/// response.
#[derive(Clone, Debug)]
pub struct NeighborCounter {
    row: isize,
    col: isize,
    alive: u8,
    phase: Phase,
}

impl NeighborCounter {
    pub fn new(row: isize, col: isize) -> Self {
        NeighborCounter {
            row,
            col,
            alive: 0,
            phase: Phase::Start,
        }
    }

    /// Suspend on the `n`th neighbor, or finish when there are no more.
    fn query(&mut self, n: usize) -> Step<Query, u8> {
        match Direction::nth(n) {
            Some(dir) => {
                self.phase = Phase::Awaiting(n);
                let (row, col) = dir.offset(self.row, self.col);
                Step::Yield(Query::new(row, col))
            }
            None => {
                self.phase = Phase::Done;
                Step::Complete(self.alive)
            }
        }
    }
}

impl Routine for NeighborCounter {
    type Yield = Query;
    type Return = u8;

    fn resume(&mut self, input: Option<CellState>) -> Result<Step<Query, u8>, ProtocolError> {
        match self.phase {
            Phase::Start => {
                expect_no_response(input)?;
                Ok(self.query(0))
            }
            Phase::Awaiting(n) => {
                if expect_response(input)?.is_alive() {
                    self.alive += 1;
                }
                Ok(self.query(n + 1))
            }
            Phase::Done => Err(ProtocolError::Exhausted),
        }
    }
}
