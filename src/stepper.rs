use crate::routine::{expect_no_response, expect_response};
use crate::{
    next_state, CellState, Message, NeighborCounter, ProtocolError, Query, Routine, Step,
    Transition,
};

#[derive(Clone, Debug)]
enum Phase {
    Start,
    AwaitingSelf,
    /// Delegating to the neighbor counter, holding on to the cell's own state.
    Counting {
        current: CellState,
        counter: NeighborCounter,
    },
    /// The transition went out; the next resume completes.
    Emitted,
    Done,
}

/// Advances a single cell: reads its own state, counts its live neighbors
/// through a [`NeighborCounter`], then yields one [`Transition`].
///
/// Per cell this yields nine queries (self first, then the eight neighbors)
/// followed by exactly one transition.
#[derive(Clone, Debug)]
pub struct CellStepper {
    row: isize,
    col: isize,
    phase: Phase,
}

impl CellStepper {
    pub fn new(row: isize, col: isize) -> Self {
        CellStepper {
            row,
            col,
            phase: Phase::Start,
        }
    }

    /// Forward a counter query upward, or turn its count into the transition.
    fn delegate(
        &mut self,
        current: CellState,
        counter: NeighborCounter,
        step: Step<Query, u8>,
    ) -> Step<Message, ()> {
        match step {
            Step::Yield(query) => {
                self.phase = Phase::Counting { current, counter };
                Step::Yield(query.into())
            }
            Step::Complete(live_neighbors) => {
                self.phase = Phase::Emitted;
                Step::Yield(
                    Transition {
                        row: self.row,
                        col: self.col,
                        next_state: next_state(current, live_neighbors),
                    }
                    .into(),
                )
            }
        }
    }
}

impl Routine for CellStepper {
    type Yield = Message;
    type Return = ();

    fn resume(&mut self, input: Option<CellState>) -> Result<Step<Message, ()>, ProtocolError> {
        // Any error leaves the stepper in `Done`.
        match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::Start => {
                expect_no_response(input)?;
                self.phase = Phase::AwaitingSelf;
                Ok(Step::Yield(Query::new(self.row, self.col).into()))
            }
            Phase::AwaitingSelf => {
                let current = expect_response(input)?;
                let mut counter = NeighborCounter::new(self.row, self.col);
                let step = counter.resume(None)?;
                Ok(self.delegate(current, counter, step))
            }
            Phase::Counting {
                current,
                mut counter,
            } => {
                let step = counter.resume(input)?;
                Ok(self.delegate(current, counter, step))
            }
            Phase::Emitted => {
                expect_no_response(input)?;
                Ok(Step::Complete(()))
            }
            Phase::Done => Err(ProtocolError::Exhausted),
        }
    }
}
