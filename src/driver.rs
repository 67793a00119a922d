use crate::routine::expect_no_response;
use crate::{CellState, CellStepper, Error, Grid, Message, ProtocolError, Result, Routine, Step};

use std::convert::Infallible;

#[derive(Clone, Debug)]
enum Phase {
    /// Nothing in flight; the next resume starts the cell under the cursor.
    Idle,
    Stepping(CellStepper),
    /// A routine below broke the protocol. Only `reset` recovers.
    Faulted,
}

/// Walks every cell of a `height` x `width` grid in row-major order, driving
/// a fresh [`CellStepper`] for each and forwarding its traffic unchanged.
/// After the last cell it yields [`Message::SweepComplete`] and starts over
/// from the first row, so it never completes.
#[derive(Clone, Debug)]
pub struct GenerationDriver {
    height: usize,
    width: usize,
    row: usize,
    col: usize,
    sweeps: u64,
    phase: Phase,
}

impl GenerationDriver {
    /// A driver for a `height` x `width` grid. Both must be positive.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::EmptyGrid { height, width });
        }
        Ok(Self::with_dims(height, width))
    }

    /// A driver sized to sweep `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::with_dims(grid.get_height(), grid.get_width())
    }

    fn with_dims(height: usize, width: usize) -> Self {
        GenerationDriver {
            height,
            width,
            row: 0,
            col: 0,
            sweeps: 0,
            phase: Phase::Idle,
        }
    }

    /// Drop any in-flight cell and rewind to the first cell of a sweep.
    pub fn reset(&mut self) {
        self.row = 0;
        self.col = 0;
        self.phase = Phase::Idle;
    }

    /// How many times [`Message::SweepComplete`] has been yielded.
    ///
    /// The runner may still reject a sweep after its marker went out, so this
    /// can run ahead of the generations actually produced.
    #[inline]
    pub fn sweeps(&self) -> u64 {
        self.sweeps
    }

    /// The cell currently being stepped, or the next one to be.
    #[inline]
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    #[inline]
    pub fn get_height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get_width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn is_faulted(&self) -> bool {
        matches!(self.phase, Phase::Faulted)
    }

    fn start_cell(&mut self) -> std::result::Result<Message, ProtocolError> {
        let mut stepper = CellStepper::new(self.row as isize, self.col as isize);
        let step = stepper.resume(None)?;
        self.forward(stepper, step)
    }

    fn forward(
        &mut self,
        stepper: CellStepper,
        step: Step<Message, ()>,
    ) -> std::result::Result<Message, ProtocolError> {
        match step {
            Step::Yield(message) => {
                self.phase = Phase::Stepping(stepper);
                Ok(message)
            }
            Step::Complete(()) => {
                self.col += 1;
                if self.col >= self.width {
                    self.col = 0;
                    self.row += 1;
                }
                if self.row >= self.height {
                    self.row = 0;
                    self.sweeps += 1;
                    self.phase = Phase::Idle;
                    Ok(Message::SweepComplete)
                } else {
                    self.start_cell()
                }
            }
        }
    }

    fn step(&mut self, input: Option<CellState>) -> std::result::Result<Message, ProtocolError> {
        match std::mem::replace(&mut self.phase, Phase::Faulted) {
            Phase::Idle => {
                expect_no_response(input)?;
                self.start_cell()
            }
            Phase::Stepping(mut stepper) => {
                let step = stepper.resume(input)?;
                self.forward(stepper, step)
            }
            Phase::Faulted => Err(ProtocolError::Faulted),
        }
    }
}

impl Routine for GenerationDriver {
    type Yield = Message;
    type Return = Infallible;

    /// Every error leaves the driver faulted until [`GenerationDriver::reset`].
    fn resume(
        &mut self,
        input: Option<CellState>,
    ) -> std::result::Result<Step<Message, Infallible>, ProtocolError> {
        self.step(input).map(Step::Yield)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Query, Transition};

    /// Drive one sweep against `grid`, recording every message before the
    /// sweep marker.
    fn sweep(driver: &mut GenerationDriver, grid: &Grid) -> Vec<Message> {
        let mut messages = vec![];
        let mut input = None;
        loop {
            let message = match driver.resume(input).unwrap() {
                Step::Yield(message) => message,
                Step::Complete(never) => match never {},
            };
            input = match message {
                Message::Query(Query { row, col }) => Some(grid.query(row, col)),
                Message::Transition(_) => None,
                Message::SweepComplete => return messages,
            };
            messages.push(message);
        }
    }

    #[test]
    fn protocol_shape_per_cell() {
        let grid = Grid::new_alive_coords(3, 4, vec![(0, 0), (1, 1), (2, 3)]).unwrap();
        let mut driver = GenerationDriver::new(3, 4).unwrap();
        for n in 0..3 {
            let messages = sweep(&mut driver, &grid);
            assert_eq!(messages.len(), 12 * 10);
            for (cell, chunk) in messages.chunks(10).enumerate() {
                let (row, col) = ((cell / 4) as isize, (cell % 4) as isize);
                assert_eq!(chunk[0], Message::Query(Query::new(row, col)));
                assert!(chunk[1..9].iter().all(|m| matches!(m, Message::Query(_))));
                match chunk[9] {
                    Message::Transition(Transition { row: r, col: c, .. }) => {
                        assert_eq!((r, c), (row, col))
                    }
                    other => panic!("expected a transition, got {:?}", other),
                }
            }
            assert_eq!(driver.sweeps(), n + 1);
            assert_eq!(driver.cursor(), (0, 0));
        }
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            GenerationDriver::new(0, 0).unwrap_err(),
            Error::EmptyGrid {
                height: 0,
                width: 0
            }
        );
        assert!(GenerationDriver::new(3, 0).is_err());
        assert!(GenerationDriver::new(0, 3).is_err());
    }

    #[test]
    fn row_major_order() {
        let grid = Grid::new(2, 3).unwrap();
        let mut driver = GenerationDriver::new(2, 3).unwrap();
        let cells: Vec<_> = sweep(&mut driver, &grid)
            .into_iter()
            .filter_map(|m| match m {
                Message::Transition(t) => Some((t.row, t.col)),
                _ => None,
            })
            .collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn single_cell_grid() {
        let grid = Grid::new_alive_coords(1, 1, vec![(0, 0)]).unwrap();
        let mut driver = GenerationDriver::new(1, 1).unwrap();
        let messages = sweep(&mut driver, &grid);
        // Every neighbor of the lone cell is the cell itself.
        assert_eq!(
            messages[9],
            Message::Transition(Transition {
                row: 0,
                col: 0,
                next_state: CellState::Empty
            })
        );
    }

    #[test]
    fn faults_until_reset() {
        let mut driver = GenerationDriver::new(2, 2).unwrap();
        driver.resume(None).unwrap();
        assert_eq!(driver.resume(None), Err(ProtocolError::MissingResponse));
        assert!(driver.is_faulted());
        assert_eq!(
            driver.resume(Some(CellState::Empty)),
            Err(ProtocolError::Faulted)
        );
        driver.reset();
        assert_eq!(
            driver.resume(None),
            Ok(Step::Yield(Message::Query(Query::new(0, 0))))
        );
    }

    #[test]
    fn response_after_sweep_is_rejected() {
        let grid = Grid::new(1, 2).unwrap();
        let mut driver = GenerationDriver::new(1, 2).unwrap();
        sweep(&mut driver, &grid);
        assert_eq!(
            driver.resume(Some(CellState::Alive)),
            Err(ProtocolError::UnexpectedResponse)
        );
    }
}
