use crate::{Grid, Message, ProtocolError, Query, Result, Routine, Step, Transition};

use tracing::trace;

/// Produce the next generation of `source` by driving `driver` through one
/// sweep.
///
/// Queries are answered from `source` and transitions are written into a
/// fresh grid, so no read ever sees a write from the same generation. The
/// result is returned once the driver signals the end of the sweep.
///
/// Any protocol violation aborts the sweep and the partial grid is dropped.
/// `source` is only borrowed, so it stays valid for a retry.
pub fn advance<R>(source: &Grid, driver: &mut R) -> Result<Grid>
where
    R: Routine<Yield = Message> + ?Sized,
{
    let mut next = source.empty_like();
    let mut written = vec![false; source.size()];
    let mut writes = 0;
    let mut input = None;
    loop {
        let message = match driver.resume(input.take())? {
            Step::Yield(message) => message,
            Step::Complete(_) => return Err(ProtocolError::DriverExhausted.into()),
        };
        match message {
            Message::Query(Query { row, col }) => input = Some(source.query(row, col)),
            Message::Transition(Transition {
                row,
                col,
                next_state,
            }) => {
                let ix = source
                    .index_of(row, col)
                    .ok_or(ProtocolError::TransitionOutOfBounds { row, col })?;
                if std::mem::replace(&mut written[ix], true) {
                    return Err(ProtocolError::DuplicateTransition { row, col }.into());
                }
                writes += 1;
                next.assign(row, col, next_state);
            }
            Message::SweepComplete => {
                if writes != written.len() {
                    return Err(ProtocolError::IncompleteSweep {
                        written: writes,
                        expected: written.len(),
                    }
                    .into());
                }
                trace!(
                    height = next.get_height(),
                    width = next.get_width(),
                    alive = next.alive_count(),
                    "sweep complete"
                );
                return Ok(next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellState, Error, GenerationDriver};
    use std::collections::VecDeque;

    /// Plays back a fixed list of messages, then completes.
    struct Script(VecDeque<Message>);

    impl Script {
        fn new(messages: Vec<Message>) -> Self {
            Script(messages.into())
        }
    }

    impl Routine for Script {
        type Yield = Message;
        type Return = ();

        fn resume(
            &mut self,
            _: Option<CellState>,
        ) -> std::result::Result<Step<Message, ()>, ProtocolError> {
            Ok(self
                .0
                .pop_front()
                .map(Step::Yield)
                .unwrap_or(Step::Complete(())))
        }
    }

    fn write(row: isize, col: isize, next_state: CellState) -> Message {
        Message::Transition(Transition {
            row,
            col,
            next_state,
        })
    }

    fn protocol(err: ProtocolError) -> Error {
        Error::Protocol(err)
    }

    #[test]
    fn empty_grid_stays_empty() {
        let grid = Grid::new(4, 7).unwrap();
        let mut driver = GenerationDriver::for_grid(&grid);
        assert_eq!(advance(&grid, &mut driver).unwrap(), grid);
    }

    #[test]
    fn scripted_sweep_applies_writes() {
        let grid = Grid::new(1, 2).unwrap();
        let mut script = Script::new(vec![
            Message::Query(Query::new(5, 5)),
            write(0, 0, CellState::Alive),
            write(0, 1, CellState::Empty),
            Message::SweepComplete,
        ]);
        let next = advance(&grid, &mut script).unwrap();
        assert_eq!(next.alive_coords(), vec![(0, 0)]);
    }

    #[test]
    fn exhausted_driver_is_fatal() {
        let grid = Grid::new(1, 1).unwrap();
        let mut script = Script::new(vec![write(0, 0, CellState::Alive)]);
        assert_eq!(
            advance(&grid, &mut script),
            Err(protocol(ProtocolError::DriverExhausted))
        );
    }

    #[test]
    fn out_of_bounds_transition() {
        let grid = Grid::new(2, 2).unwrap();
        let mut script = Script::new(vec![write(2, 0, CellState::Alive)]);
        assert_eq!(
            advance(&grid, &mut script),
            Err(protocol(ProtocolError::TransitionOutOfBounds { row: 2, col: 0 }))
        );
    }

    #[test]
    fn duplicate_transition() {
        let grid = Grid::new(1, 2).unwrap();
        let mut script = Script::new(vec![
            write(0, 1, CellState::Alive),
            write(0, 1, CellState::Empty),
        ]);
        assert_eq!(
            advance(&grid, &mut script),
            Err(protocol(ProtocolError::DuplicateTransition { row: 0, col: 1 }))
        );
    }

    #[test]
    fn undersized_driver_leaves_sweep_incomplete() {
        let grid = Grid::new(3, 3).unwrap();
        let mut driver = GenerationDriver::new(2, 2).unwrap();
        assert_eq!(
            advance(&grid, &mut driver),
            Err(protocol(ProtocolError::IncompleteSweep {
                written: 4,
                expected: 9
            }))
        );
    }

    #[test]
    fn failure_leaves_source_intact() {
        let grid = Grid::new_alive_coords(3, 3, vec![(0, 1), (1, 1), (2, 1)]).unwrap();
        let before = grid.clone();
        let mut driver = GenerationDriver::new(4, 4).unwrap();
        assert_eq!(
            advance(&grid, &mut driver),
            Err(protocol(ProtocolError::TransitionOutOfBounds { row: 0, col: 3 }))
        );
        assert_eq!(grid, before);
        assert_eq!(driver.sweeps(), 0);
    }
}
