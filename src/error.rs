use thiserror::Error;

/// Faults in the query/transition exchange between the runner and the
/// routines below it. These never come from user input; they mean one side
/// of the exchange broke its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("a cell state was supplied where the routine consumes none")]
    UnexpectedResponse,

    #[error("a query was left without a cell state response")]
    MissingResponse,

    #[error("routine resumed after it completed")]
    Exhausted,

    #[error("generation driver completed before signalling the end of a sweep")]
    DriverExhausted,

    #[error("transition targets ({row}, {col}) outside the grid")]
    TransitionOutOfBounds { row: isize, col: isize },

    #[error("cell ({row}, {col}) received a second transition in one sweep")]
    DuplicateTransition { row: isize, col: isize },

    #[error("sweep ended after {written} of {expected} transitions")]
    IncompleteSweep { written: usize, expected: usize },

    #[error("generation driver faulted earlier and must be reset")]
    Faulted,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("grid dimensions must be positive, got {height}x{width}")]
    EmptyGrid { height: usize, width: usize },

    #[error("a {height}x{width} grid has more cells than can be addressed")]
    GridTooLarge { height: usize, width: usize },

    #[error("expected {} cells for a {height}x{width} grid, got {found}", .height * .width)]
    CellCount {
        height: usize,
        width: usize,
        found: usize,
    },

    #[error("alive proportion must lie within [0, 1], got {0}")]
    InvalidProportion(f64),

    #[error("internal protocol violation: {0}")]
    Protocol(#[from] ProtocolError),
}

pub type Result<T> = std::result::Result<T, Error>;
