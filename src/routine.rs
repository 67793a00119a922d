use crate::{CellState, ProtocolError};

/// What a routine hands back each time it is resumed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step<Y, R> {
    /// The routine suspended with a value for its caller.
    Yield(Y),
    /// The routine finished with its final value.
    Complete(R),
}

/// A suspend/resume computation driven one step at a time by its caller.
///
/// Each call to `resume` carries the response to whatever the routine last
/// yielded: the cell state for a query, or `None` when nothing is owed (the
/// very first resume, and the resume after a transition).
pub trait Routine {
    type Yield;
    type Return;

    fn resume(
        &mut self,
        input: Option<CellState>,
    ) -> Result<Step<Self::Yield, Self::Return>, ProtocolError>;
}

#[inline]
pub(crate) fn expect_response(input: Option<CellState>) -> Result<CellState, ProtocolError> {
    input.ok_or(ProtocolError::MissingResponse)
}

#[inline]
pub(crate) fn expect_no_response(input: Option<CellState>) -> Result<(), ProtocolError> {
    match input {
        None => Ok(()),
        Some(_) => Err(ProtocolError::UnexpectedResponse),
    }
}
