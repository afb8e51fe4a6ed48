//! Error types for seat board operations
//!
//! Every [`SeatError`] is a validation failure on caller input. None of them
//! leave the board in a modified state.

use thiserror::Error;

/// Errors returned by [`SeatBoard`](super::SeatBoard) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatError {
    /// A board must hold at least one seat
    #[error("a seat board needs at least one seat")]
    EmptyBoard,

    /// Position outside `[1, capacity]`
    #[error("seat {position} is out of range (1-{capacity})")]
    OutOfRange { position: i64, capacity: usize },
}

impl SeatError {
    pub fn out_of_range(position: i64, capacity: usize) -> Self {
        SeatError::OutOfRange { position, capacity }
    }
}
