//! Input errors raised by the menu session
//!
//! These never end the session: the session logs them and re-prompts.

use crate::board::SeatError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Top-level option other than `1` or `2`
    #[error("invalid option '{0}'")]
    InvalidMenuChoice(String),

    /// Seat number that is not an integer at all
    #[error("'{0}' is not a seat number")]
    InvalidPosition(String),

    #[error(transparent)]
    Seat(#[from] SeatError),
}
