//! Seat reservation state
//!
//! [`SeatBoard`] owns a fixed number of seats, each either reserved or free.
//! Seats are addressed by 1-based position; the board maps positions to
//! 0-based indices internally.
//!
//! The board is the only mutable state in the program. It is mutated through
//! [`SeatBoard::toggle`] and read through [`SeatBoard::is_reserved`] and
//! [`SeatBoard::snapshot`].

pub mod errors;

pub use errors::SeatError;

use crate::snapshot::{SeatView, Snapshot};
use tracing::{debug, info};

/// Result of a [`SeatBoard::toggle`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The seat was free and is now reserved
    ReservedNow,
    /// The seat was reserved and the cancellation was confirmed
    Freed,
    /// The seat was reserved and the cancellation was declined
    Unchanged,
}

/// Fixed-size collection of seats
#[derive(Debug, Clone)]
pub struct SeatBoard {
    reserved: Vec<bool>, // true = reserved, false = free
}

impl SeatBoard {
    /// Create a board with `capacity` seats, all free
    pub fn new(capacity: usize) -> Result<Self, SeatError> {
        if capacity == 0 {
            return Err(SeatError::EmptyBoard);
        }

        debug!(capacity, "seat board created");
        Ok(SeatBoard {
            reserved: vec![false; capacity],
        })
    }

    pub fn capacity(&self) -> usize {
        self.reserved.len()
    }

    pub fn reserved_count(&self) -> usize {
        self.reserved.iter().filter(|&&r| r).count()
    }

    pub fn free_count(&self) -> usize {
        self.capacity() - self.reserved_count()
    }

    /// Whether the seat at `position` is currently reserved
    pub fn is_reserved(&self, position: usize) -> Result<bool, SeatError> {
        let index = self.index_of(position)?;
        Ok(self.reserved[index])
    }

    /// Reserve a free seat, or free a reserved one if `confirm_cancel` agrees.
    ///
    /// `confirm_cancel` is only called when the seat is currently reserved.
    /// An out-of-range position fails before anything is called or changed.
    pub fn toggle<F>(
        &mut self,
        position: usize,
        confirm_cancel: F,
    ) -> Result<ToggleOutcome, SeatError>
    where
        F: FnOnce() -> bool,
    {
        let index = self.index_of(position)?;

        if !self.reserved[index] {
            self.reserved[index] = true;
            info!(position, "seat reserved");
            return Ok(ToggleOutcome::ReservedNow);
        }

        if confirm_cancel() {
            self.reserved[index] = false;
            info!(position, "reservation cancelled");
            Ok(ToggleOutcome::Freed)
        } else {
            debug!(position, "cancellation declined");
            Ok(ToggleOutcome::Unchanged)
        }
    }

    /// Read-only view of every seat in position order
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seats: self
                .reserved
                .iter()
                .enumerate()
                .map(|(index, &reserved)| SeatView {
                    position: index + 1,
                    reserved,
                })
                .collect(),
        }
    }

    /// Map a 1-based position to a vector index
    fn index_of(&self, position: usize) -> Result<usize, SeatError> {
        if position < 1 || position > self.capacity() {
            let position = i64::try_from(position).unwrap_or(i64::MAX);
            return Err(SeatError::out_of_range(position, self.capacity()));
        }
        Ok(position - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_all_free() {
        let board = SeatBoard::new(30).unwrap();

        assert_eq!(board.capacity(), 30);
        for position in 1..=30 {
            assert!(!board.is_reserved(position).unwrap());
        }
        assert_eq!(board.reserved_count(), 0);
        assert_eq!(board.free_count(), 30);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert_eq!(SeatBoard::new(0).unwrap_err(), SeatError::EmptyBoard);
    }

    #[test]
    fn test_bounds_are_checked() {
        let board = SeatBoard::new(10).unwrap();

        assert_eq!(
            board.is_reserved(0),
            Err(SeatError::OutOfRange { position: 0, capacity: 10 })
        );
        assert_eq!(
            board.is_reserved(11),
            Err(SeatError::OutOfRange { position: 11, capacity: 10 })
        );
        assert!(board.is_reserved(1).is_ok());
        assert!(board.is_reserved(10).is_ok());
    }

    #[test]
    fn test_toggle_free_seat_does_not_ask() {
        let mut board = SeatBoard::new(5).unwrap();

        let outcome = board
            .toggle(3, || panic!("confirmation asked for a free seat"))
            .unwrap();

        assert_eq!(outcome, ToggleOutcome::ReservedNow);
        assert!(board.is_reserved(3).unwrap());
        assert_eq!(board.reserved_count(), 1);
    }

    #[test]
    fn test_toggle_reserved_seat_follows_confirmation() {
        let mut board = SeatBoard::new(5).unwrap();
        board.toggle(2, || false).unwrap();

        assert_eq!(board.toggle(2, || false).unwrap(), ToggleOutcome::Unchanged);
        assert!(board.is_reserved(2).unwrap());

        assert_eq!(board.toggle(2, || true).unwrap(), ToggleOutcome::Freed);
        assert!(!board.is_reserved(2).unwrap());
    }

    #[test]
    fn test_out_of_range_toggle_skips_callback() {
        let mut board = SeatBoard::new(5).unwrap();
        let mut asked = false;

        let result = board.toggle(6, || {
            asked = true;
            true
        });

        assert_eq!(result, Err(SeatError::out_of_range(6, 5)));
        assert!(!asked);
        assert_eq!(board.reserved_count(), 0);
    }

    #[test]
    fn test_snapshot_is_ordered() {
        let mut board = SeatBoard::new(4).unwrap();
        board.toggle(4, || true).unwrap();

        let snapshot = board.snapshot();
        let positions: Vec<usize> = snapshot.seats.iter().map(|s| s.position).collect();
        let reserved: Vec<bool> = snapshot.seats.iter().map(|s| s.reserved).collect();

        assert_eq!(positions, vec![1, 2, 3, 4]);
        assert_eq!(reserved, vec![false, false, false, true]);
    }
}
