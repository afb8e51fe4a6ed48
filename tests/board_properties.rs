use proptest::prelude::*;
use seatboard::board::{SeatBoard, SeatError, ToggleOutcome};

/// Board size plus a valid position on it
fn board_and_position() -> impl Strategy<Value = (usize, usize)> {
    (1usize..200).prop_flat_map(|n| (Just(n), 1..=n))
}

proptest! {
    #[test]
    fn new_board_is_all_free(n in 1usize..500) {
        let board = SeatBoard::new(n).unwrap();

        prop_assert_eq!(board.capacity(), n);
        for position in 1..=n {
            prop_assert!(!board.is_reserved(position).unwrap());
        }
    }

    #[test]
    fn toggling_a_free_seat_reserves_it((n, p) in board_and_position()) {
        let mut board = SeatBoard::new(n).unwrap();

        prop_assert_eq!(board.toggle(p, || false), Ok(ToggleOutcome::ReservedNow));
        prop_assert!(board.is_reserved(p).unwrap());
        prop_assert_eq!(board.reserved_count(), 1);
    }

    #[test]
    fn confirmed_cancel_frees_the_seat((n, p) in board_and_position()) {
        let mut board = SeatBoard::new(n).unwrap();
        board.toggle(p, || false).unwrap();

        prop_assert_eq!(board.toggle(p, || true), Ok(ToggleOutcome::Freed));
        prop_assert!(!board.is_reserved(p).unwrap());
    }

    #[test]
    fn declined_cancel_changes_nothing((n, p) in board_and_position()) {
        let mut board = SeatBoard::new(n).unwrap();
        board.toggle(p, || false).unwrap();
        let before = board.snapshot();

        prop_assert_eq!(board.toggle(p, || false), Ok(ToggleOutcome::Unchanged));
        prop_assert!(board.is_reserved(p).unwrap());
        prop_assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn positions_outside_the_board_are_rejected(n in 1usize..500) {
        let board = SeatBoard::new(n).unwrap();

        prop_assert_eq!(board.is_reserved(0), Err(SeatError::out_of_range(0, n)));
        prop_assert_eq!(
            board.is_reserved(n + 1),
            Err(SeatError::out_of_range(n as i64 + 1, n))
        );
    }

    #[test]
    fn snapshot_is_stable_without_toggles(
        n in 1usize..100,
        toggles in proptest::collection::vec((1usize..100, any::<bool>()), 0..50),
    ) {
        let mut board = SeatBoard::new(n).unwrap();
        for (position, confirm) in toggles {
            let _ = board.toggle(position, || confirm);
        }

        let first = board.snapshot();
        let second = board.snapshot();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.reserved_count(), board.reserved_count());
    }

    #[test]
    fn toggles_only_touch_their_own_seat(
        (n, p) in board_and_position(),
        confirm in any::<bool>(),
    ) {
        let mut board = SeatBoard::new(n).unwrap();
        let before = board.snapshot();

        board.toggle(p, || confirm).unwrap();
        let after = board.snapshot();

        for (old, new) in before.seats.iter().zip(after.seats.iter()) {
            if old.position != p {
                prop_assert_eq!(old, new);
            }
        }
    }
}
