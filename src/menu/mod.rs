//! Menu interaction driving a [`SeatBoard`]
//!
//! [`Session`] is a small state machine fed one line of user input at a time.
//! Both front ends (the line console and the TUI) use it, so prompts, messages
//! and input validation behave the same in each.
//!
//! ```text
//! MainMenu --"1"--> SeatPosition --free seat--> MainMenu (seat reserved)
//!     |                  |
//!    "2" -> Exit         +--reserved seat--> ConfirmCancel --y/n--> MainMenu
//! ```
//!
//! Invalid input never ends the session: the error is written to the
//! [`MessageLog`] and the session returns to the main menu.

pub mod errors;

pub use errors::MenuError;

use crate::board::{SeatBoard, SeatError, ToggleOutcome};
use crate::snapshot::{MessageLog, Snapshot};
use std::str::FromStr;
use tracing::{debug, info};

/// Top-level menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1` — reserve or cancel a seat
    ToggleSeat,
    /// `2` — leave the program
    Exit,
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::ToggleSeat),
            "2" => Ok(MenuChoice::Exit),
            other => Err(MenuError::InvalidMenuChoice(other.to_string())),
        }
    }
}

/// What the session is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    MainMenu,
    SeatPosition,
    ConfirmCancel { position: usize },
}

/// Whether the caller should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}

/// Parse a seat number typed by the user.
///
/// Integers below 1 are reported as out of range; the upper bound is left to
/// the board. Anything that is not an integer is an [`MenuError::InvalidPosition`].
pub fn parse_position(input: &str, capacity: usize) -> Result<usize, MenuError> {
    let trimmed = input.trim();
    let value: i64 = match trimmed.parse() {
        Ok(value) => value,
        // An integer too large for i64 is still a number, just not a seat
        Err(_) if is_integer_literal(trimmed) => {
            let value = if trimmed.starts_with('-') { i64::MIN } else { i64::MAX };
            return Err(SeatError::out_of_range(value, capacity).into());
        }
        Err(_) => return Err(MenuError::InvalidPosition(trimmed.to_string())),
    };

    if value < 1 {
        return Err(SeatError::out_of_range(value, capacity).into());
    }
    usize::try_from(value).map_err(|_| MenuError::from(SeatError::out_of_range(value, capacity)))
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `y`/`yes` or the Spanish `s`/`si` confirm; anything else declines
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().chars().next(),
        Some('y') | Some('Y') | Some('s') | Some('S')
    )
}

/// One user's interaction with a seat board
#[derive(Debug)]
pub struct Session {
    board: SeatBoard,
    prompt: Prompt,
    log: MessageLog,
}

impl Session {
    pub fn new(board: SeatBoard) -> Self {
        Session {
            board,
            prompt: Prompt::MainMenu,
            log: MessageLog::new(),
        }
    }

    pub fn board(&self) -> &SeatBoard {
        &self.board
    }

    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Question shown for the current prompt
    pub fn prompt_text(&self) -> String {
        match self.prompt {
            Prompt::MainMenu => "Choose an option: ".to_string(),
            Prompt::SeatPosition => {
                format!("Enter the seat number (1-{}): ", self.board.capacity())
            }
            Prompt::ConfirmCancel { position } => {
                format!(
                    "Seat {} is already reserved. Cancel the reservation? (y/n): ",
                    position
                )
            }
        }
    }

    /// Feed one line of input to the session
    pub fn submit(&mut self, input: &str) -> Step {
        match self.prompt {
            Prompt::MainMenu => {
                // Blank lines just re-prompt, like a stream read skipping whitespace
                if input.trim().is_empty() {
                    return Step::Continue;
                }
                match input.parse::<MenuChoice>() {
                    Ok(MenuChoice::ToggleSeat) => {
                        self.prompt = Prompt::SeatPosition;
                        Step::Continue
                    }
                    Ok(MenuChoice::Exit) => {
                        info!("session finished");
                        Step::Exit
                    }
                    Err(e) => {
                        self.report(&e);
                        Step::Continue
                    }
                }
            }
            Prompt::SeatPosition => {
                if input.trim().is_empty() {
                    return Step::Continue;
                }
                self.prompt = Prompt::MainMenu;
                if let Err(e) = self.select_seat(input) {
                    self.report(&e);
                }
                Step::Continue
            }
            Prompt::ConfirmCancel { position } => {
                self.prompt = Prompt::MainMenu;
                if let Err(e) = self.confirm_cancel(position, input) {
                    self.report(&e);
                }
                Step::Continue
            }
        }
    }

    fn select_seat(&mut self, input: &str) -> Result<(), MenuError> {
        let position = parse_position(input, self.board.capacity())?;

        if self.board.is_reserved(position)? {
            self.prompt = Prompt::ConfirmCancel { position };
            return Ok(());
        }

        // Free seats never ask for confirmation
        let outcome = self.board.toggle(position, || false)?;
        self.report_outcome(position, outcome);
        Ok(())
    }

    fn confirm_cancel(&mut self, position: usize, answer: &str) -> Result<(), MenuError> {
        let outcome = self.board.toggle(position, || is_affirmative(answer))?;
        self.report_outcome(position, outcome);
        Ok(())
    }

    fn report_outcome(&mut self, position: usize, outcome: ToggleOutcome) {
        match outcome {
            ToggleOutcome::ReservedNow => self.log.success(format!("Seat {} reserved.", position)),
            ToggleOutcome::Freed => self
                .log
                .success(format!("Reservation for seat {} cancelled.", position)),
            ToggleOutcome::Unchanged => self.log.info("Reservation unchanged."),
        }
    }

    fn report(&mut self, error: &MenuError) {
        debug!(%error, "input rejected");
        let text = match error {
            MenuError::InvalidMenuChoice(_) => "Invalid option.".to_string(),
            MenuError::InvalidPosition(text) => format!("'{}' is not a seat number.", text),
            MenuError::Seat(SeatError::OutOfRange { capacity, .. }) => {
                format!("Invalid seat number. Choose a seat from 1 to {}.", capacity)
            }
            MenuError::Seat(e) => e.to_string(),
        };
        self.log.error(text);
    }
}
