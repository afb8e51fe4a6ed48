//! # Introduction
//!
//! seatboard tracks reservation state for a fixed set of numbered seats. A
//! user toggles seats between reserved and free through a text menu, and the
//! full seat grid is redrawn with color-coded status after every action.
//!
//! ## Layers
//!
//! ```text
//! SeatBoard → Snapshot → SeatRenderer → console / TUI
//!      ↑
//!   Session (menu state machine, fed one input line at a time)
//! ```
//!
//! 1. [`board`] — the [`board::SeatBoard`] and its toggle/query operations.
//! 2. [`snapshot`] — read-only [`snapshot::Snapshot`] views and the
//!    [`snapshot::MessageLog`] of user feedback.
//! 3. [`render`] — the [`render::SeatRenderer`] trait with text and ANSI
//!    color implementations.
//! 4. [`menu`] — the [`menu::Session`] state machine behind both front ends.
//! 5. [`console`] — line-oriented front end over any `BufRead`/`Write`.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 7. [`config`] — environment and command-line settings.

pub mod board;
pub mod config;
pub mod console;
pub mod menu;
pub mod render;
pub mod snapshot;
pub mod ui;
