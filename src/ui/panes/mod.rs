//! TUI pane rendering modules
//!
//! - [`seats`]: color-coded seat grid and legend
//! - [`messages`]: feedback from the menu session
//! - [`status`]: status bar with seat counts and keybindings, plus the input line
//!
//! Each module exports a `render_*` function taking the frame, its area, and
//! read-only views of the session.

pub mod messages;
pub mod seats;
pub mod status;

pub use messages::render_messages_pane;
pub use seats::{render_seats_pane, SpanRenderer};
pub use status::{render_input_line, render_status_bar};
