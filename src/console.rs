//! Line-oriented console front end
//!
//! Reads one line per prompt from any [`BufRead`] and writes the board, the
//! menu and feedback to any [`Write`]. The real binary passes stdin/stdout;
//! tests pass in-memory buffers.

use crate::menu::{Prompt, Session, Step};
use crate::render::{render_grid, SeatRenderer};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::info;

pub const FAREWELL: &str = "Thanks for using the system. Goodbye!";

/// Console display settings
#[derive(Debug, Clone, Copy)]
pub struct ConsoleOptions {
    /// Seats per grid line
    pub per_row: usize,
    /// Clear the terminal before redrawing the board
    pub clear_screen: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        ConsoleOptions {
            per_row: 5,
            clear_screen: true,
        }
    }
}

/// Run the menu loop until the user exits or input ends
pub fn run<R, W, S>(
    session: &mut Session,
    mut input: R,
    output: &mut W,
    renderer: &S,
    options: &ConsoleOptions,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: SeatRenderer,
    S::Token: Display,
{
    let mut shown_messages = 0;
    let mut line = String::new();

    loop {
        if session.prompt() == Prompt::MainMenu {
            if options.clear_screen {
                execute!(output, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            draw_board(session, output, renderer, options.per_row)?;
        }

        let log = session.log();
        for message in log.tail(log.len() - shown_messages) {
            writeln!(output, "{}", message.text)?;
        }
        shown_messages = session.log().len();

        if session.prompt() == Prompt::MainMenu {
            writeln!(output, "\nOptions:")?;
            writeln!(output, "1. Reserve/cancel a seat")?;
            writeln!(output, "2. Exit")?;
        }
        write!(output, "{}", session.prompt_text())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("input closed, leaving menu");
            writeln!(output)?;
            break;
        }

        if session.submit(&line) == Step::Exit {
            break;
        }
    }

    writeln!(output, "{}", FAREWELL)?;
    output.flush()
}

fn draw_board<W, S>(
    session: &Session,
    output: &mut W,
    renderer: &S,
    per_row: usize,
) -> io::Result<()>
where
    W: Write,
    S: SeatRenderer,
    S::Token: Display,
{
    writeln!(output, "\nSeats:")?;
    for row in render_grid(&session.snapshot(), renderer, per_row) {
        writeln!(output, "{}", row)?;
    }
    Ok(())
}
