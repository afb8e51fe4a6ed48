//! Main TUI application state and logic

use crate::menu::{Session, Step};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// The main application state
pub struct App {
    /// Menu session holding the seat board
    pub session: Session,

    /// Seats per grid row
    pub per_row: usize,

    /// Text typed since the last Enter
    pub input: String,

    /// Scroll offset of the messages pane
    pub messages_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(session: Session, per_row: usize) -> Self {
        App {
            session,
            per_row,
            input: String::new(),
            messages_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let snapshot = self.session.snapshot();
        let grid_rows = snapshot.seats.len().div_ceil(self.per_row.max(1));
        // Grid rows plus legend and borders, leaving room for the other panes
        let seats_height = u16::try_from(grid_rows)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(frame.area().height.saturating_sub(7));

        // Seats (grid + legend + borders) | Messages | Input | Status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(seats_height),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        super::panes::render_seats_pane(frame, chunks[0], &snapshot, self.per_row);

        super::panes::render_messages_pane(
            frame,
            chunks[1],
            self.session.log(),
            &mut self.messages_scroll,
        );

        super::panes::render_input_line(
            frame,
            chunks[2],
            &self.session.prompt_text(),
            &self.input,
        );

        super::panes::render_status_bar(
            frame,
            chunks[3],
            &self.status_message,
            snapshot.reserved_count(),
            snapshot.free_count(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            KeyCode::Up => {
                self.messages_scroll = self.messages_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.messages_scroll = self.messages_scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    /// Send the typed line to the session
    fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input);

        if self.session.submit(&line) == Step::Exit {
            self.should_quit = true;
            return;
        }

        self.status_message = match self.session.log().last() {
            Some(message) => message.text.clone(),
            None => "Ready!".to_string(),
        };
        // Auto-scroll messages to bottom
        self.messages_scroll = usize::MAX;
    }
}
