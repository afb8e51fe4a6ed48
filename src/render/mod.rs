//! Seat rendering
//!
//! A [`SeatRenderer`] turns one [`SeatView`] into a display token. The board
//! knows nothing about terminals; each front end picks a renderer:
//!
//! - [`TextMarkers`] — plain text, reservation shown with a `*`
//! - [`AnsiColors`] — crossterm-styled text, green for free and red for reserved
//! - the ratatui front end renders to `Span`s (see [`crate::ui::panes::seats`])

use crate::snapshot::{SeatView, Snapshot};
use crossterm::style::{style, Color, StyledContent, Stylize};
use std::fmt::Display;

/// Maps seat state to a display token
pub trait SeatRenderer {
    type Token;

    fn render_seat(&self, seat: &SeatView) -> Self::Token;
}

/// Color-free markers: `[ 7 ]` for free seats, `[ 7*]` for reserved ones
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMarkers;

impl SeatRenderer for TextMarkers {
    type Token = String;

    fn render_seat(&self, seat: &SeatView) -> String {
        let marker = if seat.reserved { '*' } else { ' ' };
        format!("[{:2}{}]", seat.position, marker)
    }
}

/// Console colors: `[ 7]` in green when free, red when reserved
#[derive(Debug, Clone, Copy)]
pub struct AnsiColors {
    pub free: Color,
    pub reserved: Color,
}

impl Default for AnsiColors {
    fn default() -> Self {
        AnsiColors {
            free: Color::Green,
            reserved: Color::Red,
        }
    }
}

impl SeatRenderer for AnsiColors {
    type Token = StyledContent<String>;

    fn render_seat(&self, seat: &SeatView) -> StyledContent<String> {
        let color = if seat.reserved { self.reserved } else { self.free };
        style(format!("[{:2}]", seat.position)).with(color)
    }
}

/// Render a snapshot as text lines, `per_row` seats per line
pub fn render_grid<R>(snapshot: &Snapshot, renderer: &R, per_row: usize) -> Vec<String>
where
    R: SeatRenderer,
    R::Token: Display,
{
    snapshot
        .rows(per_row)
        .map(|row| {
            row.iter()
                .map(|seat| renderer.render_seat(seat).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SeatBoard;

    #[test]
    fn test_text_markers() {
        let free = SeatView {
            position: 7,
            reserved: false,
        };
        let reserved = SeatView {
            position: 12,
            reserved: true,
        };

        assert_eq!(TextMarkers.render_seat(&free), "[ 7 ]");
        assert_eq!(TextMarkers.render_seat(&reserved), "[12*]");
    }

    #[test]
    fn test_ansi_colors_pick_color_by_state() {
        let renderer = AnsiColors::default();
        let free = renderer.render_seat(&SeatView {
            position: 1,
            reserved: false,
        });
        let reserved = renderer.render_seat(&SeatView {
            position: 1,
            reserved: true,
        });

        assert_eq!(free.content(), "[ 1]");
        assert_eq!(free.style().foreground_color, Some(Color::Green));
        assert_eq!(reserved.style().foreground_color, Some(Color::Red));
    }

    #[test]
    fn test_grid_wraps_every_five() {
        let mut board = SeatBoard::new(7).unwrap();
        board.toggle(2, || true).unwrap();

        let lines = render_grid(&board.snapshot(), &TextMarkers, 5);

        assert_eq!(
            lines,
            vec![
                "[ 1 ] [ 2*] [ 3 ] [ 4 ] [ 5 ]".to_string(),
                "[ 6 ] [ 7 ]".to_string(),
            ]
        );
    }
}
