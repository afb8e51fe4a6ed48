//! Seat grid pane rendering

use crate::render::SeatRenderer;
use crate::snapshot::{SeatView, Snapshot};
use crate::ui::theme::{Theme, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Renders seats as colored ratatui spans
pub struct SpanRenderer<'a> {
    pub theme: &'a Theme,
}

impl Default for SpanRenderer<'static> {
    fn default() -> Self {
        SpanRenderer {
            theme: &DEFAULT_THEME,
        }
    }
}

impl SeatRenderer for SpanRenderer<'_> {
    type Token = Span<'static>;

    fn render_seat(&self, seat: &SeatView) -> Span<'static> {
        let style = if seat.reserved {
            Style::default()
                .fg(self.theme.reserved)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.free)
        };
        Span::styled(format!("[{:2}]", seat.position), style)
    }
}

/// Build at most `max_rows` grid lines, `per_row` seats per line
pub fn seat_lines(snapshot: &Snapshot, per_row: usize, max_rows: usize) -> Vec<Line<'static>> {
    let renderer = SpanRenderer::default();

    snapshot
        .rows(per_row)
        .take(max_rows)
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, seat) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(renderer.render_seat(seat));
            }
            Line::from(spans)
        })
        .collect()
}

/// Render the seat grid pane with a legend line
pub fn render_seats_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot, per_row: usize) {
    let block = Block::default()
        .title(" Seats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.primary))
        .padding(Padding::new(1, 0, 0, 0));

    let visible_rows = area.height.saturating_sub(2) as usize;
    let mut lines = seat_lines(snapshot, per_row, visible_rows);
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("[  ]", Style::default().fg(DEFAULT_THEME.free)),
        Span::styled(" free  ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            "[  ]",
            Style::default()
                .fg(DEFAULT_THEME.reserved)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" reserved", Style::default().fg(DEFAULT_THEME.comment)),
    ]));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
