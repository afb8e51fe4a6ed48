//! Feedback message pane rendering

use crate::snapshot::{MessageKind, MessageLog};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the message log, keeping `scroll_offset` within the content
pub fn render_messages_pane(
    frame: &mut Frame,
    area: Rect,
    log: &MessageLog,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Messages ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if log.is_empty() {
        let paragraph = Paragraph::new("(no messages)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let total_items = log.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    // Only the visible window becomes list items
    let visible_items: Vec<ListItem> = log
        .tail(total_items - *scroll_offset)
        .iter()
        .take(visible_height)
        .map(|message| {
            let color = match message.kind {
                MessageKind::Info => DEFAULT_THEME.fg,
                MessageKind::Success => DEFAULT_THEME.free,
                MessageKind::Error => DEFAULT_THEME.reserved,
            };
            ListItem::new(message.text.as_str()).style(Style::default().fg(color))
        })
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn long_log() -> MessageLog {
        let mut log = MessageLog::new();
        for i in 1..=1000 {
            log.info(format!("message {}", i));
        }
        log
    }

    fn draw(log: &MessageLog, scroll_offset: &mut usize) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 7)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_messages_pane(f, area, log, scroll_offset)
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_scroll_to_bottom_shows_latest() {
        let log = long_log();
        let mut scroll = usize::MAX;

        let text = draw(&log, &mut scroll);

        assert_eq!(scroll, 995);
        assert!(text.contains("message 996"));
        assert!(text.contains("message 1000"));
        assert!(!text.contains("message 995 "));
    }

    #[test]
    fn test_scroll_from_top() {
        let log = long_log();
        let mut scroll = 0;

        let text = draw(&log, &mut scroll);

        assert!(text.contains("message 1 "));
        assert!(text.contains("message 5 "));
        assert!(!text.contains("message 6 "));
    }

    #[test]
    fn test_empty_log() {
        let mut scroll = 3;
        let text = draw(&MessageLog::new(), &mut scroll);

        assert!(text.contains("(no messages)"));
    }
}
