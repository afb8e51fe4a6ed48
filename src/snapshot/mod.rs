//! Read-only views handed to the front ends

/// State of one seat at the time a snapshot was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatView {
    pub position: usize, // 1-based
    pub reserved: bool,
}

/// Ordered copy of every seat on a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub seats: Vec<SeatView>,
}

impl Snapshot {
    /// Split the seats into display rows of `per_row` seats.
    ///
    /// The last row may be shorter. A `per_row` of 0 is treated as 1.
    pub fn rows(&self, per_row: usize) -> impl Iterator<Item = &[SeatView]> {
        self.seats.chunks(per_row.max(1))
    }

    pub fn reserved_count(&self) -> usize {
        self.seats.iter().filter(|s| s.reserved).count()
    }

    pub fn free_count(&self) -> usize {
        self.seats.len() - self.reserved_count()
    }
}

/// Kind of feedback line, used by the front ends to pick a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// A line of feedback produced by the menu session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

/// Feedback lines in the order they were produced
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    pub lines: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        MessageLog { lines: Vec::new() }
    }

    pub fn push(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.lines.push(Message {
            kind,
            text: text.into(),
        });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(MessageKind::Info, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(MessageKind::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(MessageKind::Error, text);
    }

    /// The last `count` lines, oldest first
    pub fn tail(&self, count: usize) -> &[Message] {
        let start = self.lines.len().saturating_sub(count);
        &self.lines[start..]
    }

    pub fn last(&self) -> Option<&Message> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_of(states: &[bool]) -> Snapshot {
        Snapshot {
            seats: states
                .iter()
                .enumerate()
                .map(|(i, &reserved)| SeatView {
                    position: i + 1,
                    reserved,
                })
                .collect(),
        }
    }

    #[test]
    fn test_rows_wrap_every_n_seats() {
        let snapshot = snapshot_of(&[false; 12]);
        let rows: Vec<usize> = snapshot.rows(5).map(|row| row.len()).collect();

        assert_eq!(rows, vec![5, 5, 2]);
    }

    #[test]
    fn test_rows_with_zero_width() {
        let snapshot = snapshot_of(&[false; 3]);
        assert_eq!(snapshot.rows(0).count(), 3);
    }

    #[test]
    fn test_counts() {
        let snapshot = snapshot_of(&[true, false, true, false, false]);

        assert_eq!(snapshot.reserved_count(), 2);
        assert_eq!(snapshot.free_count(), 3);
        assert_eq!(snapshot.seats.len(), 5);
    }

    #[test]
    fn test_log_tail() {
        let mut log = MessageLog::new();
        log.info("one");
        log.success("two");
        log.error("three");

        let tail: Vec<&str> = log.tail(2).iter().map(|m| m.text.as_str()).collect();
        assert_eq!(tail, vec!["two", "three"]);
        assert_eq!(log.tail(10).len(), 3);
        assert_eq!(log.last().map(|m| m.kind), Some(MessageKind::Error));
    }
}
