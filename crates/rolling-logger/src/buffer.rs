//! Bounded line buffer. When full, the oldest line is dropped.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct LogBuffer {
    capacity: usize,
    lines: VecDeque<String>,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            lines: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_lines_in_order() {
        let mut buffer = LogBuffer::new(3);
        buffer.push("a".into());
        buffer.push("b".into());

        assert_eq!(buffer.snapshot(), vec!["a", "b"]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_drops_oldest_when_full() {
        let mut buffer = LogBuffer::new(2);
        buffer.push("a".into());
        buffer.push("b".into());
        buffer.push("c".into());

        assert_eq!(buffer.snapshot(), vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_still_keeps_last_line() {
        let mut buffer = LogBuffer::new(0);
        buffer.push("a".into());
        buffer.push("b".into());

        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.snapshot(), vec!["b"]);
    }
}
