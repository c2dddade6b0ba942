//! Application state that lives outside the game engine.

/// Expression being typed, bounded to a character limit.
#[derive(Clone, Debug)]
pub struct InputBuffer {
    text: String,
    limit: usize,
}

impl InputBuffer {
    pub fn new(limit: usize) -> Self {
        Self {
            text: String::with_capacity(limit),
            limit,
        }
    }

    /// Appends `ch` unless the buffer is full. Returns whether it was added.
    pub fn insert(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= self.limit {
            return false;
        }
        self.text.push(ch);
        true
    }

    /// Removes the last character. Returns whether anything was removed.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Hands over the typed text and leaves the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Mutable UI state owned by the event loop.
#[derive(Clone, Debug)]
pub struct AppState {
    pub input: InputBuffer,
    /// Set once quit was requested; the final frame shows the goodbye line.
    pub quitting: bool,
}

impl AppState {
    pub fn new(input_char_limit: usize) -> Self {
        Self {
            input: InputBuffer::new(input_char_limit),
            quitting: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_respects_limit() {
        let mut buffer = InputBuffer::new(3);
        assert!(buffer.insert('1'));
        assert!(buffer.insert(' '));
        assert!(buffer.insert('+'));
        assert!(!buffer.insert(' '));
        assert_eq!(buffer.as_str(), "1 +");
    }

    #[test]
    fn take_empties_the_buffer() {
        let mut buffer = InputBuffer::new(8);
        for ch in "4 + 2".chars() {
            buffer.insert(ch);
        }
        assert_eq!(buffer.take(), "4 + 2");
        assert!(buffer.is_empty());
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut buffer = InputBuffer::new(8);
        assert!(!buffer.backspace());
        buffer.insert('5');
        assert!(buffer.backspace());
        assert!(buffer.is_empty());
    }
}
