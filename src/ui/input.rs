//! Token reader: turns keystrokes into one command.
//!
//! A command is a single word ended by a space or Enter, or a quoted
//! string in which spaces are kept. The reader only tracks the buffer and
//! tells the caller what to echo; it never touches the terminal.

/// A keystroke, already decoded from the terminal's event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    /// Ctrl-C
    Interrupt,
    /// Ctrl-D or closed input
    Eof,
}

/// What the terminal should show after a keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Echo {
    Nothing,
    Print(char),
    /// Remove the last printed character
    Erase,
}

/// Outcome of feeding one keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feed {
    Pending(Echo),
    Done(String),
    Cancelled,
}

/// Incremental reader for one token at a time.
///
/// # Example
///
/// ```rust
/// use assist::ui::input::{Feed, Key, TokenReader};
///
/// let mut reader = TokenReader::new();
/// for c in "\"two words".chars() {
///     reader.feed(Key::Char(c));
/// }
/// assert_eq!(reader.feed(Key::Char('"')), Feed::Done("two words".to_string()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TokenReader {
    buffer: String,
    /// Buffer length when the opening quote was typed
    quote_at: Option<usize>,
}

impl TokenReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text typed so far, without the opening quote.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_quoted(&self) -> bool {
        self.quote_at.is_some()
    }

    pub fn feed(&mut self, key: Key) -> Feed {
        match key {
            Key::Interrupt | Key::Eof => {
                self.reset();
                Feed::Cancelled
            }
            Key::Enter => self.finish(),
            Key::Char('"') if self.is_quoted() => self.finish(),
            Key::Char('"') => {
                self.quote_at = Some(self.buffer.len());
                Feed::Pending(Echo::Print('"'))
            }
            Key::Char(' ') if !self.is_quoted() => self.finish(),
            Key::Backspace => self.erase(),
            Key::Char(c) => {
                self.buffer.push(c);
                Feed::Pending(Echo::Print(c))
            }
        }
    }

    /// Remove the last echoed character: the opening quote when nothing
    /// was typed after it, else the last buffered character.
    fn erase(&mut self) -> Feed {
        if self.quote_at == Some(self.buffer.len()) {
            self.quote_at = None;
            return Feed::Pending(Echo::Erase);
        }
        match self.buffer.pop() {
            Some(_) => Feed::Pending(Echo::Erase),
            None => Feed::Pending(Echo::Nothing),
        }
    }

    fn finish(&mut self) -> Feed {
        let token = std::mem::take(&mut self.buffer);
        self.quote_at = None;
        Feed::Done(token)
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.quote_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_all(reader: &mut TokenReader, keys: &str) -> Vec<Feed> {
        keys.chars().map(|c| reader.feed(Key::Char(c))).collect()
    }

    #[test]
    fn space_ends_a_word() {
        let mut reader = TokenReader::new();
        let feeds = type_all(&mut reader, "push ");

        assert_eq!(feeds.last(), Some(&Feed::Done("push".to_string())));
        assert_eq!(reader.buffer(), "");
    }

    #[test]
    fn enter_ends_a_word() {
        let mut reader = TokenReader::new();
        type_all(&mut reader, "pop");

        assert_eq!(reader.feed(Key::Enter), Feed::Done("pop".to_string()));
    }

    #[test]
    fn immediate_space_is_an_empty_token() {
        let mut reader = TokenReader::new();
        assert_eq!(reader.feed(Key::Char(' ')), Feed::Done(String::new()));
    }

    #[test]
    fn quotes_keep_spaces() {
        let mut reader = TokenReader::new();
        let feeds = type_all(&mut reader, "\"hello big world\"");

        assert_eq!(feeds[0], Feed::Pending(Echo::Print('"')));
        assert_eq!(
            feeds.last(),
            Some(&Feed::Done("hello big world".to_string()))
        );
        assert!(!reader.is_quoted());
    }

    #[test]
    fn enter_closes_an_open_quote() {
        let mut reader = TokenReader::new();
        type_all(&mut reader, "\"a b");

        assert_eq!(reader.feed(Key::Enter), Feed::Done("a b".to_string()));
    }

    #[test]
    fn backspace_is_destructive() {
        let mut reader = TokenReader::new();
        type_all(&mut reader, "pusx");

        assert_eq!(reader.feed(Key::Backspace), Feed::Pending(Echo::Erase));
        type_all(&mut reader, "h");
        assert_eq!(reader.feed(Key::Enter), Feed::Done("push".to_string()));
    }

    #[test]
    fn backspace_after_quote_erases_the_quote() {
        let mut reader = TokenReader::new();
        type_all(&mut reader, "ab\"");

        assert_eq!(reader.feed(Key::Backspace), Feed::Pending(Echo::Erase));
        assert!(!reader.is_quoted());
        assert_eq!(reader.buffer(), "ab");

        assert_eq!(reader.feed(Key::Backspace), Feed::Pending(Echo::Erase));
        assert_eq!(reader.buffer(), "a");
    }

    #[test]
    fn backspace_inside_quote_keeps_quote_mode() {
        let mut reader = TokenReader::new();
        type_all(&mut reader, "\"ab");

        assert_eq!(reader.feed(Key::Backspace), Feed::Pending(Echo::Erase));
        assert!(reader.is_quoted());
        assert_eq!(reader.buffer(), "a");

        reader.feed(Key::Backspace);
        assert_eq!(reader.feed(Key::Backspace), Feed::Pending(Echo::Erase));
        assert!(!reader.is_quoted());
        assert_eq!(reader.feed(Key::Backspace), Feed::Pending(Echo::Nothing));
        assert_eq!(reader.feed(Key::Char(' ')), Feed::Done(String::new()));
    }

    #[test]
    fn backspace_on_empty_buffer_does_nothing() {
        let mut reader = TokenReader::new();
        assert_eq!(reader.feed(Key::Backspace), Feed::Pending(Echo::Nothing));
    }

    #[test]
    fn interrupt_cancels_and_resets() {
        let mut reader = TokenReader::new();
        type_all(&mut reader, "\"half");

        assert_eq!(reader.feed(Key::Interrupt), Feed::Cancelled);
        assert_eq!(reader.buffer(), "");
        assert!(!reader.is_quoted());
        assert_eq!(reader.feed(Key::Eof), Feed::Cancelled);
    }
}
