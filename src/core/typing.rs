use super::constants::{TYPING_CHAR_INTERVAL_MS, TYPING_START_DELAY_MS};

/// Reveals a captured string one character at a time.
///
/// Works on `char`s rather than bytes so multi-byte text never splits.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: String,
    index: usize,
}

/// Result of one [`Typewriter::advance`]: the text to display and, unless
/// this was the last character, how long to wait before the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingStep<'a> {
    pub text: &'a str,
    pub next_delay_ms: Option<i32>,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: String::with_capacity(text.len()),
            index: 0,
        }
    }

    /// Delay before the first character, or `None` for empty text.
    pub fn start_delay_ms(&self) -> Option<i32> {
        (!self.chars.is_empty()).then(|| char_due_ms(0))
    }

    /// Append the next character. Returns `None` once everything is shown.
    pub fn advance(&mut self) -> Option<TypingStep<'_>> {
        let c = *self.chars.get(self.index)?;
        self.shown.push(c);
        self.index += 1;
        let next_delay_ms = (self.index < self.chars.len())
            .then(|| char_due_ms(self.index) - char_due_ms(self.index - 1));
        Some(TypingStep {
            text: &self.shown,
            next_delay_ms,
        })
    }

    pub fn remaining(&self) -> usize {
        self.chars.len() - self.index
    }
}

/// Milliseconds after the document is parsed at which character `index`
/// (0-based) becomes visible.
#[inline]
pub fn char_due_ms(index: usize) -> i32 {
    TYPING_START_DELAY_MS + TYPING_CHAR_INTERVAL_MS * index as i32
}
