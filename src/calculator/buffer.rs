//! Keystroke-level validation of the expression being typed.
//!
//! The buffer only ever holds the empty text, the error sentinel, or an
//! expression prefix with no more `)` than `(` and no two operators in a row.
//! Every edit that would break that is dropped silently.

use super::token::{Operator, Token};

/// Display text shown after a failed evaluation.
pub const ERROR_SENTINEL: &str = "Error";

/// The expression text and its mode flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
    /// Set right after a successful evaluation until the next edit.
    just_evaluated: bool,
}

impl ExpressionBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the display is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the buffer shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.text == ERROR_SENTINEL
    }

    /// Check if the text is a result that operators continue from.
    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// Offer one token to the buffer.
    ///
    /// Returns `true` if the text changed. A rejected token leaves the buffer
    /// untouched, flags included.
    pub fn accept(&mut self, token: Token) -> bool {
        let accepted = if self.is_error() {
            self.accept_after_error(token)
        } else if self.just_evaluated {
            self.accept_after_result(token)
        } else {
            self.accept_editing(token)
        };

        if accepted {
            self.just_evaluated = false;
            tracing::trace!(%token, text = %self.text, "token accepted");
        } else {
            tracing::trace!(%token, text = %self.text, "token rejected");
        }
        accepted
    }

    /// Remove the last character. The error sentinel is cleared as a whole.
    pub fn backspace(&mut self) {
        if self.is_error() {
            self.text.clear();
        } else {
            self.text.pop();
        }
        self.just_evaluated = false;
    }

    /// Empty the display and reset both modes.
    pub fn clear(&mut self) {
        self.text.clear();
        self.just_evaluated = false;
    }

    /// Replace the text with a rendered result that later operators continue
    /// from.
    pub fn on_evaluated(&mut self, display_text: impl Into<String>) {
        self.text = display_text.into();
        self.just_evaluated = true;
    }

    /// Show the error sentinel.
    pub fn on_failed(&mut self) {
        self.text = ERROR_SENTINEL.to_string();
        self.just_evaluated = false;
    }

    fn accept_after_error(&mut self, token: Token) -> bool {
        if !token.starts_expression() {
            return false;
        }
        self.start_fresh(token);
        true
    }

    fn accept_after_result(&mut self, token: Token) -> bool {
        match token {
            Token::Operator(op) => {
                self.text.push(op.as_char());
                true
            }
            // A fresh `)` could never be balanced.
            Token::CloseParen => false,
            _ => {
                self.start_fresh(token);
                true
            }
        }
    }

    fn accept_editing(&mut self, token: Token) -> bool {
        let last = self.text.chars().last();

        match token {
            Token::Operator(op) => match last {
                None => false,
                Some(c) if Operator::is_operator_char(c) || c == '.' => false,
                Some(_) => {
                    self.text.push(op.as_char());
                    true
                }
            },
            Token::CloseParen => match last {
                None => false,
                Some(c) if Operator::is_operator_char(c) || c == '(' => false,
                Some(_) if paren_depth(&self.text) <= 0 => false,
                Some(_) => {
                    self.text.push(')');
                    true
                }
            },
            Token::OpenParen => {
                if last.is_some_and(ends_value) {
                    self.text.push('*');
                }
                self.text.push('(');
                true
            }
            Token::Dot => match last {
                None => {
                    self.text.push_str("0.");
                    true
                }
                Some(c) if !c.is_ascii_digit() => false,
                Some(_) if current_number_token(&self.text).contains('.') => false,
                Some(_) => {
                    self.text.push('.');
                    true
                }
            },
            Token::Digit(d) => {
                self.push_digit(d);
                true
            }
        }
    }

    fn start_fresh(&mut self, token: Token) {
        self.text.clear();
        match token {
            Token::Dot => self.text.push_str("0."),
            _ => self.text.push(token.as_char()),
        }
    }

    /// Append a digit, collapsing leading zeros of an integer literal.
    fn push_digit(&mut self, digit: u8) {
        let start = number_token_start(&self.text);
        let mut literal = self.text[start..].to_string();
        literal.push(char::from(b'0' + digit));

        if !literal.contains('.') {
            let trimmed = literal.trim_start_matches('0');
            literal = if trimmed.is_empty() {
                "0".to_string()
            } else {
                trimmed.to_string()
            };
        }

        self.text.truncate(start);
        self.text.push_str(&literal);
    }
}

/// Byte index where the trailing run of digits and dots begins.
///
/// Returns `text.len()` when the text does not end in a number.
pub fn number_token_start(text: &str) -> usize {
    text.char_indices()
        .rev()
        .take_while(|&(_, c)| c.is_ascii_digit() || c == '.')
        .last()
        .map_or(text.len(), |(i, _)| i)
}

/// The unfinished numeric literal at the end of `text`.
pub fn current_number_token(text: &str) -> &str {
    &text[number_token_start(text)..]
}

/// Open parentheses minus closed ones.
fn paren_depth(text: &str) -> isize {
    text.chars().fold(0, |depth, c| match c {
        '(' => depth + 1,
        ')' => depth - 1,
        _ => depth,
    })
}

/// Characters after which a `(` needs an explicit `*`.
fn ends_value(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ')'
}
