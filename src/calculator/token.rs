//! Input tokens and shell actions.
//!
//! Every key the user presses is classified into one [`Action`]. Actions that
//! edit the expression carry a [`Token`], which is what the
//! [`ExpressionBuffer`](super::ExpressionBuffer) validates.

use std::fmt;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// The character this operator is written as.
    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Check whether a character of expression text is an operator.
    pub fn is_operator_char(c: char) -> bool {
        Self::from_char(c).is_some()
    }
}

/// A single character-level token accepted by the expression buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// A decimal digit, always in `0..=9`.
    Digit(u8),
    Operator(Operator),
    Dot,
    OpenParen,
    CloseParen,
}

impl Token {
    /// Classify a typed character. Returns `None` for characters outside the
    /// expression alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '.' => Some(Self::Dot),
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => char::from(b'0' + d),
            Self::Operator(op) => op.as_char(),
            Self::Dot => '.',
            Self::OpenParen => '(',
            Self::CloseParen => ')',
        }
    }

    /// Tokens that may start a fresh expression after an error or a result.
    pub fn starts_expression(self) -> bool {
        matches!(self, Self::Digit(_) | Self::Dot | Self::OpenParen)
    }
}

impl TryFrom<char> for Token {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One user action forwarded by the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Insert a token into the expression.
    Input(Token),
    Backspace,
    Clear,
    Equals,
}

impl From<Token> for Action {
    fn from(token: Token) -> Self {
        Self::Input(token)
    }
}
