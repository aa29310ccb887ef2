//! Expression evaluation and result formatting.
//!
//! Parses the text produced by the expression buffer with a small
//! recursive-descent parser over the grammar
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := number | '(' expr ')'
//! number := digit+ ('.' digit*)?
//! ```
//!
//! There is no unary minus. All arithmetic is done in `f64`.

use thiserror::Error;

/// Number of decimal places kept when a result is not an integer.
pub const DEFAULT_DECIMAL_PLACES: u32 = 3;

/// Deepest parenthesis nesting the parser will descend into.
pub const MAX_NESTING: usize = 256;

/// Why an expression could not be evaluated.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("malformed expression")]
    Syntax,
    #[error("division by zero")]
    DivideByZero,
    #[error("result is not a finite number")]
    NonFinite,
}

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    Success {
        /// The evaluated expression.
        expression: String,
        value: f64,
        /// Rounded and rendered for the display.
        display_result: String,
    },
    Error {
        expression: String,
        error: EvalError,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The rendered result, if evaluation succeeded.
    pub fn display(&self) -> Option<&str> {
        match self {
            Self::Success { display_result, .. } => Some(display_result),
            Self::Error { .. } => None,
        }
    }

    /// Get the error, if evaluation failed.
    pub fn error(&self) -> Option<EvalError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(*error),
        }
    }
}

/// Evaluate an expression and render the result for display.
pub fn evaluate_expression(input: &str, decimal_places: u32) -> CalcResult {
    let expression = input.trim().to_string();

    match calculate(&expression) {
        Ok(value) => {
            tracing::debug!(%expression, value, "evaluated expression");
            CalcResult::Success {
                display_result: format_result(value, decimal_places),
                expression,
                value,
            }
        }
        Err(error) => {
            tracing::debug!(%expression, %error, "evaluation failed");
            CalcResult::Error { expression, error }
        }
    }
}

/// Evaluate an expression to its numeric value.
pub fn calculate(expression: &str) -> Result<f64, EvalError> {
    let mut parser = Parser::new(expression);
    if parser.peek().is_none() {
        return Err(EvalError::Empty);
    }

    let value = parser.expr()?;
    if parser.peek().is_some() {
        return Err(EvalError::Syntax);
    }
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

/// Render a value for the display.
///
/// Integers have no fractional part. Anything else is rounded to
/// `decimal_places` and printed in its shortest form, so `1/3` shows as
/// `0.333` and `5/2` as `2.5`.
pub fn format_result(value: f64, decimal_places: u32) -> String {
    let value = if value.fract() == 0.0 {
        value
    } else {
        let scale = 10f64.powi(decimal_places as i32);
        (value * scale).round() / scale
    };

    // Avoid showing "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    /// Currently open parentheses.
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
            depth: 0,
        }
    }

    /// Next significant byte, skipping ASCII whitespace.
    fn peek(&mut self) -> Option<u8> {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
        self.bytes.get(self.pos).copied()
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.term()?;
        while let Some(op @ (b'+' | b'-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            acc = if op == b'+' { acc + rhs } else { acc - rhs };
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.factor()?;
        while let Some(op @ (b'*' | b'/')) = self.peek() {
            self.pos += 1;
            let rhs = self.factor()?;
            acc = if op == b'*' {
                acc * rhs
            } else if rhs == 0.0 {
                return Err(EvalError::DivideByZero);
            } else {
                acc / rhs
            };
        }
        Ok(acc)
    }

    fn factor(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            Some(b'(') => {
                if self.depth >= MAX_NESTING {
                    return Err(EvalError::Syntax);
                }
                self.pos += 1;
                self.depth += 1;
                let value = self.expr()?;
                if self.peek() != Some(b')') {
                    return Err(EvalError::Syntax);
                }
                self.pos += 1;
                self.depth -= 1;
                Ok(value)
            }
            Some(b'0'..=b'9') => self.number(),
            _ => Err(EvalError::Syntax),
        }
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        let start = self.pos;
        self.skip_digits();
        if self.bytes.get(self.pos) == Some(&b'.') {
            self.pos += 1;
            self.skip_digits();
        }

        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()
            .and_then(|literal| literal.parse::<f64>().ok())
            .ok_or(EvalError::Syntax)
    }

    fn skip_digits(&mut self) {
        while self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
    }
}
