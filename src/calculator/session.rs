//! A calculator session: one expression buffer plus the equals sequence.

use super::buffer::ExpressionBuffer;
use super::evaluation::{CalcResult, DEFAULT_DECIMAL_PLACES, evaluate_expression};
use super::token::Action;

/// Routes shell actions to the expression buffer and evaluates on equals.
#[derive(Clone, Debug)]
pub struct Calculator {
    buffer: ExpressionBuffer,
    decimal_places: u32,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_decimal_places(DEFAULT_DECIMAL_PLACES)
    }

    pub fn with_decimal_places(decimal_places: u32) -> Self {
        Self {
            buffer: ExpressionBuffer::new(),
            decimal_places,
        }
    }

    /// The text the shell should render.
    pub fn display(&self) -> &str {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &ExpressionBuffer {
        &self.buffer
    }

    /// Apply one action. Returns the evaluation outcome for [`Action::Equals`].
    pub fn handle(&mut self, action: Action) -> Option<CalcResult> {
        match action {
            Action::Input(token) => {
                self.buffer.accept(token);
                None
            }
            Action::Backspace => {
                self.buffer.backspace();
                None
            }
            Action::Clear => {
                self.buffer.clear();
                None
            }
            Action::Equals => Some(self.equals()),
        }
    }

    /// Evaluate the current text and show the result or the error sentinel.
    pub fn equals(&mut self) -> CalcResult {
        let result = evaluate_expression(self.buffer.text(), self.decimal_places);
        match &result {
            CalcResult::Success { display_result, .. } => {
                self.buffer.on_evaluated(display_result.clone());
            }
            CalcResult::Error { .. } => self.buffer.on_failed(),
        }
        result
    }
}
