//! Calculator core.
//!
//! This module provides functionality to:
//! - Validate an expression keystroke by keystroke
//! - Evaluate finished expressions and format their results
//! - Map keys to calculator actions
//! - Copy results to the clipboard

mod buffer;
mod clipboard;
mod evaluation;
mod keys;
mod session;
mod token;

pub use buffer::{ERROR_SENTINEL, ExpressionBuffer, current_number_token, number_token_start};
pub use clipboard::copy_to_clipboard;
pub use evaluation::{
    CalcResult, DEFAULT_DECIMAL_PLACES, EvalError, calculate, evaluate_expression, format_result,
};
pub use keys::{KeyError, action_for_char, action_for_key, parse_keys};
pub use session::Calculator;
pub use token::{Action, Operator, Token};
