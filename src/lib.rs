//! Numbra: a calculator whose input is validated keystroke by keystroke.
//!
//! The [`calculator`] module holds the core: the expression buffer that
//! decides how each key changes the display, and the evaluator that turns a
//! finished expression into a formatted result. The remaining modules make up
//! the terminal front end.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod shell;

#[cfg(test)]
mod proptests;
