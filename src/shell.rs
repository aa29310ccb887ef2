//! The terminal front end: forwards actions to a [`Calculator`] and prints
//! its display.

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::calculator::{Action, CalcResult, Calculator, copy_to_clipboard, parse_keys};
use crate::config::Config;
use crate::output::{EvalReport, OutputFormat};

const QUIT_COMMANDS: &[&str] = &[":q", ":quit", ":exit"];
const COPY_COMMAND: &str = ":y";

/// A calculator session plus the settings the front end needs.
pub struct Shell {
    calculator: Calculator,
    copy_results: bool,
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        Self {
            calculator: Calculator::with_decimal_places(config.decimal_places),
            copy_results: config.copy_results,
        }
    }

    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Apply one action, copying successful results when configured.
    pub fn apply(&mut self, action: Action) {
        let Some(result) = self.calculator.handle(action) else {
            return;
        };

        if let CalcResult::Success { display_result, .. } = &result
            && self.copy_results
            && let Err(e) = copy_to_clipboard(display_result)
        {
            tracing::warn!("{e:#}");
        }
    }

    /// Replay a key sequence, writing the display after every key if `trace`
    /// is set and once at the end otherwise.
    pub fn run_keys(
        &mut self,
        sequence: &str,
        trace: bool,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let actions = parse_keys(sequence)?;
        for action in actions {
            self.apply(action);
            if trace {
                writeln!(out, "{:?} -> {}", action, self.display())?;
            }
        }
        if !trace {
            writeln!(out, "{}", self.display())?;
        }
        Ok(())
    }

    /// Read key sequences line by line until EOF or a quit command.
    pub fn run_interactive(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        prompt: bool,
    ) -> anyhow::Result<()> {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let line = line.trim();

            if QUIT_COMMANDS.contains(&line) {
                break;
            }

            if line == COPY_COMMAND {
                if let Err(e) = copy_to_clipboard(self.display()) {
                    eprintln!("error: {e:#}");
                }
            } else {
                match parse_keys(line) {
                    Ok(actions) => actions.into_iter().for_each(|action| self.apply(action)),
                    Err(e) => eprintln!("error: {e}"),
                }
            }

            writeln!(out, "{}", self.display())?;
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
        }
        Ok(())
    }
}

/// Evaluate a whole expression and write it in the requested format.
///
/// Returns whether the evaluation succeeded.
pub fn run_eval(
    expression: &str,
    config: &Config,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let result = crate::calculator::evaluate_expression(expression, config.decimal_places);
    let report = EvalReport::from_calc_result(&result);
    writeln!(out, "{}", report.render(format)?)?;

    if let Some(display) = result.display()
        && config.copy_results
        && let Err(e) = copy_to_clipboard(display)
    {
        tracing::warn!("{e:#}");
    }
    Ok(!report.is_error())
}
