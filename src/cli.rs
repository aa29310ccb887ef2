//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "numbra",
    version,
    about = "A keystroke-validated arithmetic calculator",
    long_about = "A calculator that validates every keystroke so only well-formed \
                  arithmetic expressions can be typed.\n\n\
                  Key sequences mix characters (0-9 . + - * / ( ) = C) with \
                  bracketed key names: <bs>, <esc>, <enter>."
)]
pub struct Cli {
    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a complete expression.
    Eval {
        /// The expression; multiple arguments are joined with spaces.
        #[arg(required = true, value_name = "EXPR")]
        expression: Vec<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Replay a key sequence and print the resulting display.
    Keys {
        #[arg(value_name = "SEQUENCE")]
        sequence: String,

        /// Print the display after every key.
        #[arg(long)]
        trace: bool,
    },

    /// Read key sequences from stdin, one per line.
    Interactive,
}
