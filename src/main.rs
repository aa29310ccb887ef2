use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

use numbra::cli::{Cli, Command};
use numbra::config::load_config;
use numbra::logging::{init_logging, level_from_verbosity};
use numbra::shell::{Shell, run_eval};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(level_from_verbosity(cli.verbose));

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    let mut stdout = io::stdout().lock();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Eval { expression, format } => {
            run_eval(&expression.join(" "), &config, format, &mut stdout)
        }
        Command::Keys { sequence, trace } => {
            Shell::new(&config).run_keys(&sequence, trace, &mut stdout)?;
            Ok(true)
        }
        Command::Interactive => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            Shell::new(&config).run_interactive(stdin.lock(), &mut stdout, prompt)?;
            Ok(true)
        }
    }
}
