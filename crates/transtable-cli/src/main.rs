//! Translation table CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use transtable_cli::config::load_options;
use transtable_cli::logging::{LogConfig, init_logging};

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{run_compare, run_export, run_files, run_show};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = load_options(cli.config.as_deref()).and_then(|options| match &cli.command {
        Command::Files { dir } => run_files(dir).map(|()| 0),
        Command::Show(args) => run_show(args, options).map(|()| 0),
        Command::Compare { left, right } => {
            run_compare(left, right).map(|differ| if differ { 1 } else { 0 })
        }
        Command::Export(args) => run_export(args, options).map(|()| 0),
    });
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Logging settings from flags. An explicit level or -v/-q disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.map(LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter: explicit.unwrap_or_else(|| cli.verbosity.tracing_level_filter()),
        use_env_filter: explicit.is_none() && !cli.verbosity.is_present(),
        with_ansi,
        ..LogConfig::default()
    }
    .with_format(cli.log_format.into())
    .with_log_file(cli.log_file.clone())
    .with_log_data(cli.log_data)
}
