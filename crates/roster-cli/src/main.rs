//! Contact roster normalizer CLI.

use clap::{ColorChoice, Parser};
use roster_cli::commands::{failure_message, run_file};
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_cli::output::{print_json, print_summary, print_table};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, OutputFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_file(&cli.file_path, &cli.columns) {
        Ok(result) => {
            let printed = match cli.output {
                OutputFormatArg::Table => {
                    print_table(&result.outcome.table);
                    Ok(())
                }
                OutputFormatArg::Json => print_json(&result.outcome.table),
            };
            match printed {
                Ok(()) => {
                    print_summary(&result);
                    0
                }
                Err(error) => {
                    eprintln!("error: failed to write output: {error}");
                    1
                }
            }
        }
        Err(error) => {
            // Stderr logs would repeat the message.
            if cli.log_file.is_some() {
                tracing::error!("error processing file: {error:#}");
            }
            eprintln!("{}", failure_message(&error));
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
