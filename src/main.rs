//! oil-exploration CLI entry point.

use clap::Parser;

use oil_exploration::cli::{handle_error, Cli, Commands};
use oil_exploration::infrastructure::logging::{LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();

    let logger = match init_logging(&cli) {
        Ok(logger) => logger,
        Err(err) => std::process::exit(handle_error(&err, cli.json)),
    };

    let result = match cli.command {
        Commands::Check(args) => oil_exploration::cli::commands::check::execute(args, cli.json),
        Commands::Show(args) => oil_exploration::cli::commands::show::execute(args, cli.json),
    };

    if let Err(err) = result {
        let code = handle_error(&err, cli.json);
        // flush the background log writer before exiting
        drop(logger);
        std::process::exit(code);
    }
}

fn init_logging(cli: &Cli) -> anyhow::Result<LoggerImpl> {
    // stdout carries command output unless the env or --verbose asks otherwise
    let base = LogConfig {
        enable_stdout: false,
        ..LogConfig::default()
    };
    let mut config = base.with_env_overrides()?;
    if let Some(level) = &cli.log_level {
        config.level.clone_from(level);
    }
    if cli.verbose {
        config.enable_stdout = true;
    }
    if cli.no_log_file {
        config.log_file = None;
    }
    LoggerImpl::init(&config)
}
