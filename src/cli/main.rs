//! Command-line interface entry point for `gradecalc`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gradecalc::config::Config;
use gradecalc::info;
use gradecalc::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let outcome = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults)
        }
        Command::Sgpa {
            input_file,
            subjects,
            export,
        } => commands::sgpa::run(input_file.as_deref(), &subjects, &export, &config),
        Command::Cgpa {
            input_file,
            semesters,
            export,
        } => commands::cgpa::run(input_file.as_deref(), &semesters, &export, &config),
        Command::Predict {
            current,
            earned,
            target,
            next,
        } => commands::predict::run(current, earned, target, next),
        Command::Grades => {
            commands::grades::run();
            Ok(())
        }
    };

    if let Err(message) = outcome {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
