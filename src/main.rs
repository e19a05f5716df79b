use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use lab_inventory::cli::Cli;
use lab_inventory::config::LOG_CONFIG_FILE;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;
use std::process::ExitCode;

/// log4rs from `log4rs.yml` when present, warnings to stderr otherwise.
fn init_logging() {
    if Path::new(LOG_CONFIG_FILE).exists() {
        match log4rs::init_file(LOG_CONFIG_FILE, Default::default()) {
            Ok(()) => return,
            Err(e) => eprintln!("Error initializing log4rs from {LOG_CONFIG_FILE}: {e}"),
        }
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l:5})} {M} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Error initializing logging: {e}");
            }
        }
        Err(e) => eprintln!("Error building log config: {e}"),
    }
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    dotenv::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            if let Err(print_err) = e.print() {
                log::error!("failed to print usage: {print_err}");
                eprintln!("{e}");
            }
            return ExitCode::FAILURE;
        }
    };

    match lab_inventory::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("run failed: {e}");
            eprintln!("{} {e}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}
