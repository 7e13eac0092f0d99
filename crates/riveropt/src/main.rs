// Author: Dustin Pilgrim
// License: MIT

mod cli;
mod config;
mod logging;
mod paths;
mod run;

use clap::Parser;

use cli::Args;

fn main() {
    let args = Args::parse_from(cli::normalize_args(std::env::args_os()));

    let cfg = config::load().unwrap_or_else(|e| {
        // a broken config should not stop the command
        eprintln!("riveropt: {e}");
        config::RiveroptConfig::default()
    });

    let log_path = args
        .log_file
        .clone()
        .or_else(|| cfg.log_file.clone())
        .unwrap_or_else(|| paths::default_log_path("riveropt.log"));
    let debug = args.verbose || cfg.log_level == Some(config::LogLevelSetting::Debug);

    if let Err(e) = logging::init_logging(&log_path, args.verbose, debug) {
        // logging should never block normal usage
        eprintln!("riveropt: failed to init logging: {e}");
    }

    if let Err(e) = run::run(args) {
        // user-facing error
        eprintln!("riveropt: {e}");
        std::process::exit(1);
    }
}
