//! pixwatch CLI
//!
//! Full-screen stopwatch. `S` starts and stops, `R` resets while stopped,
//! `Q` quits.

use std::process::ExitCode;

use clap::Parser;

use pixwatch::config::Config;
use pixwatch::tui::run::run;

#[derive(Parser)]
#[command(name = "pixwatch")]
#[command(about = "Terminal stopwatch with large pixel-matrix digits")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    // The screen belongs to the clock; only problems reach stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    match run(&Config::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
