use std::process::ExitCode;

use clap::Parser;

mod cli;
mod config;
mod error;
mod library;
mod logging;
mod runtime;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match runtime::run(&cli) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("albumdex: {e}");
            ExitCode::FAILURE
        }
    }
}
