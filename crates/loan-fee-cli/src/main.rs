mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::fee::FeeArgs;
use commands::schedule::{ScheduleArgs, SweepArgs};
use loan_fee_core::FeeError;

/// Loan fee quotes from the 12- and 24-month fee tables
#[derive(Parser)]
#[command(
    name = "lfee",
    version,
    about = "Loan fee quotes from the 12- and 24-month fee tables",
    long_about = "A CLI for quoting loan fees with decimal precision. Fees between \
                  table amounts are interpolated and snapped so that amount plus fee \
                  is a multiple of 5."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log calculation steps to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote the fee for a loan amount and term
    Fee(FeeArgs),
    /// List the fee table for a term
    Schedule(ScheduleArgs),
    /// Quote fees across a range of amounts
    Sweep(SweepArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Fee(args) => commands::fee::run_fee(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Sweep(args) => commands::schedule::run_sweep(args),
        Commands::Version => {
            println!("lfee {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            let internal = e
                .downcast_ref::<FeeError>()
                .is_some_and(FeeError::is_internal);
            if internal {
                eprintln!("{}: {}", "internal error".red().bold(), e);
                process::exit(2);
            }
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
