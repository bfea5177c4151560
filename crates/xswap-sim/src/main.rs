use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    map::{self, MapArgs},
    permute::{self, PermuteArgs},
    prior::{self, PriorArgs},
};

mod commands;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "xswap-sim", about = "Degree-preserving network permutation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Permute an integer edge list and report swap statistics.
    Permute(PermuteArgs),
    /// Estimate the XSwap prior of every node pair.
    Prior(PriorArgs),
    /// Relabel a string edge list with dense integer ids.
    Map(MapArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init_logging()?;
    match cli.command {
        Command::Permute(args) => permute::run(&args),
        Command::Prior(args) => prior::run(&args),
        Command::Map(args) => map::run(&args),
    }
}
