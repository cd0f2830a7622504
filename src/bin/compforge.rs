use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{bonds, classify};

#[derive(Parser, Debug)]
#[command(
    name = "compforge",
    about = "Builds bond-graph and monomer-classification datasets from the PDBx/mmCIF chemical components dictionary.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    /// Hide progress spinners and summary tables.
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the per-residue bond graph as MessagePack.
    Bonds(bonds::BondsArgs),
    /// Write nucleotide, carbohydrate, and amino-acid identifier lists as JSON.
    Classify(classify::ClassifyArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Bonds(args) => bonds::run(&args, cli.quiet)?,
        Command::Classify(args) => classify::run(&args, cli.quiet)?,
    }

    Ok(())
}
