use anyhow::Result;
use clap::{Parser, Subcommand};
use seedex::{generate, search};

#[derive(Parser)]
#[command(name = "seedex")]
#[command(version = "0.1.0")]
#[command(about = "Seed-and-extend ungapped local alignment search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a target database for ungapped local alignments to a query
    Search(search::SearchArgs),

    /// Generate random nucleotide sequences as FASTA
    Generate(generate::GenerateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => {
            search::run(args)?;
        }
        Commands::Generate(args) => {
            generate::run(args)?;
        }
    }
    Ok(())
}
