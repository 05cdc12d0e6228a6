use clap::Parser;
use edalign::{align, complement};

#[derive(Parser)]
#[command(version, about)]
enum Cli {
    /// Compute the edit distance of two sequences and print an optimal alignment.
    Align(align::Cli),

    /// Replace each sequence in a fasta file by its nucleotide complement.
    Complement(complement::Cli),
}

fn main() -> anyhow::Result<()> {
    match Cli::parse() {
        Cli::Align(cli) => align::cli(cli),
        Cli::Complement(cli) => complement::cli(cli),
    }
}
