use std::{io::stdout, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use lib_edalign::complement::{complement, reverse_complement};
use log::{LevelFilter, info};

use crate::{
    fasta::{FastaRecord, parse_fasta_file, write_fasta, write_fasta_file},
    initialise_logging,
};

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The fasta file containing the sequences to complement.
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// The fasta file to write the complemented sequences to.
    ///
    /// If it is not given, the sequences are written to standard output.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// Also reverse the sequences, i.e. compute the reverse complement.
    #[clap(long)]
    reverse: bool,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    info!("Loading fasta file {:?}", cli.input);
    let records = parse_fasta_file(&cli.input)?;

    // Characters other than DNA bases are dropped.
    let complemented = records
        .into_iter()
        .map(|FastaRecord { header, sequence }| FastaRecord {
            header,
            sequence: if cli.reverse {
                reverse_complement(&sequence)
            } else {
                complement(&sequence)
            },
        })
        .collect::<Vec<_>>();
    info!("Complemented {} records", complemented.len());

    if let Some(output) = &cli.output {
        info!("Writing fasta file {output:?}");
        write_fasta_file(output, &complemented)
    } else {
        write_fasta(stdout().lock(), &complemented)
    }
}
