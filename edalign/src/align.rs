use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser};
use lib_edalign::{
    alignment_configuration::AlignmentConfiguration, alignment_matrix::AlignmentMatrix,
    alignment_result::AlignmentResult, costs::U64Cost,
};
use log::{LevelFilter, debug, info};

use crate::{
    fasta::{FastaRecord, parse_pair_fasta_file, parse_single_fasta_file},
    initialise_logging,
};

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    #[command(flatten)]
    input: CliInput,

    /// The file to store the alignment result in toml format.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// A toml file containing the alignment costs.
    ///
    /// It must define `match_cost`, `substitution_cost` and `gap_cost`.
    /// If it is not given, matches are free and substitutions and gaps cost one.
    #[clap(long, short = 'c')]
    configuration: Option<PathBuf>,

    /// A string of characters that should be skipped in the input sequences.
    ///
    /// For example, `-` characters of an existing alignment can be skipped this way.
    #[clap(long, default_value = "")]
    skip_characters: String,

    /// Print the cost and predecessor matrices.
    #[clap(long)]
    show_matrix: bool,
}

#[derive(Args)]
struct CliInput {
    #[clap(flatten)]
    separate_input: Option<CliSeparateInput>,

    #[clap(flatten)]
    pair_input: Option<CliPairInput>,

    #[clap(flatten)]
    inline_input: Option<CliInlineInput>,
}

#[derive(Args)]
#[group(multiple = true)]
struct CliSeparateInput {
    /// The path to the reference fasta file.
    #[clap(long, short = 'r', required = false, requires = "query")]
    reference: PathBuf,

    /// The path to the query fasta file.
    #[clap(long, short = 'q', required = false, requires = "reference")]
    query: PathBuf,
}

#[derive(Args)]
struct CliPairInput {
    /// The path to a fasta file containing both the reference and the query.
    #[clap(long, short = 'p', required = false, conflicts_with_all = ["reference", "query"])]
    pair_fasta: PathBuf,
}

#[derive(Args)]
#[group(multiple = true)]
struct CliInlineInput {
    /// The reference sequence, given directly on the command line.
    #[clap(
        long,
        required = false,
        requires = "query_sequence",
        conflicts_with_all = ["reference", "query", "pair_fasta"],
    )]
    reference_sequence: String,

    /// The query sequence, given directly on the command line.
    #[clap(
        long,
        required = false,
        requires = "reference_sequence",
        conflicts_with_all = ["reference", "query", "pair_fasta"],
    )]
    query_sequence: String,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    // Load input sequences.
    let (reference_record, query_record) = load_input(&cli.input)?;
    let configuration = load_configuration(cli.configuration.as_deref())?;
    debug!("Using {configuration:?}");

    // Remove skip characters.
    let skip_characters = cli.skip_characters.chars().collect::<Vec<_>>();
    let reference = reference_record
        .sequence
        .chars()
        .filter(|c| !skip_characters.contains(c))
        .collect::<Vec<_>>();
    let query = query_record
        .sequence
        .chars()
        .filter(|c| !skip_characters.contains(c))
        .collect::<Vec<_>>();

    info!(
        "Aligning reference '{}' of length {} against query '{}' of length {}",
        reference_record.header,
        reference.len(),
        query_record.header,
        query.len()
    );
    let alignment_matrix = AlignmentMatrix::align(&configuration, &reference, &query);
    if cli.show_matrix {
        println!("{alignment_matrix}");
    }

    let aligned_pair = alignment_matrix.traceback(&reference, &query)?;
    let result = AlignmentResult::new(alignment_matrix.cost(), &aligned_pair);

    if let Some(output) = &cli.output {
        info!("Writing alignment result to {output:?}");
        let mut output = BufWriter::new(
            File::create(output)
                .map_err(|error| anyhow!("Unable to create output file {output:?}: {error}"))?,
        );
        write!(output, "{}", toml::to_string(&result)?)?;
        output.flush()?;
    }

    println!("{result}");
    Ok(())
}

fn load_input(input: &CliInput) -> Result<(FastaRecord, FastaRecord)> {
    if let Some(CliPairInput { pair_fasta }) = &input.pair_input {
        info!("Loading pair file {pair_fasta:?}");
        parse_pair_fasta_file(pair_fasta)
    } else if let Some(CliSeparateInput { reference, query }) = &input.separate_input {
        info!("Loading reference file {reference:?}");
        let reference = parse_single_fasta_file(reference)?;

        info!("Loading query file {query:?}");
        let query = parse_single_fasta_file(query)?;

        Ok((reference, query))
    } else if let Some(CliInlineInput {
        reference_sequence,
        query_sequence,
    }) = &input.inline_input
    {
        Ok((
            FastaRecord {
                header: "reference".to_string(),
                sequence: reference_sequence.clone(),
            },
            FastaRecord {
                header: "query".to_string(),
                sequence: query_sequence.clone(),
            },
        ))
    } else {
        Err(anyhow!("No input sequences given"))
    }
}

fn load_configuration(path: Option<&Path>) -> Result<AlignmentConfiguration<U64Cost>> {
    let Some(path) = path else {
        return Ok(AlignmentConfiguration::default());
    };

    info!("Loading cost configuration {path:?}");
    let configuration = std::fs::read_to_string(path)
        .map_err(|error| anyhow!("Unable to open configuration file {path:?}: {error}"))?;
    toml::from_str(&configuration)
        .with_context(|| format!("Unable to parse configuration file {path:?}"))
}
