use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, anyhow, bail};
use log::debug;

const RECORD_START: char = '>';

/// A fasta record, i.e. a header line followed by a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// The header line without the leading `>`.
    pub header: String,
    pub sequence: String,
}

/// Reads a fasta file that contains exactly two records.
pub fn parse_pair_fasta_file(path: impl AsRef<Path>) -> Result<(FastaRecord, FastaRecord)> {
    let path = path.as_ref();
    let mut records = parse_fasta_file(path)?;
    if records.len() != 2 {
        bail!(
            "Expected paired fasta file with two records, but found {} records in {path:?}",
            records.len()
        );
    }

    let second = records.remove(1);
    let first = records.remove(0);
    Ok((first, second))
}

/// Reads a fasta file that contains exactly one record.
pub fn parse_single_fasta_file(path: impl AsRef<Path>) -> Result<FastaRecord> {
    let path = path.as_ref();
    let mut records = parse_fasta_file(path)?;
    if records.len() != 1 {
        bail!(
            "Expected single-record fasta file, but found {} records in {path:?}",
            records.len()
        );
    }

    Ok(records.remove(0))
}

pub fn parse_fasta_file(path: impl AsRef<Path>) -> Result<Vec<FastaRecord>> {
    let path = path.as_ref();
    debug!("Parsing fasta file {path:?}");

    let file = File::open(path)
        .map_err(|error| anyhow!("Unable to open input file {path:?}: {error}"))?;
    parse_fasta(BufReader::new(file))
        .with_context(|| format!("Unable to parse fasta file {path:?}"))
}

/// Parses fasta records line by line.
///
/// Lines starting with `>` start a new record.
/// All other non-empty lines are appended to the sequence of the current record.
pub fn parse_fasta(reader: impl BufRead) -> Result<Vec<FastaRecord>> {
    let mut records = Vec::<FastaRecord>::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line.context("Error reading line from fasta input")?;
        let line = line.trim_end();

        if let Some(header) = line.strip_prefix(RECORD_START) {
            records.push(FastaRecord {
                header: header.trim().to_string(),
                sequence: String::new(),
            });
        } else if !line.trim_start().is_empty() {
            let Some(record) = records.last_mut() else {
                bail!(
                    "Found sequence data before the first fasta record in line {}",
                    line_index + 1
                );
            };
            record.sequence.push_str(line.trim_start());
        }
    }

    debug!("Parsed {} fasta records", records.len());
    Ok(records)
}

/// Writes each record as a header line followed by a single sequence line.
pub fn write_fasta<'record>(
    mut writer: impl Write,
    records: impl IntoIterator<Item = &'record FastaRecord>,
) -> Result<()> {
    for record in records {
        writeln!(writer, "{RECORD_START}{}", record.header)?;
        writeln!(writer, "{}", record.sequence)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_fasta_file<'record>(
    path: impl AsRef<Path>,
    records: impl IntoIterator<Item = &'record FastaRecord>,
) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing fasta file {path:?}");

    let file = File::create(path)
        .map_err(|error| anyhow!("Unable to create output file {path:?}: {error}"))?;
    write_fasta(BufWriter::new(file), records)
}
