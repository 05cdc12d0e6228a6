use std::fs;

use anyhow::Result;
use lib_edalign::{alignment_result::AlignmentResult, costs::U64Cost};
use util::{repo_args, run, run_in_repo_root, temporary_file};

mod util;

fn align_to_result(args: &str, name: &str) -> Result<AlignmentResult<U64Cost>> {
    let output = temporary_file(name);
    let mut args = repo_args(args);
    args.push("-o".into());
    args.push(output.clone().into_os_string());

    run(args)?;
    let result = toml::from_str(&fs::read_to_string(&output)?)?;
    fs::remove_file(&output)?;
    Ok(result)
}

#[test]
fn test_align_pair_file() -> Result<()> {
    run_in_repo_root("align -p test_files/kitten_sitting.fa")
}

#[test]
fn test_align_pair_file_output() -> Result<()> {
    let result = align_to_result("align -p test_files/kitten_sitting.fa", "kitten.toml")?;
    assert_eq!(result.cost, U64Cost::from(3u64));
    assert_eq!(result.aligned_reference, "KITTEN-");
    assert_eq!(result.aligned_query, "SITTING");
    assert_eq!(result.cigar(), "1S3M1S1M1I");
    Ok(())
}

#[test]
fn test_align_separate_files() -> Result<()> {
    let result = align_to_result(
        "align -r test_files/gattaca.fa -q test_files/gattaca.fa",
        "gattaca.toml",
    )?;
    assert_eq!(result.cost, U64Cost::ZERO);
    assert_eq!(result.aligned_reference, "GATTACA");
    assert_eq!(result.aligned_query, "GATTACA");
    Ok(())
}

#[test]
fn test_align_empty_record() -> Result<()> {
    let result = align_to_result("align -p test_files/empty_abc.fa", "empty.toml")?;
    assert_eq!(result.cost, U64Cost::from(3u64));
    assert_eq!(result.aligned_reference, "---");
    assert_eq!(result.aligned_query, "ABC");
    Ok(())
}

#[test]
fn test_align_inline_sequences() -> Result<()> {
    let result = align_to_result(
        "align --reference-sequence AC --query-sequence CA --show-matrix",
        "inline.toml",
    )?;
    assert_eq!(result.cost, U64Cost::from(2u64));
    assert_eq!(result.cigar(), "2S");
    Ok(())
}

#[test]
fn test_align_skip_characters() -> Result<()> {
    let result = align_to_result(
        "align --reference-sequence A-C-G --query-sequence ACCG --skip-characters -",
        "skip.toml",
    )?;
    assert_eq!(result.cost, U64Cost::from(1u64));
    assert_eq!(result.aligned_reference, "A-CG");
    Ok(())
}

#[test]
fn test_align_cost_configuration() -> Result<()> {
    let result = align_to_result(
        "align -p test_files/acg_accg.fa -c sample_config/costs.toml",
        "configured.toml",
    )?;
    assert_eq!(result.cost, U64Cost::from(3u64));
    assert_eq!(result.aligned_reference, "A-CG");
    assert_eq!(result.aligned_query, "ACCG");
    Ok(())
}

#[test]
fn test_align_rejects_three_records() {
    let error = run_in_repo_root("align -p test_files/three_records.fa").unwrap_err();
    assert!(error.to_string().contains("found 3 records"), "{error}");
}

#[test]
fn test_align_rejects_missing_file() {
    assert!(run_in_repo_root("align -p test_files/does_not_exist.fa").is_err());
}

#[test]
fn test_align_requires_input() {
    assert!(run_in_repo_root("align").is_err());
}

#[test]
fn test_complement() -> Result<()> {
    let output = temporary_file("complement.fa");
    run_in_repo_root(&format!(
        "complement -i test_files/dna.fa -o {}",
        output.display()
    ))?;
    let complemented = fs::read_to_string(&output)?;
    fs::remove_file(&output)?;

    assert_eq!(complemented, ">first sequence\nTGCAACGT\n>second\nTTGGCCAA\n");
    Ok(())
}

#[test]
fn test_reverse_complement() -> Result<()> {
    let output = temporary_file("reverse_complement.fa");
    run_in_repo_root(&format!(
        "complement --reverse -i test_files/dna.fa -o {}",
        output.display()
    ))?;
    let complemented = fs::read_to_string(&output)?;
    fs::remove_file(&output)?;

    assert_eq!(complemented, ">first sequence\nTGCAACGT\n>second\nAACCGGTT\n");
    Ok(())
}
