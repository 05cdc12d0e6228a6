use crate::{
    alignment_configuration::AlignmentConfiguration, alignment_matrix::AlignmentMatrix,
    alignment_result::AlignedPair, costs::U64Cost, edit_distance_align,
};

const SEQUENCES: &[&str] = &[
    "",
    "A",
    "AC",
    "CA",
    "ABC",
    "KITTEN",
    "SITTING",
    "GATTACA",
    "GCATGCT",
    "ACGTACGTTTGA",
    "TTTTTTTT",
    "ACCCGTAGGA",
];

fn chars(sequence: &str) -> Vec<char> {
    sequence.chars().collect()
}

fn distance(reference: &str, query: &str) -> u64 {
    AlignmentMatrix::<U64Cost>::align(
        &AlignmentConfiguration::default(),
        &chars(reference),
        &chars(query),
    )
    .cost()
    .as_u64()
}

fn align_pair(reference: &str, query: &str) -> (u64, AlignedPair<char>) {
    let reference = chars(reference);
    let query = chars(query);
    let matrix =
        AlignmentMatrix::<U64Cost>::align(&AlignmentConfiguration::default(), &reference, &query);
    let aligned_pair = matrix.traceback(&reference, &query).unwrap();
    (matrix.cost().as_u64(), aligned_pair)
}

#[test]
fn test_kitten_sitting() {
    let result = edit_distance_align(&chars("KITTEN"), &chars("SITTING")).unwrap();
    assert_eq!(result.cost, U64Cost::from(3u64));
    assert_eq!(result.aligned_reference, "KITTEN-");
    assert_eq!(result.aligned_query, "SITTING");
    assert_eq!(result.cigar(), "1S3M1S1M1I");
    assert_eq!(
        result.to_string(),
        "Edit distance: 3\nReference: KITTEN-\nQuery:     SITTING\nCIGAR: 1S3M1S1M1I"
    );
}

#[test]
fn test_empty_reference() {
    let (cost, aligned_pair) = align_pair("", "ABC");
    assert_eq!(cost, 3);
    assert_eq!(aligned_pair.reference_string(), "---");
    assert_eq!(aligned_pair.query_string(), "ABC");
    assert_eq!(aligned_pair.alignment().cigar(), "3I");
}

#[test]
fn test_identical_sequences() {
    let (cost, aligned_pair) = align_pair("GATTACA", "GATTACA");
    assert_eq!(cost, 0);
    assert_eq!(aligned_pair.reference_string(), "GATTACA");
    assert_eq!(aligned_pair.query_string(), "GATTACA");
    assert!(aligned_pair.reference().iter().all(|c| !c.is_gap()));
    assert_eq!(aligned_pair.alignment().cigar(), "7M");
}

#[test]
fn test_tie_break_is_substitution_based() {
    let (cost, aligned_pair) = align_pair("AC", "CA");
    assert_eq!(cost, 2);
    assert_eq!(aligned_pair.reference_string(), "AC");
    assert_eq!(aligned_pair.query_string(), "CA");
    assert_eq!(aligned_pair.alignment().cigar(), "2S");
}

/// Regression test for the last cell of the first column, which is never visited by the inner loop.
#[test]
fn test_one_empty_one_short_sequence() {
    let (cost, aligned_pair) = align_pair("A", "");
    assert_eq!(cost, 1);
    assert_eq!(aligned_pair.reference_string(), "A");
    assert_eq!(aligned_pair.query_string(), "-");

    let (cost, aligned_pair) = align_pair("AAA", "A");
    assert_eq!(cost, 2);
    assert_eq!(aligned_pair.reference_string(), "AAA");
    assert_eq!(aligned_pair.query_string(), "--A");

    let (cost, aligned_pair) = align_pair("", "");
    assert_eq!(cost, 0);
    assert!(aligned_pair.is_empty());
}

#[test]
fn test_byte_sequences() {
    let result = edit_distance_align(b"ACGT", b"AGT").unwrap();
    assert_eq!(result.cost.as_u64(), 1);
    // Bytes are rendered as numbers, so only the structure is checked here.
    assert_eq!(result.cigar(), "1M1D2M");
    assert_eq!(result.reference_length, 4);
    assert_eq!(result.query_length, 3);
}

#[test]
fn test_distance_properties() {
    for x in SEQUENCES {
        assert_eq!(distance(x, x), 0, "{x:?}");
        assert_eq!(distance(x, "") as usize, x.chars().count(), "{x:?}");
        assert_eq!(distance("", x) as usize, x.chars().count(), "{x:?}");

        for y in SEQUENCES {
            let xy = distance(x, y);
            assert_eq!(xy, distance(y, x), "{x:?} {y:?}");
            assert!(
                xy as usize <= x.chars().count().max(y.chars().count()),
                "{x:?} {y:?}"
            );
            if x != y {
                assert!(xy > 0, "{x:?} {y:?}");
            }

            for z in SEQUENCES {
                assert!(
                    distance(x, z) <= xy + distance(y, z),
                    "{x:?} {y:?} {z:?}"
                );
            }
        }
    }
}

#[test]
fn test_alignment_properties() {
    let configuration = AlignmentConfiguration::<U64Cost>::default();

    for x in SEQUENCES {
        for y in SEQUENCES {
            let (cost, aligned_pair) = align_pair(x, y);

            assert_eq!(aligned_pair.reference().len(), aligned_pair.query().len());
            assert_eq!(aligned_pair.len(), aligned_pair.alignment().len());
            assert_eq!(aligned_pair.unaligned_reference(), chars(x), "{x:?} {y:?}");
            assert_eq!(aligned_pair.unaligned_query(), chars(y), "{x:?} {y:?}");
            assert_eq!(
                aligned_pair.alignment().cost(&configuration).as_u64(),
                cost,
                "{x:?} {y:?}"
            );

            let column_cost = aligned_pair
                .reference()
                .iter()
                .zip(aligned_pair.query())
                .filter(|(r, q)| r != q || r.is_gap())
                .count();
            assert_eq!(column_cost as u64, cost, "{x:?} {y:?}");
            assert!(aligned_pair.len() <= x.len() + y.len());
        }
    }
}
