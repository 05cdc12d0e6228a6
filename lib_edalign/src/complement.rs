//! Nucleotide complements of DNA sequences.

/// Returns the complement of a DNA base, or `None` if the character is not one of `ACGT`.
///
/// Lower-case (soft-masked) bases are accepted as well and complemented to upper case.
pub fn complement_base(base: char) -> Option<char> {
    match base {
        'A' | 'a' => Some('T'),
        'T' | 't' => Some('A'),
        'C' | 'c' => Some('G'),
        'G' | 'g' => Some('C'),
        _ => None,
    }
}

/// Complements each base of the sequence.
///
/// Characters that are not DNA bases are dropped.
pub fn complement(sequence: &str) -> String {
    sequence.chars().filter_map(complement_base).collect()
}

/// Complements each base of the sequence and reverses the result.
///
/// Characters that are not DNA bases are dropped.
pub fn reverse_complement(sequence: &str) -> String {
    sequence.chars().rev().filter_map(complement_base).collect()
}
