//! Unit-cost global alignment of two sequences.
//!
//! The alignment is computed in two steps.
//! First, [`AlignmentMatrix::align`](alignment_matrix::AlignmentMatrix::align) fills the cost matrix and the predecessor matrix.
//! Then, [`PredecessorMatrix::traceback`](alignment_matrix::PredecessorMatrix::traceback) reconstructs one optimal alignment from the predecessor matrix.
//!
//! ```
//! use lib_edalign::edit_distance_align;
//!
//! let reference: Vec<_> = "KITTEN".chars().collect();
//! let query: Vec<_> = "SITTING".chars().collect();
//! let result = edit_distance_align(&reference, &query).unwrap();
//! assert_eq!(result.cost.as_u64(), 3);
//! ```

use std::fmt::Display;

use alignment_configuration::AlignmentConfiguration;
use alignment_matrix::AlignmentMatrix;
use alignment_result::AlignmentResult;
use costs::U64Cost;
use error::Result;

pub mod alignment_configuration;
pub mod alignment_matrix;
pub mod alignment_result;
pub mod complement;
pub mod costs;
pub mod error;

#[cfg(test)]
mod tests;

/// Align `reference` and `query` with unit costs and reconstruct an optimal alignment.
pub fn edit_distance_align<Character: Clone + Eq + Display>(
    reference: &[Character],
    query: &[Character],
) -> Result<AlignmentResult<U64Cost>> {
    let configuration = AlignmentConfiguration::<U64Cost>::default();
    let alignment_matrix = AlignmentMatrix::align(&configuration, reference, query);
    let aligned_pair = alignment_matrix.traceback(reference, query)?;
    Ok(AlignmentResult::new(alignment_matrix.cost(), &aligned_pair))
}
