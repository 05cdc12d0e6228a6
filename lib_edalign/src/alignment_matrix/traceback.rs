use log::debug;

use crate::{
    alignment_result::{AlignedCharacter, AlignedPair, AlignmentType, alignment::Alignment},
    error::{Error, Result},
};

use super::{Predecessor, PredecessorMatrix, index::AlignmentMatrixIndex};

impl PredecessorMatrix {
    /// Reconstruct an optimal alignment by following the predecessors from the bottom-right cell to the origin.
    ///
    /// The sequences must have the lengths the matrix was computed for.
    /// Returns an error if they do not, or if a predecessor points outside of the matrix.
    pub fn traceback<Character: Clone + Eq>(
        &self,
        reference: &[Character],
        query: &[Character],
    ) -> Result<AlignedPair<Character>> {
        let (rows, columns) = self.matrix.dim();
        if rows != reference.len() + 1 || columns != query.len() + 1 {
            return Err(Error::SequenceLengthMismatch {
                matrix_rows: rows,
                matrix_columns: columns,
                reference_length: reference.len(),
                query_length: query.len(),
            });
        }

        let capacity = reference.len() + query.len();
        let mut aligned_reference = Vec::with_capacity(capacity);
        let mut aligned_query = Vec::with_capacity(capacity);
        let mut alignment = Alignment::new();

        let mut index = AlignmentMatrixIndex::new(reference.len(), query.len());
        while !index.is_origin() {
            let predecessor = self.matrix[index];
            let predecessor_index =
                index
                    .checked_predecessor(predecessor)
                    .ok_or(Error::PredecessorOutOfBounds {
                        reference_index: index.reference_index,
                        query_index: index.query_index,
                    })?;

            match predecessor {
                Predecessor::Diagonal => {
                    let reference_character = &reference[index.reference_index - 1];
                    let query_character = &query[index.query_index - 1];
                    alignment.push(if reference_character == query_character {
                        AlignmentType::Match
                    } else {
                        AlignmentType::Substitution
                    });
                    aligned_reference.push(AlignedCharacter::Character(
                        reference_character.clone(),
                    ));
                    aligned_query.push(AlignedCharacter::Character(query_character.clone()));
                }
                Predecessor::Vertical => {
                    alignment.push(AlignmentType::Deletion);
                    aligned_reference.push(AlignedCharacter::Character(
                        reference[index.reference_index - 1].clone(),
                    ));
                    aligned_query.push(AlignedCharacter::Gap);
                }
                Predecessor::Horizontal => {
                    alignment.push(AlignmentType::Insertion);
                    aligned_reference.push(AlignedCharacter::Gap);
                    aligned_query.push(AlignedCharacter::Character(
                        query[index.query_index - 1].clone(),
                    ));
                }
            }

            index = predecessor_index;
        }

        // The traceback runs from the end of the alignment to its start.
        aligned_reference.reverse();
        aligned_query.reverse();
        let alignment = alignment.reverse();

        debug!("Traceback produced alignment of length {}", alignment.len());
        Ok(AlignedPair::new(aligned_reference, aligned_query, alignment))
    }
}
