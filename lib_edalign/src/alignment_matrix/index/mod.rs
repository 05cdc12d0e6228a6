use std::ops::{Index, IndexMut};

use ndarray::Array2;

use super::Predecessor;

pub mod iterators;

/// A cell of the alignment matrix.
///
/// The reference runs along the rows, the query along the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentMatrixIndex {
    pub(in crate::alignment_matrix) reference_index: usize,
    pub(in crate::alignment_matrix) query_index: usize,
}

impl AlignmentMatrixIndex {
    pub fn new(reference_index: usize, query_index: usize) -> Self {
        Self {
            reference_index,
            query_index,
        }
    }

    /// Returns true if `index` lies inside a matrix of dimension `self`.
    pub fn contains(&self, index: AlignmentMatrixIndex) -> bool {
        index.reference_index < self.reference_index && index.query_index < self.query_index
    }

    pub fn is_origin(&self) -> bool {
        self.reference_index == 0 && self.query_index == 0
    }

    pub fn horizontal_predecessor(&self) -> Self {
        debug_assert!(self.query_index > 0);

        Self {
            reference_index: self.reference_index,
            query_index: self.query_index - 1,
        }
    }

    pub fn vertical_predecessor(&self) -> Self {
        debug_assert!(self.reference_index > 0);

        Self {
            reference_index: self.reference_index - 1,
            query_index: self.query_index,
        }
    }

    pub fn diagonal_predecessor(&self) -> Self {
        debug_assert!(self.reference_index > 0);
        debug_assert!(self.query_index > 0);

        Self {
            reference_index: self.reference_index - 1,
            query_index: self.query_index - 1,
        }
    }

    pub fn predecessor(&self, predecessor: Predecessor) -> Self {
        match predecessor {
            Predecessor::Diagonal => self.diagonal_predecessor(),
            Predecessor::Vertical => self.vertical_predecessor(),
            Predecessor::Horizontal => self.horizontal_predecessor(),
        }
    }

    /// Returns the predecessor in the given direction, or `None` if it would lie outside of the matrix.
    pub fn checked_predecessor(&self, predecessor: Predecessor) -> Option<Self> {
        let (reference_decrement, query_decrement) = match predecessor {
            Predecessor::Diagonal => (1, 1),
            Predecessor::Vertical => (1, 0),
            Predecessor::Horizontal => (0, 1),
        };

        Some(Self {
            reference_index: self.reference_index.checked_sub(reference_decrement)?,
            query_index: self.query_index.checked_sub(query_decrement)?,
        })
    }
}

/// The first column or the first row of the alignment matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixEdge {
    /// Aligns a prefix of the reference to nothing.
    FirstColumn,
    /// Aligns a prefix of the query to nothing.
    FirstRow,
}

impl MatrixEdge {
    /// The predecessor direction of all cells on this edge except the origin.
    pub fn predecessor(&self) -> Predecessor {
        match self {
            MatrixEdge::FirstColumn => Predecessor::Vertical,
            MatrixEdge::FirstRow => Predecessor::Horizontal,
        }
    }

    fn step(&self, index: AlignmentMatrixIndex) -> AlignmentMatrixIndex {
        match self {
            MatrixEdge::FirstColumn => AlignmentMatrixIndex::new(index.reference_index + 1, 0),
            MatrixEdge::FirstRow => AlignmentMatrixIndex::new(0, index.query_index + 1),
        }
    }
}

impl<T> Index<AlignmentMatrixIndex> for Array2<T> {
    type Output = <Array2<T> as Index<[usize; 2]>>::Output;

    fn index(&self, index: AlignmentMatrixIndex) -> &Self::Output {
        &self[[index.reference_index, index.query_index]]
    }
}

impl<T> IndexMut<AlignmentMatrixIndex> for Array2<T> {
    fn index_mut(&mut self, index: AlignmentMatrixIndex) -> &mut Self::Output {
        &mut self[[index.reference_index, index.query_index]]
    }
}
