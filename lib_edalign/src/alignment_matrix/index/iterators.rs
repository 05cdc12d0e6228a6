use super::{AlignmentMatrixIndex, MatrixEdge};

/// An iterator over the cells of the first row or column, skipping the origin.
pub struct AlignmentMatrixEdgeIterator {
    next: Option<AlignmentMatrixIndex>,
    edge: MatrixEdge,
    dimension: AlignmentMatrixIndex,
}

/// An iterator over the alignment matrix indices skipping row and column zero.
///
/// The iterator is query-major, i.e. it increments the reference position every iteration, and increments the query position only after reaching the limit of the reference.
/// Hence every cell is yielded after its diagonal, vertical and horizontal predecessors.
pub struct AlignmentMatrixInnerIterator {
    next: Option<AlignmentMatrixIndex>,
    dimension: AlignmentMatrixIndex,
}

impl AlignmentMatrixEdgeIterator {
    pub(in crate::alignment_matrix) fn new(edge: MatrixEdge, dimension: AlignmentMatrixIndex) -> Self {
        let first = edge.step(AlignmentMatrixIndex::new(0, 0));
        Self {
            next: dimension.contains(first).then_some(first),
            edge,
            dimension,
        }
    }
}

impl AlignmentMatrixInnerIterator {
    pub(in crate::alignment_matrix) fn new(dimension: AlignmentMatrixIndex) -> Self {
        debug_assert!(dimension.reference_index > 0);
        debug_assert!(dimension.query_index > 0);

        let first = AlignmentMatrixIndex::new(1, 1);
        Self {
            next: dimension.contains(first).then_some(first),
            dimension,
        }
    }
}

impl Iterator for AlignmentMatrixEdgeIterator {
    type Item = AlignmentMatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.next?;
        let successor = self.edge.step(result);
        self.next = self.dimension.contains(successor).then_some(successor);
        Some(result)
    }
}

impl Iterator for AlignmentMatrixInnerIterator {
    type Item = AlignmentMatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.next?;
        let below = AlignmentMatrixIndex::new(result.reference_index + 1, result.query_index);
        let next_column = AlignmentMatrixIndex::new(1, result.query_index + 1);

        self.next = if self.dimension.contains(below) {
            Some(below)
        } else if self.dimension.contains(next_column) {
            Some(next_column)
        } else {
            None
        };
        Some(result)
    }
}
