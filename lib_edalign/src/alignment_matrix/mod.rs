use std::fmt::Debug;

use index::{
    AlignmentMatrixIndex, MatrixEdge,
    iterators::{AlignmentMatrixEdgeIterator, AlignmentMatrixInnerIterator},
};
use log::{debug, trace};
use ndarray::Array2;
use num_traits::Zero;

use crate::{
    alignment_configuration::AlignmentConfiguration,
    alignment_result::{AlignedPair, AlignmentType},
    error::Result,
};

pub mod index;
mod traceback;


/// The cost matrix and the predecessor matrix of a global alignment.
///
/// Both matrices have dimension `(reference.len() + 1) x (query.len() + 1)`.
/// An instance is always fully populated, it can only be created by [`align`](Self::align).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentMatrix<Cost> {
    costs: Array2<Cost>,
    predecessors: PredecessorMatrix,
}

/// For each cell of an alignment matrix, the neighbour from which its minimum cost was computed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredecessorMatrix {
    matrix: Array2<Predecessor>,
}

/// The direction of the predecessor of an alignment matrix cell.
///
/// If multiple predecessors yield the same minimum cost, the earlier variant is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Predecessor {
    /// The reference character is aligned to the query character.
    ///
    /// The matrix origin holds this value as well, even though it has no predecessor.
    #[default]
    Diagonal,
    /// The reference character is aligned to a gap.
    Vertical,
    /// The query character is aligned to a gap.
    Horizontal,
}

impl<Cost: Copy + Ord + Zero + Debug> AlignmentMatrix<Cost> {
    /// Fill the cost and predecessor matrices for aligning `reference` to `query`.
    pub fn align<Character: Eq>(
        configuration: &AlignmentConfiguration<Cost>,
        reference: &[Character],
        query: &[Character],
    ) -> Self {
        let dimension = (reference.len() + 1, query.len() + 1);
        debug!(
            "Filling alignment matrix of dimension {}x{}",
            dimension.0, dimension.1
        );

        let mut result = Self {
            costs: Array2::from_elem(dimension, Cost::zero()),
            predecessors: PredecessorMatrix {
                matrix: Array2::default(dimension),
            },
        };
        result.initialise(configuration);
        result.align_inner(configuration, reference, query);

        debug!("Alignment cost: {:?}", result.cost());
        result
    }

    fn initialise(&mut self, configuration: &AlignmentConfiguration<Cost>) {
        // Initialise matrix origin.
        let origin = AlignmentMatrixIndex::new(0, 0);
        self.costs[origin] = Cost::zero();
        self.predecessors.matrix[origin] = Predecessor::Diagonal;

        // Initialise matrix edges, including their last cells.
        for edge in [MatrixEdge::FirstColumn, MatrixEdge::FirstRow] {
            for index in self.edge_index_iter(edge) {
                self.set_edge_cost(configuration, index, edge.predecessor());
            }
        }
    }

    fn align_inner<Character: Eq>(
        &mut self,
        configuration: &AlignmentConfiguration<Cost>,
        reference: &[Character],
        query: &[Character],
    ) {
        for index in self.inner_index_iter() {
            self.set_min_cost(configuration, index, reference, query);
        }
    }

    fn set_edge_cost(
        &mut self,
        configuration: &AlignmentConfiguration<Cost>,
        index: AlignmentMatrixIndex,
        predecessor: Predecessor,
    ) {
        self.costs[index] = self.costs[index.predecessor(predecessor)] + configuration.gap_cost;
        self.predecessors.matrix[index] = predecessor;
    }

    fn set_min_cost<Character: Eq>(
        &mut self,
        configuration: &AlignmentConfiguration<Cost>,
        index: AlignmentMatrixIndex,
        reference: &[Character],
        query: &[Character],
    ) {
        let mut predecessor = Predecessor::Diagonal;
        let mut cost =
            self.compute_cost_from(configuration, index, predecessor, reference, query);

        for candidate in [Predecessor::Vertical, Predecessor::Horizontal] {
            let candidate_cost =
                self.compute_cost_from(configuration, index, candidate, reference, query);
            // Strictly smaller, such that ties keep the earlier predecessor.
            if candidate_cost < cost {
                cost = candidate_cost;
                predecessor = candidate;
            }
        }

        trace!("{index:?}: {cost:?} from {predecessor:?}");
        self.costs[index] = cost;
        self.predecessors.matrix[index] = predecessor;
    }

    fn compute_cost_from<Character: Eq>(
        &self,
        configuration: &AlignmentConfiguration<Cost>,
        index: AlignmentMatrixIndex,
        predecessor: Predecessor,
        reference: &[Character],
        query: &[Character],
    ) -> Cost {
        let alignment_type = match predecessor {
            Predecessor::Diagonal => {
                if reference[index.reference_index - 1] == query[index.query_index - 1] {
                    AlignmentType::Match
                } else {
                    AlignmentType::Substitution
                }
            }
            Predecessor::Vertical => AlignmentType::Deletion,
            Predecessor::Horizontal => AlignmentType::Insertion,
        };

        self.costs[index.predecessor(predecessor)] + configuration.cost(alignment_type)
    }
}

impl<Cost> AlignmentMatrix<Cost> {
    pub fn reference_length(&self) -> usize {
        self.costs.dim().0 - 1
    }

    pub fn query_length(&self) -> usize {
        self.costs.dim().1 - 1
    }

    /// The cost of the optimal alignment, i.e. the value in the bottom-right cell.
    pub fn cost(&self) -> Cost
    where
        Cost: Copy,
    {
        self.costs[[self.reference_length(), self.query_length()]]
    }

    /// The minimum cost of aligning the first `reference_index` characters of the reference to the first `query_index` characters of the query.
    pub fn cost_at(&self, reference_index: usize, query_index: usize) -> Option<Cost>
    where
        Cost: Copy,
    {
        self.costs.get([reference_index, query_index]).copied()
    }

    pub fn predecessors(&self) -> &PredecessorMatrix {
        &self.predecessors
    }

    pub fn into_predecessors(self) -> PredecessorMatrix {
        self.predecessors
    }

    /// Reconstruct an optimal alignment.
    ///
    /// The sequences must be the ones this matrix was computed from.
    pub fn traceback<Character: Clone + Eq>(
        &self,
        reference: &[Character],
        query: &[Character],
    ) -> Result<AlignedPair<Character>> {
        self.predecessors.traceback(reference, query)
    }

    pub fn edge_index_iter(&self, edge: MatrixEdge) -> AlignmentMatrixEdgeIterator {
        AlignmentMatrixEdgeIterator::new(edge, self.dimension())
    }

    pub fn inner_index_iter(&self) -> AlignmentMatrixInnerIterator {
        AlignmentMatrixInnerIterator::new(self.dimension())
    }

    fn dimension(&self) -> AlignmentMatrixIndex {
        let (rows, columns) = self.costs.dim();
        AlignmentMatrixIndex::new(rows, columns)
    }
}

impl PredecessorMatrix {
    /// Returns the dimension of the matrix as `(rows, columns)`.
    pub fn dim(&self) -> (usize, usize) {
        self.matrix.dim()
    }

    pub fn get(&self, reference_index: usize, query_index: usize) -> Option<Predecessor> {
        self.matrix.get([reference_index, query_index]).copied()
    }
}

impl From<Array2<Predecessor>> for PredecessorMatrix {
    fn from(matrix: Array2<Predecessor>) -> Self {
        Self { matrix }
    }
}

impl std::fmt::Display for Predecessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predecessor::Diagonal => write!(f, "D"),
            Predecessor::Vertical => write!(f, "V"),
            Predecessor::Horizontal => write!(f, "H"),
        }
    }
}

impl<Cost: std::fmt::Display> std::fmt::Display for AlignmentMatrix<Cost> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rows, columns) = self.costs.dim();
        let mut cost_column_widths = vec![1; columns];
        for reference_index in 0..rows {
            for (query_index, cost_column_width) in cost_column_widths.iter_mut().enumerate() {
                let width = self.costs[[reference_index, query_index]].to_string().len();
                *cost_column_width = width.max(*cost_column_width);
            }
        }

        for reference_index in 0..rows {
            write!(f, "[ ")?;
            #[allow(clippy::needless_range_loop)]
            for query_index in 0..columns {
                write!(
                    f,
                    "{: >width$}",
                    self.costs[[reference_index, query_index]].to_string(),
                    width = cost_column_widths[query_index],
                )?;
                if reference_index == 0 && query_index == 0 {
                    write!(f, "* ")?;
                } else {
                    write!(
                        f,
                        "{} ",
                        self.predecessors.matrix[[reference_index, query_index]]
                    )?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
