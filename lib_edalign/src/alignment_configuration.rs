use crate::alignment_result::AlignmentType;

/// The costs of the edit operations of an alignment.
///
/// Insertions and deletions share the same gap cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentConfiguration<Cost> {
    pub match_cost: Cost,
    pub substitution_cost: Cost,
    pub gap_cost: Cost,
}

impl<Cost: Copy> AlignmentConfiguration<Cost> {
    pub fn cost(&self, alignment_type: AlignmentType) -> Cost {
        match alignment_type {
            AlignmentType::Match => self.match_cost,
            AlignmentType::Substitution => self.substitution_cost,
            AlignmentType::Insertion | AlignmentType::Deletion => self.gap_cost,
        }
    }
}

/// Unit costs: matches are free, substitutions and gaps cost one.
impl<Cost: From<u8>> Default for AlignmentConfiguration<Cost> {
    fn default() -> Self {
        Self {
            match_cost: 0.into(),
            substitution_cost: 1.into(),
            gap_cost: 1.into(),
        }
    }
}
