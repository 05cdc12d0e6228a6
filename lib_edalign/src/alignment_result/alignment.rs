use std::fmt::Display;

use num_traits::Zero;

use crate::alignment_configuration::AlignmentConfiguration;

use super::AlignmentType;

/// A run-length encoded sequence of alignment operations.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    alignment: Vec<(usize, AlignmentType)>,
}

impl Alignment {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, alignment_type: AlignmentType) {
        if let Some((multiplicity, last_alignment_type)) = self.alignment.last_mut() {
            if *last_alignment_type == alignment_type {
                *multiplicity += 1;
            } else {
                self.alignment.push((1, alignment_type));
            }
        } else {
            self.alignment.push((1, alignment_type));
        }
    }

    /// The number of alignment columns.
    pub fn len(&self) -> usize {
        self.alignment
            .iter()
            .map(|(multiplicity, _)| multiplicity)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_empty()
    }

    pub fn iter_compact(&self) -> impl Iterator<Item = &(usize, AlignmentType)> {
        self.alignment.iter()
    }

    pub fn iter_flat(&self) -> impl Iterator<Item = AlignmentType> + '_ {
        self.alignment
            .iter()
            .flat_map(|(multiplicity, alignment_type)| {
                std::iter::repeat_n(*alignment_type, *multiplicity)
            })
    }

    /// The sum of the costs of all alignment operations.
    pub fn cost<Cost: Copy + Zero>(&self, configuration: &AlignmentConfiguration<Cost>) -> Cost {
        self.iter_flat()
            .fold(Cost::zero(), |cost, alignment_type| {
                cost + configuration.cost(alignment_type)
            })
    }

    pub fn cigar(&self) -> String {
        let mut result = String::new();
        self.write_cigar(&mut result)
            .unwrap_or_else(|error| unreachable!("writing to a string cannot fail: {error}"));
        result
    }

    pub fn write_cigar(&self, writer: &mut impl std::fmt::Write) -> std::fmt::Result {
        for (amount, alignment_type) in self.iter_compact() {
            write!(writer, "{amount}{alignment_type}")?;
        }

        Ok(())
    }

    pub fn reverse(&self) -> Self {
        Self {
            alignment: self.alignment.iter().copied().rev().collect(),
        }
    }
}

impl From<Vec<(usize, AlignmentType)>> for Alignment {
    fn from(value: Vec<(usize, AlignmentType)>) -> Self {
        Self { alignment: value }
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_cigar(f)
    }
}
