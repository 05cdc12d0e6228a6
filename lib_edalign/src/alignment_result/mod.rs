use std::fmt::{Display, Formatter, Result};

use alignment::Alignment;

pub mod alignment;

/// The character used to render a gap.
pub const GAP_CHARACTER: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentType {
    /// The query contains a character that is missing from the reference.
    Insertion,
    /// The query is missing a character present in the reference.
    Deletion,
    /// The query contains a different character than the reference.
    Substitution,
    /// The query contains the same character as the reference.
    Match,
}

/// A position in one strand of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignedCharacter<Character> {
    Character(Character),
    Gap,
}

/// Two strands of equal length that together form an alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignedPair<Character> {
    reference: Vec<AlignedCharacter<Character>>,
    query: Vec<AlignedCharacter<Character>>,
    alignment: Alignment,
}

/// The cost of an alignment together with its rendered strands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentResult<Cost> {
    pub cost: Cost,
    pub reference_length: usize,
    pub query_length: usize,
    pub aligned_reference: String,
    pub aligned_query: String,
    pub alignment: Alignment,
}

impl<Character> AlignedCharacter<Character> {
    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }

    pub fn character(&self) -> Option<&Character> {
        match self {
            Self::Character(character) => Some(character),
            Self::Gap => None,
        }
    }
}

impl<Character> AlignedPair<Character> {
    pub(crate) fn new(
        reference: Vec<AlignedCharacter<Character>>,
        query: Vec<AlignedCharacter<Character>>,
        alignment: Alignment,
    ) -> Self {
        debug_assert_eq!(reference.len(), query.len());
        debug_assert_eq!(reference.len(), alignment.len());

        Self {
            reference,
            query,
            alignment,
        }
    }

    pub fn reference(&self) -> &[AlignedCharacter<Character>] {
        &self.reference
    }

    pub fn query(&self) -> &[AlignedCharacter<Character>] {
        &self.query
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    /// The number of alignment columns.
    pub fn len(&self) -> usize {
        self.reference.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    /// The reference with all gaps removed.
    pub fn unaligned_reference(&self) -> Vec<Character>
    where
        Character: Clone,
    {
        strip_gaps(&self.reference)
    }

    /// The query with all gaps removed.
    pub fn unaligned_query(&self) -> Vec<Character>
    where
        Character: Clone,
    {
        strip_gaps(&self.query)
    }

    pub fn reference_string(&self) -> String
    where
        Character: Display,
    {
        render_strand(&self.reference)
    }

    pub fn query_string(&self) -> String
    where
        Character: Display,
    {
        render_strand(&self.query)
    }
}

impl<Cost> AlignmentResult<Cost> {
    pub fn new<Character: Display>(cost: Cost, aligned_pair: &AlignedPair<Character>) -> Self {
        Self {
            cost,
            reference_length: aligned_pair.reference.iter().filter(|c| !c.is_gap()).count(),
            query_length: aligned_pair.query.iter().filter(|c| !c.is_gap()).count(),
            aligned_reference: aligned_pair.reference_string(),
            aligned_query: aligned_pair.query_string(),
            alignment: aligned_pair.alignment.clone(),
        }
    }

    pub fn cigar(&self) -> String {
        self.alignment.cigar()
    }
}

fn strip_gaps<Character: Clone>(strand: &[AlignedCharacter<Character>]) -> Vec<Character> {
    strand
        .iter()
        .filter_map(AlignedCharacter::character)
        .cloned()
        .collect()
}

fn render_strand<Character: Display>(strand: &[AlignedCharacter<Character>]) -> String {
    strand.iter().map(ToString::to_string).collect()
}

impl Display for AlignmentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AlignmentType::Insertion => write!(f, "I"),
            AlignmentType::Deletion => write!(f, "D"),
            AlignmentType::Substitution => write!(f, "S"),
            AlignmentType::Match => write!(f, "M"),
        }
    }
}

impl<Character: Display> Display for AlignedCharacter<Character> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AlignedCharacter::Character(character) => write!(f, "{character}"),
            AlignedCharacter::Gap => write!(f, "{GAP_CHARACTER}"),
        }
    }
}

impl<Character: Display> Display for AlignedPair<Character> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{}", self.reference_string())?;
        write!(f, "{}", self.query_string())
    }
}

impl<Cost: Display> Display for AlignmentResult<Cost> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Edit distance: {}", self.cost)?;
        writeln!(f, "Reference: {}", self.aligned_reference)?;
        writeln!(f, "Query:     {}", self.aligned_query)?;
        write!(f, "CIGAR: ")?;
        self.alignment.write_cigar(f)?;

        Ok(())
    }
}
