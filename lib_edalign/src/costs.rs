use std::{
    ops::{Add, AddAssign},
    str::FromStr,
};

use num_traits::Zero;

type CostType = u64;

/// The cost of an alignment.
///
/// This cost type is not allowed to be negative.
/// The optimal alignment is the one with minimum cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct U64Cost(CostType);

impl U64Cost {
    pub const ZERO: Self = Self(0);

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<CostType> for U64Cost {
    fn from(value: CostType) -> Self {
        Self(value)
    }
}

impl From<u8> for U64Cost {
    fn from(value: u8) -> Self {
        Self(value.into())
    }
}

/// Saturates at the maximum cost instead of overflowing.
impl Add for U64Cost {
    type Output = U64Cost;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for U64Cost {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Zero for U64Cost {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for U64Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for U64Cost {
    type Err = <CostType as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CostType::from_str(s).map(Self)
    }
}
