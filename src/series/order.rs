//! Truncation order of a series expansion.

use std::fmt;

use crate::error::SeriesError;

/// Number of tabulated orders (0 through [`SeriesOrder::MAX`]).
pub(crate) const ORDERS: usize = SeriesOrder::MAX + 1;

/// A validated truncation order in `0..=8`.
///
/// Every generator takes a `SeriesOrder`, so an untabulated order is rejected
/// once here instead of being clamped inside each table lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesOrder(usize);

impl SeriesOrder {
    /// Highest tabulated order.
    pub const MAX: usize = 8;

    /// Order used by GeographicLib for double precision.
    pub const DEFAULT: Self = Self(6);

    pub const fn new(order: usize) -> Result<Self, SeriesError> {
        if order > Self::MAX {
            return Err(SeriesError::OrderOutOfRange {
                order,
                max: Self::MAX,
            });
        }
        Ok(Self(order))
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// All supported orders, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX).map(Self)
    }
}

impl Default for SeriesOrder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for SeriesOrder {
    type Error = SeriesError;

    fn try_from(order: usize) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

impl From<SeriesOrder> for usize {
    fn from(order: SeriesOrder) -> Self {
        order.0
    }
}

impl fmt::Display for SeriesOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
