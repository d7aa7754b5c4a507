//! Ordering keys for content listings.

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl Direction {
    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A field name plus direction, written as `field` or `-field`.
///
/// ```
/// use folio_core::order::{Direction, OrderBy};
///
/// let order = OrderBy::parse("-date");
/// assert_eq!(order.field, "date");
/// assert_eq!(order.direction, Direction::Descending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Field to sort by.
    pub field: String,

    /// Sort direction.
    pub direction: Direction,
}

impl OrderBy {
    /// Parse an order string. Never fails: an empty field simply matches nothing.
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        match spec.strip_prefix('-') {
            Some(field) => Self {
                field: field.to_string(),
                direction: Direction::Descending,
            },
            None => Self {
                field: spec.to_string(),
                direction: Direction::Ascending,
            },
        }
    }

    /// Descending by date, newest first.
    pub fn newest_first() -> Self {
        Self::parse("-date")
    }
}

impl Default for OrderBy {
    fn default() -> Self {
        Self::newest_first()
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Ascending => write!(f, "{}", self.field),
            Direction::Descending => write!(f, "-{}", self.field),
        }
    }
}

impl Serialize for OrderBy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OrderBy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        Ok(Self::parse(&spec))
    }
}
