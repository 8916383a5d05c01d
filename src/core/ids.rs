//! Card and match-group identifiers.
//!
//! Both are opaque newtypes. The engine only compares them for equality and
//! uses them as map keys; content generators decide how they are allocated.
//!
//! ```
//! use memory_match::core::{CardId, GroupId};
//!
//! let card = CardId::new(7);
//! let group = GroupId::new(2);
//!
//! assert_eq!(card.raw(), 7);
//! assert_eq!(format!("{}", group), "Group(2)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of a card within a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier shared by every card that may legally resolve together.
///
/// Group cardinality depends on the mode: 2 for pair modes, 3 for warning,
/// danger and the hub modes (one hub plus two spokes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u32);

impl GroupId {
    /// Create a new group ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group({})", self.0)
    }
}
