//! Cards - immutable content plus the resolved flag.
//!
//! A `Card` is built by a content generator and handed to a [`Deck`]
//! already populated. After that, only `resolved` ever changes, and only
//! from false to true.
//!
//! [`Deck`]: super::Deck

use serde::{Deserialize, Serialize};

use super::role::{Pool, Role};
use super::value::{ArithmeticFact, CardValue};
use crate::core::{CardId, GroupId};

/// A card on the board.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{Card, Role};
/// use memory_match::core::{CardId, GroupId};
///
/// let card = Card::new(CardId::new(1), GroupId::new(0), Role::Word, "ephemeral");
/// assert_eq!(card.role, Role::Word);
/// assert!(!card.is_resolved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier within the deck.
    pub id: CardId,

    /// Cards of the same group may resolve together.
    pub group: GroupId,

    /// Functional tag within the group.
    pub role: Role,

    /// Payload shown on the face and used for value comparisons.
    pub value: CardValue,

    /// Complete equation for arithmetic groups.
    #[serde(default)]
    pub fact: Option<ArithmeticFact>,

    /// Board section, warning mode only.
    #[serde(default)]
    pub pool: Option<Pool>,

    #[serde(default)]
    resolved: bool,
}

impl Card {
    /// Create an unresolved card.
    #[must_use]
    pub fn new(id: CardId, group: GroupId, role: Role, value: impl Into<CardValue>) -> Self {
        Self {
            id,
            group,
            role,
            value: value.into(),
            fact: None,
            pool: None,
            resolved: false,
        }
    }

    /// Attach the group's arithmetic fact.
    #[must_use]
    pub fn with_fact(mut self, fact: ArithmeticFact) -> Self {
        self.fact = Some(fact);
        self
    }

    /// Place the card in a board section.
    #[must_use]
    pub fn in_pool(mut self, pool: Pool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Whether the card has been permanently matched.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Mark the card as permanently matched.
    ///
    /// Returns true if the flag changed.
    pub(crate) fn resolve(&mut self) -> bool {
        !std::mem::replace(&mut self.resolved, true)
    }

    /// Forget the resolved flag. Only used when a session is reset.
    pub(crate) fn clear_resolved(&mut self) {
        self.resolved = false;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{} {}] {}", self.id, self.group, self.role, self.value)
    }
}
