//! Setup-time error types.
//!
//! Only session setup can fail. Invalid selections during play are silent
//! rejections (see `rules::MatchEngine::select`), so they have no error type.

use thiserror::Error;

use crate::core::{CardId, GroupId, Proficiency, Theme};

/// Result type alias using [`SetupError`].
pub type Result<T> = std::result::Result<T, SetupError>;

/// Errors that prevent a session from starting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("no matching rule for theme {theme} at proficiency {proficiency}")]
    UnknownMode { theme: Theme, proficiency: Proficiency },

    #[error("malformed card {card}: {reason}")]
    MalformedCard { card: CardId, reason: String },

    #[error("malformed group {group}: {reason}")]
    MalformedGroup { group: GroupId, reason: String },

    #[error("duplicate card id {0}")]
    DuplicateCard(CardId),

    #[error("deck has no cards")]
    EmptyDeck,

    #[error("theme {theme} has {available} entries, {requested} requested")]
    NotEnoughContent {
        theme: Theme,
        requested: usize,
        available: usize,
    },
}

impl SetupError {
    pub(crate) fn card(card: CardId, reason: impl Into<String>) -> Self {
        Self::MalformedCard {
            card,
            reason: reason.into(),
        }
    }

    pub(crate) fn group(group: GroupId, reason: impl Into<String>) -> Self {
        Self::MalformedGroup {
            group,
            reason: reason.into(),
        }
    }
}
