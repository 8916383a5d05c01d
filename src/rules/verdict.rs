//! Outcome of a single accepted selection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;

/// Cards taking part in one round. Never more than three.
pub type SelectedCards = SmallVec<[CardId; 3]>;

/// What an accepted selection produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Card registered, round not complete yet.
    Pending,
    /// The round's cards form a match.
    Match(SelectedCards),
    /// The round's cards do not match. They stay face up until released.
    Mismatch(SelectedCards),
}

impl Verdict {
    /// Check if this verdict is a match.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match(_))
    }

    /// Check if this verdict is a mismatch.
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Verdict::Mismatch(_))
    }

    /// Whether the verdict ends a round (and so counts as an attempt).
    #[must_use]
    pub fn completes_round(&self) -> bool {
        !matches!(self, Verdict::Pending)
    }

    /// Cards of a completed round, empty for `Pending`.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        match self {
            Verdict::Pending => &[],
            Verdict::Match(cards) | Verdict::Mismatch(cards) => cards,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (label, cards) = match self {
            Verdict::Pending => return f.write_str("pending"),
            Verdict::Match(cards) => ("match", cards),
            Verdict::Mismatch(cards) => ("mismatch", cards),
        };
        write!(f, "{}[", label)?;
        for (i, id) in cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", id.raw())?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_verdict_helpers() {
        let m = Verdict::Match(smallvec![CardId::new(1), CardId::new(2)]);
        let x = Verdict::Mismatch(smallvec![CardId::new(3)]);

        assert!(m.is_match());
        assert!(!m.is_mismatch());
        assert!(x.is_mismatch());
        assert!(x.completes_round());
        assert!(!Verdict::Pending.completes_round());
        assert_eq!(m.cards(), &[CardId::new(1), CardId::new(2)]);
        assert!(Verdict::Pending.cards().is_empty());
    }

    #[test]
    fn test_display() {
        let m = Verdict::Match(smallvec![CardId::new(1), CardId::new(2)]);
        assert_eq!(m.to_string(), "match[1, 2]");
        assert_eq!(Verdict::Pending.to_string(), "pending");
    }
}
