//! The fixed set of matching modes and their rule tables.

use serde::{Deserialize, Serialize};

use crate::cards::Role;

/// How a two-card selection is compared in pair mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairRule {
    /// Same group and identical value (plain themes).
    IdenticalValue,
    /// Same group and one card of each role, in either order.
    Complementary(Role, Role),
}

/// How a three-card group bucket is checked in danger mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriadRule {
    /// Any three cards of the group.
    Group,
    /// Three cards of the group with three different roles.
    DistinctRoles,
    /// One result, one operand and one operator forming a valid equation.
    Arithmetic,
}

/// How strictly arithmetic selections are validated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// Every card carries the complete fact; values must equal it.
    #[default]
    Exact,
    /// Necessary-but-insufficient numeric checks (addend < sum, ...).
    Lenient,
}

/// Matching mode of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMode {
    /// Two cards per round.
    Pair(PairRule),
    /// One card from section 1, two from section 2.
    Warning,
    /// Three cards per group, accumulated in per-group buckets.
    Danger(TriadRule),
    /// One emoji matched separately with each of its two names.
    MultiName,
    /// A sum matched separately with each of its two addends.
    NumberAddition,
    /// A product matched separately with each of its two factors.
    NumberMultiplication,
}

impl MatchMode {
    /// Number of face-up cards that completes a round.
    #[must_use]
    pub const fn selection_size(self) -> usize {
        match self {
            MatchMode::Pair(_)
            | MatchMode::MultiName
            | MatchMode::NumberAddition
            | MatchMode::NumberMultiplication => 2,
            MatchMode::Warning | MatchMode::Danger(_) => 3,
        }
    }

    /// Number of cards dealt per match group.
    #[must_use]
    pub const fn group_size(self) -> usize {
        match self {
            MatchMode::Pair(_) => 2,
            _ => 3,
        }
    }

    /// `(hub, spoke)` roles for modes where one card matches several partners.
    ///
    /// The hub stays selectable until all of its spokes are resolved.
    #[must_use]
    pub const fn hub(self) -> Option<(Role, Role)> {
        match self {
            MatchMode::MultiName => Some((Role::Emoji, Role::Name)),
            MatchMode::NumberAddition => Some((Role::Sum, Role::Addend)),
            MatchMode::NumberMultiplication => Some((Role::Product, Role::Factor)),
            _ => None,
        }
    }

    /// Whether selections are accumulated per group rather than in one list.
    #[must_use]
    pub const fn uses_buckets(self) -> bool {
        matches!(self, MatchMode::Danger(_))
    }

    /// Whether arithmetic validation applies to this mode.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(
            self,
            MatchMode::NumberAddition
                | MatchMode::NumberMultiplication
                | MatchMode::Danger(TriadRule::Arithmetic)
        )
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Pair(PairRule::IdenticalValue) => f.write_str("pair"),
            MatchMode::Pair(PairRule::Complementary(a, b)) => write!(f, "pair({}+{})", a, b),
            MatchMode::Warning => f.write_str("warning"),
            MatchMode::Danger(TriadRule::Group) => f.write_str("danger"),
            MatchMode::Danger(TriadRule::DistinctRoles) => f.write_str("danger(distinct-roles)"),
            MatchMode::Danger(TriadRule::Arithmetic) => f.write_str("danger(arithmetic)"),
            MatchMode::MultiName => f.write_str("multi-name"),
            MatchMode::NumberAddition => f.write_str("number-addition"),
            MatchMode::NumberMultiplication => f.write_str("number-multiplication"),
        }
    }
}
