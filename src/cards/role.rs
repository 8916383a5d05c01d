//! Card roles and board pools.
//!
//! A role is a card's functional tag within its match group. Two cards of
//! the same group only form a valid pairing when their roles fit the mode's
//! rule (word + meaning, sum + addend, ...).

use serde::{Deserialize, Serialize};

/// Functional tag of a card within its match group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// No role; the card matches by value or by group alone.
    Plain,
    Word,
    Meaning,
    Category,
    Spelling,
    Emoji,
    Name,
    /// Hub of an addition group.
    Sum,
    Addend,
    /// Hub of a multiplication group.
    Product,
    Factor,
    /// Result of an arithmetic triad.
    Result,
    Operand,
    Operator,
}

impl Role {
    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Plain => "plain",
            Role::Word => "word",
            Role::Meaning => "meaning",
            Role::Category => "category",
            Role::Spelling => "spelling",
            Role::Emoji => "emoji",
            Role::Name => "name",
            Role::Sum => "sum",
            Role::Addend => "addend",
            Role::Product => "product",
            Role::Factor => "factor",
            Role::Result => "result",
            Role::Operand => "operand",
            Role::Operator => "operator",
        }
    }

    /// Whether this role expects a numeric value.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Role::Sum | Role::Addend | Role::Product | Role::Factor | Role::Result | Role::Operand
        )
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Board section a card is dealt into.
///
/// Only warning mode uses pools: one card per group in `Section1`, two in
/// `Section2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pool {
    Section1,
    Section2,
}

impl Pool {
    /// The other pool.
    #[must_use]
    pub const fn other(self) -> Pool {
        match self {
            Pool::Section1 => Pool::Section2,
            Pool::Section2 => Pool::Section1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names() {
        assert_eq!(Role::Emoji.to_string(), "emoji");
        assert_eq!(Role::Operator.name(), "operator");
    }

    #[test]
    fn test_numeric_roles() {
        assert!(Role::Sum.is_numeric());
        assert!(Role::Operand.is_numeric());
        assert!(!Role::Operator.is_numeric());
        assert!(!Role::Name.is_numeric());
    }

    #[test]
    fn test_pool_other() {
        assert_eq!(Pool::Section1.other(), Pool::Section2);
        assert_eq!(Pool::Section2.other(), Pool::Section1);
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&Role::Addend).unwrap();
        assert_eq!(json, "\"addend\"");
        let role: Role = serde_json::from_str("\"product\"").unwrap();
        assert_eq!(role, Role::Product);
    }
}
