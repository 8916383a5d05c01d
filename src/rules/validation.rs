//! Mode-specific comparison algorithms.
//!
//! Every function here is pure: it looks at the cards handed in and the rule
//! table, nothing else. The engine decides *when* to call them.

use crate::cards::{Card, Operator, Pool, Role};

use super::mode::{MatchMode, PairRule, TriadRule, ValidationPolicy};

/// Check whether a two-card selection is a match.
///
/// Only meaningful for modes with a selection size of 2; other modes never
/// match here.
#[must_use]
pub fn pair_matches(mode: MatchMode, policy: ValidationPolicy, a: &Card, b: &Card) -> bool {
    if a.group != b.group || a.id == b.id {
        return false;
    }

    match mode {
        MatchMode::Pair(PairRule::IdenticalValue) => a.value == b.value,
        MatchMode::Pair(PairRule::Complementary(x, y)) => roles_are(a, b, x, y),
        MatchMode::MultiName => roles_are(a, b, Role::Emoji, Role::Name),
        MatchMode::NumberAddition => ordered(a, b, Role::Sum, Role::Addend)
            .is_some_and(|(sum, addend)| arithmetic_pair(Operator::Add, sum, addend, policy)),
        MatchMode::NumberMultiplication => ordered(a, b, Role::Product, Role::Factor)
            .is_some_and(|(product, factor)| {
                arithmetic_pair(Operator::Multiply, product, factor, policy)
            }),
        MatchMode::Warning | MatchMode::Danger(_) => false,
    }
}

/// Outcome of checking the first two warning-mode picks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarningStep {
    /// Different pools, same group: wait for the third pick.
    Continue,
    /// Both cards came from the same section.
    SamePool,
    /// Different sections but different groups.
    GroupMismatch,
}

/// Check the second warning-mode pick against the first.
#[must_use]
pub fn warning_step(first: &Card, second: &Card) -> WarningStep {
    if first.pool == second.pool {
        WarningStep::SamePool
    } else if first.group != second.group {
        WarningStep::GroupMismatch
    } else {
        WarningStep::Continue
    }
}

/// Check whether three warning-mode picks form a match.
///
/// Requires one section-1 card and two section-2 cards, all of one group.
#[must_use]
pub fn warning_matches(cards: [&Card; 3]) -> bool {
    let group = cards[0].group;
    let section1 = cards
        .iter()
        .filter(|c| c.pool == Some(Pool::Section1))
        .count();
    let section2 = cards
        .iter()
        .filter(|c| c.pool == Some(Pool::Section2))
        .count();

    cards.iter().all(|c| c.group == group) && section1 == 1 && section2 == 2
}

/// Check whether a full danger-mode bucket forms a match.
#[must_use]
pub fn triad_matches(rule: TriadRule, policy: ValidationPolicy, cards: [&Card; 3]) -> bool {
    let group = cards[0].group;
    if !cards.iter().all(|c| c.group == group) {
        return false;
    }

    match rule {
        TriadRule::Group => true,
        TriadRule::DistinctRoles => {
            cards[0].role != cards[1].role
                && cards[1].role != cards[2].role
                && cards[0].role != cards[2].role
        }
        TriadRule::Arithmetic => {
            match (
                only_role(&cards, Role::Result),
                only_role(&cards, Role::Operand),
                only_role(&cards, Role::Operator),
            ) {
                (Some(result), Some(operand), Some(operator)) => {
                    arithmetic_triad(result, operand, operator, policy)
                }
                _ => false,
            }
        }
    }
}

/// The single card with `role`, or `None` if there are zero or several.
fn only_role<'a>(cards: &[&'a Card; 3], role: Role) -> Option<&'a Card> {
    let mut it = cards.iter().filter(|c| c.role == role);
    let found = it.next().copied();
    if it.next().is_some() {
        None
    } else {
        found
    }
}

fn roles_are(a: &Card, b: &Card, x: Role, y: Role) -> bool {
    (a.role == x && b.role == y) || (a.role == y && b.role == x)
}

/// Order a pair as `(hub, spoke)` if their roles fit.
fn ordered<'a>(a: &'a Card, b: &'a Card, hub: Role, spoke: Role) -> Option<(&'a Card, &'a Card)> {
    if a.role == hub && b.role == spoke {
        Some((a, b))
    } else if a.role == spoke && b.role == hub {
        Some((b, a))
    } else {
        None
    }
}

fn arithmetic_pair(op: Operator, hub: &Card, spoke: &Card, policy: ValidationPolicy) -> bool {
    let (Some(total), Some(part)) = (hub.value.as_number(), spoke.value.as_number()) else {
        return false;
    };

    match policy {
        ValidationPolicy::Lenient => match op {
            Operator::Add => part < total,
            Operator::Multiply => total.checked_rem(part) == Some(0),
            Operator::Subtract | Operator::Divide => false,
        },
        ValidationPolicy::Exact => match (hub.fact, spoke.fact) {
            (Some(fact), Some(other)) => {
                fact == other
                    && fact.op == op
                    && fact.holds()
                    && fact.result == total
                    && fact.has_operand(part)
            }
            _ => false,
        },
    }
}

fn arithmetic_triad(
    result: &Card,
    operand: &Card,
    operator: &Card,
    policy: ValidationPolicy,
) -> bool {
    let (Some(result_val), Some(operand_val), Some(op)) = (
        result.value.as_number(),
        operand.value.as_number(),
        operator.value.as_operator(),
    ) else {
        return false;
    };

    match policy {
        ValidationPolicy::Lenient => match op {
            Operator::Add => result_val > operand_val,
            Operator::Subtract => result_val > 0 && operand_val > result_val,
            Operator::Multiply => result_val.checked_rem(operand_val) == Some(0),
            Operator::Divide => operand_val.checked_rem(result_val) == Some(0),
        },
        ValidationPolicy::Exact => match (result.fact, operand.fact, operator.fact) {
            (Some(fact), Some(f2), Some(f3)) => {
                fact == f2
                    && fact == f3
                    && fact.holds()
                    && fact.op == op
                    && fact.result == result_val
                    && fact.has_operand(operand_val)
            }
            _ => false,
        },
    }
}
