//! The deck: every card of one session, validated for its mode.
//!
//! `Deck::new` is the content-ingestion boundary. A deck that constructs
//! successfully is guaranteed to be playable under its mode: every group has
//! the right cardinality and role mix, and arithmetic content is internally
//! consistent when exact validation is used.
//!
//! The deck is also the single source of truth for progress. Match counts and
//! completion are derived from the cards' resolved flags, never from a
//! parallel counter.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::card::Card;
use super::role::{Pool, Role};
use crate::core::{CardId, GroupId};
use crate::error::{Result, SetupError};
use crate::rules::{MatchMode, PairRule, TriadRule, ValidationPolicy};

/// Card IDs of one match group, in deal order.
pub type GroupMembers = SmallVec<[CardId; 3]>;

/// All cards of a session.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{Card, Deck, Role};
/// use memory_match::core::{CardId, GroupId};
/// use memory_match::rules::{MatchMode, PairRule, ValidationPolicy};
///
/// let cards = vec![
///     Card::new(CardId::new(0), GroupId::new(0), Role::Plain, "🐶"),
///     Card::new(CardId::new(1), GroupId::new(0), Role::Plain, "🐶"),
/// ];
/// let deck = Deck::new(
///     cards,
///     MatchMode::Pair(PairRule::IdenticalValue),
///     ValidationPolicy::Exact,
/// )
/// .unwrap();
///
/// assert_eq!(deck.len(), 2);
/// assert_eq!(deck.target_matches(), 1);
/// assert_eq!(deck.match_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    mode: MatchMode,
    policy: ValidationPolicy,
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
    groups: FxHashMap<GroupId, GroupMembers>,
}

impl Deck {
    /// Validate `cards` for `mode` and build a deck.
    pub fn new(cards: Vec<Card>, mode: MatchMode, policy: ValidationPolicy) -> Result<Self> {
        if cards.is_empty() {
            return Err(SetupError::EmptyDeck);
        }

        let mut index = FxHashMap::default();
        let mut groups: FxHashMap<GroupId, GroupMembers> = FxHashMap::default();

        for (pos, card) in cards.iter().enumerate() {
            if index.insert(card.id, pos).is_some() {
                return Err(SetupError::DuplicateCard(card.id));
            }
            check_card(card, mode, policy)?;
            groups.entry(card.group).or_default().push(card.id);
        }

        let deck = Self {
            mode,
            policy,
            cards,
            index,
            groups,
        };

        for group in deck.group_ids() {
            deck.check_group(group)?;
        }

        log::debug!(
            "deck ready: {} cards in {} groups, mode {}, {} matches to find",
            deck.len(),
            deck.groups.len(),
            mode,
            deck.target_matches()
        );

        Ok(deck)
    }

    /// The mode this deck was validated for.
    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// The arithmetic validation policy.
    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&pos| &self.cards[pos])
    }

    fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let pos = *self.index.get(&id)?;
        self.cards.get_mut(pos)
    }

    /// Check if a card ID is in the deck.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty. Always false for a constructed deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in deal order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Group IDs in ascending order.
    #[must_use]
    pub fn group_ids(&self) -> Vec<GroupId> {
        let mut ids: Vec<_> = self.groups.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Members of a group, empty if the group is unknown.
    #[must_use]
    pub fn group(&self, group: GroupId) -> &[CardId] {
        self.groups.get(&group).map_or(&[], |m| m.as_slice())
    }

    fn members(&self, group: GroupId) -> impl Iterator<Item = &Card> {
        self.group(group).iter().filter_map(move |&id| self.get(id))
    }

    // === Progress (derived from resolved flags) ===

    /// Matches found so far.
    ///
    /// One per fully resolved group; in hub modes, one per resolved spoke.
    #[must_use]
    pub fn match_count(&self) -> usize {
        match self.mode.hub() {
            Some((_, spoke)) => self
                .cards
                .iter()
                .filter(|c| c.role == spoke && c.is_resolved())
                .count(),
            None => self
                .groups
                .keys()
                .filter(|&&g| self.members(g).all(Card::is_resolved))
                .count(),
        }
    }

    /// Matches needed to clear the board. Fixed by the deck's content.
    #[must_use]
    pub fn target_matches(&self) -> usize {
        match self.mode.hub() {
            Some((_, spoke)) => self.cards.iter().filter(|c| c.role == spoke).count(),
            None => self.groups.len(),
        }
    }

    /// Number of resolved cards with the given role.
    #[must_use]
    pub fn resolved_with_role(&self, role: Role) -> usize {
        self.cards
            .iter()
            .filter(|c| c.role == role && c.is_resolved())
            .count()
    }

    /// Number of resolved cards.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_resolved()).count()
    }

    /// Whether every card has been resolved.
    #[must_use]
    pub fn all_resolved(&self) -> bool {
        self.cards.iter().all(Card::is_resolved)
    }

    /// In hub modes, check that every resolved hub has all of its spokes
    /// resolved and every group with all spokes resolved has its hub resolved.
    ///
    /// Always true outside hub modes.
    #[must_use]
    pub fn hubs_consistent(&self) -> bool {
        let Some((hub, spoke)) = self.mode.hub() else {
            return true;
        };

        self.groups.keys().all(|&g| {
            let hub_resolved = self
                .members(g)
                .filter(|c| c.role == hub)
                .all(Card::is_resolved);
            let spokes_resolved = self
                .members(g)
                .filter(|c| c.role == spoke)
                .all(Card::is_resolved);
            hub_resolved == spokes_resolved
        })
    }

    // === Mutation (session tracker only) ===

    /// Mark the cards of a match resolved.
    ///
    /// In hub modes the hub card is skipped and only resolves once every
    /// spoke of its group is resolved. Returns the cards that changed.
    pub(crate) fn resolve(&mut self, ids: &[CardId]) -> GroupMembers {
        let hub_role = self.mode.hub().map(|(hub, _)| hub);
        let mut changed = GroupMembers::new();
        let mut touched: SmallVec<[GroupId; 3]> = SmallVec::new();

        for &id in ids {
            let Some(card) = self.get_mut(id) else {
                continue;
            };
            let group = card.group;
            if Some(card.role) != hub_role && card.resolve() {
                changed.push(id);
            }
            if !touched.contains(&group) {
                touched.push(group);
            }
        }

        if let Some((hub, spoke)) = self.mode.hub() {
            for group in touched {
                let spokes_done = self
                    .members(group)
                    .filter(|c| c.role == spoke)
                    .all(Card::is_resolved);
                if !spokes_done {
                    continue;
                }
                let hubs: GroupMembers = self
                    .members(group)
                    .filter(|c| c.role == hub)
                    .map(|c| c.id)
                    .collect();
                for id in hubs {
                    if self.get_mut(id).is_some_and(Card::resolve) {
                        changed.push(id);
                    }
                }
            }
        }

        changed
    }

    /// Resolve a single card with no hub bookkeeping.
    #[cfg(test)]
    pub(crate) fn force_resolved(&mut self, id: CardId) {
        if let Some(card) = self.get_mut(id) {
            card.resolve();
        }
    }

    /// Turn every card back to unresolved for a fresh session.
    pub(crate) fn clear_resolved(&mut self) {
        for card in &mut self.cards {
            card.clear_resolved();
        }
    }

    fn check_group(&self, group: GroupId) -> Result<()> {
        let members: SmallVec<[&Card; 3]> = self.members(group).collect();
        let expected = self.mode.group_size();
        if members.len() != expected {
            return Err(SetupError::group(
                group,
                format!("expected {} cards, found {}", expected, members.len()),
            ));
        }

        let count = |role: Role| members.iter().filter(|c| c.role == role).count();

        match self.mode {
            MatchMode::Pair(PairRule::IdenticalValue) => {
                if members[0].value != members[1].value {
                    return Err(SetupError::group(group, "pair values differ"));
                }
            }
            MatchMode::Pair(PairRule::Complementary(a, b)) => {
                if !(count(a) == 1 && count(b) == 1) {
                    return Err(SetupError::group(
                        group,
                        format!("expected one {} and one {}", a, b),
                    ));
                }
            }
            MatchMode::Warning => {
                let section1 = members
                    .iter()
                    .filter(|c| c.pool == Some(Pool::Section1))
                    .count();
                if section1 != 1 {
                    return Err(SetupError::group(
                        group,
                        format!("expected one section-1 card, found {}", section1),
                    ));
                }
            }
            MatchMode::Danger(TriadRule::Group) => {}
            MatchMode::Danger(TriadRule::DistinctRoles) => {
                let distinct = members[0].role != members[1].role
                    && members[1].role != members[2].role
                    && members[0].role != members[2].role;
                if !distinct {
                    return Err(SetupError::group(group, "roles are not distinct"));
                }
            }
            MatchMode::Danger(TriadRule::Arithmetic) => {
                let one_each = count(Role::Result) == 1
                    && count(Role::Operand) == 1
                    && count(Role::Operator) == 1;
                if !one_each {
                    return Err(SetupError::group(
                        group,
                        "expected one result, one operand and one operator",
                    ));
                }
            }
            MatchMode::MultiName | MatchMode::NumberAddition | MatchMode::NumberMultiplication => {
                if let Some((hub, spoke)) = self.mode.hub() {
                    if !(count(hub) == 1 && count(spoke) == 2) {
                        return Err(SetupError::group(
                            group,
                            format!("expected one {} and two {}s", hub, spoke),
                        ));
                    }
                }
            }
        }

        if self.mode.is_arithmetic() && self.policy == ValidationPolicy::Exact {
            check_facts(group, &members)?;
        }

        Ok(())
    }
}

/// Per-card checks that do not need the rest of the group.
fn check_card(card: &Card, mode: MatchMode, policy: ValidationPolicy) -> Result<()> {
    if card.is_resolved() {
        return Err(SetupError::card(card.id, "already resolved"));
    }
    if mode == MatchMode::Warning && card.pool.is_none() {
        return Err(SetupError::card(card.id, "missing pool"));
    }
    if mode.is_arithmetic() {
        if card.role.is_numeric() && card.value.as_number().is_none() {
            return Err(SetupError::card(card.id, format!("{} card needs a number", card.role)));
        }
        if card.role == Role::Operator && card.value.as_operator().is_none() {
            return Err(SetupError::card(card.id, "operator card needs an operator"));
        }
        if policy == ValidationPolicy::Exact {
            match card.fact {
                None => return Err(SetupError::card(card.id, "missing arithmetic fact")),
                Some(fact) if !fact.holds() => {
                    return Err(SetupError::card(card.id, format!("fact {} does not hold", fact)));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

/// Every card of an arithmetic group must carry the same fact, and each face
/// must agree with it.
fn check_facts(group: GroupId, members: &[&Card]) -> Result<()> {
    let Some(fact) = members.first().and_then(|c| c.fact) else {
        return Err(SetupError::group(group, "missing arithmetic fact"));
    };

    for card in members {
        if card.fact != Some(fact) {
            return Err(SetupError::group(group, "cards carry different facts"));
        }
        let consistent = match card.role {
            Role::Sum | Role::Product | Role::Result => card.value.as_number() == Some(fact.result),
            Role::Addend | Role::Factor | Role::Operand => {
                card.value.as_number().is_some_and(|v| fact.has_operand(v))
            }
            Role::Operator => card.value.as_operator() == Some(fact.op),
            _ => false,
        };
        if !consistent {
            return Err(SetupError::card(
                card.id,
                format!("face {} disagrees with {}", card.value, fact),
            ));
        }
    }

    // Hub groups show both operands, one per spoke.
    let mut spokes: SmallVec<[i64; 2]> = members
        .iter()
        .filter(|c| matches!(c.role, Role::Addend | Role::Factor))
        .filter_map(|c| c.value.as_number())
        .collect();
    if !spokes.is_empty() {
        let mut operands = [fact.left, fact.right];
        spokes.sort_unstable();
        operands.sort_unstable();
        if spokes.as_slice() != operands.as_slice() {
            return Err(SetupError::group(
                group,
                format!("spokes do not show both operands of {}", fact),
            ));
        }
    }
    Ok(())
}
