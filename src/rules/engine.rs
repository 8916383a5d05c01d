//! The match engine: selection state, board lock, verdicts.
//!
//! `MatchEngine::select` is the only way cards are turned face up. It never
//! looks at a clock. When it produces a mismatch it locks the board and keeps
//! the mismatched cards face up until the caller invokes [`MatchEngine::release`],
//! normally from the session's delayed un-reveal.
//!
//! ## Selection Shapes
//!
//! - Linear: one list of up to three cards (pair, warning and hub modes)
//! - Buckets: one list per match group (danger mode), so interleaving two
//!   groups never mixes their cards
//!
//! ## Rejections
//!
//! Invalid selections return `None` and change nothing:
//! - unknown card id
//! - card already resolved
//! - card already face up
//! - board locked

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::mode::{MatchMode, ValidationPolicy};
use super::validation::{pair_matches, triad_matches, warning_matches, warning_step, WarningStep};
use super::verdict::{SelectedCards, Verdict};
use crate::cards::{Card, Deck};
use crate::core::{CardId, GroupId};

/// Why a selection was ignored. Only used for trace logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rejection {
    UnknownCard,
    Resolved,
    FaceUp,
    Locked,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Rejection::UnknownCard => "unknown card",
            Rejection::Resolved => "already resolved",
            Rejection::FaceUp => "already face up",
            Rejection::Locked => "board locked",
        })
    }
}

/// Transient selection state for one session.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{Card, Deck, Role};
/// use memory_match::core::{CardId, GroupId};
/// use memory_match::rules::{MatchEngine, MatchMode, PairRule, ValidationPolicy, Verdict};
///
/// let mode = MatchMode::Pair(PairRule::IdenticalValue);
/// let deck = Deck::new(
///     vec![
///         Card::new(CardId::new(0), GroupId::new(0), Role::Plain, "🐶"),
///         Card::new(CardId::new(1), GroupId::new(0), Role::Plain, "🐶"),
///     ],
///     mode,
///     ValidationPolicy::Exact,
/// )
/// .unwrap();
///
/// let mut engine = MatchEngine::new(mode, ValidationPolicy::Exact);
/// assert_eq!(engine.select(&deck, CardId::new(0)), Some(Verdict::Pending));
/// // Same card twice is ignored.
/// assert_eq!(engine.select(&deck, CardId::new(0)), None);
/// assert!(engine.select(&deck, CardId::new(1)).unwrap().is_match());
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    mode: MatchMode,
    policy: ValidationPolicy,
    /// Live round for linear modes.
    selection: SelectedCards,
    /// Live rounds for bucket modes, one per group.
    buckets: FxHashMap<GroupId, SelectedCards>,
    /// Mismatched cards waiting for release.
    held: SelectedCards,
    locked: bool,
}

impl MatchEngine {
    /// Create an engine with an empty selection.
    #[must_use]
    pub fn new(mode: MatchMode, policy: ValidationPolicy) -> Self {
        Self {
            mode,
            policy,
            selection: SelectedCards::new(),
            buckets: FxHashMap::default(),
            held: SelectedCards::new(),
            locked: false,
        }
    }

    /// Create an engine matching a deck's mode and policy.
    #[must_use]
    pub fn for_deck(deck: &Deck) -> Self {
        Self::new(deck.mode(), deck.policy())
    }

    /// The engine's mode.
    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Whether a mismatch is waiting to be released.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether a card is currently face up (selected or held).
    #[must_use]
    pub fn is_face_up(&self, card: CardId) -> bool {
        self.selection.contains(&card)
            || self.held.contains(&card)
            || self.buckets.values().any(|b| b.contains(&card))
    }

    /// All face-up cards: the live selection, open buckets and held cards.
    ///
    /// Bucket contents are listed in group order.
    #[must_use]
    pub fn face_up(&self) -> Vec<CardId> {
        let mut groups: Vec<_> = self.buckets.keys().copied().collect();
        groups.sort_unstable();

        let mut cards: Vec<CardId> = self.held.iter().copied().collect();
        cards.extend(self.selection.iter().copied());
        for group in groups {
            if let Some(bucket) = self.buckets.get(&group) {
                cards.extend(bucket.iter().copied());
            }
        }
        cards
    }

    /// Number of open danger-mode buckets.
    #[must_use]
    pub fn open_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Turn a card face up and evaluate the round if it is complete.
    ///
    /// Returns `None` if the selection was rejected.
    pub fn select(&mut self, deck: &Deck, id: CardId) -> Option<Verdict> {
        let card = match self.check(deck, id) {
            Ok(card) => card,
            Err(reason) => {
                log::trace!("ignored selection of {}: {}", id, reason);
                return None;
            }
        };

        let verdict = if self.mode.uses_buckets() {
            self.select_bucket(deck, card)
        } else {
            self.select_linear(deck, card)
        };

        if let Verdict::Mismatch(cards) = &verdict {
            self.held = cards.clone();
            self.locked = true;
        }
        if verdict.completes_round() {
            log::debug!("{} after selecting {}", verdict, card);
        }

        Some(verdict)
    }

    /// Turn the held mismatch face down and unlock the board.
    ///
    /// Returns the cards that were released, empty if nothing was held.
    pub fn release(&mut self) -> SelectedCards {
        self.locked = false;
        std::mem::take(&mut self.held)
    }

    /// Drop every selection and unlock.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.buckets.clear();
        self.held.clear();
        self.locked = false;
    }

    fn check<'d>(&self, deck: &'d Deck, id: CardId) -> Result<&'d Card, Rejection> {
        let card = deck.get(id).ok_or(Rejection::UnknownCard)?;
        if card.is_resolved() {
            return Err(Rejection::Resolved);
        }
        if self.locked {
            return Err(Rejection::Locked);
        }
        if self.is_face_up(id) {
            return Err(Rejection::FaceUp);
        }
        Ok(card)
    }

    fn select_linear(&mut self, deck: &Deck, card: &Card) -> Verdict {
        self.selection.push(card.id);

        let picked: SmallVec<[&Card; 3]> = self
            .selection
            .iter()
            .filter_map(|&id| deck.get(id))
            .collect();

        let outcome = match (self.mode, picked.as_slice()) {
            (MatchMode::Warning, [first, second]) => match warning_step(first, second) {
                WarningStep::Continue => None,
                step => {
                    log::trace!("warning round cut short: {:?}", step);
                    Some(false)
                }
            },
            (MatchMode::Warning, [a, b, c]) => Some(warning_matches([*a, *b, *c])),
            (_, [a, b]) if self.mode.selection_size() == 2 => {
                Some(pair_matches(self.mode, self.policy, a, b))
            }
            _ => None,
        };

        match outcome {
            None => Verdict::Pending,
            Some(matched) => {
                let cards = std::mem::take(&mut self.selection);
                if matched {
                    Verdict::Match(cards)
                } else {
                    Verdict::Mismatch(cards)
                }
            }
        }
    }

    fn select_bucket(&mut self, deck: &Deck, card: &Card) -> Verdict {
        let MatchMode::Danger(rule) = self.mode else {
            return Verdict::Pending;
        };

        let bucket = self.buckets.entry(card.group).or_default();
        bucket.push(card.id);
        if bucket.len() < 3 {
            return Verdict::Pending;
        }

        let cards = self.buckets.remove(&card.group).unwrap_or_default();
        let picked: SmallVec<[&Card; 3]> = cards.iter().filter_map(|&id| deck.get(id)).collect();

        match picked.as_slice() {
            [a, b, c] if triad_matches(rule, self.policy, [*a, *b, *c]) => Verdict::Match(cards),
            _ => Verdict::Mismatch(cards),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Pool, Role};
    use crate::rules::{PairRule, TriadRule};
    use smallvec::smallvec;

    fn id(n: u32) -> CardId {
        CardId::new(n)
    }

    fn card(id: u32, group: u32, value: &str) -> Card {
        Card::new(CardId::new(id), GroupId::new(group), Role::Plain, value)
    }

    fn pair_deck() -> Deck {
        let cards = vec![card(0, 0, "a"), card(1, 0, "a"), card(2, 1, "b"), card(3, 1, "b")];
        let mode = MatchMode::Pair(PairRule::IdenticalValue);
        Deck::new(cards, mode, ValidationPolicy::Exact).unwrap()
    }

    fn warning_deck() -> Deck {
        let cards = vec![
            card(0, 0, "a").in_pool(Pool::Section1),
            card(1, 0, "a").in_pool(Pool::Section2),
            card(2, 0, "a").in_pool(Pool::Section2),
            card(3, 1, "b").in_pool(Pool::Section1),
            card(4, 1, "b").in_pool(Pool::Section2),
            card(5, 1, "b").in_pool(Pool::Section2),
        ];
        Deck::new(cards, MatchMode::Warning, ValidationPolicy::Exact).unwrap()
    }

    fn danger_deck() -> Deck {
        let cards = (0..6).map(|n| card(n, n / 3, "x")).collect();
        Deck::new(cards, MatchMode::Danger(TriadRule::Group), ValidationPolicy::Exact).unwrap()
    }

    #[test]
    fn test_pair_match() {
        let deck = pair_deck();
        let mut engine = MatchEngine::for_deck(&deck);

        assert_eq!(engine.select(&deck, id(0)), Some(Verdict::Pending));
        assert_eq!(engine.face_up(), vec![id(0)]);
        assert_eq!(
            engine.select(&deck, id(1)),
            Some(Verdict::Match(smallvec![id(0), id(1)]))
        );
        assert!(engine.face_up().is_empty());
        assert!(!engine.is_locked());
    }

    #[test]
    fn test_mismatch_locks_until_release() {
        let deck = pair_deck();
        let mut engine = MatchEngine::for_deck(&deck);

        engine.select(&deck, id(0));
        let verdict = engine.select(&deck, id(2)).unwrap();
        assert_eq!(verdict, Verdict::Mismatch(smallvec![id(0), id(2)]));
        assert!(engine.is_locked());
        assert!(engine.is_face_up(id(2)));

        // Locked: everything is ignored.
        assert_eq!(engine.select(&deck, id(1)), None);

        let released = engine.release();
        assert_eq!(released.as_slice(), &[id(0), id(2)]);
        assert!(!engine.is_locked());
        assert!(engine.face_up().is_empty());
        assert_eq!(engine.select(&deck, id(1)), Some(Verdict::Pending));
    }

    #[test]
    fn test_unknown_card_rejected() {
        let deck = pair_deck();
        let mut engine = MatchEngine::for_deck(&deck);
        assert_eq!(engine.select(&deck, id(99)), None);
    }

    #[test]
    fn test_warning_same_pool_short_circuit() {
        let deck = warning_deck();
        let mut engine = MatchEngine::for_deck(&deck);

        assert_eq!(engine.select(&deck, id(1)), Some(Verdict::Pending));
        assert_eq!(
            engine.select(&deck, id(4)),
            Some(Verdict::Mismatch(smallvec![id(1), id(4)]))
        );
    }

    #[test]
    fn test_warning_group_short_circuit() {
        let deck = warning_deck();
        let mut engine = MatchEngine::for_deck(&deck);

        engine.select(&deck, id(0));
        assert!(engine.select(&deck, id(4)).unwrap().is_mismatch());
    }

    #[test]
    fn test_warning_full_round() {
        let deck = warning_deck();
        let mut engine = MatchEngine::for_deck(&deck);

        // Section-2 first is allowed.
        assert_eq!(engine.select(&deck, id(1)), Some(Verdict::Pending));
        assert_eq!(engine.select(&deck, id(0)), Some(Verdict::Pending));
        assert!(engine.select(&deck, id(2)).unwrap().is_match());
    }

    #[test]
    fn test_warning_third_pick_mismatch() {
        let deck = warning_deck();
        let mut engine = MatchEngine::for_deck(&deck);

        engine.select(&deck, id(0));
        engine.select(&deck, id(1));
        let verdict = engine.select(&deck, id(5)).unwrap();
        assert_eq!(verdict, Verdict::Mismatch(smallvec![id(0), id(1), id(5)]));
    }

    #[test]
    fn test_danger_buckets_isolated() {
        let deck = danger_deck();
        let mut engine = MatchEngine::for_deck(&deck);

        assert_eq!(engine.select(&deck, id(0)), Some(Verdict::Pending));
        assert_eq!(engine.select(&deck, id(3)), Some(Verdict::Pending));
        assert_eq!(engine.select(&deck, id(1)), Some(Verdict::Pending));
        assert_eq!(engine.open_buckets(), 2);

        let verdict = engine.select(&deck, id(2)).unwrap();
        assert_eq!(verdict, Verdict::Match(smallvec![id(0), id(1), id(2)]));
        assert_eq!(engine.open_buckets(), 1);
        assert_eq!(engine.face_up(), vec![id(3)]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let deck = pair_deck();
        let mut engine = MatchEngine::for_deck(&deck);

        engine.select(&deck, id(0));
        engine.select(&deck, id(2));
        engine.reset();

        assert!(!engine.is_locked());
        assert!(engine.face_up().is_empty());
    }
}
