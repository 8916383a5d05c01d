//! Session bookkeeping: attempts, resolution, delayed un-reveal.
//!
//! The tracker consumes verdicts from the match engine. It counts attempts,
//! marks matched cards resolved on the deck and schedules the un-reveal of a
//! mismatch. It owns no clock: every call that needs time takes the caller's
//! `now_ms`.
//!
//! ## Timers
//!
//! A mismatch produces a [`PendingUnreveal`] identified by an
//! [`UnrevealToken`]. The caller either polls [`SessionTracker::take_due`] or
//! fires the token once its own timer expires. Resetting the session bumps the
//! generation, so tokens issued before the reset do nothing.
//!
//! ## History
//!
//! Every completed round is appended to a persistent `im::Vector`. Cloning
//! the history for a snapshot shares structure with the live one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::events::ScoreDelta;
use crate::cards::{Deck, GroupMembers, Role};
use crate::rules::{MatchMode, SelectedCards, Verdict};

/// Identifies one scheduled un-reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnrevealToken {
    generation: u32,
    seq: u32,
}

impl UnrevealToken {
    /// Session generation the token was issued in.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl std::fmt::Display for UnrevealToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unreveal({}.{})", self.generation, self.seq)
    }
}

/// A mismatch waiting to be turned face down.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUnreveal {
    pub token: UnrevealToken,
    pub cards: SelectedCards,
    pub due_at_ms: u64,
}

/// Outcome of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Match,
    Mismatch,
}

/// One completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// 1-based attempt number.
    pub attempt: usize,
    pub outcome: Outcome,
    pub cards: SelectedCards,
    pub timestamp_ms: u64,
}

/// Summary of a session so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub matches: usize,
    pub attempts: usize,
    pub target_matches: usize,
    /// Time from the first reveal to the latest round.
    pub elapsed_ms: u64,
    /// Every attempt was a match.
    pub perfect: bool,
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} matches in {} attempts, {}ms",
            self.matches, self.target_matches, self.attempts, self.elapsed_ms
        )?;
        if self.perfect {
            f.write_str(" (perfect)")?;
        }
        Ok(())
    }
}

/// What the tracker did with a verdict.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundResult {
    /// Cards newly resolved by this round.
    pub resolved: GroupMembers,

    /// Score change, present when the round completed.
    pub score: Option<ScoreDelta>,

    /// Scheduled un-reveal, present on a mismatch.
    pub unreveal: Option<UnrevealToken>,
}

/// Per-session counters and the pending un-reveal.
#[derive(Clone, Debug)]
pub struct SessionTracker {
    mismatch_delay_ms: u64,
    target_matches: usize,
    attempts: usize,
    generation: u32,
    next_seq: u32,
    pending: Option<PendingUnreveal>,
    history: Vector<AttemptRecord>,
    started_at_ms: Option<u64>,
    last_round_ms: Option<u64>,
    last_match_ms: Option<u64>,
}

impl SessionTracker {
    /// Create a tracker for `deck`. The match target is fixed here.
    #[must_use]
    pub fn new(deck: &Deck, mismatch_delay_ms: u64) -> Self {
        Self {
            mismatch_delay_ms,
            target_matches: deck.target_matches(),
            attempts: 0,
            generation: 0,
            next_seq: 0,
            pending: None,
            history: Vector::new(),
            started_at_ms: None,
            last_round_ms: None,
            last_match_ms: None,
        }
    }

    /// Completed rounds so far.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Matches needed to clear the board.
    #[must_use]
    pub fn target_matches(&self) -> usize {
        self.target_matches
    }

    /// Current session generation. Bumped by every reset.
    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Completed rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<AttemptRecord> {
        &self.history
    }

    /// The scheduled un-reveal, if any.
    #[must_use]
    pub fn pending_unreveal(&self) -> Option<&PendingUnreveal> {
        self.pending.as_ref()
    }

    /// Note a reveal. The first one starts the session clock.
    pub fn on_reveal(&mut self, now_ms: u64) {
        self.started_at_ms.get_or_insert(now_ms);
    }

    /// Apply a verdict.
    pub fn on_verdict(&mut self, deck: &mut Deck, verdict: &Verdict, now_ms: u64) -> RoundResult {
        let (outcome, cards) = match verdict {
            Verdict::Pending => return RoundResult::default(),
            Verdict::Match(cards) => (Outcome::Match, cards),
            Verdict::Mismatch(cards) => (Outcome::Mismatch, cards),
        };

        self.attempts += 1;
        self.last_round_ms = Some(now_ms);
        self.history.push_back(AttemptRecord {
            attempt: self.attempts,
            outcome,
            cards: cards.clone(),
            timestamp_ms: now_ms,
        });

        let mut result = RoundResult::default();
        let mut since_last_match_ms = None;

        match outcome {
            Outcome::Match => {
                result.resolved = deck.resolve(cards);
                let since = self.last_match_ms.or(self.started_at_ms).unwrap_or(now_ms);
                since_last_match_ms = Some(now_ms.saturating_sub(since));
                self.last_match_ms = Some(now_ms);
            }
            Outcome::Mismatch => {
                let token = UnrevealToken {
                    generation: self.generation,
                    seq: self.next_seq,
                };
                self.next_seq += 1;
                self.pending = Some(PendingUnreveal {
                    token,
                    cards: cards.clone(),
                    due_at_ms: now_ms.saturating_add(self.mismatch_delay_ms),
                });
                result.unreveal = Some(token);
            }
        }

        result.score = Some(ScoreDelta {
            matches: deck.match_count(),
            attempts: self.attempts,
            timestamp_ms: now_ms,
            since_last_match_ms,
        });
        result
    }

    /// Hand back the pending un-reveal if it is due at `now_ms`.
    pub fn take_due(&mut self, now_ms: u64) -> Option<PendingUnreveal> {
        if self.pending.as_ref()?.due_at_ms <= now_ms {
            self.pending.take()
        } else {
            None
        }
    }

    /// Hand back the pending un-reveal identified by `token`.
    ///
    /// Tokens from an earlier generation, or ones already handled, yield
    /// `None`.
    pub fn take(&mut self, token: UnrevealToken) -> Option<PendingUnreveal> {
        if token.generation != self.generation {
            log::warn!(
                "ignoring {} from generation {}, session is at generation {}",
                token,
                token.generation,
                self.generation
            );
            return None;
        }
        match &self.pending {
            Some(pending) if pending.token == token => self.pending.take(),
            _ => {
                log::warn!("ignoring {}: nothing pending for it", token);
                None
            }
        }
    }

    /// Whether the board is cleared.
    ///
    /// Requires the match target to be reached and every card resolved. In
    /// multi-name mode, every emoji must also have both of its names resolved.
    #[must_use]
    pub fn is_complete(&self, deck: &Deck) -> bool {
        let base = deck.match_count() == self.target_matches && deck.all_resolved();
        if !base {
            return false;
        }
        match deck.mode() {
            MatchMode::MultiName => {
                deck.resolved_with_role(Role::Name) == 2 * deck.resolved_with_role(Role::Emoji)
                    && deck.hubs_consistent()
            }
            _ => true,
        }
    }

    /// Snapshot of the session counters.
    #[must_use]
    pub fn stats(&self, deck: &Deck) -> SessionStats {
        let matches = deck.match_count();
        let elapsed_ms = match (self.started_at_ms, self.last_round_ms) {
            (Some(start), Some(last)) => last.saturating_sub(start),
            _ => 0,
        };
        SessionStats {
            matches,
            attempts: self.attempts,
            target_matches: self.target_matches,
            elapsed_ms,
            perfect: self.attempts == matches,
        }
    }

    /// Start a new session: zero counters, drop the pending un-reveal and
    /// invalidate every outstanding token.
    pub fn reset(&mut self) {
        self.attempts = 0;
        self.generation = self.generation.wrapping_add(1);
        self.next_seq = 0;
        self.pending = None;
        self.history = Vector::new();
        self.started_at_ms = None;
        self.last_round_ms = None;
        self.last_match_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{CardId, GroupId};
    use crate::rules::{PairRule, ValidationPolicy};
    use smallvec::smallvec;

    fn deck() -> Deck {
        let cards = vec![
            Card::new(CardId::new(0), GroupId::new(0), Role::Plain, "a"),
            Card::new(CardId::new(1), GroupId::new(0), Role::Plain, "a"),
            Card::new(CardId::new(2), GroupId::new(1), Role::Plain, "b"),
            Card::new(CardId::new(3), GroupId::new(1), Role::Plain, "b"),
        ];
        let mode = MatchMode::Pair(PairRule::IdenticalValue);
        Deck::new(cards, mode, ValidationPolicy::Exact).unwrap()
    }

    fn matched(a: u32, b: u32) -> Verdict {
        Verdict::Match(smallvec![CardId::new(a), CardId::new(b)])
    }

    fn mismatched(a: u32, b: u32) -> Verdict {
        Verdict::Mismatch(smallvec![CardId::new(a), CardId::new(b)])
    }

    #[test]
    fn test_pending_is_free() {
        let mut deck = deck();
        let mut tracker = SessionTracker::new(&deck, 1000);

        let result = tracker.on_verdict(&mut deck, &Verdict::Pending, 0);
        assert_eq!(result, RoundResult::default());
        assert_eq!(tracker.attempts(), 0);
        assert!(tracker.history().is_empty());
    }

    #[test]
    fn test_match_resolves_and_scores() {
        let mut deck = deck();
        let mut tracker = SessionTracker::new(&deck, 1000);
        tracker.on_reveal(100);

        let result = tracker.on_verdict(&mut deck, &matched(0, 1), 400);
        assert_eq!(result.resolved.as_slice(), &[CardId::new(0), CardId::new(1)]);
        assert_eq!(result.unreveal, None);

        let score = result.score.unwrap();
        assert_eq!(score.matches, 1);
        assert_eq!(score.attempts, 1);
        assert_eq!(score.since_last_match_ms, Some(300));
        assert_eq!(tracker.history()[0].outcome, Outcome::Match);
    }

    #[test]
    fn test_mismatch_schedules_unreveal() {
        let mut deck = deck();
        let mut tracker = SessionTracker::new(&deck, 1000);

        let token = tracker
            .on_verdict(&mut deck, &mismatched(0, 2), 50)
            .unreveal
            .unwrap();
        assert_eq!(tracker.pending_unreveal().unwrap().due_at_ms, 1050);

        assert_eq!(tracker.take_due(1049), None);
        let pending = tracker.take_due(1050).unwrap();
        assert_eq!(pending.token, token);
        assert_eq!(pending.cards.as_slice(), &[CardId::new(0), CardId::new(2)]);

        // Already handled.
        assert_eq!(tracker.take(token), None);
    }

    #[test]
    fn test_stale_token_after_reset() {
        let mut deck = deck();
        let mut tracker = SessionTracker::new(&deck, 1000);

        let token = tracker
            .on_verdict(&mut deck, &mismatched(0, 2), 0)
            .unreveal
            .unwrap();
        tracker.reset();

        assert_eq!(token.generation(), 0);
        assert_eq!(tracker.generation(), 1);
        assert_eq!(tracker.take(token), None);
        assert_eq!(tracker.pending_unreveal(), None);
        assert_eq!(tracker.attempts(), 0);
    }

    #[test]
    fn test_completion_and_stats() {
        let mut deck = deck();
        let mut tracker = SessionTracker::new(&deck, 1000);
        tracker.on_reveal(0);

        tracker.on_verdict(&mut deck, &matched(0, 1), 1000);
        assert!(!tracker.is_complete(&deck));
        tracker.on_verdict(&mut deck, &mismatched(2, 2), 2000);
        tracker.on_verdict(&mut deck, &matched(2, 3), 3000);
        assert!(tracker.is_complete(&deck));

        let stats = tracker.stats(&deck);
        assert_eq!(stats.matches, 2);
        assert_eq!(stats.attempts, 3);
        assert_eq!(stats.target_matches, 2);
        assert_eq!(stats.elapsed_ms, 3000);
        assert!(!stats.perfect);
        assert_eq!(stats.to_string(), "2/2 matches in 3 attempts, 3000ms");
    }

    fn multi_name_deck() -> Deck {
        let cards = vec![
            Card::new(CardId::new(0), GroupId::new(0), Role::Emoji, "🐕"),
            Card::new(CardId::new(1), GroupId::new(0), Role::Name, "Dog"),
            Card::new(CardId::new(2), GroupId::new(0), Role::Name, "Puppy"),
            Card::new(CardId::new(3), GroupId::new(1), Role::Emoji, "🚲"),
            Card::new(CardId::new(4), GroupId::new(1), Role::Name, "Bicycle"),
            Card::new(CardId::new(5), GroupId::new(1), Role::Name, "Bike"),
        ];
        Deck::new(cards, MatchMode::MultiName, ValidationPolicy::Exact).unwrap()
    }

    #[test]
    fn test_multi_name_hub_without_names_is_incomplete() {
        let mut deck = multi_name_deck();
        let tracker = SessionTracker::new(&deck, 1000);

        // Emoji resolved while one of its names is still open.
        for id in [0, 1, 3, 4, 5] {
            deck.force_resolved(CardId::new(id));
        }
        assert!(!deck.hubs_consistent());
        assert_eq!(deck.resolved_with_role(Role::Name), 3);
        assert!(!tracker.is_complete(&deck));

        deck.force_resolved(CardId::new(2));
        assert!(deck.hubs_consistent());
        assert!(tracker.is_complete(&deck));
    }

    #[test]
    fn test_multi_name_names_without_hub_are_incomplete() {
        let mut deck = multi_name_deck();
        let tracker = SessionTracker::new(&deck, 1000);

        // Every name resolved but the second emoji never followed.
        for id in [0, 1, 2, 4, 5] {
            deck.force_resolved(CardId::new(id));
        }
        assert_eq!(deck.match_count(), tracker.target_matches());
        assert!(!deck.hubs_consistent());
        assert_eq!(deck.resolved_with_role(Role::Name), 4);
        assert_eq!(deck.resolved_with_role(Role::Emoji), 1);
        assert!(!tracker.is_complete(&deck));
    }

    #[test]
    fn test_history_snapshot_is_independent() {
        let mut deck = deck();
        let mut tracker = SessionTracker::new(&deck, 1000);

        tracker.on_verdict(&mut deck, &mismatched(0, 2), 10);
        let snapshot = tracker.history().clone();
        tracker.on_verdict(&mut deck, &matched(0, 1), 20);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(tracker.history().len(), 2);
        assert_eq!(tracker.history()[1].attempt, 2);
    }
}
