//! The composition root for one session.
//!
//! `Game` owns the deck, the match engine, the tracker and an observer, and
//! is the only place where they are wired together. It has no clock and no
//! global state: callers pass the time into every call that needs it.

use super::events::{NullObserver, SessionObserver};
use super::tracker::{PendingUnreveal, SessionStats, SessionTracker, UnrevealToken};
use crate::cards::{Card, Deck};
use crate::content;
use crate::core::{CardId, SessionConfig};
use crate::error::Result;
use crate::rules::{MatchEngine, Verdict};

/// One memory-match session.
///
/// ## Example
///
/// ```
/// use memory_match::core::{Proficiency, SessionConfig, Theme};
/// use memory_match::session::{Game, NullObserver};
///
/// let config = SessionConfig::new(Theme::Symbols, Proficiency::Easy).with_seed(7);
/// let mut game = Game::from_config(config, NullObserver).unwrap();
///
/// let first = game.deck().iter().next().unwrap().id;
/// assert!(game.reveal(first, 0).is_some());
/// assert!(!game.is_complete());
/// ```
pub struct Game<O: SessionObserver = NullObserver> {
    config: SessionConfig,
    deck: Deck,
    engine: MatchEngine,
    tracker: SessionTracker,
    observer: O,
    completed: bool,
}

impl<O: SessionObserver> Game<O> {
    /// Validate `cards` for the configured mode and start a session.
    pub fn setup(config: SessionConfig, cards: Vec<Card>, observer: O) -> Result<Self> {
        let mode = config.mode()?;
        let deck = Deck::new(cards, mode, config.validation)?;
        let engine = MatchEngine::for_deck(&deck);
        let tracker = SessionTracker::new(&deck, config.mismatch_delay_ms);

        log::debug!(
            "session ready: {} / {} ({}), {} cards, target {}",
            config.theme,
            config.proficiency,
            mode,
            deck.len(),
            tracker.target_matches()
        );

        Ok(Self {
            config,
            deck,
            engine,
            tracker,
            observer,
            completed: false,
        })
    }

    /// Generate content for `config` and start a session with it.
    pub fn from_config(config: SessionConfig, observer: O) -> Result<Self> {
        let cards = content::generate(&config)?;
        Self::setup(config, cards, observer)
    }

    /// Select a card at time `now_ms`.
    ///
    /// Returns `None` if the selection was ignored.
    pub fn reveal(&mut self, card: CardId, now_ms: u64) -> Option<Verdict> {
        let verdict = self.engine.select(&self.deck, card)?;

        if let Some(card) = self.deck.get(card) {
            self.observer.revealed(card);
        }
        self.tracker.on_reveal(now_ms);

        let round = self.tracker.on_verdict(&mut self.deck, &verdict, now_ms);

        if verdict.is_match() {
            // Hub cards of a partial match go back face down.
            let hidden: Vec<CardId> = verdict
                .cards()
                .iter()
                .copied()
                .filter(|&id| self.deck.get(id).is_some_and(|c| !c.is_resolved()))
                .collect();
            if !round.resolved.is_empty() {
                self.observer.resolved(&round.resolved);
            }
            if !hidden.is_empty() {
                self.observer.unrevealed(&hidden);
            }
        }
        if let Some(score) = round.score {
            self.observer.scored(score);
        }

        if !self.completed && self.tracker.is_complete(&self.deck) {
            self.completed = true;
            let stats = self.stats();
            log::info!("session complete: {}", stats);
            self.observer.completed(&stats);
        }

        Some(verdict)
    }

    /// Run the pending un-reveal if it is due at `now_ms`.
    ///
    /// Returns true if cards were turned face down.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.tracker.take_due(now_ms) {
            Some(pending) => {
                self.unreveal(pending);
                true
            }
            None => false,
        }
    }

    /// Run the un-reveal identified by `token`, regardless of its due time.
    ///
    /// Stale or already-handled tokens do nothing and return false.
    pub fn fire(&mut self, token: UnrevealToken) -> bool {
        match self.tracker.take(token) {
            Some(pending) => {
                self.unreveal(pending);
                true
            }
            None => false,
        }
    }

    fn unreveal(&mut self, pending: PendingUnreveal) {
        let released = self.engine.release();
        if released != pending.cards {
            log::warn!(
                "{} released {} cards, expected {}",
                pending.token,
                released.len(),
                pending.cards.len()
            );
        }
        self.observer.unrevealed(&pending.cards);
    }

    /// Start over with the same cards: nothing resolved, nothing face up,
    /// counters zeroed and outstanding tokens invalidated.
    pub fn reset(&mut self) {
        self.deck.clear_resolved();
        self.engine.reset();
        self.tracker.reset();
        self.completed = false;
        log::debug!("session reset, generation {}", self.tracker.generation());
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.tracker.stats(&self.deck)
    }

    /// Whether every card has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tracker.is_complete(&self.deck)
    }

    /// Whether a mismatch is holding the board.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.engine.is_locked()
    }

    /// The scheduled un-reveal, if any.
    #[must_use]
    pub fn pending_unreveal(&self) -> Option<&PendingUnreveal> {
        self.tracker.pending_unreveal()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    #[must_use]
    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the game and return its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Role;
    use crate::core::{GroupId, Proficiency, Theme};
    use crate::session::{RecordingObserver, SessionEvent};

    fn cards() -> Vec<Card> {
        (0..4)
            .map(|n| {
                let group = GroupId::new(n / 2);
                Card::new(CardId::new(n), group, Role::Plain, format!("v{}", n / 2))
            })
            .collect()
    }

    fn game() -> Game<RecordingObserver> {
        let config = SessionConfig::new(Theme::Symbols, Proficiency::Easy).with_mismatch_delay(500);
        Game::setup(config, cards(), RecordingObserver::new()).unwrap()
    }

    #[test]
    fn test_setup_rejects_unknown_mode() {
        let config = SessionConfig::new(Theme::MultiName, Proficiency::Danger);
        assert!(Game::setup(config, cards(), NullObserver).is_err());
    }

    #[test]
    fn test_mismatch_then_tick() {
        let mut game = game();

        game.reveal(CardId::new(0), 0);
        let verdict = game.reveal(CardId::new(2), 100).unwrap();
        assert!(verdict.is_mismatch());
        assert!(game.is_locked());

        assert!(!game.tick(599));
        assert!(game.is_locked());
        assert!(game.tick(600));
        assert!(!game.is_locked());

        let last = game.observer().events().last().cloned();
        assert_eq!(
            last,
            Some(SessionEvent::Unrevealed(vec![CardId::new(0), CardId::new(2)]))
        );
    }

    #[test]
    fn test_completion_reported_once() {
        let mut game = game();

        for (n, t) in [(0, 0), (1, 10), (2, 20), (3, 30)] {
            game.reveal(CardId::new(n), t);
        }
        assert!(game.is_complete());

        let stats = game.stats();
        assert!(stats.perfect);
        assert_eq!(stats.attempts, 2);

        let completions = game
            .observer()
            .events()
            .iter()
            .filter(|e| matches!(e, SessionEvent::Completed(_)))
            .count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_reset_invalidates_token() {
        let mut game = game();

        game.reveal(CardId::new(0), 0);
        game.reveal(CardId::new(2), 0);
        let token = game.pending_unreveal().unwrap().token;

        game.reset();
        assert!(!game.is_locked());
        assert!(!game.fire(token));
        assert_eq!(game.stats().attempts, 0);
    }
}
