//! Session events and observers.
//!
//! A `Game` reports everything that happens through a [`SessionObserver`].
//! Observers are how a UI, a score keeper or a test harness hears about
//! reveals, matches and completion without polling.
//!
//! ## Shipped Observers
//!
//! - `NullObserver`: ignores everything
//! - `RecordingObserver`: collects [`SessionEvent`]s in order
//! - `LogObserver`: writes `log` records

use serde::{Deserialize, Serialize};

use super::tracker::SessionStats;
use crate::cards::Card;
use crate::core::CardId;

/// Score change sent on every completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    /// Matches found so far, after this round.
    pub matches: usize,

    /// Completed rounds so far, after this round.
    pub attempts: usize,

    /// Caller-supplied time of the round.
    pub timestamp_ms: u64,

    /// Time since the previous match (or session start) when this round
    /// was a match. `None` for mismatches.
    pub since_last_match_ms: Option<u64>,
}

impl ScoreDelta {
    /// Whether the round that produced this delta was a match.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.since_last_match_ms.is_some()
    }
}

/// Something that happened during a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Revealed(CardId),
    Unrevealed(Vec<CardId>),
    Resolved(Vec<CardId>),
    Scored(ScoreDelta),
    Completed(SessionStats),
}

/// Receives session notifications. Every method defaults to a no-op.
pub trait SessionObserver {
    /// A card was accepted and turned face up.
    fn revealed(&mut self, _card: &Card) {}

    /// Cards were turned face down again.
    fn unrevealed(&mut self, _cards: &[CardId]) {}

    /// Cards were permanently matched.
    fn resolved(&mut self, _cards: &[CardId]) {}

    /// A round completed.
    fn scored(&mut self, _delta: ScoreDelta) {}

    /// Every card has been matched.
    fn completed(&mut self, _stats: &SessionStats) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl SessionObserver for NullObserver {}

/// Observer that records every event in order.
///
/// ```
/// use memory_match::session::{RecordingObserver, SessionEvent, SessionObserver};
/// use memory_match::core::CardId;
///
/// let mut obs = RecordingObserver::new();
/// obs.unrevealed(&[CardId::new(1), CardId::new(2)]);
/// assert_eq!(
///     obs.events(),
///     &[SessionEvent::Unrevealed(vec![CardId::new(1), CardId::new(2)])]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Vec<SessionEvent>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Score deltas recorded so far.
    pub fn scores(&self) -> impl Iterator<Item = &ScoreDelta> {
        self.events.iter().filter_map(|e| match e {
            SessionEvent::Scored(delta) => Some(delta),
            _ => None,
        })
    }

    /// Whether a completion event was recorded.
    #[must_use]
    pub fn saw_completion(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SessionEvent::Completed(_)))
    }
}

impl SessionObserver for RecordingObserver {
    fn revealed(&mut self, card: &Card) {
        self.events.push(SessionEvent::Revealed(card.id));
    }

    fn unrevealed(&mut self, cards: &[CardId]) {
        self.events.push(SessionEvent::Unrevealed(cards.to_vec()));
    }

    fn resolved(&mut self, cards: &[CardId]) {
        self.events.push(SessionEvent::Resolved(cards.to_vec()));
    }

    fn scored(&mut self, delta: ScoreDelta) {
        self.events.push(SessionEvent::Scored(delta));
    }

    fn completed(&mut self, stats: &SessionStats) {
        self.events.push(SessionEvent::Completed(*stats));
    }
}

/// Observer that forwards events to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl SessionObserver for LogObserver {
    fn revealed(&mut self, card: &Card) {
        log::debug!("revealed {}", card);
    }

    fn unrevealed(&mut self, cards: &[CardId]) {
        log::debug!("unrevealed {} cards", cards.len());
    }

    fn resolved(&mut self, cards: &[CardId]) {
        log::debug!("resolved {} cards", cards.len());
    }

    fn scored(&mut self, delta: ScoreDelta) {
        log::debug!(
            "score: {} matches in {} attempts at {}ms",
            delta.matches,
            delta.attempts,
            delta.timestamp_ms
        );
    }

    fn completed(&mut self, stats: &SessionStats) {
        log::info!("{}", stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Role;
    use crate::core::GroupId;

    #[test]
    fn test_recording_order() {
        let mut obs = RecordingObserver::new();
        let card = Card::new(CardId::new(3), GroupId::new(1), Role::Plain, "🐸");

        obs.revealed(&card);
        obs.scored(ScoreDelta {
            matches: 0,
            attempts: 1,
            timestamp_ms: 50,
            since_last_match_ms: None,
        });

        assert_eq!(obs.events().len(), 2);
        assert_eq!(obs.events()[0], SessionEvent::Revealed(CardId::new(3)));
        assert_eq!(obs.scores().count(), 1);
        assert!(!obs.saw_completion());

        let taken = obs.take();
        assert_eq!(taken.len(), 2);
        assert!(obs.events().is_empty());
    }

    #[test]
    fn test_null_observer_is_silent() {
        let mut obs = NullObserver;
        obs.unrevealed(&[CardId::new(1)]);
        obs.resolved(&[]);
    }

    #[test]
    fn test_score_delta_kind() {
        let hit = ScoreDelta {
            matches: 1,
            attempts: 1,
            timestamp_ms: 900,
            since_last_match_ms: Some(900),
        };
        assert!(hit.is_match());
        assert!(!ScoreDelta {
            since_last_match_ms: None,
            ..hit
        }
        .is_match());
    }
}
