//! # memory-match
//!
//! Matching engine for a memory card game with several match modes.
//!
//! ## Design Principles
//!
//! 1. **Deterministic Core**: No clocks, no threads, no global state. Time is
//!    passed in as `now_ms`, randomness comes from a seeded `GameRng`.
//!
//! 2. **Resolved State Is Authoritative**: Match counts and completion are
//!    derived from the cards' resolved flags, never tracked in parallel.
//!
//! 3. **Validate at Ingestion**: Content is checked once by `Deck::new`.
//!    During play, invalid selections are silently ignored.
//!
//! ## Modules
//!
//! - `core`: Identifiers, session configuration, RNG
//! - `cards`: Cards, roles, values and the validated `Deck`
//! - `rules`: Match modes, comparison rules and the `MatchEngine`
//! - `session`: Attempt tracking, delayed un-reveal, observers, `Game`
//! - `content`: Built-in themes and the deck generator
//! - `error`: Setup errors

pub mod core;
pub mod cards;
pub mod rules;
pub mod session;
pub mod content;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardId, GroupId, GameRng,
    Theme, Proficiency, Difficulty, SessionConfig, DEFAULT_MISMATCH_DELAY_MS,
};

pub use crate::cards::{ArithmeticFact, Card, CardValue, Deck, Operator, Pool, Role};

pub use crate::rules::{MatchEngine, MatchMode, PairRule, TriadRule, ValidationPolicy, Verdict};

pub use crate::session::{
    Game, SessionTracker, SessionStats, AttemptRecord, Outcome,
    PendingUnreveal, UnrevealToken,
    SessionObserver, SessionEvent, ScoreDelta,
    NullObserver, RecordingObserver, LogObserver,
};

pub use crate::error::{Result, SetupError};
