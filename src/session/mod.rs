//! Session layer: attempt tracking, delayed un-reveal and the `Game` root.
//!
//! ## Key Types
//!
//! - `SessionTracker`: Counts attempts, resolves matches, schedules un-reveals
//! - `Game`: Owns deck, engine, tracker and observer for one session
//! - `SessionObserver`: Notification sink for reveals, scores and completion

pub mod events;
pub mod game;
pub mod tracker;

pub use events::{
    LogObserver, NullObserver, RecordingObserver, ScoreDelta, SessionEvent, SessionObserver,
};
pub use game::Game;
pub use tracker::{
    AttemptRecord, Outcome, PendingUnreveal, RoundResult, SessionStats, SessionTracker,
    UnrevealToken,
};
