//! Core types: identifiers, configuration, RNG.
//!
//! These are shared by the card, rules and session layers and carry no
//! matching logic of their own.

pub mod config;
pub mod ids;
pub mod rng;

pub use config::{Difficulty, Proficiency, SessionConfig, Theme, DEFAULT_MISMATCH_DELAY_MS};
pub use ids::{CardId, GroupId};
pub use rng::GameRng;
