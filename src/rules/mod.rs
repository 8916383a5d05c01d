//! Matching rules: modes, comparison algorithms and the match engine.
//!
//! `MatchEngine` owns the transient selection and the board lock, and turns
//! each accepted selection into a [`Verdict`]. The comparison functions in
//! `validation` are pure and know nothing about selection state.

pub mod engine;
pub mod mode;
pub mod validation;
pub mod verdict;

pub use engine::MatchEngine;
pub use mode::{MatchMode, PairRule, TriadRule, ValidationPolicy};
pub use validation::{pair_matches, triad_matches, warning_matches, warning_step, WarningStep};
pub use verdict::{SelectedCards, Verdict};
