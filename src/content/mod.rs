//! Built-in content and the deck generator.
//!
//! `generate` turns a `SessionConfig` into cards ready for `Deck::new`. The
//! tables in `themes` are small on purpose; callers with their own content
//! build `Card`s directly and skip this module.

pub mod generator;
pub mod themes;

pub use generator::generate;
