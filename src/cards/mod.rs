//! Card system: roles, values, cards and the validated deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable content plus a one-way resolved flag
//! - `Role`: Functional tag within a match group (word, sum, operator, ...)
//! - `CardValue`: The comparable payload on the card face
//! - `ArithmeticFact`: The full equation carried by arithmetic groups
//! - `Deck`: All cards of a session, validated against the match mode
//!
//! ## Progress
//!
//! The deck owns the resolved flags. Match counts and completion are
//! always derived from them.

pub mod card;
pub mod deck;
pub mod role;
pub mod value;

pub use card::Card;
pub use deck::{Deck, GroupMembers};
pub use role::{Pool, Role};
pub use value::{ArithmeticFact, CardValue, Operator};
