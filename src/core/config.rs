//! Session configuration.
//!
//! A session is configured by:
//! - `Theme`: what the cards show (symbols, words, numbers, ...)
//! - `Proficiency`: which matching mechanic is used
//! - `Difficulty`: how much content is dealt
//!
//! `SessionConfig::mode` turns the (theme, proficiency) pair into a
//! [`MatchMode`]. Combinations with no rule fail at setup, never at play time.

use serde::{Deserialize, Serialize};

use crate::cards::Role;
use crate::error::{Result, SetupError};
use crate::rules::{MatchMode, PairRule, TriadRule, ValidationPolicy};

/// Default delay before a mismatched selection is turned face down again.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Content theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Duplicate symbols matched by identical value.
    Symbols,
    /// Emoji matched with its name.
    EmojiNames,
    /// Word matched with its meaning.
    Words,
    /// Word matched with its spelling (or, at warning level, a commonly
    /// confused word matched with its meaning).
    Spellings,
    /// One emoji matched with two different names.
    MultiName,
    /// Arithmetic facts.
    Numbers,
}

impl Theme {
    /// All themes, in menu order.
    pub const ALL: [Theme; 6] = [
        Theme::Symbols,
        Theme::EmojiNames,
        Theme::Words,
        Theme::Spellings,
        Theme::MultiName,
        Theme::Numbers,
    ];

    fn name(self) -> &'static str {
        match self {
            Theme::Symbols => "symbols",
            Theme::EmojiNames => "emoji-names",
            Theme::Words => "words",
            Theme::Spellings => "spellings",
            Theme::MultiName => "multi-name",
            Theme::Numbers => "numbers",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Matching mechanic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Proficiency {
    /// Pair matching.
    #[default]
    Easy,
    /// One-to-two matching across two board sections.
    Warning,
    /// Three-way grouping.
    Danger,
}

impl Proficiency {
    /// All proficiency levels, easiest first.
    pub const ALL: [Proficiency; 3] =
        [Proficiency::Easy, Proficiency::Warning, Proficiency::Danger];
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Proficiency::Easy => "easy",
            Proficiency::Warning => "warning",
            Proficiency::Danger => "danger",
        })
    }
}

/// Board size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// 4 pairs (8 cards).
    Easy,
    /// 8 pairs (16 cards).
    #[default]
    Medium,
    /// 12 pairs (24 cards).
    Hard,
}

impl Difficulty {
    /// Number of pairs dealt in pair mode.
    ///
    /// Other modes derive their group count from this value.
    #[must_use]
    pub const fn pairs_count(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 8,
            Difficulty::Hard => 12,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Content theme.
    pub theme: Theme,

    /// Matching mechanic.
    pub proficiency: Proficiency,

    /// Board size.
    pub difficulty: Difficulty,

    /// Delay before a mismatch is turned face down and the board unlocks.
    pub mismatch_delay_ms: u64,

    /// How strictly arithmetic groups are checked.
    pub validation: ValidationPolicy,

    /// Seed for content generation.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Symbols,
            proficiency: Proficiency::Easy,
            difficulty: Difficulty::Medium,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            validation: ValidationPolicy::Exact,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Create a config for a theme and proficiency with default settings.
    #[must_use]
    pub fn new(theme: Theme, proficiency: Proficiency) -> Self {
        Self {
            theme,
            proficiency,
            ..Self::default()
        }
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay_ms: u64) -> Self {
        self.mismatch_delay_ms = delay_ms;
        self
    }

    /// Set the arithmetic validation policy.
    #[must_use]
    pub fn with_validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }

    /// Set the content seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Resolve the matching mode for this theme and proficiency.
    pub fn mode(&self) -> Result<MatchMode> {
        use Proficiency::{Danger, Easy, Warning};

        let mode = match (self.theme, self.proficiency) {
            (Theme::Symbols, Easy) => MatchMode::Pair(PairRule::IdenticalValue),
            (Theme::EmojiNames, Easy) => {
                MatchMode::Pair(PairRule::Complementary(Role::Emoji, Role::Name))
            }
            (Theme::Words, Easy) | (Theme::Spellings, Warning) => {
                MatchMode::Pair(PairRule::Complementary(Role::Word, Role::Meaning))
            }
            (Theme::Spellings, Easy) => {
                MatchMode::Pair(PairRule::Complementary(Role::Word, Role::Spelling))
            }
            (Theme::Symbols | Theme::EmojiNames, Warning) => MatchMode::Warning,
            (Theme::Symbols | Theme::EmojiNames, Danger) => MatchMode::Danger(TriadRule::Group),
            (Theme::Words | Theme::Spellings, Danger) => {
                MatchMode::Danger(TriadRule::DistinctRoles)
            }
            (Theme::MultiName, Easy) => MatchMode::MultiName,
            (Theme::Numbers, Easy) => MatchMode::NumberAddition,
            (Theme::Numbers, Warning) => MatchMode::NumberMultiplication,
            (Theme::Numbers, Danger) => MatchMode::Danger(TriadRule::Arithmetic),
            (theme @ (Theme::Words | Theme::MultiName), proficiency) => {
                return Err(SetupError::UnknownMode { theme, proficiency });
            }
        };
        Ok(mode)
    }

    /// Number of match groups dealt for this configuration.
    pub fn group_count(&self) -> Result<usize> {
        let pairs = self.difficulty.pairs_count();
        let count = match self.mode()? {
            MatchMode::Pair(_) => pairs,
            MatchMode::Warning => (pairs / 3).max(1),
            MatchMode::Danger(TriadRule::Arithmetic) => pairs,
            MatchMode::Danger(_) => pairs / 2,
            MatchMode::MultiName => (pairs / 3).max(1),
            MatchMode::NumberAddition | MatchMode::NumberMultiplication => (pairs / 3).max(1) * 2,
        };
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.mismatch_delay_ms, 1000);
        assert_eq!(config.validation, ValidationPolicy::Exact);
        assert_eq!(config.difficulty.pairs_count(), 8);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::new(Theme::Numbers, Proficiency::Danger)
            .with_difficulty(Difficulty::Hard)
            .with_mismatch_delay(250)
            .with_validation(ValidationPolicy::Lenient)
            .with_seed(9);

        assert_eq!(config.theme, Theme::Numbers);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.mismatch_delay_ms, 250);
        assert_eq!(config.validation, ValidationPolicy::Lenient);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_mode_table() {
        let mode = |t, p| SessionConfig::new(t, p).mode();

        assert_eq!(
            mode(Theme::Symbols, Proficiency::Easy),
            Ok(MatchMode::Pair(PairRule::IdenticalValue))
        );
        assert_eq!(mode(Theme::EmojiNames, Proficiency::Warning), Ok(MatchMode::Warning));
        assert_eq!(
            mode(Theme::Spellings, Proficiency::Danger),
            Ok(MatchMode::Danger(TriadRule::DistinctRoles))
        );
        assert_eq!(mode(Theme::MultiName, Proficiency::Easy), Ok(MatchMode::MultiName));
        assert_eq!(mode(Theme::Numbers, Proficiency::Easy), Ok(MatchMode::NumberAddition));
        assert_eq!(
            mode(Theme::Numbers, Proficiency::Warning),
            Ok(MatchMode::NumberMultiplication)
        );
        assert_eq!(
            mode(Theme::Numbers, Proficiency::Danger),
            Ok(MatchMode::Danger(TriadRule::Arithmetic))
        );
    }

    #[test]
    fn test_unknown_mode() {
        for (theme, proficiency) in [
            (Theme::Words, Proficiency::Warning),
            (Theme::MultiName, Proficiency::Warning),
            (Theme::MultiName, Proficiency::Danger),
        ] {
            assert_eq!(
                SessionConfig::new(theme, proficiency).mode(),
                Err(SetupError::UnknownMode { theme, proficiency })
            );
        }
    }

    #[test]
    fn test_group_count() {
        let count = |t, p, d| {
            SessionConfig::new(t, p)
                .with_difficulty(d)
                .group_count()
                .unwrap()
        };

        assert_eq!(count(Theme::Symbols, Proficiency::Easy, Difficulty::Easy), 4);
        assert_eq!(count(Theme::Symbols, Proficiency::Warning, Difficulty::Medium), 2);
        assert_eq!(count(Theme::Symbols, Proficiency::Danger, Difficulty::Hard), 6);
        assert_eq!(count(Theme::MultiName, Proficiency::Easy, Difficulty::Easy), 1);
        assert_eq!(count(Theme::Numbers, Proficiency::Easy, Difficulty::Medium), 4);
        assert_eq!(count(Theme::Numbers, Proficiency::Danger, Difficulty::Easy), 4);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::new(Theme::EmojiNames, Proficiency::Warning);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"emoji-names\""));
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
