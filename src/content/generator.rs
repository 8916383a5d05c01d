//! Deck generation for every configured mode.
//!
//! Generation is deterministic: the same `SessionConfig` (seed included)
//! always produces the same cards in the same order.

use super::themes::{CONFUSABLES, EMOJI_NAMES, MULTI_NAMES, SPELLINGS, SYMBOLS, WORDS};
use crate::cards::{ArithmeticFact, Card, CardValue, Operator, Pool, Role};
use crate::core::{CardId, GameRng, GroupId, SessionConfig, Theme};
use crate::error::{Result, SetupError};
use crate::rules::{MatchMode, PairRule, TriadRule};

/// Sums drawn for addition groups.
const SUM_RANGE: std::ops::RangeInclusive<i64> = 5..=20;

/// Products drawn for multiplication groups.
const PRODUCT_RANGE: std::ops::RangeInclusive<i64> = 6..=47;

/// Build a shuffled deck for `config`.
///
/// ```
/// use memory_match::content;
/// use memory_match::core::{Difficulty, Proficiency, SessionConfig, Theme};
///
/// let config = SessionConfig::new(Theme::Numbers, Proficiency::Easy)
///     .with_difficulty(Difficulty::Hard);
/// let cards = content::generate(&config).unwrap();
///
/// // 12 / 3 = 4, doubled to 8 addition groups of 3 cards.
/// assert_eq!(cards.len(), 24);
/// assert!(cards.iter().all(|c| c.fact.is_some()));
/// ```
pub fn generate(config: &SessionConfig) -> Result<Vec<Card>> {
    let mode = config.mode()?;
    let groups = config.group_count()?;
    let mut rng = GameRng::new(config.seed);
    let mut dealer = Dealer::default();
    let theme = config.theme;

    match mode {
        MatchMode::Pair(rule) => deal_pairs(&mut dealer, &mut rng, config, rule, groups)?,
        MatchMode::Warning => deal_warning(&mut dealer, &mut rng, config, groups)?,
        MatchMode::Danger(TriadRule::Arithmetic) => deal_triads(&mut dealer, &mut rng, groups)?,
        MatchMode::Danger(rule) => deal_danger(&mut dealer, &mut rng, config, rule, groups)?,
        MatchMode::MultiName => {
            for (g, item) in pick(&mut rng, MULTI_NAMES, groups, theme)?.into_iter().enumerate() {
                dealer.deal(g, Role::Emoji, item.emoji);
                dealer.deal(g, Role::Name, item.names[0]);
                dealer.deal(g, Role::Name, item.names[1]);
            }
        }
        MatchMode::NumberAddition => deal_addition(&mut dealer, &mut rng, groups)?,
        MatchMode::NumberMultiplication => deal_multiplication(&mut dealer, &mut rng, groups)?,
    }

    let mut cards = dealer.cards;
    rng.for_context("shuffle").shuffle(&mut cards);

    log::debug!(
        "generated {} cards in {} groups for {} ({}), seed {}",
        cards.len(),
        groups,
        theme,
        mode,
        rng.seed()
    );

    Ok(cards)
}

/// Hands out sequential card ids.
#[derive(Default)]
struct Dealer {
    cards: Vec<Card>,
}

impl Dealer {
    fn deal(&mut self, group: usize, role: Role, value: impl Into<CardValue>) -> &mut Card {
        let id = CardId::new(self.cards.len() as u32);
        self.cards
            .push(Card::new(id, GroupId::new(group as u32), role, value));
        let last = self.cards.len() - 1;
        &mut self.cards[last]
    }

    fn deal_fact(
        &mut self,
        group: usize,
        role: Role,
        value: impl Into<CardValue>,
        fact: ArithmeticFact,
    ) {
        self.deal(group, role, value).fact = Some(fact);
    }
}

/// Choose `count` distinct entries from a table.
fn pick<T: Copy>(rng: &mut GameRng, table: &[T], count: usize, theme: Theme) -> Result<Vec<T>> {
    if count > table.len() {
        return Err(SetupError::NotEnoughContent {
            theme,
            requested: count,
            available: table.len(),
        });
    }
    Ok(rng.sample(table, count).into_iter().copied().collect())
}

fn quoted(word: &str) -> String {
    format!("\"{}\"", word)
}

fn unknown(config: &SessionConfig) -> SetupError {
    SetupError::UnknownMode {
        theme: config.theme,
        proficiency: config.proficiency,
    }
}

fn deal_pairs(
    dealer: &mut Dealer,
    rng: &mut GameRng,
    config: &SessionConfig,
    rule: PairRule,
    groups: usize,
) -> Result<()> {
    let theme = config.theme;
    match (rule, theme) {
        (PairRule::IdenticalValue, _) => {
            for (g, symbol) in pick(rng, SYMBOLS, groups, theme)?.into_iter().enumerate() {
                dealer.deal(g, Role::Plain, symbol);
                dealer.deal(g, Role::Plain, symbol);
            }
        }
        (PairRule::Complementary(Role::Emoji, Role::Name), _) => {
            for (g, item) in pick(rng, EMOJI_NAMES, groups, theme)?.into_iter().enumerate() {
                dealer.deal(g, Role::Emoji, item.emoji);
                dealer.deal(g, Role::Name, item.name);
            }
        }
        (PairRule::Complementary(Role::Word, Role::Meaning), Theme::Words) => {
            for (g, item) in pick(rng, WORDS, groups, theme)?.into_iter().enumerate() {
                dealer.deal(g, Role::Word, item.word);
                dealer.deal(g, Role::Meaning, item.meaning);
            }
        }
        (PairRule::Complementary(Role::Word, Role::Meaning), _) => {
            for (g, item) in pick(rng, CONFUSABLES, groups, theme)?.into_iter().enumerate() {
                dealer.deal(g, Role::Word, item.word);
                dealer.deal(g, Role::Meaning, item.meaning);
            }
        }
        (PairRule::Complementary(Role::Word, Role::Spelling), _) => {
            for (g, item) in pick(rng, SPELLINGS, groups, theme)?.into_iter().enumerate() {
                dealer.deal(g, Role::Word, quoted(item.word));
                dealer.deal(g, Role::Spelling, item.misspelling);
            }
        }
        _ => return Err(unknown(config)),
    }
    Ok(())
}

fn deal_warning(
    dealer: &mut Dealer,
    rng: &mut GameRng,
    config: &SessionConfig,
    groups: usize,
) -> Result<()> {
    let theme = config.theme;
    match theme {
        Theme::Symbols => {
            for (g, symbol) in pick(rng, SYMBOLS, groups, theme)?.into_iter().enumerate() {
                dealer.deal(g, Role::Plain, symbol).pool = Some(Pool::Section1);
                dealer.deal(g, Role::Plain, symbol).pool = Some(Pool::Section2);
                dealer.deal(g, Role::Plain, symbol).pool = Some(Pool::Section2);
            }
        }
        Theme::EmojiNames => {
            for (g, item) in pick(rng, EMOJI_NAMES, groups, theme)?.into_iter().enumerate() {
                dealer.deal(g, Role::Emoji, item.emoji).pool = Some(Pool::Section1);
                dealer.deal(g, Role::Emoji, item.emoji).pool = Some(Pool::Section2);
                dealer.deal(g, Role::Name, item.name).pool = Some(Pool::Section2);
            }
        }
        _ => return Err(unknown(config)),
    }
    Ok(())
}

fn deal_danger(
    dealer: &mut Dealer,
    rng: &mut GameRng,
    config: &SessionConfig,
    rule: TriadRule,
    groups: usize,
) -> Result<()> {
    let theme = config.theme;
    match (rule, theme) {
        (TriadRule::Group, Theme::Symbols) => {
            for (g, symbol) in pick(rng, SYMBOLS, groups, theme)?.into_iter().enumerate() {
                for _ in 0..3 {
                    dealer.deal(g, Role::Plain, symbol);
                }
            }
        }
        (TriadRule::Group, Theme::EmojiNames) => {
            for (g, item) in pick(rng, EMOJI_NAMES, groups, theme)?.into_iter().enumerate() {
                dealer.deal(g, Role::Emoji, item.emoji);
                dealer.deal(g, Role::Name, item.name);
                dealer.deal(g, Role::Name, item.name.to_uppercase());
            }
        }
        (TriadRule::DistinctRoles, Theme::Words) => {
            for (g, item) in pick(rng, WORDS, groups, theme)?.into_iter().enumerate() {
                dealer.deal(g, Role::Word, item.word);
                dealer.deal(g, Role::Meaning, item.meaning);
                dealer.deal(g, Role::Category, item.category);
            }
        }
        (TriadRule::DistinctRoles, Theme::Spellings) => {
            for (g, item) in pick(rng, SPELLINGS, groups, theme)?.into_iter().enumerate() {
                dealer.deal(g, Role::Word, quoted(item.word));
                dealer.deal(g, Role::Spelling, item.word);
                dealer.deal(g, Role::Meaning, item.meaning);
            }
        }
        _ => return Err(unknown(config)),
    }
    Ok(())
}

fn fact(left: i64, op: Operator, right: i64, group: usize) -> Result<ArithmeticFact> {
    ArithmeticFact::new(left, op, right).ok_or_else(|| {
        SetupError::group(
            GroupId::new(group as u32),
            format!("{} {} {} has no exact result", left, op, right),
        )
    })
}

/// One sum and its two distinct addends per group.
fn deal_addition(dealer: &mut Dealer, rng: &mut GameRng, groups: usize) -> Result<()> {
    for g in 0..groups {
        let sum = rng.gen_range(SUM_RANGE);
        let mut first = rng.gen_range(1..=sum - 1);
        if first * 2 == sum {
            first += 1;
        }
        let second = sum - first;
        let fact = fact(first, Operator::Add, second, g)?;

        dealer.deal_fact(g, Role::Sum, sum, fact);
        dealer.deal_fact(g, Role::Addend, first, fact);
        dealer.deal_fact(g, Role::Addend, second, fact);
    }
    Ok(())
}

/// One composite product and a non-trivial factor pair per group.
fn deal_multiplication(dealer: &mut Dealer, rng: &mut GameRng, groups: usize) -> Result<()> {
    for g in 0..groups {
        let (product, factors) = loop {
            let product = rng.gen_range(PRODUCT_RANGE);
            let factors = factors_of(product);
            if !factors.is_empty() {
                break (product, factors);
            }
        };
        let first = factors[rng.gen_index(factors.len())];
        let second = product / first;
        let fact = fact(first, Operator::Multiply, second, g)?;

        dealer.deal_fact(g, Role::Product, product, fact);
        dealer.deal_fact(g, Role::Factor, first, fact);
        dealer.deal_fact(g, Role::Factor, second, fact);
    }
    Ok(())
}

/// Divisors of `n` other than 1 and `n`, ascending.
fn factors_of(n: i64) -> Vec<i64> {
    let mut factors: Vec<i64> = (2..n).take_while(|i| i * i <= n).filter(|i| n % i == 0).collect();
    let upper: Vec<i64> = factors
        .iter()
        .rev()
        .map(|i| n / i)
        .filter(|&j| !factors.contains(&j))
        .collect();
    factors.extend(upper);
    factors
}

/// Result, left operand and operator per group, cycling `+ - × ÷`.
fn deal_triads(dealer: &mut Dealer, rng: &mut GameRng, groups: usize) -> Result<()> {
    for g in 0..groups {
        let op = Operator::ALL[g % Operator::ALL.len()];
        let (left, right) = match op {
            Operator::Add => (rng.gen_range(1..=10), rng.gen_range(1..=10)),
            Operator::Subtract => {
                let left = rng.gen_range(10..=19);
                (left, rng.gen_range(1..=left - 1))
            }
            Operator::Multiply => (rng.gen_range(2..=10), rng.gen_range(2..=10)),
            Operator::Divide => {
                let right = rng.gen_range(2..=10);
                let quotient = rng.gen_range(2..=10);
                (quotient * right, right)
            }
        };
        let fact = fact(left, op, right, g)?;

        dealer.deal_fact(g, Role::Result, fact.result, fact);
        dealer.deal_fact(g, Role::Operand, left, fact);
        dealer.deal_fact(g, Role::Operator, op, fact);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, Proficiency};
    use crate::rules::ValidationPolicy;
    use crate::cards::Deck;

    fn config(theme: Theme, proficiency: Proficiency) -> SessionConfig {
        SessionConfig::new(theme, proficiency).with_seed(99)
    }

    #[test]
    fn test_factors_of() {
        assert_eq!(factors_of(12), vec![2, 3, 4, 6]);
        assert_eq!(factors_of(36), vec![2, 3, 4, 6, 9, 12, 18]);
        assert!(factors_of(13).is_empty());
        assert!(factors_of(47).is_empty());
    }

    #[test]
    fn test_every_mode_builds_a_valid_deck() {
        for theme in Theme::ALL {
            for proficiency in Proficiency::ALL {
                let config = config(theme, proficiency);
                let Ok(mode) = config.mode() else {
                    assert!(generate(&config).is_err());
                    continue;
                };
                let cards = generate(&config).unwrap();
                let deck = Deck::new(cards, mode, ValidationPolicy::Exact).unwrap();
                assert_eq!(deck.len() % mode.group_size(), 0, "{} / {}", theme, proficiency);
            }
        }
    }

    #[test]
    fn test_addends_are_distinct() {
        let config = config(Theme::Numbers, Proficiency::Easy).with_difficulty(Difficulty::Hard);
        let cards = generate(&config).unwrap();

        for card in cards.iter().filter(|c| c.role == Role::Sum) {
            let fact = card.fact.unwrap();
            assert_ne!(fact.left, fact.right);
            assert!(SUM_RANGE.contains(&fact.result));
        }
    }

    #[test]
    fn test_triads_cycle_operators() {
        let config = config(Theme::Numbers, Proficiency::Danger).with_difficulty(Difficulty::Easy);
        let cards = generate(&config).unwrap();

        let mut ops: Vec<(u32, Operator)> = cards
            .iter()
            .filter_map(|c| c.value.as_operator().map(|op| (c.group.raw(), op)))
            .collect();
        ops.sort_by_key(|(g, _)| *g);
        let ops: Vec<Operator> = ops.into_iter().map(|(_, op)| op).collect();
        assert_eq!(ops, Operator::ALL.to_vec());
    }

    #[test]
    fn test_not_enough_content() {
        let mut rng = GameRng::new(1);
        let err = pick(&mut rng, MULTI_NAMES, 13, Theme::MultiName).unwrap_err();
        assert_eq!(
            err,
            SetupError::NotEnoughContent {
                theme: Theme::MultiName,
                requested: 13,
                available: 12,
            }
        );
    }
}
