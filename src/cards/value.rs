//! Card payloads and arithmetic facts.
//!
//! ## CardValue Types
//!
//! - `Number`: numeric faces (sums, factors, results)
//! - `Text`: words, names, symbols
//! - `Operator`: the operator card of an arithmetic triad
//!
//! Arithmetic groups additionally carry an [`ArithmeticFact`] on every card,
//! so a selection can be checked by exact equality instead of plausibility.

use serde::{Deserialize, Serialize};

/// Arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in the order triads cycle through them.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Parse a display symbol. Accepts `*`, `x` and `/` as ASCII fallbacks.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '×' | '*' | 'x' => Some(Operator::Multiply),
            '÷' | '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply the operator.
    ///
    /// Returns `None` on overflow, division by zero, or inexact division.
    #[must_use]
    pub fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => {
                if right == 0 || left.checked_rem(right)? != 0 {
                    None
                } else {
                    left.checked_div(right)
                }
            }
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The comparable payload shown on a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardValue {
    Number(i64),
    Text(String),
    Operator(Operator),
}

impl CardValue {
    /// Get as number if this is a Number value.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            CardValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CardValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as operator if this is an Operator value.
    #[must_use]
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            CardValue::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardValue::Number(v) => write!(f, "{}", v),
            CardValue::Text(s) => f.write_str(s),
            CardValue::Operator(op) => write!(f, "{}", op),
        }
    }
}

impl From<i64> for CardValue {
    fn from(v: i64) -> Self {
        CardValue::Number(v)
    }
}

impl From<i32> for CardValue {
    fn from(v: i32) -> Self {
        CardValue::Number(v as i64)
    }
}

impl From<&str> for CardValue {
    fn from(v: &str) -> Self {
        CardValue::Text(v.to_string())
    }
}

impl From<String> for CardValue {
    fn from(v: String) -> Self {
        CardValue::Text(v)
    }
}

impl From<Operator> for CardValue {
    fn from(op: Operator) -> Self {
        CardValue::Operator(op)
    }
}

/// A complete equation: `left op right = result`.
///
/// ```
/// use memory_match::cards::{ArithmeticFact, Operator};
///
/// let fact = ArithmeticFact::new(12, Operator::Divide, 4).unwrap();
/// assert_eq!(fact.result, 3);
/// assert!(fact.holds());
/// assert!(fact.has_operand(4));
///
/// // Inexact division has no fact.
/// assert!(ArithmeticFact::new(7, Operator::Divide, 2).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArithmeticFact {
    pub left: i64,
    pub op: Operator,
    pub right: i64,
    pub result: i64,
}

impl ArithmeticFact {
    /// Build a fact by computing the result.
    #[must_use]
    pub fn new(left: i64, op: Operator, right: i64) -> Option<Self> {
        op.apply(left, right).map(|result| Self {
            left,
            op,
            right,
            result,
        })
    }

    /// Check that the stored result is what the operator produces.
    #[must_use]
    pub fn holds(&self) -> bool {
        self.op.apply(self.left, self.right) == Some(self.result)
    }

    /// Check whether `value` is one of the two operands.
    #[must_use]
    pub fn has_operand(&self, value: i64) -> bool {
        self.left == value || self.right == value
    }
}

impl std::fmt::Display for ArithmeticFact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} = {}", self.left, self.op, self.right, self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol('%'), None);
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(7, 3), Some(10));
        assert_eq!(Operator::Subtract.apply(15, 6), Some(9));
        assert_eq!(Operator::Multiply.apply(4, 6), Some(24));
        assert_eq!(Operator::Divide.apply(24, 6), Some(4));
        assert_eq!(Operator::Divide.apply(25, 6), None);
        assert_eq!(Operator::Divide.apply(25, 0), None);
        assert_eq!(Operator::Add.apply(i64::MAX, 1), None);
    }

    #[test]
    fn test_fact_holds() {
        let fact = ArithmeticFact::new(7, Operator::Add, 3).unwrap();
        assert_eq!(fact.result, 10);
        assert!(fact.holds());
        assert_eq!(fact.to_string(), "7 + 3 = 10");

        let forged = ArithmeticFact {
            result: 11,
            ..fact
        };
        assert!(!forged.holds());
    }

    #[test]
    fn test_card_value_accessors() {
        assert_eq!(CardValue::from(5).as_number(), Some(5));
        assert_eq!(CardValue::from("cat").as_text(), Some("cat"));
        assert_eq!(
            CardValue::from(Operator::Divide).as_operator(),
            Some(Operator::Divide)
        );
        assert_eq!(CardValue::from("cat").as_number(), None);
        assert_eq!(CardValue::from(Operator::Multiply).to_string(), "×");
    }
}
