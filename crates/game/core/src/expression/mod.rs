//! Player-typed arithmetic over the rolled dice.
//!
//! The pipeline runs in three stages:
//!
//! 1. [`ExpressionValidator`] checks the raw text: balanced brackets, every
//!    token separated by a space, each die used exactly once, and exactly
//!    `num_dice - 1` operators.
//! 2. [`to_postfix`] rewrites the infix tokens into postfix order
//!    (shunting-yard). Words that are not numbers, operators or brackets
//!    are skipped, as the validator ignores them too.
//! 3. [`evaluate`] folds the postfix tokens on a value stack.
//!
//! ## Examples
//!
//! ```
//! use game_core::expression::{evaluate, to_postfix};
//!
//! let postfix = to_postfix("( 3 + 3 ) * 1");
//! assert_eq!(postfix.to_string(), "3 3 + 1 *");
//! assert_eq!(evaluate(&postfix), Ok(6));
//! ```

mod convert;
mod error;
mod evaluate;
mod validate;

pub use convert::{Postfix, to_postfix};
pub use error::{EvalError, ExpressionError, ValidationError};
pub use evaluate::evaluate;
pub use validate::{ExpressionValidator, is_balanced, is_space_delimited};

use std::fmt;

/// Binary arithmetic operator.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl Operator {
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Binding strength: `+ -` bind at 1, `* /` at 2.
    ///
    /// There is no associativity flag. Equal precedence pops left to right,
    /// which is correct for all four operators here but would be wrong for a
    /// right-associative operator.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator. Division truncates toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        match self {
            Self::Add => lhs.checked_add(rhs).ok_or(EvalError::Overflow),
            Self::Sub => lhs.checked_sub(rhs).ok_or(EvalError::Overflow),
            Self::Mul => lhs.checked_mul(rhs).ok_or(EvalError::Overflow),
            Self::Div => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_div(rhs).ok_or(EvalError::Overflow)
            }
        }
    }
}

/// The three bracket families. Each closer only matches its own opener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BracketKind {
    Round,
    Square,
    Curly,
}

impl BracketKind {
    pub fn opening(symbol: char) -> Option<Self> {
        match symbol {
            '(' => Some(Self::Round),
            '[' => Some(Self::Square),
            '{' => Some(Self::Curly),
            _ => None,
        }
    }

    pub fn closing(symbol: char) -> Option<Self> {
        match symbol {
            ')' => Some(Self::Round),
            ']' => Some(Self::Square),
            '}' => Some(Self::Curly),
            _ => None,
        }
    }

    pub const fn open_char(self) -> char {
        match self {
            Self::Round => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    pub const fn close_char(self) -> char {
        match self {
            Self::Round => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }
}

/// One whitespace-delimited token of an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    Operand(i64),
    Operator(Operator),
    Open(BracketKind),
    Close(BracketKind),
}

impl Token {
    /// Parses a single token. Integers take priority, so `-3` is an operand
    /// while a lone `-` is the subtraction operator.
    pub fn parse(raw: &str) -> Option<Self> {
        if let Ok(value) = raw.parse::<i64>() {
            return Some(Self::Operand(value));
        }
        if let Ok(operator) = raw.parse::<Operator>() {
            return Some(Self::Operator(operator));
        }
        let mut chars = raw.chars();
        let symbol = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        BracketKind::opening(symbol)
            .map(Self::Open)
            .or_else(|| BracketKind::closing(symbol).map(Self::Close))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::Operator(operator) => write!(f, "{operator}"),
            Self::Open(kind) => write!(f, "{}", kind.open_char()),
            Self::Close(kind) => write!(f, "{}", kind.close_char()),
        }
    }
}

/// Splits `input` on whitespace and parses every token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    input
        .split_whitespace()
        .map(|raw| Token::parse(raw).ok_or_else(|| EvalError::InvalidToken(raw.to_string())))
        .collect()
}

/// Converts and evaluates an infix expression in one step.
pub fn evaluate_infix(input: &str) -> Result<i64, EvalError> {
    evaluate(&to_postfix(input))
}
