use std::fmt;
use std::str::FromStr;

use super::{EvalError, Token, tokenize};

/// A token sequence in postfix order. Never contains brackets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.tokens.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
            for token in tokens {
                write!(f, " {token}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Postfix {
    type Err = EvalError;

    /// Reads space-separated postfix text. Brackets are rejected.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(input)?;
        if let Some(bracket) = tokens
            .iter()
            .find(|token| matches!(token, Token::Open(_) | Token::Close(_)))
        {
            return Err(EvalError::InvalidToken(bracket.to_string()));
        }
        Ok(Self { tokens })
    }
}

/// Rewrites a space-separated infix expression into postfix order.
///
/// Any bracket family groups. An operator pops every stacked operator of
/// greater or equal precedence before it is pushed, stopping at the nearest
/// opener. Unmatched openers left at the end are dropped; a stray closer
/// drains the operator stack. Words that are not tokens are skipped.
pub fn to_postfix(input: &str) -> Postfix {
    let mut output = Vec::new();
    let mut pending: Vec<Token> = Vec::new();

    for token in input.split_whitespace().filter_map(Token::parse) {
        match token {
            Token::Operand(_) => output.push(token),
            Token::Open(_) => pending.push(token),
            Token::Close(_) => {
                while let Some(top) = pending.pop() {
                    if matches!(top, Token::Open(_)) {
                        break;
                    }
                    output.push(top);
                }
            }
            Token::Operator(current) => {
                while let Some(&Token::Operator(top)) = pending.last() {
                    if top.precedence() < current.precedence() {
                        break;
                    }
                    output.push(Token::Operator(top));
                    pending.pop();
                }
                pending.push(token);
            }
        }
    }

    while let Some(top) = pending.pop() {
        if matches!(top, Token::Operator(_)) {
            output.push(top);
        }
    }

    Postfix { tokens: output }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postfix(input: &str) -> String {
        to_postfix(input).to_string()
    }

    #[test]
    fn left_to_right_for_equal_precedence() {
        assert_eq!(postfix("4 + 2 + 6"), "4 2 + 6 +");
        assert_eq!(postfix("6 - 2 - 1"), "6 2 - 1 -");
        assert_eq!(postfix("6 / 3 * 2"), "6 3 / 2 *");
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(postfix("1 + 2 * 3"), "1 2 3 * +");
        assert_eq!(postfix("1 * 2 + 3"), "1 2 * 3 +");
    }

    #[test]
    fn brackets_group() {
        assert_eq!(postfix("( 3 + 3 ) * 1"), "3 3 + 1 *");
        assert_eq!(postfix("[ 1 + 2 ] * { 3 - 4 }"), "1 2 + 3 4 - *");
        assert_eq!(postfix("( ( 1 + 2 ) )"), "1 2 +");
    }

    #[test]
    fn single_operand_and_empty_input() {
        assert_eq!(postfix("5"), "5");
        assert_eq!(postfix(""), "");
        assert!(to_postfix("").is_empty());
    }

    #[test]
    fn unknown_words_are_skipped() {
        assert_eq!(postfix("4 + 2 + 6 x"), "4 2 + 6 +");
        assert_eq!(postfix("1 ^ 2 * 3"), "1 2 3 *");
    }

    #[test]
    fn parsing_postfix_text_rejects_brackets() {
        assert_eq!("3 4 +".parse::<Postfix>().map(|p| p.tokens().len()), Ok(3));
        assert_eq!(
            "( 3 4 +".parse::<Postfix>(),
            Err(EvalError::InvalidToken("(".to_string()))
        );
    }
}
