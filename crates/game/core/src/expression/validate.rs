use super::{BracketKind, Operator, ValidationError};

/// Checks a submitted expression against the dice it must use.
///
/// Checks run in a fixed order and stop at the first failure:
/// brackets, spacing, dice usage, then operator count.
#[derive(Clone, Debug)]
pub struct ExpressionValidator<'a> {
    dice: &'a [u8],
}

impl<'a> ExpressionValidator<'a> {
    pub fn new(dice: &'a [u8]) -> Self {
        Self { dice }
    }

    /// Exactly one operator fewer than the number of dice.
    pub fn required_operators(&self) -> usize {
        self.dice.len().saturating_sub(1)
    }

    pub fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if !is_balanced(input) {
            return Err(ValidationError::UnbalancedBrackets);
        }
        if let Some(position) = first_missing_space(input) {
            return Err(ValidationError::MissingSpace { position });
        }

        let mut remaining = self.dice.to_vec();
        let mut operators = 0usize;
        for symbol in input.chars() {
            if let Some(face) = symbol.to_digit(10) {
                let position = remaining
                    .iter()
                    .position(|&value| u32::from(value) == face)
                    .ok_or(ValidationError::DiceMismatch)?;
                remaining.swap_remove(position);
            } else if Operator::from_char(symbol).is_some() {
                operators += 1;
            }
        }
        if !remaining.is_empty() {
            return Err(ValidationError::DiceMismatch);
        }

        let expected = self.required_operators();
        match operators.cmp(&expected) {
            std::cmp::Ordering::Greater => Err(ValidationError::TooManyOperators {
                expected,
                found: operators,
            }),
            std::cmp::Ordering::Less => Err(ValidationError::TooFewOperators {
                expected,
                found: operators,
            }),
            std::cmp::Ordering::Equal => Ok(()),
        }
    }
}

/// True iff every closer matches the most recent unmatched opener of the
/// same family and nothing is left open. Non-bracket characters are ignored.
pub fn is_balanced(input: &str) -> bool {
    let mut open = Vec::new();
    for symbol in input.chars() {
        if let Some(kind) = BracketKind::opening(symbol) {
            open.push(kind);
        } else if let Some(kind) = BracketKind::closing(symbol) {
            if open.pop() != Some(kind) {
                return false;
            }
        }
    }
    open.is_empty()
}

/// True iff no two adjacent characters are both non-space.
pub fn is_space_delimited(input: &str) -> bool {
    first_missing_space(input).is_none()
}

fn first_missing_space(input: &str) -> Option<usize> {
    input
        .chars()
        .zip(input.chars().skip(1))
        .position(|(left, right)| left != ' ' && right != ' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::evaluate_infix;

    #[test]
    fn accepts_expression_using_every_die() {
        let validator = ExpressionValidator::new(&[4, 2, 6]);
        assert_eq!(validator.validate("4 + 2 + 6"), Ok(()));
        assert_eq!(validator.validate("( 6 - 4 ) * 2"), Ok(()));
    }

    #[test]
    fn bracket_balance() {
        assert!(is_balanced("( ( 1 + 2 ) )"));
        assert!(is_balanced("[ { ( ) } ]"));
        assert!(is_balanced("no brackets at all"));
        assert!(!is_balanced("( 1 + 2 ))"));
        assert!(!is_balanced("{ ( 1 ) ]"));
        assert!(!is_balanced("( 1"));
        assert!(!is_balanced(") 1 ("));
    }

    #[test]
    fn spacing_is_checked_between_every_pair() {
        assert!(is_space_delimited("1 + 2"));
        assert!(is_space_delimited(""));
        assert!(is_space_delimited("7"));
        assert!(!is_space_delimited("1 +2"));
        assert!(!is_space_delimited("12 + 3"));
    }

    #[test]
    fn unbalanced_wins_over_spacing() {
        let validator = ExpressionValidator::new(&[1, 2]);
        assert_eq!(
            validator.validate("(1 + 2"),
            Err(ValidationError::UnbalancedBrackets)
        );
    }

    #[test]
    fn missing_space_reports_position() {
        let validator = ExpressionValidator::new(&[4, 2, 6]);
        assert_eq!(
            validator.validate("4 + 2 +6"),
            Err(ValidationError::MissingSpace { position: 6 })
        );
    }

    #[test]
    fn unused_die_is_a_mismatch() {
        let validator = ExpressionValidator::new(&[4, 2, 6]);
        let err = validator.validate("4 + 2").unwrap_err();
        assert_eq!(err, ValidationError::DiceMismatch);
        assert_eq!(err.to_string(), "Expression doesn't include all dice rolls");
    }

    #[test]
    fn operand_without_matching_die_is_a_mismatch() {
        let validator = ExpressionValidator::new(&[4, 2, 6]);
        assert_eq!(
            validator.validate("4 + 2 + 5"),
            Err(ValidationError::DiceMismatch)
        );
    }

    #[test]
    fn repeated_faces_must_each_be_used() {
        let validator = ExpressionValidator::new(&[3, 3, 1]);
        assert_eq!(validator.validate("3 * 3 - 1"), Ok(()));
        assert_eq!(
            validator.validate("3 * 1 - 1"),
            Err(ValidationError::DiceMismatch)
        );
    }

    #[test]
    fn operator_count_must_match() {
        let validator = ExpressionValidator::new(&[1, 2]);
        assert_eq!(
            validator.validate("1 + - 2"),
            Err(ValidationError::TooManyOperators {
                expected: 1,
                found: 2
            })
        );

        let validator = ExpressionValidator::new(&[1, 2, 3]);
        assert_eq!(
            validator.validate("( 1 + 2 ) 3"),
            Err(ValidationError::TooFewOperators {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn other_characters_are_ignored() {
        let validator = ExpressionValidator::new(&[4, 2, 6]);
        assert_eq!(validator.validate("4 + 2 + 6 x"), Ok(()));
        assert_eq!(evaluate_infix("4 + 2 + 6 x"), Ok(12));

        // Ignored characters still count for spacing.
        assert_eq!(
            validator.validate("4 + 2 + 6x"),
            Err(ValidationError::MissingSpace { position: 8 })
        );
    }

    /// Three dice, two operators, three bracket shapes: accepted iff the
    /// operands are a permutation of the dice.
    #[test]
    fn three_dice_accepted_iff_operands_match() {
        let faces = 1..=6u8;
        let shapes = ["{a} + {b} * {c}", "( {a} - {b} ) / {c}", "{a} * [ {b} + {c} ]"];

        for a in faces.clone() {
            for b in faces.clone() {
                for c in faces.clone() {
                    let dice = [a, b, c];
                    let validator = ExpressionValidator::new(&dice);
                    let mut sorted_dice = dice;
                    sorted_dice.sort_unstable();

                    for x in faces.clone() {
                        for y in faces.clone() {
                            for z in faces.clone() {
                                let mut operands = [x, y, z];
                                operands.sort_unstable();
                                let expected = operands == sorted_dice;
                                for shape in shapes {
                                    let text = shape
                                        .replace("{a}", &x.to_string())
                                        .replace("{b}", &y.to_string())
                                        .replace("{c}", &z.to_string());
                                    assert_eq!(
                                        validator.validate(&text).is_ok(),
                                        expected,
                                        "dice {dice:?}, expression {text}"
                                    );
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn empty_input_fails_dice_usage() {
        let validator = ExpressionValidator::new(&[5]);
        assert_eq!(validator.validate(""), Err(ValidationError::DiceMismatch));
        assert_eq!(validator.validate("5"), Ok(()));
    }
}
