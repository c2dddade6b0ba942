use super::{EvalError, Postfix, Token};

/// Folds a postfix token sequence into a single integer.
///
/// Operands are pushed; an operator pops the right-hand side first, then the
/// left-hand side, and pushes the result. The value on top of the stack at
/// the end is the result. Extra values underneath are ignored.
pub fn evaluate(postfix: &Postfix) -> Result<i64, EvalError> {
    let mut values: Vec<i64> = Vec::with_capacity(postfix.tokens().len());

    for token in postfix.tokens() {
        match *token {
            Token::Operand(value) => values.push(value),
            Token::Operator(operator) => {
                let rhs = values.pop().ok_or(EvalError::UnbalancedExpression)?;
                let lhs = values.pop().ok_or(EvalError::UnbalancedExpression)?;
                values.push(operator.apply(lhs, rhs)?);
            }
            Token::Open(_) | Token::Close(_) => {
                return Err(EvalError::InvalidToken(token.to_string()));
            }
        }
    }

    values.last().copied().ok_or(EvalError::UnbalancedExpression)
}
