//! Failures of the expression pipeline.
//!
//! Every error here is recoverable: the engine shows the message and keeps
//! the player in the expression phase. The `Display` text of each variant is
//! what the player sees.

/// A submitted expression failed one of the well-formedness checks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Parenthesis not balanced")]
    UnbalancedBrackets,

    #[error("Every character must be separated by a space")]
    MissingSpace { position: usize },

    /// A die value was left unused, or an operand matched no remaining die.
    #[error("Expression doesn't include all dice rolls")]
    DiceMismatch,

    #[error("Too many operators")]
    TooManyOperators { expected: usize, found: usize },

    #[error("Too few operators")]
    TooFewOperators { expected: usize, found: usize },
}

/// Conversion or evaluation of a token stream failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// An operator found fewer than two values, or nothing was left at the end.
    #[error("Unbalanced postfix expression")]
    UnbalancedExpression,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result out of range")]
    Overflow,

    #[error("Unrecognized token '{0}'")]
    InvalidToken(String),
}

/// Any reason a submitted expression was turned away.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
