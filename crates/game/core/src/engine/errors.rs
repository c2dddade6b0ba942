//! Fatal engine failures.
//!
//! Player mistakes never show up here; they are reported through the debug
//! message and [`GameEvent::ExpressionRejected`](super::GameEvent). An
//! [`EngineError`] means the phase machinery itself is broken and the
//! session must end.

use crate::config::ConfigError;
use crate::stack::StackError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("phase stack failure: {0}")]
    Phase(#[from] StackError),

    #[error("invalid game config: {0}")]
    Config(#[from] ConfigError),
}
