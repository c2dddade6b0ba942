/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of dice rolled each round. Every die must appear exactly once in
    /// the submitted expression.
    pub num_dice: usize,
    /// Lives the player starts with.
    pub max_lives: u32,
    /// Number of sequential ailments (1..=N) to clear.
    pub num_ailments: u32,
    /// Upper bound on the phase stack depth of a single turn.
    pub phase_stack_capacity: usize,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of dice in a [`DiceSet`](crate::DiceSet).
    pub const MAX_DICE: usize = 6;
    /// Maximum number of ailments tracked by the registry.
    pub const MAX_AILMENTS: u32 = 36;
    /// Faces on every die.
    pub const DIE_SIDES: u8 = 6;
    /// Four phases are loaded at turn creation and one more may be pushed
    /// (re-entering the expression phase or game over).
    pub const MIN_PHASE_STACK_CAPACITY: usize = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_NUM_DICE: usize = 3;
    pub const DEFAULT_MAX_LIVES: u32 = 3;
    pub const DEFAULT_NUM_AILMENTS: u32 = 9;
    pub const DEFAULT_PHASE_STACK_CAPACITY: usize = 20;

    pub fn new() -> Self {
        Self {
            num_dice: Self::DEFAULT_NUM_DICE,
            max_lives: Self::DEFAULT_MAX_LIVES,
            num_ailments: Self::DEFAULT_NUM_AILMENTS,
            phase_stack_capacity: Self::DEFAULT_PHASE_STACK_CAPACITY,
        }
    }

    pub fn with_num_dice(mut self, num_dice: usize) -> Self {
        self.num_dice = num_dice;
        self
    }

    pub fn with_max_lives(mut self, max_lives: u32) -> Self {
        self.max_lives = max_lives;
        self
    }

    pub fn with_num_ailments(mut self, num_ailments: u32) -> Self {
        self.num_ailments = num_ailments;
        self
    }

    pub fn with_phase_stack_capacity(mut self, capacity: usize) -> Self {
        self.phase_stack_capacity = capacity;
        self
    }

    /// Checks every tunable against its bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_dice == 0 || self.num_dice > Self::MAX_DICE {
            return Err(ConfigError::DiceCount {
                requested: self.num_dice,
                max: Self::MAX_DICE,
            });
        }
        if self.max_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.num_ailments == 0 || self.num_ailments > Self::MAX_AILMENTS {
            return Err(ConfigError::AilmentCount {
                requested: self.num_ailments,
                max: Self::MAX_AILMENTS,
            });
        }
        if self.phase_stack_capacity < Self::MIN_PHASE_STACK_CAPACITY {
            return Err(ConfigError::PhaseStackTooSmall {
                requested: self.phase_stack_capacity,
                min: Self::MIN_PHASE_STACK_CAPACITY,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejected [`GameConfig`] values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("dice count must be between 1 and {max} (got {requested})")]
    DiceCount { requested: usize, max: usize },

    #[error("player must start with at least one life")]
    NoLives,

    #[error("ailment count must be between 1 and {max} (got {requested})")]
    AilmentCount { requested: u32, max: u32 },

    #[error("phase stack capacity must be at least {min} (got {requested})")]
    PhaseStackTooSmall { requested: usize, min: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.num_dice, 3);
        assert_eq!(config.max_lives, 3);
        assert_eq!(config.num_ailments, 9);
        assert_eq!(config.phase_stack_capacity, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            GameConfig::new().with_num_dice(7).validate(),
            Err(ConfigError::DiceCount {
                requested: 7,
                max: 6
            })
        );
        assert_eq!(
            GameConfig::new().with_max_lives(0).validate(),
            Err(ConfigError::NoLives)
        );
        assert!(matches!(
            GameConfig::new().with_num_ailments(0).validate(),
            Err(ConfigError::AilmentCount { .. })
        ));
        assert!(matches!(
            GameConfig::new().with_phase_stack_capacity(4).validate(),
            Err(ConfigError::PhaseStackTooSmall { .. })
        ));
    }
}
