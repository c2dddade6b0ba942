use crate::ailments::AilmentRegistry;

/// The single player: remaining lives and the ailments still to clear.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Not clamped; a miss at zero lives would go negative, but the game
    /// ends as soon as lives reach zero.
    pub lives: i32,
    pub ailments: AilmentRegistry,
}

impl Player {
    pub fn new(max_lives: u32, num_ailments: u32) -> Self {
        Self {
            lives: i32::try_from(max_lives).unwrap_or(i32::MAX),
            ailments: AilmentRegistry::new(num_ailments),
        }
    }

    pub fn has_lives(&self) -> bool {
        self.lives > 0
    }

    pub fn has_ailments(&self) -> bool {
        self.ailments.has_any()
    }

    pub fn remove_life(&mut self) {
        self.lives -= 1;
    }
}
