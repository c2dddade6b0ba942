//! Dice rolled each round.
//!
//! A [`DiceSet`] is created with exactly `num_dice` dice and is never resized
//! afterwards; rerolls overwrite values in place.

mod rng;

pub use rng::{DieRoller, PcgRoller, ScriptedRoller};

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// A single six-sided die.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Die {
    value: u8,
}

impl Die {
    /// Overwrites the face with a new random draw.
    pub fn reroll<R: DieRoller + ?Sized>(&mut self, roller: &mut R) {
        self.value = roller.roll_die(GameConfig::DIE_SIDES);
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

/// Fixed-size ordered collection of dice for one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceSet {
    dice: ArrayVec<Die, { GameConfig::MAX_DICE }>,
}

impl DiceSet {
    /// Rolls `count` dice. `count` is clamped to [`GameConfig::MAX_DICE`];
    /// [`GameConfig::validate`] rejects larger values before play starts.
    pub fn roll<R: DieRoller + ?Sized>(count: usize, roller: &mut R) -> Self {
        let mut dice = Self::unrolled(count);
        dice.roll_all(roller);
        dice
    }

    /// `count` dice all showing 1, waiting for [`DiceSet::roll_all`].
    pub fn unrolled(count: usize) -> Self {
        let dice = (0..count.min(GameConfig::MAX_DICE))
            .map(|_| Die { value: 1 })
            .collect();
        Self { dice }
    }

    /// Assigns every die a fresh random face.
    pub fn roll_all<R: DieRoller + ?Sized>(&mut self, roller: &mut R) {
        for die in &mut self.dice {
            die.reroll(roller);
        }
    }

    /// Rerolls only the dice at `indices`. Indices outside `[0, len)` are
    /// skipped.
    pub fn reroll_selected<R, I>(&mut self, indices: I, roller: &mut R)
    where
        R: DieRoller + ?Sized,
        I: IntoIterator<Item = usize>,
    {
        for index in indices {
            match self.dice.get_mut(index) {
                Some(die) => die.reroll(roller),
                None => tracing::warn!(index, len = self.dice.len(), "reroll index out of range"),
            }
        }
    }

    pub fn values(&self) -> Vec<u8> {
        self.dice.iter().map(Die::value).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}

impl<const N: usize> From<[u8; N]> for DiceSet {
    /// Builds a set showing the given faces. Faces are clamped into 1..=6 and
    /// the set is truncated to [`GameConfig::MAX_DICE`].
    fn from(faces: [u8; N]) -> Self {
        let dice = faces
            .iter()
            .take(GameConfig::MAX_DICE)
            .map(|&face| Die {
                value: face.clamp(1, GameConfig::DIE_SIDES),
            })
            .collect();
        Self { dice }
    }
}
