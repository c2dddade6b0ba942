//! Random source for die rolls.
//!
//! Rolls go through the [`DieRoller`] trait so the engine can be driven by a
//! seeded generator in play and by scripted values in tests.
//!
//! # Determinism
//!
//! [`PcgRoller`] produces the same sequence for the same seed, which makes a
//! whole game reproducible from `DICER_SEED`.

/// Source of die faces.
pub trait DieRoller {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&mut self, sides: u8) -> u8 {
        let sides = sides.max(1);
        (self.next_u32() % u32::from(sides)) as u8 + 1
    }
}

impl<R: DieRoller + ?Sized> DieRoller for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn roll_die(&mut self, sides: u8) -> u8 {
        (**self).roll_die(sides)
    }
}

impl<R: DieRoller + ?Sized> DieRoller for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn roll_die(&mut self, sides: u8) -> u8 {
        (**self).roll_die(sides)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug)]
pub struct PcgRoller {
    state: u64,
}

impl PcgRoller {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn from_seed(seed: u64) -> Self {
        // Scramble the seed once so that small seeds (0, 1, 2...) do not
        // start from nearly identical states.
        Self {
            state: Self::pcg_step(seed ^ 0x9e3779b97f4a7c15),
        }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl DieRoller for PcgRoller {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Replays a fixed list of faces in order, cycling when exhausted.
///
/// Used to script rounds in tests and to replay recorded games.
#[derive(Clone, Debug)]
pub struct ScriptedRoller {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedRoller {
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        Self {
            faces: faces.into(),
            cursor: 0,
        }
    }
}

impl DieRoller for ScriptedRoller {
    fn next_u32(&mut self) -> u32 {
        u32::from(self.roll_die(u8::MAX)).saturating_sub(1)
    }

    fn roll_die(&mut self, _sides: u8) -> u8 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
