//! Numbered ailments the player clears by hitting their value exactly.

/// One registry slot: the ailment number it holds, or cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AilmentSlot {
    Active(u32),
    Cleared,
}

/// Tracks which of the ailments `1..=N` are still active.
///
/// Slot `i` starts as `Active(i + 1)`. A cleared slot never becomes active
/// again until a new registry is created for a new game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AilmentRegistry {
    slots: Vec<AilmentSlot>,
}

impl AilmentRegistry {
    pub fn new(count: u32) -> Self {
        Self {
            slots: (1..=count).map(AilmentSlot::Active).collect(),
        }
    }

    /// True iff at least one ailment remains.
    pub fn has_any(&self) -> bool {
        self.slots
            .iter()
            .any(|slot| matches!(slot, AilmentSlot::Active(_)))
    }

    /// True iff `number` is in range and its slot is still active.
    /// Out-of-range numbers (including zero and negatives) are simply
    /// inactive.
    pub fn is_active(&self, number: i64) -> bool {
        self.slot_index(number)
            .is_some_and(|index| matches!(self.slots[index], AilmentSlot::Active(_)))
    }

    /// Clears ailment `number`. Callers check [`is_active`](Self::is_active)
    /// first; an out-of-range number leaves the registry unchanged.
    pub fn remove(&mut self, number: i64) {
        if let Some(index) = self.slot_index(number) {
            self.slots[index] = AilmentSlot::Cleared;
        }
    }

    /// Numbers still active, in ascending order.
    pub fn remaining(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            AilmentSlot::Active(number) => Some(*number),
            AilmentSlot::Cleared => None,
        })
    }

    pub fn slots(&self) -> &[AilmentSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot_index(&self, number: i64) -> Option<usize> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        (index < self.slots.len()).then_some(index)
    }
}
