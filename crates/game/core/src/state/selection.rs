use std::collections::BTreeSet;

/// Which dice the player marked for reroll, plus the cursor position.
///
/// The cursor stays within `[0, len)`; with zero dice it stays at 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RerollSelection {
    cursor: usize,
    selected: BTreeSet<usize>,
    len: usize,
}

impl RerollSelection {
    pub fn new(len: usize) -> Self {
        Self {
            cursor: 0,
            selected: BTreeSet::new(),
            len,
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
        }
    }

    /// Flips the die under the cursor in or out of the selection.
    pub fn toggle(&mut self) {
        if self.cursor >= self.len {
            return;
        }
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
    }

    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected indices in ascending order.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_is_clamped() {
        let mut selection = RerollSelection::new(3);
        selection.move_left();
        assert_eq!(selection.cursor(), 0);
        for _ in 0..5 {
            selection.move_right();
        }
        assert_eq!(selection.cursor(), 2);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection = RerollSelection::new(3);
        selection.move_right();
        selection.toggle();
        assert!(selection.is_selected(1));
        selection.toggle();
        assert!(!selection.is_selected(1));
        assert_eq!(selection.selected().count(), 0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut selection = RerollSelection::new(3);
        selection.move_right();
        selection.toggle();
        selection.reset(3);
        assert_eq!(selection, RerollSelection::new(3));
    }

    #[test]
    fn empty_selection_ignores_toggle() {
        let mut selection = RerollSelection::default();
        selection.move_right();
        selection.toggle();
        assert_eq!(selection.cursor(), 0);
        assert_eq!(selection.selected().count(), 0);
    }
}
