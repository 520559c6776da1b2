//! Reflection, quarter-turn rotation and time evolution of a pattern.
//!
//! The order is fixed: evolve the set cells, rebuild the clear cells as the
//! complement inside the bounding box, then remap every point of the box.
//! The result keeps the box's top-left corner where it was.

use super::{BoundingBox, Cell, LivingSet, PatternDescription, step};

/// How a sub-pattern is altered before placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TransformSpec {
    /// Flip columns (left/right)
    pub mirror_x: bool,
    /// Flip rows (top/bottom)
    pub mirror_y: bool,
    /// Clockwise quarter turns, any integer
    pub rotation: i64,
    /// Generations to advance before remapping
    pub time: u32,
}

impl TransformSpec {
    pub const IDENTITY: Self = Self { mirror_x: false, mirror_y: false, rotation: 0, time: 0 };

    /// Reduce rotation to 0 or 1; each half turn taken off flips both mirrors
    pub fn normalized(mut self) -> Self {
        while self.rotation >= 2 {
            self.rotation -= 2;
            self.mirror_x = !self.mirror_x;
            self.mirror_y = !self.mirror_y;
        }
        while self.rotation < 0 {
            self.rotation += 2;
            self.mirror_x = !self.mirror_x;
            self.mirror_y = !self.mirror_y;
        }
        self
    }

    /// Map box-relative (column, row) of a `width` x `height` box.
    /// Expects a normalized spec.
    fn remap(&self, i: i64, j: i64, width: i64, height: i64) -> (i64, i64) {
        let ci = if self.mirror_x { width - 1 - i } else { i };
        let cj = if self.mirror_y { height - 1 - j } else { j };
        if self.rotation == 0 { (ci, cj) } else { (height - 1 - cj, ci) }
    }
}

/// Apply `spec` to `pattern`, returning a closed pattern: every point of the
/// output box is in exactly one of the two lists.
pub fn transform(pattern: &PatternDescription, spec: TransformSpec) -> PatternDescription {
    let Some(input_box) = pattern.bounds() else {
        return PatternDescription::default();
    };

    let mut living: LivingSet = pattern.set_cells.iter().copied().collect();
    let bounds = if spec.time == 0 {
        input_box
    } else {
        living = step::step_n(&living, spec.time);
        match BoundingBox::of(&living) {
            Some(b) => b,
            None => return PatternDescription::default(),
        }
    };

    // rotation 2 becomes both mirrors, so this must happen before remapping
    let spec = spec.normalized();
    let (width, height) = (bounds.width(), bounds.height());

    let mut out = PatternDescription::default();
    for cell in bounds.cells() {
        let (i, j) = bounds.to_local(cell);
        let (ti, tj) = spec.remap(i, j, width, height);
        let target: Cell = bounds.from_local(ti, tj);
        if living.contains(&cell) {
            out.set_cells.push(target);
        } else {
            out.clear_cells.push(target);
        }
    }
    out
}
