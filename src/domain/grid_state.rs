use rand::Rng;

use super::{Algorithm, BoundingBox, Cell, Diff, LivingSet, Renderer};

/// GridState owns the living cells of the current generation.
/// There is exactly one per simulation; callers pass it by reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridState {
    living: LivingSet,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self { living: cells.into_iter().collect() }
    }

    pub fn living(&self) -> &LivingSet {
        &self.living
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.living.contains(&cell)
    }

    pub fn population(&self) -> usize {
        self.living.len()
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::of(&self.living)
    }

    /// Mark alive; returns whether anything changed
    pub fn add_cell(&mut self, cell: Cell) -> bool {
        self.living.insert(cell)
    }

    /// Mark dead; returns whether anything changed
    pub fn remove_cell(&mut self, cell: Cell) -> bool {
        self.living.remove(&cell)
    }

    /// Flip the cell, returning its new state
    pub fn toggle_cell(&mut self, cell: Cell) -> bool {
        if self.living.remove(&cell) {
            false
        } else {
            self.living.insert(cell);
            true
        }
    }

    /// Apply a fully resolved diff: set cells become alive, clear cells dead
    pub fn apply(&mut self, diff: &Diff) {
        diff.clear_cells.iter().for_each(|&c| {
            self.remove_cell(c);
        });
        diff.set_cells.iter().for_each(|&c| {
            self.add_cell(c);
        });
    }

    /// Replace the generation wholesale with its successor
    pub fn advance(&mut self, algorithm: Algorithm) {
        self.living = algorithm.step(&self.living);
    }

    pub fn clear(&mut self) {
        self.living.clear();
    }

    /// Fill `area` with random cells (each alive with probability `density`)
    pub fn randomize(&mut self, area: BoundingBox, density: f64, rng: &mut impl Rng) {
        for cell in area.cells() {
            if rng.random_bool(density) {
                self.living.insert(cell);
            } else {
                self.living.remove(&cell);
            }
        }
    }

    /// Draw every living cell
    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.living.iter().for_each(|&c| renderer.draw(c));
    }

    /// Headed plain-text dump of the living set: `"<w> <h>"`, then rows of
    /// `1`/`0`, top row first. Readable back as a plain-text pattern.
    pub fn to_plain_text(&self) -> String {
        let Some(b) = self.bounds() else {
            return String::from("0 0\n");
        };
        let mut out = format!("{} {}\n", b.width(), b.height());
        for y in (b.min_y..=b.max_y).rev() {
            out.extend((b.min_x..=b.max_x).map(|x| if self.is_alive(Cell::new(x, y)) { '1' } else { '0' }));
            out.push('\n');
        }
        out
    }
}
