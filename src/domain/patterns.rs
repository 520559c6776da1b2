use std::collections::BTreeMap;

use super::{BoundingBox, Cell, CellState, Renderer};

/// Decoded pattern: cells to set and cells to clear, in the pattern's own frame.
/// A cell never appears in both lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatternDescription {
    pub set_cells: Vec<Cell>,
    pub clear_cells: Vec<Cell>,
}

/// Absolute change to apply to the grid once a placement is fully resolved
pub type Diff = PatternDescription;

impl PatternDescription {
    pub fn new(set_cells: Vec<Cell>, clear_cells: Vec<Cell>) -> Self {
        Self { set_cells, clear_cells }
    }

    /// Build from per-cell states; the result is sorted so equal inputs compare equal
    pub fn from_states(states: BTreeMap<Cell, CellState>) -> Self {
        let (set, clear): (Vec<_>, Vec<_>) = states.into_iter().partition(|(_, s)| s.is_alive());
        Self {
            set_cells: set.into_iter().map(|(c, _)| c).collect(),
            clear_cells: clear.into_iter().map(|(c, _)| c).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.set_cells.is_empty() && self.clear_cells.is_empty()
    }

    /// Number of cells touched
    pub fn len(&self) -> usize {
        self.set_cells.len() + self.clear_cells.len()
    }

    /// Box around the union of both lists
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::of(self.set_cells.iter().chain(&self.clear_cells))
    }

    pub fn translate(self, dx: i64, dy: i64) -> Self {
        Self {
            set_cells: self.set_cells.into_iter().map(|c| c.offset(dx, dy)).collect(),
            clear_cells: self.clear_cells.into_iter().map(|c| c.offset(dx, dy)).collect(),
        }
    }

    /// Move the pattern so its box's top-left corner lands on `target`
    pub fn anchor_at(self, target: Cell) -> Self {
        match self.bounds() {
            Some(b) => {
                let corner = b.top_left();
                self.translate(target.x - corner.x, target.y - corner.y)
            }
            None => self,
        }
    }

    /// Record every cell into `states`; later writes win
    pub fn write_into(&self, states: &mut BTreeMap<Cell, CellState>) {
        for &c in &self.clear_cells {
            states.insert(c, CellState::Dead);
        }
        for &c in &self.set_cells {
            states.insert(c, CellState::Alive);
        }
    }

    /// Paint set cells and erase clear cells
    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.clear_cells.iter().for_each(|&c| renderer.erase(c));
        self.set_cells.iter().for_each(|&c| renderer.draw(c));
    }
}

/// Built-in pattern sources, in the same text formats as pattern files
pub mod presets {
    /// A named pattern file shipped with the program
    #[derive(Clone, Copy, Debug)]
    pub struct Preset {
        pub file_name: &'static str,
        pub description: &'static str,
        pub source: &'static str,
    }

    /// Glider - simplest spaceship, moves diagonally
    pub const GLIDER: Preset = Preset {
        file_name: "glider.rle",
        description: "Moves diagonally (period 4)",
        source: "#N Glider\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n",
    };

    /// Blinker - period 2 oscillator
    pub const BLINKER: Preset = Preset {
        file_name: "blinker.rle",
        description: "Oscillator (period 2)",
        source: "x = 3, y = 1\n3o!\n",
    };

    /// Block - simple still life, stored as a plain-text grid
    pub const BLOCK: Preset = Preset {
        file_name: "block.txt",
        description: "Still life",
        source: "2 2\n11\n11\n",
    };

    pub const TOAD: Preset = Preset {
        file_name: "toad.rle",
        description: "Oscillator (period 2)",
        source: "x = 4, y = 2\nb3o$3o!\n",
    };

    pub const BEACON: Preset = Preset {
        file_name: "beacon.rle",
        description: "Oscillator (period 2)",
        source: "x = 4, y = 4\n2o$o$3bo$2b2o!\n",
    };

    pub const PULSAR: Preset = Preset {
        file_name: "pulsar.rle",
        description: "Oscillator (period 3)",
        source: "x = 13, y = 13\n2b3o3b3o2$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o2$\n2b3o3b3o$o4bobo4bo$o4bobo4bo$o4bobo4bo2$2b3o3b3o!\n",
    };

    /// Lightweight Spaceship (LWSS)
    pub const LWSS: Preset = Preset {
        file_name: "lwss.rle",
        description: "Lightweight Spaceship (period 4)",
        source: "x = 5, y = 4\nbo2bo$o$o3bo$4o!\n",
    };

    /// Gosper Glider Gun - produces gliders indefinitely
    pub const GLIDER_GUN: Preset = Preset {
        file_name: "gosper_glider_gun.rle",
        description: "Produces gliders (period 30)",
        source: "#N Gosper glider gun\nx = 36, y = 9, rule = B3/S23\n24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$\n2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!\n",
    };

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub const R_PENTOMINO: Preset = Preset {
        file_name: "r_pentomino.rle",
        description: "Methuselah - stabilizes at gen 1103",
        source: "x = 3, y = 3\nb2o$2o$bo!\n",
    };

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub const ACORN: Preset = Preset {
        file_name: "acorn.rle",
        description: "Methuselah - stabilizes at gen 5206",
        source: "x = 7, y = 3\nbo$3bo$2o2b3o!\n",
    };

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Preset> {
        vec![
            GLIDER,
            BLINKER,
            BLOCK,
            TOAD,
            BEACON,
            PULSAR,
            LWSS,
            GLIDER_GUN,
            R_PENTOMINO,
            ACORN,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordingRenderer;

    #[test]
    fn test_anchor_moves_top_left() {
        let p = PatternDescription::new(
            vec![Cell::new(1, 0), Cell::new(2, -1)],
            vec![Cell::new(0, -1)],
        );
        let moved = p.anchor_at(Cell::new(10, 20));
        let b = moved.bounds().unwrap();
        assert_eq!(b.top_left(), Cell::new(10, 20));
        assert_eq!(moved.set_cells, vec![Cell::new(11, 20), Cell::new(12, 19)]);
        assert_eq!(moved.clear_cells, vec![Cell::new(10, 19)]);
    }

    #[test]
    fn test_later_writes_win() {
        let mut states = BTreeMap::new();
        PatternDescription::new(vec![Cell::new(0, 0)], vec![Cell::new(1, 0)]).write_into(&mut states);
        PatternDescription::new(vec![Cell::new(1, 0)], vec![Cell::new(0, 0)]).write_into(&mut states);
        let merged = PatternDescription::from_states(states);
        assert_eq!(merged.set_cells, vec![Cell::new(1, 0)]);
        assert_eq!(merged.clear_cells, vec![Cell::new(0, 0)]);
    }

    #[test]
    fn test_render_draws_and_erases() {
        let p = PatternDescription::new(vec![Cell::new(0, 0)], vec![Cell::new(1, 1), Cell::new(2, 2)]);
        let mut r = RecordingRenderer::default();
        p.render(&mut r);
        assert_eq!(r.drawn, vec![Cell::new(0, 0)]);
        assert_eq!(r.erased.len(), 2);
    }

    #[test]
    fn test_preset_names_are_unique() {
        let mut names: Vec<_> = presets::all_patterns().iter().map(|p| p.file_name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
