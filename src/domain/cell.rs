/// Cell is a position on the unbounded grid.
/// `y` grows upward, so the first row of a pattern file sits at the highest y.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift the cell by (dx, dy)
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The 8 cells of the Moore neighborhood
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// CellState is what a position holds in one generation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    pub const fn from_alive(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub const fn toggle(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}
