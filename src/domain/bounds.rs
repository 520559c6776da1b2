use super::Cell;

/// Minimal axis-aligned rectangle around a set of cells (inclusive on all sides).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoundingBox {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl BoundingBox {
    /// Box around the given cells, `None` when there are none
    pub fn of<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Option<Self> {
        cells.into_iter().fold(None, |acc, c| {
            Some(match acc {
                None => Self { min_x: c.x, max_x: c.x, min_y: c.y, max_y: c.y },
                Some(b) => Self {
                    min_x: b.min_x.min(c.x),
                    max_x: b.max_x.max(c.x),
                    min_y: b.min_y.min(c.y),
                    max_y: b.max_y.max(c.y),
                },
            })
        })
    }

    pub const fn width(&self) -> i64 {
        self.max_x - self.min_x + 1
    }

    pub const fn height(&self) -> i64 {
        self.max_y - self.min_y + 1
    }

    /// Top-left corner: row-major frames start here
    pub const fn top_left(&self) -> Cell {
        Cell::new(self.min_x, self.max_y)
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min_x && cell.x <= self.max_x && cell.y >= self.min_y && cell.y <= self.max_y
    }

    /// Box-relative (column, row) of a cell, row 0 at the top
    pub const fn to_local(&self, cell: Cell) -> (i64, i64) {
        (cell.x - self.min_x, self.max_y - cell.y)
    }

    /// Inverse of [`to_local`](Self::to_local)
    pub const fn from_local(&self, i: i64, j: i64) -> Cell {
        Cell::new(self.min_x + i, self.max_y - j)
    }

    /// Every point inside the box, top row first
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.min_y..=self.max_y)
            .rev()
            .flat_map(move |y| (self.min_x..=self.max_x).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_box() {
        assert_eq!(BoundingBox::of(&Vec::<Cell>::new()), None);
    }

    #[test]
    fn test_box_dimensions() {
        let cells = vec![Cell::new(-2, 3), Cell::new(4, -1), Cell::new(0, 0)];
        let b = BoundingBox::of(&cells).unwrap();
        assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (-2, 4, -1, 3));
        assert_eq!(b.width(), 7);
        assert_eq!(b.height(), 5);
        assert_eq!(b.top_left(), Cell::new(-2, 3));
        assert_eq!(b.cells().count(), 35);
    }

    #[test]
    fn test_local_frame_round_trip() {
        let b = BoundingBox { min_x: 10, max_x: 12, min_y: -5, max_y: -3 };
        assert_eq!(b.to_local(Cell::new(10, -3)), (0, 0));
        assert_eq!(b.to_local(Cell::new(12, -5)), (2, 2));
        assert_eq!(b.from_local(1, 2), Cell::new(11, -5));
        assert_eq!(b.cells().next(), Some(b.top_left()));
    }
}
