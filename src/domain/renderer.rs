use super::Cell;

/// Drawing surface the core paints into after computing a change.
/// The simulation never depends on how (or whether) cells are shown.
pub trait Renderer {
    fn draw(&mut self, cell: Cell);
    fn erase(&mut self, cell: Cell);
}

/// Renderer that records calls, handy for headless runs and tests
#[derive(Default, Debug)]
pub struct RecordingRenderer {
    pub drawn: Vec<Cell>,
    pub erased: Vec<Cell>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, cell: Cell) {
        self.drawn.push(cell);
    }

    fn erase(&mut self, cell: Cell) {
        self.erased.push(cell);
    }
}
