//! World domain: the dense maze grid.

use crate::entities::{GameObject, ObjectTag};
use crate::world::GridPosition;

/// Fixed-size grid of optional occupants, indexed `[0, width) x [0, height)`.
///
/// Storage is a single column-major buffer. A cell is a wall exactly when its
/// occupant's kind is `Wall`.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    width: i32,
    height: i32,
    cells: Vec<Option<GameObject>>,
}

impl Maze {
    /// Empty maze. Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.is_inside(x, y).then(|| (x * self.height + y) as usize)
    }

    /// Place `object` at a cell, dropping whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the maze.
    pub fn set(&mut self, x: i32, y: i32, object: GameObject) {
        let Some(index) = self.index(x, y) else {
            panic!(
                "Maze::set({}, {}) outside {}x{} maze",
                x, y, self.width, self.height
            );
        };
        self.cells[index] = Some(object);
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&GameObject> {
        self.index(x, y).and_then(|i| self.cells[i].as_ref())
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut GameObject> {
        self.index(x, y).and_then(|i| self.cells[i].as_mut())
    }

    pub fn get_at(&self, cell: GridPosition) -> Option<&GameObject> {
        self.get(cell.x, cell.y)
    }

    pub fn get_at_mut(&mut self, cell: GridPosition) -> Option<&mut GameObject> {
        self.get_mut(cell.x, cell.y)
    }

    /// False outside the grid and for empty cells.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|object| object.kind().is_wall())
    }

    /// Cells a walker may not enter: outside the grid or a wall.
    pub fn is_blocked(&self, cell: GridPosition) -> bool {
        !self.is_inside(cell.x, cell.y) || self.is_wall(cell.x, cell.y)
    }

    /// Every occupant, column by column. Calling it again restarts the walk.
    pub fn objects(&self) -> impl Iterator<Item = &GameObject> + '_ {
        self.cells.iter().flatten()
    }

    pub fn count(&self, tag: ObjectTag) -> usize {
        self.objects()
            .filter(|object| object.kind().tag() == tag)
            .count()
    }

    /// In-bounds cells with no occupant, column by column.
    pub fn empty_cells(&self) -> Vec<GridPosition> {
        let mut cells = Vec::new();
        for x in 0..self.width {
            for y in 0..self.height {
                if self.get(x, y).is_none() {
                    cells.push(GridPosition::new(x, y));
                }
            }
        }
        cells
    }

    /// Tick every active occupant.
    ///
    /// Each occupant is lifted out of its slot while it updates so it can
    /// read the rest of the grid through the blocked predicate. Occupants
    /// stay in the slot they were loaded into even when they walk.
    pub fn update_objects(&mut self, dt: f32) {
        for index in 0..self.cells.len() {
            let Some(mut object) = self.cells[index].take() else {
                continue;
            };
            object.update(dt, |cell| self.is_blocked(cell));
            self.cells[index] = Some(object);
        }
    }

    /// One character per cell, top row first. Inactive occupants and empty
    /// cells print as `.`.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let symbol = match self.get(x, y) {
                    Some(object) if object.is_active() => object.kind().symbol(),
                    _ => '.',
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}
