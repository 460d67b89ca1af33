use super::{Cell, Thresholds};
use rand::Rng;

/// Grid manages the 2D cellular automaton grid.
/// Dimensions are fixed at construction; evolution returns a new grid
/// instead of mutating in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Random grid where each cell is alive with probability `alive_probability`
    pub fn random(width: usize, height: usize, alive_probability: f64) -> Self {
        Self::random_with(&mut rand::rng(), width, height, alive_probability)
    }

    /// Random grid drawn from a caller-supplied generator
    pub fn random_with<R: Rng>(
        rng: &mut R,
        width: usize,
        height: usize,
        alive_probability: f64,
    ) -> Self {
        let p = alive_probability.clamp(0.0, 1.0);
        let cells = (0..width * height)
            .map(|_| Cell::from_alive(rng.random_bool(p)))
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors in the 3x3 block around (x, y), clipped to the
    /// grid edges. No wraparound: cells past the border do not exist.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let x_range = x.saturating_sub(1)..=(x + 1).min(self.width.saturating_sub(1));
        let y_range = y.saturating_sub(1)..=(y + 1).min(self.height.saturating_sub(1));

        y_range
            .flat_map(|ny| x_range.clone().map(move |nx| (nx, ny)))
            .filter(|&(nx, ny)| (nx, ny) != (x, y))
            .filter(|&(nx, ny)| self.cells[self.get_index(nx, ny)].is_alive())
            .count() as u8
    }

    /// Advance one generation. Every neighbor count is read from `self`,
    /// so the update is synchronous across the whole grid.
    pub fn step(&self, thresholds: &Thresholds) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                current.evolve(self.count_live_neighbors(x, y), thresholds)
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Positions of live cells, row-major
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}
