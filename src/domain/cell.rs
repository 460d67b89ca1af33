use super::Thresholds;

/// Cell represents the fundamental unit of the grid.
/// Each cell is either Dead or Alive, never anything in between.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Compute the next state from the live neighbor count:
    /// 1. Live cell survives while `underpopulation <= neighbors <= overpopulation`
    /// 2. Dead cell is born with exactly `reproduction` neighbors
    /// 3. Everything else is dead next generation
    pub const fn evolve(self, neighbors: u8, thresholds: &Thresholds) -> Self {
        match self {
            Cell::Alive => Cell::from_alive(
                thresholds.underpopulation <= neighbors && neighbors <= thresholds.overpopulation,
            ),
            Cell::Dead => Cell::from_alive(neighbors == thresholds.reproduction),
        }
    }
}
