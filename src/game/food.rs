use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::{Cell, Grid};

/// The single food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a uniformly random cell of the grid.
    ///
    /// Cells listed in `forbidden` are skipped. If nothing is left the whole
    /// grid is used instead, so relocation always succeeds.
    pub fn relocate<R: Rng>(&mut self, grid: &Grid, forbidden: &[Cell], rng: &mut R) {
        if !forbidden.is_empty() {
            let free: Vec<Cell> = grid.cells().filter(|c| !forbidden.contains(c)).collect();
            if let Some(&cell) = free.choose(rng) {
                self.position = cell;
                return;
            }
        }

        self.position = Cell::new(
            rng.gen_range(0..grid.cols()) as i32,
            rng.gen_range(0..grid.rows()) as i32,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_relocate_stays_in_bounds() {
        let grid = Grid::new(18, 18, 25);
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::new(Cell::new(10, 15));

        for _ in 0..500 {
            food.relocate(&grid, &[], &mut rng);
            assert!(grid.in_bounds(food.position()));
        }
    }

    #[test]
    fn test_relocate_reaches_every_cell() {
        let grid = Grid::new(3, 2, 1);
        let mut rng = StdRng::seed_from_u64(11);
        let mut food = Food::new(Cell::new(0, 0));
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            food.relocate(&grid, &[], &mut rng);
            seen.insert(food.position());
        }

        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_relocate_skips_forbidden_cells() {
        let grid = Grid::new(2, 2, 1);
        let forbidden = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1)];
        let mut rng = StdRng::seed_from_u64(3);
        let mut food = Food::new(Cell::new(0, 0));

        for _ in 0..50 {
            food.relocate(&grid, &forbidden, &mut rng);
            assert_eq!(food.position(), Cell::new(1, 1));
        }
    }

    #[test]
    fn test_relocate_full_grid_falls_back() {
        let grid = Grid::new(2, 1, 1);
        let forbidden = [Cell::new(0, 0), Cell::new(1, 0)];
        let mut rng = StdRng::seed_from_u64(5);
        let mut food = Food::new(Cell::new(0, 0));

        food.relocate(&grid, &forbidden, &mut rng);
        assert!(grid.in_bounds(food.position()));
    }
}
