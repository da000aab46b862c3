//! Randomized puzzle generator.

use crate::grid::{Grid, Position, GRID_SIZE};
use crate::rules::is_move_valid;
use crate::types::Difficulty;

/// Sudoku puzzle generator.
///
/// Produces a fully solved grid with a randomized backtracking fill,
/// then punches out cells at uniformly random positions until the
/// difficulty's removal count is reached. Removal is not checked for
/// solution uniqueness; high removal counts can occasionally yield a
/// puzzle with more than one valid completion.
pub struct Generator {
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from the system entropy source.
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a fixed seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a puzzle at the given difficulty.
    ///
    /// Returns the punched-out grid. The caller runs the solver on it to
    /// obtain the authoritative solution for session bookkeeping.
    pub fn generate(&mut self, difficulty: Difficulty) -> Grid {
        let mut grid = Grid::new();
        let filled = self.fill_grid(&mut grid);
        debug_assert!(filled, "an empty grid always admits a completion");
        self.remove_cells(&mut grid, difficulty.removal_count());
        grid
    }

    /// Fill all empty cells with a randomized backtracking search.
    ///
    /// Same search as the solver, but the candidate order is shuffled at
    /// each cell so repeated calls produce different completed grids.
    fn fill_grid(&mut self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return true,
        };

        let mut candidates: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        self.shuffle(&mut candidates);

        for &value in &candidates {
            if is_move_valid(grid, pos.row, pos.col, value) {
                grid.set(pos, Some(value));
                if self.fill_grid(grid) {
                    return true;
                }
                grid.set(pos, None);
            }
        }

        false
    }

    /// Clear uniformly random still-filled cells until `count` are gone.
    fn remove_cells(&mut self, grid: &mut Grid, count: usize) {
        let mut removed = 0;
        while removed < count {
            let pos = Position::new(
                self.rng.next_usize(GRID_SIZE),
                self.rng.next_usize(GRID_SIZE),
            );
            if grid.get(pos).is_some() {
                grid.set(pos, None);
                removed += 1;
            }
        }
    }

    /// Fisher-Yates shuffle.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.rng.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Small PCG-style PRNG, seeded via getrandom so it also works when the
/// engine is hosted in a wasm environment.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: a static counter still gives distinct streams.
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;

    #[test]
    fn test_generate_easy_leaves_46_givens() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator.generate(Difficulty::Easy);
        assert_eq!(puzzle.filled_count(), 81 - 35);
    }

    #[test]
    fn test_removal_counts_per_difficulty() {
        for &difficulty in Difficulty::all() {
            let mut generator = Generator::with_seed(7);
            let puzzle = generator.generate(difficulty);
            assert_eq!(
                puzzle.filled_count(),
                81 - difficulty.removal_count(),
                "wrong number of givens for {}",
                difficulty
            );
        }
    }

    #[test]
    fn test_generated_puzzles_are_solvable() {
        let solver = Solver::new();
        for seed in [1, 42, 99] {
            let mut generator = Generator::with_seed(seed);
            let puzzle = generator.generate(Difficulty::Hard);
            let solution = solver.solve(&puzzle).expect("generated puzzle must solve");
            assert!(solver.check_solution(&solution));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = Generator::with_seed(42).generate(Difficulty::Medium);
        let b = Generator::with_seed(42).generate(Difficulty::Medium);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Generator::with_seed(1).generate(Difficulty::Medium);
        let b = Generator::with_seed(2).generate(Difficulty::Medium);
        assert_ne!(a, b);
    }

    #[test]
    fn test_givens_are_consistent() {
        let mut generator = Generator::with_seed(123);
        let puzzle = generator.generate(Difficulty::Expert);
        for pos in Position::all() {
            if let Some(value) = puzzle.get(pos) {
                assert!(is_move_valid(&puzzle, pos.row, pos.col, value));
            }
        }
    }
}
