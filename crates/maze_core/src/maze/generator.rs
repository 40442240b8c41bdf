//! Randomized recursive-backtracker maze generation
//!
//! Cells at odd (col, row) coordinates are carveable nodes; even
//! coordinates are the walls between them. The carve walks node to node
//! in steps of two, knocking out the intervening wall cell, using an
//! explicit stack so grids up to a few hundred cells per side never
//! touch recursion limits.
//!
//! Generation is a pure function of `(size, rng stream)`, which keeps
//! every layout reproducible from a seed.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Cell, Grid};

/// The four axis directions, in node steps of two
const DIRECTIONS: [(isize, isize); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// Errors rejected at generation entry
///
/// These are configuration faults: no partial grid is produced.
/// Internal carve faults are not represented here; they are logged and
/// recovered from inside [`MazeGenerator::generate`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GenerationError {
    /// Maze size must be odd so walls can sit between cell nodes
    #[error("maze size must be odd, got {0}")]
    SizeEven(usize),

    /// Maze size below the smallest usable maze
    #[error("maze size must be at least 5, got {0}")]
    SizeTooSmall(usize),
}

/// A carve step addressed a cell outside the grid
///
/// This can only happen through a programming defect, never through
/// runtime input, so it is logged and recovered rather than surfaced.
#[derive(Debug, Clone, Copy)]
struct CarveFault {
    col: isize,
    row: isize,
}

/// Procedural maze generator
pub struct MazeGenerator;

impl MazeGenerator {
    /// Generate a perfect maze of the given size
    ///
    /// The returned grid is a spanning tree over its open cells: fully
    /// connected, no cycles. The start cell is chosen at random from the
    /// interior nodes; the exit is always the bottom-right interior cell
    /// `(size - 2, size - 2)`.
    pub fn generate<R: Rng>(size: usize, rng: &mut R) -> Result<Grid, GenerationError> {
        if size < 5 {
            return Err(GenerationError::SizeTooSmall(size));
        }
        if size % 2 == 0 {
            return Err(GenerationError::SizeEven(size));
        }

        let exit = (size - 2, size - 2);
        let mut start = Self::random_node(size, rng);
        if start == exit {
            // The exit cell cannot double as the spawn cell
            start = (1, 1);
        }

        let mut cells = match Self::carve(size, start, rng) {
            Ok(cells) => cells,
            Err(fault) => {
                log::error!(
                    "maze carve addressed out-of-bounds cell ({}, {}); regenerating from fallback start",
                    fault.col,
                    fault.row
                );
                start = (1, 1);
                match Self::carve(size, start, rng) {
                    Ok(cells) => cells,
                    Err(fault) => {
                        log::error!(
                            "fallback carve also faulted at ({}, {}); using comb layout",
                            fault.col,
                            fault.row
                        );
                        Self::comb_layout(size)
                    }
                }
            }
        };

        // The exit is forced open even if the carve never reached it
        cells[exit.1 * size + exit.0] = Cell::Exit;
        cells[start.1 * size + start.0] = Cell::Start;

        Ok(Grid::new(size, cells, start, exit))
    }

    /// Pick a random carveable node: odd coordinates inside the border
    fn random_node<R: Rng>(size: usize, rng: &mut R) -> (usize, usize) {
        let nodes_per_side = (size - 1) / 2;
        let col = rng.gen_range(0..nodes_per_side) * 2 + 1;
        let row = rng.gen_range(0..nodes_per_side) * 2 + 1;
        (col, row)
    }

    /// Depth-first carve over the node grid with an explicit stack
    fn carve<R: Rng>(
        size: usize,
        start: (usize, usize),
        rng: &mut R,
    ) -> Result<Vec<Cell>, CarveFault> {
        let mut cells = vec![Cell::Wall; size * size];
        Self::open_cell(&mut cells, size, start.0 as isize, start.1 as isize)?;

        let mut stack: Vec<(usize, usize)> = vec![start];

        while let Some(&(col, row)) = stack.last() {
            let mut directions = DIRECTIONS;
            directions.shuffle(rng);

            let mut advanced = false;
            for (dc, dr) in directions {
                let nc = col as isize + dc;
                let nr = row as isize + dr;

                // Neighbor must be an interior node still walled off
                if nc < 1 || nr < 1 || nc >= (size - 1) as isize || nr >= (size - 1) as isize {
                    continue;
                }
                if cells[nr as usize * size + nc as usize] != Cell::Wall {
                    continue;
                }

                // Knock out the wall between the two nodes, then the node itself
                Self::open_cell(&mut cells, size, col as isize + dc / 2, row as isize + dr / 2)?;
                Self::open_cell(&mut cells, size, nc, nr)?;

                stack.push((nc as usize, nr as usize));
                advanced = true;
                break;
            }

            if !advanced {
                stack.pop();
            }
        }

        Ok(cells)
    }

    /// Bounds-checked cell write
    fn open_cell(
        cells: &mut [Cell],
        size: usize,
        col: isize,
        row: isize,
    ) -> Result<(), CarveFault> {
        if col < 0 || row < 0 || col as usize >= size || row as usize >= size {
            return Err(CarveFault { col, row });
        }
        cells[row as usize * size + col as usize] = Cell::Path;
        Ok(())
    }

    /// Deterministic last-resort layout: a corridor along the top with a
    /// tooth down every odd column. Still a spanning tree over its open
    /// cells, just not an interesting one.
    fn comb_layout(size: usize) -> Vec<Cell> {
        let mut cells = vec![Cell::Wall; size * size];
        for col in 1..size - 1 {
            cells[size + col] = Cell::Path;
        }
        for col in (1..size - 1).step_by(2) {
            for row in 1..size - 1 {
                cells[row * size + col] = Cell::Path;
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Count of open cells reachable from the start by 4-neighbor steps
    fn reachable_open_cells(grid: &Grid) -> usize {
        let size = grid.size();
        let mut seen = vec![false; size * size];
        let (sc, sr) = grid.start();
        let mut queue = std::collections::VecDeque::from([(sc, sr)]);
        seen[sr * size + sc] = true;
        let mut count = 0;

        while let Some((col, row)) = queue.pop_front() {
            count += 1;
            let neighbors = [
                (col.wrapping_sub(1), row),
                (col + 1, row),
                (col, row.wrapping_sub(1)),
                (col, row + 1),
            ];
            for (nc, nr) in neighbors {
                if let Some(cell) = grid.cell(nc, nr) {
                    if cell.is_open() && !seen[nr * size + nc] {
                        seen[nr * size + nc] = true;
                        queue.push_back((nc, nr));
                    }
                }
            }
        }
        count
    }

    /// Count of adjacent open-cell pairs (each counted once)
    fn open_adjacency_edges(grid: &Grid) -> usize {
        let mut edges = 0;
        for (col, row, cell) in grid.iter_cells() {
            if !cell.is_open() {
                continue;
            }
            if grid.cell(col + 1, row).is_some_and(Cell::is_open) {
                edges += 1;
            }
            if grid.cell(col, row + 1).is_some_and(Cell::is_open) {
                edges += 1;
            }
        }
        edges
    }

    #[test]
    fn test_rejects_even_size() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            MazeGenerator::generate(10, &mut rng),
            Err(GenerationError::SizeEven(10))
        );
    }

    #[test]
    fn test_rejects_too_small_size() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            MazeGenerator::generate(3, &mut rng),
            Err(GenerationError::SizeTooSmall(3))
        );
    }

    #[test]
    fn test_perfect_maze_property() {
        // Connected and acyclic for a spread of sizes and seeds:
        // reachable == open count, edges == open count - 1
        for size in [5, 9, 21, 31] {
            for seed in [0u64, 7, 42, 1234] {
                let mut rng = StdRng::seed_from_u64(seed);
                let grid = MazeGenerator::generate(size, &mut rng).unwrap();

                let open = grid.open_cell_count();
                assert_eq!(
                    reachable_open_cells(&grid),
                    open,
                    "disconnected maze at size {size} seed {seed}"
                );
                assert_eq!(
                    open_adjacency_edges(&grid),
                    open - 1,
                    "cycle in maze at size {size} seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_start_and_exit_distinct_and_open() {
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = MazeGenerator::generate(5, &mut rng).unwrap();
            let (sc, sr) = grid.start();
            let (ec, er) = grid.exit();
            assert_ne!((sc, sr), (ec, er));
            assert_eq!(grid.cell(sc, sr), Some(Cell::Start));
            assert_eq!(grid.cell(ec, er), Some(Cell::Exit));
        }
    }

    #[test]
    fn test_exit_is_bottom_right_interior() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = MazeGenerator::generate(21, &mut rng).unwrap();
        assert_eq!(grid.exit(), (19, 19));
    }

    #[test]
    fn test_same_seed_same_maze() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let grid_a = MazeGenerator::generate(21, &mut a).unwrap();
        let grid_b = MazeGenerator::generate(21, &mut b).unwrap();
        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn test_border_stays_walled() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = MazeGenerator::generate(15, &mut rng).unwrap();
        for i in 0..15 {
            assert_eq!(grid.cell(i, 0), Some(Cell::Wall));
            assert_eq!(grid.cell(i, 14), Some(Cell::Wall));
            assert_eq!(grid.cell(0, i), Some(Cell::Wall));
            assert_eq!(grid.cell(14, i), Some(Cell::Wall));
        }
    }

    #[test]
    fn test_comb_layout_is_spanning_tree() {
        let cells = MazeGenerator::comb_layout(9);
        let grid = Grid::new(9, cells, (1, 1), (7, 7));
        let open = grid.open_cell_count();
        assert_eq!(reachable_open_cells(&grid), open);
        assert_eq!(open_adjacency_edges(&grid), open - 1);
    }
}
