//! Maze grid representation and procedural generation
//!
//! A [`Grid`] is a square array of [`Cell`]s forming a perfect maze:
//! exactly one route exists between any two open cells. The grid is
//! created once per session by [`generator::MazeGenerator`] and never
//! mutated afterwards; a restart replaces it wholesale.

pub mod generator;

pub use generator::{GenerationError, MazeGenerator};

use crate::foundation::math::Vec3;

/// One cell of the maze grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Solid wall, backed by a collider box
    Wall,
    /// Walkable corridor
    Path,
    /// Walkable, the player's spawn cell
    Start,
    /// Walkable, the goal cell
    Exit,
}

impl Cell {
    /// Whether the player can occupy this cell
    pub fn is_open(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// A generated maze: square cell array plus the start/exit coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    start: (usize, usize),
    exit: (usize, usize),
}

impl Grid {
    pub(crate) fn new(
        size: usize,
        cells: Vec<Cell>,
        start: (usize, usize),
        exit: (usize, usize),
    ) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self {
            size,
            cells,
            start,
            exit,
        }
    }

    /// Cells per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (col, row), or `None` outside the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.size && row < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Grid coordinates of the start cell
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// Grid coordinates of the exit cell
    pub fn exit(&self) -> (usize, usize) {
        self.exit
    }

    /// World-space center of a cell, on the floor plane (y = 0)
    ///
    /// The mapping is bijective: for a size-21 grid each index maps to
    /// `(idx - 10.5) * cell_size`.
    pub fn cell_to_world(&self, col: usize, row: usize, cell_size: f32) -> Vec3 {
        let half = self.size as f32 / 2.0;
        Vec3::new(
            (col as f32 - half) * cell_size,
            0.0,
            (row as f32 - half) * cell_size,
        )
    }

    /// All Path cells, excluding Start and Exit
    ///
    /// These are the candidate cells for pickup placement.
    pub fn plain_path_cells(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[row * self.size + col] == Cell::Path {
                    out.push((col, row));
                }
            }
        }
        out
    }

    /// Number of open (walkable) cells
    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Iterate all cells with their coordinates
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i % self.size, i / self.size, c))
    }
}
