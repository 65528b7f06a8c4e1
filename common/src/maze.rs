pub mod maker;

use std::fmt;

use disjoint::DisjointSet;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

pub use maker::{Algorithm, Cell, Direction, Orientation, Wall};
use maker::MazeMaker;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze must have at least one row and one column, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// A generated wall layout. `true` in either matrix means the segment is open.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    pub rows: usize,
    pub cols: usize,
    pub verticals: Vec<Vec<bool>>,   // rows × (cols - 1)
    pub horizontals: Vec<Vec<bool>>, // (rows - 1) × cols
    pub passages: Vec<Wall>,         // In the order they were opened.
}

impl Maze {
    pub fn new<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        generator: Algorithm,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        let maker = MazeMaker::new(rows, cols, rng, generator)?;

        Ok(Self {
            rows,
            cols,
            verticals: maker.verticals,
            horizontals: maker.horizontals,
            passages: maker.passages,
        })
    }

    pub fn is_open(&self, wall: Wall) -> bool {
        let matrix = match wall.orientation {
            Orientation::Vertical => &self.verticals,
            Orientation::Horizontal => &self.horizontals,
        };

        matrix
            .get(wall.row)
            .and_then(|row| row.get(wall.col))
            .copied()
            .unwrap_or(false)
    }

    pub fn open_count(&self) -> usize {
        self.verticals
            .iter()
            .chain(self.horizontals.iter())
            .flatten()
            .filter(|&&open| open)
            .count()
    }

    /// Every interior segment that still has a wall, horizontals first.
    pub fn closed_walls(&self) -> impl Iterator<Item = Wall> + '_ {
        let horizontals = self.horizontals.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, &open)| !open)
                .map(move |(col, _)| Wall::horizontal(row, col))
        });
        let verticals = self.verticals.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, &open)| !open)
                .map(move |(col, _)| Wall::vertical(row, col))
        });

        horizontals.chain(verticals)
    }

    pub fn open_neighbors(&self, cell: Cell) -> Vec<Cell> {
        Direction::iter()
            .filter_map(|direction| {
                let next = cell.neighbor(direction, self.rows, self.cols)?;
                let wall = Wall::between(cell, direction)?;
                self.is_open(wall).then_some(next)
            })
            .collect()
    }

    /// Checks that the open segments form a spanning tree of the grid: every
    /// recorded passage is in bounds and open, there are exactly
    /// rows × cols - 1 of them, and none of them closes a cycle.
    pub fn is_perfect(&self) -> bool {
        let cells = self.rows * self.cols;
        if cells == 0 || self.open_count() != cells - 1 || self.passages.len() != cells - 1 {
            return false;
        }

        let mut sets = DisjointSet::with_len(cells);
        for &wall in &self.passages {
            if !self.is_open(wall) {
                return false;
            }

            let (a, b) = wall.flanking_cells();
            let i = a.row * self.cols + a.col;
            let j = b.row * self.cols + b.col;
            if sets.root_of(i) == sets.root_of(j) {
                return false;
            }
            sets.join(i, j);
        }

        true
    }

    /// Block view of the layout: (2 × rows + 1) × (2 × cols + 1), 1 for wall
    /// and 0 for space. Cells sit at odd/odd coordinates.
    pub fn grid(&self) -> Vec<Vec<u8>> {
        let height = 2 * self.rows + 1;
        let width = 2 * self.cols + 1;
        let mut grid = vec![vec![1; width]; height];

        for row in 0..self.rows {
            for col in 0..self.cols {
                grid[2 * row + 1][2 * col + 1] = 0;
            }
        }

        for (row, line) in self.verticals.iter().enumerate() {
            for (col, &open) in line.iter().enumerate() {
                if open {
                    grid[2 * row + 1][2 * col + 2] = 0;
                }
            }
        }

        for (row, line) in self.horizontals.iter().enumerate() {
            for (col, &open) in line.iter().enumerate() {
                if open {
                    grid[2 * row + 2][2 * col + 1] = 0;
                }
            }
        }

        grid
    }

    pub fn log(&self) -> String {
        self.grid()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell == 0 { "  " } else { "██" })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
