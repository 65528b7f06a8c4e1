pub mod algorithms;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};

use algorithms::{backtrack::Backtrack, recursive::RecursiveBacktrack};

use super::MazeError;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    Backtrack, // Explicit stack of frames: any grid size.
    RecursiveBacktrack, // Call stack: same maze, bounded by thread stack depth.
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Up | Direction::Down => Orientation::Horizontal,
            Direction::Left | Direction::Right => Orientation::Vertical,
        }
    }

    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// The adjacent cell in `direction`, or `None` if it falls outside a
    /// `rows` × `cols` grid.
    pub fn neighbor(self, direction: Direction, rows: usize, cols: usize) -> Option<Cell> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;

        if row >= rows || col >= cols {
            return None;
        }

        Some(Cell { row, col })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal, // Between (row, col) and (row + 1, col).
    Vertical,   // Between (row, col) and (row, col + 1).
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Wall {
    pub fn vertical(row: usize, col: usize) -> Wall {
        Wall {
            row,
            col,
            orientation: Orientation::Vertical,
        }
    }

    pub fn horizontal(row: usize, col: usize) -> Wall {
        Wall {
            row,
            col,
            orientation: Orientation::Horizontal,
        }
    }

    /// The wall crossed when stepping out of `cell` towards `direction`, or
    /// `None` when that step would leave the top or left edge. Steps past the
    /// bottom or right edge still yield a wall; bounds-check with
    /// `Cell::neighbor` first.
    pub fn between(cell: Cell, direction: Direction) -> Option<Wall> {
        let Cell { row, col } = cell;
        let wall = match direction {
            Direction::Up => Wall::horizontal(row.checked_sub(1)?, col),
            Direction::Right => Wall::vertical(row, col),
            Direction::Down => Wall::horizontal(row, col),
            Direction::Left => Wall::vertical(row, col.checked_sub(1)?),
        };
        Some(wall)
    }

    pub fn flanking_cells(self) -> (Cell, Cell) {
        let Wall { row, col, .. } = self;
        match self.orientation {
            Orientation::Horizontal => (Cell::new(row, col), Cell::new(row + 1, col)),
            Orientation::Vertical => (Cell::new(row, col), Cell::new(row, col + 1)),
        }
    }
}

/// Fisher–Yates: walk down from the end, swapping each slot with a uniformly
/// chosen slot among those not yet placed (itself included).
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    let mut counter = items.len();
    while counter > 0 {
        let index = rng.random_range(0..counter);
        counter -= 1;
        items.swap(counter, index);
    }
}

/// Owns everything a single generation run touches. One maker, one maze.
pub struct MazeMaker<R: Rng> {
    pub verticals: Vec<Vec<bool>>,
    pub horizontals: Vec<Vec<bool>>,
    pub passages: Vec<Wall>,
    pub visits: Vec<Cell>,
    visited: Vec<Vec<bool>>,
    rng: R,
    rows: usize,
    cols: usize,
}

impl<R: Rng> MazeMaker<R> {
    pub fn new(rows: usize, cols: usize, rng: R, generator: Algorithm) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        let mut maker = MazeMaker {
            verticals: vec![vec![false; cols - 1]; rows],
            horizontals: vec![vec![false; cols]; rows - 1],
            passages: Vec::with_capacity(rows * cols - 1),
            visits: Vec::with_capacity(rows * cols),
            visited: vec![vec![false; cols]; rows],
            rng,
            rows,
            cols,
        };

        match generator {
            Algorithm::Backtrack => maker.backtrack(),
            Algorithm::RecursiveBacktrack => maker.recursive_backtrack(),
        }

        debug!(
            "{} carved a {}x{} maze: {} passages, {} visits",
            generator,
            rows,
            cols,
            maker.passages.len(),
            maker.visits.len()
        );

        Ok(maker)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn pick_start(&mut self) -> Cell {
        let row = self.rng.random_range(0..self.rows);
        let col = self.rng.random_range(0..self.cols);
        Cell::new(row, col)
    }

    fn shuffled_directions(&mut self) -> [Direction; 4] {
        let mut directions = [Direction::Up; 4];
        for (slot, direction) in directions.iter_mut().zip(Direction::iter()) {
            *slot = direction;
        }
        shuffle(&mut self.rng, &mut directions);
        directions
    }

    fn visit_cell(&mut self, cell: Cell) {
        debug_assert!(!self.is_visited(cell), "cell visited twice: {:?}", cell);

        self.visited[cell.row][cell.col] = true;
        self.visits.push(cell);
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.visited[cell.row][cell.col]
    }

    fn unvisited_neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.neighbor(direction, self.rows, self.cols)
            .filter(|&next| !self.is_visited(next))
    }

    fn remove_wall_between(&mut self, cell: Cell, direction: Direction) {
        let wall = Wall::between(cell, direction)
            .expect("neighbor should have been checked to be inside the grid");
        match wall.orientation {
            Orientation::Vertical => self.verticals[wall.row][wall.col] = true,
            Orientation::Horizontal => self.horizontals[wall.row][wall.col] = true,
        }
        self.passages.push(wall);
    }
}
