use rand::Rng;

use super::super::{Cell, MazeMaker};

/// Depth-first carving on the call stack. Recursion depth can reach
/// rows × cols, so prefer `Backtrack` for large grids.
pub trait RecursiveBacktrack {
    fn recursive_backtrack(&mut self);
}

impl<R: Rng> RecursiveBacktrack for MazeMaker<R> {
    fn recursive_backtrack(&mut self) {
        let initial_cell = self.pick_start();
        step_through(self, initial_cell);
    }
}

fn step_through<R: Rng>(maze: &mut MazeMaker<R>, cell: Cell) {
    if maze.is_visited(cell) {
        return;
    }

    maze.visit_cell(cell);

    for direction in maze.shuffled_directions() {
        let Some(next) = maze.unvisited_neighbor(cell, direction) else {
            continue;
        };

        maze.remove_wall_between(cell, direction);
        step_through(maze, next);
    }
}
