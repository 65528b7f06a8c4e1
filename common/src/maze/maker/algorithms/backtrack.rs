use rand::Rng;

use super::super::{Cell, Direction, MazeMaker};

pub trait Backtrack {
    fn backtrack(&mut self);
}

struct Frame {
    cell: Cell,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new(cell: Cell, directions: [Direction; 4]) -> Self {
        Frame {
            cell,
            directions,
            next: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction = self.directions.get(self.next).copied()?;
        self.next += 1;
        Some(direction)
    }
}

// Each frame remembers where it was in its own shuffled direction list, so
// popping back to it resumes exactly where the recursive version would.
impl<R: Rng> Backtrack for MazeMaker<R> {
    fn backtrack(&mut self) {
        let initial_cell = self.pick_start();
        self.visit_cell(initial_cell);
        let directions = self.shuffled_directions();

        let mut stack = vec![Frame::new(initial_cell, directions)];

        while let Some(frame) = stack.last_mut() {
            let Some(direction) = frame.next_direction() else {
                stack.pop();
                continue;
            };
            let curr = frame.cell;

            if let Some(next) = self.unvisited_neighbor(curr, direction) {
                self.remove_wall_between(curr, direction);
                self.visit_cell(next);
                let directions = self.shuffled_directions();
                stack.push(Frame::new(next, directions));
            }
        }
    }
}
