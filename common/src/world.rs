use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    constants::{BALL_RADIUS_SCALE, BOUNDARY_THICKNESS, GOAL_SCALE},
    maze::{Maze, Orientation, Wall},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Label {
    Boundary,
    Wall,
    Goal,
    Ball,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle { size: Vec2 },
    Circle { radius: f32 },
}

/// What the physics engine needs to create one body. Positions are centres,
/// in pixels, with y growing downwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub label: Label,
    pub center: Vec2,
    pub shape: Shape,
    pub is_static: bool,
}

impl Blueprint {
    fn fixed_rectangle(label: Label, center: Vec2, size: Vec2) -> Self {
        Self {
            label,
            center,
            shape: Shape::Rectangle { size },
            is_static: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub size: Vec2,
    pub unit: Vec2, // One cell.
    pub wall_thickness: f32,
}

impl Arena {
    pub fn new(config: &Config) -> Self {
        let size = vec2(config.width, config.height);
        Self {
            size,
            unit: size / vec2(config.columns as f32, config.rows as f32),
            wall_thickness: config.wall_thickness,
        }
    }

    pub fn boundaries(&self) -> [Blueprint; 4] {
        let Vec2 { x: w, y: h } = self.size;
        let t = BOUNDARY_THICKNESS;
        [
            Blueprint::fixed_rectangle(Label::Boundary, vec2(w / 2.0, 0.0), vec2(w, t)),
            Blueprint::fixed_rectangle(Label::Boundary, vec2(w / 2.0, h), vec2(w, t)),
            Blueprint::fixed_rectangle(Label::Boundary, vec2(0.0, h / 2.0), vec2(t, h)),
            Blueprint::fixed_rectangle(Label::Boundary, vec2(w, h / 2.0), vec2(t, h)),
        ]
    }

    /// A horizontal wall runs along the bottom edge of cell (row, col); a
    /// vertical one along its right edge.
    pub fn wall(&self, wall: Wall) -> Blueprint {
        let Vec2 { x: ux, y: uy } = self.unit;
        let x = wall.col as f32 * ux;
        let y = wall.row as f32 * uy;

        match wall.orientation {
            Orientation::Horizontal => Blueprint::fixed_rectangle(
                Label::Wall,
                vec2(x + ux / 2.0, y + uy),
                vec2(ux, self.wall_thickness),
            ),
            Orientation::Vertical => Blueprint::fixed_rectangle(
                Label::Wall,
                vec2(x + ux, y + uy / 2.0),
                vec2(self.wall_thickness, uy),
            ),
        }
    }

    pub fn walls(&self, maze: &Maze) -> Vec<Blueprint> {
        maze.closed_walls().map(|wall| self.wall(wall)).collect()
    }

    /// Far corner cell, whatever the layout.
    pub fn goal(&self) -> Blueprint {
        Blueprint::fixed_rectangle(
            Label::Goal,
            self.size - self.unit / 2.0,
            self.unit * GOAL_SCALE,
        )
    }

    /// Starting corner cell. The only body that moves before the win.
    pub fn ball(&self) -> Blueprint {
        Blueprint {
            label: Label::Ball,
            center: self.unit / 2.0,
            shape: Shape::Circle {
                radius: self.unit.min_element() * BALL_RADIUS_SCALE,
            },
            is_static: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::Algorithm, test_helpers::ZeroRng};

    fn arena() -> Arena {
        Arena::new(&Config {
            rows: 2,
            columns: 4,
            width: 400.0,
            height: 300.0,
            wall_thickness: 5.0,
            ..Config::default()
        })
    }

    #[test]
    fn test_unit_is_canvas_over_grid() {
        assert_eq!(arena().unit, vec2(100.0, 150.0));
    }

    #[test]
    fn test_horizontal_wall_sits_under_its_cell() {
        let blueprint = arena().wall(Wall::horizontal(0, 2));
        assert_eq!(blueprint.label, Label::Wall);
        assert!(blueprint.is_static);
        assert_eq!(blueprint.center, vec2(250.0, 150.0));
        assert_eq!(
            blueprint.shape,
            Shape::Rectangle {
                size: vec2(100.0, 5.0)
            }
        );
    }

    #[test]
    fn test_vertical_wall_sits_right_of_its_cell() {
        let blueprint = arena().wall(Wall::vertical(1, 0));
        assert_eq!(blueprint.center, vec2(100.0, 225.0));
        assert_eq!(
            blueprint.shape,
            Shape::Rectangle {
                size: vec2(5.0, 150.0)
            }
        );
    }

    #[test]
    fn test_one_blueprint_per_closed_wall() {
        let maze = Maze::new(2, 4, Algorithm::Backtrack, &mut ZeroRng).unwrap();
        let walls = arena().walls(&maze);
        // 2 × 3 verticals + 1 × 4 horizontals, 7 of them opened.
        assert_eq!(walls.len(), 10 - 7);
        assert!(walls.iter().all(|b| b.label == Label::Wall && b.is_static));
    }

    #[test]
    fn test_goal_and_ball_take_opposite_corners() {
        let arena = arena();

        let goal = arena.goal();
        assert_eq!(goal.center, vec2(350.0, 225.0));
        let Shape::Rectangle { size } = goal.shape else {
            panic!("goal should be a rectangle");
        };
        assert!(size.abs_diff_eq(vec2(70.0, 105.0), 1e-4));
        assert!(goal.is_static);

        let ball = arena.ball();
        assert_eq!(ball.center, vec2(50.0, 75.0));
        let Shape::Circle { radius } = ball.shape else {
            panic!("ball should be a circle");
        };
        assert!((radius - 30.0).abs() < 1e-4);
        assert!(!ball.is_static);
    }

    #[test]
    fn test_boundaries_frame_the_canvas() {
        let centers: Vec<Vec2> = arena().boundaries().iter().map(|b| b.center).collect();
        assert_eq!(
            centers,
            vec![
                vec2(200.0, 0.0),
                vec2(200.0, 300.0),
                vec2(0.0, 150.0),
                vec2(400.0, 150.0)
            ]
        );
    }
}
