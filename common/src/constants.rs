// Grid:
pub const DEFAULT_ROWS: usize = 9;
pub const DEFAULT_COLUMNS: usize = 12;

// Canvas, in pixels:
pub const DEFAULT_WIDTH: f32 = 800.0;
pub const DEFAULT_HEIGHT: f32 = 600.0;
pub const DEFAULT_WALL_THICKNESS: f32 = 5.0;
pub const BOUNDARY_THICKNESS: f32 = 2.0;

// Bodies, relative to one cell:
pub const GOAL_SCALE: f32 = 0.7;
pub const BALL_RADIUS_SCALE: f32 = 0.3; // Of the shorter cell side.

// Largest grid the recursive generator may carve. Its depth can reach one
// frame per cell, and 10 000 frames fit well inside a 2 MiB thread stack.
pub const MAX_RECURSIVE_CELLS: usize = 10_000;
