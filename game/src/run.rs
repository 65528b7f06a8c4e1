use common::{
    config::Config,
    maze::{Maze, MazeError},
    world::Arena,
};
use glam::Vec2;
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    physics::PhysicsHandle,
    state::{GameState, Playing},
};

pub struct Game {
    pub maze: Maze,
    pub state: GameState,
}

/// Seeded runs are reproducible; unseeded ones draw from the OS.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generates the maze first, then hands the finished layout to the engine.
pub fn build_game<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
    physics: &mut dyn PhysicsHandle,
) -> Result<Game, MazeError> {
    let maze = Maze::new(config.rows, config.columns, config.algorithm, rng)?;
    let state = materialize(&Arena::new(config), &maze, physics);

    Ok(Game { maze, state })
}

pub fn materialize(arena: &Arena, maze: &Maze, physics: &mut dyn PhysicsHandle) -> GameState {
    physics.set_gravity(Vec2::ZERO);

    for boundary in arena.boundaries() {
        physics.add_body(boundary);
    }

    let walls: Vec<_> = arena
        .walls(maze)
        .into_iter()
        .map(|wall| physics.add_body(wall))
        .collect();
    debug!("Created {} wall bodies.", walls.len());

    let goal = physics.add_body(arena.goal());
    let ball = physics.add_body(arena.ball());

    info!(
        "Materialized a {}x{} maze with {} walls.",
        maze.rows,
        maze.cols,
        walls.len()
    );

    GameState::Playing(Playing::new(ball, goal, walls))
}
