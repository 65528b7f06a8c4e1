use glam::Vec2;
use log::{debug, info};

use crate::physics::{BodyId, PhysicsEvent, PhysicsHandle};

pub const WIN_GRAVITY: Vec2 = Vec2::new(0.0, 1.0); // Screen space: y grows downwards.

pub enum GameState {
    Playing(Playing),
    Won(Won),
}

impl GameState {
    pub fn update(&mut self, physics: &mut dyn PhysicsHandle) {
        let next = match self {
            GameState::Playing(playing) => playing.handle(physics),
            GameState::Won(won) => won.handle(physics),
        };

        if let Some(next) = next {
            *self = next;
        }
    }

    pub fn is_won(&self) -> bool {
        matches!(self, GameState::Won(_))
    }
}

pub struct Playing {
    ball: BodyId,
    goal: BodyId,
    walls: Vec<BodyId>,
}

impl Playing {
    pub fn new(ball: BodyId, goal: BodyId, walls: Vec<BodyId>) -> Self {
        Self { ball, goal, walls }
    }

    pub fn walls(&self) -> &[BodyId] {
        &self.walls
    }

    fn is_ball_on_goal(&self, a: BodyId, b: BodyId) -> bool {
        (a == self.ball && b == self.goal) || (a == self.goal && b == self.ball)
    }

    pub fn handle(&mut self, physics: &mut dyn PhysicsHandle) -> Option<GameState> {
        while let Some(event) = physics.next_event() {
            let PhysicsEvent::CollisionStart { a, b } = event;
            if !self.is_ball_on_goal(a, b) {
                continue;
            }

            info!("Ball reached the goal. Dissolving {} walls.", self.walls.len());
            for &wall in &self.walls {
                physics.set_static(wall, false);
            }
            physics.set_gravity(WIN_GRAVITY);

            return Some(GameState::Won(Won {
                walls: std::mem::take(&mut self.walls),
            }));
        }

        None
    }
}

pub struct Won {
    walls: Vec<BodyId>,
}

impl Won {
    pub fn walls(&self) -> &[BodyId] {
        &self.walls
    }

    /// Walls are already loose and gravity is on, so there is nothing left to
    /// do with contacts.
    pub fn handle(&mut self, physics: &mut dyn PhysicsHandle) -> Option<GameState> {
        while let Some(event) = physics.next_event() {
            debug!("Ignoring {:?} after the win.", event);
        }

        None
    }
}
