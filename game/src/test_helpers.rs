use std::collections::VecDeque;

use common::world::Blueprint;
use glam::Vec2;

use crate::physics::{BodyId, PhysicsEvent, PhysicsHandle};

#[derive(Default)]
pub struct MockPhysics {
    /// **Incoming Event Queue:** Simulates contacts reported by the engine.
    /// `Playing::handle` and `Won::handle` drain this through `next_event`.
    /// Tests add to it with `queue_collision`.
    events: VecDeque<PhysicsEvent>,

    /// **Creation Log:** Every blueprint passed to `add_body`, in order. A
    /// body's id is its index here.
    pub added: Vec<Blueprint>,

    /// **Static Toggle Log:** Each `set_static` call, so tests can check which
    /// bodies were released and how many times.
    pub static_changes: Vec<(BodyId, bool)>,

    /// **Gravity Log:** Each `set_gravity` call.
    pub gravity_changes: Vec<Vec2>,
}

impl MockPhysics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_collision(&mut self, a: BodyId, b: BodyId) {
        self.events.push_back(PhysicsEvent::CollisionStart { a, b });
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

impl PhysicsHandle for MockPhysics {
    fn add_body(&mut self, blueprint: Blueprint) -> BodyId {
        self.added.push(blueprint);
        BodyId(self.added.len() - 1)
    }

    fn set_static(&mut self, id: BodyId, is_static: bool) {
        self.static_changes.push((id, is_static));
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity_changes.push(gravity);
    }

    fn next_event(&mut self) -> Option<PhysicsEvent> {
        self.events.pop_front()
    }
}
