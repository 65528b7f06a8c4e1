use std::collections::VecDeque;

use common::world::{Blueprint, Label};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct BodyId(pub usize);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PhysicsEvent {
    CollisionStart { a: BodyId, b: BodyId },
}

/// The slice of a physics engine the game talks to. The engine owns the
/// simulation; the game only creates bodies, flips them between static and
/// dynamic, sets gravity and listens for contacts.
pub trait PhysicsHandle {
    fn add_body(&mut self, blueprint: Blueprint) -> BodyId;
    fn set_static(&mut self, id: BodyId, is_static: bool);
    fn set_gravity(&mut self, gravity: Vec2);
    fn next_event(&mut self) -> Option<PhysicsEvent>;
}

/// Keeps bodies and gravity in memory without simulating anything. Contacts
/// only happen when someone calls `report_collision`.
#[derive(Default)]
pub struct HeadlessPhysics {
    bodies: Vec<Blueprint>,
    gravity: Vec2,
    events: VecDeque<PhysicsEvent>,
}

impl HeadlessPhysics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(&self, id: BodyId) -> Option<&Blueprint> {
        self.bodies.get(id.0)
    }

    pub fn bodies(&self) -> &[Blueprint] {
        &self.bodies
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn count(&self, label: Label) -> usize {
        self.bodies.iter().filter(|body| body.label == label).count()
    }

    pub fn find(&self, label: Label) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|body| body.label == label)
            .map(BodyId)
    }

    pub fn report_collision(&mut self, a: BodyId, b: BodyId) {
        self.events.push_back(PhysicsEvent::CollisionStart { a, b });
    }
}

impl PhysicsHandle for HeadlessPhysics {
    fn add_body(&mut self, blueprint: Blueprint) -> BodyId {
        self.bodies.push(blueprint);
        BodyId(self.bodies.len() - 1)
    }

    fn set_static(&mut self, id: BodyId, is_static: bool) {
        if let Some(body) = self.bodies.get_mut(id.0) {
            body.is_static = is_static;
        }
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn next_event(&mut self) -> Option<PhysicsEvent> {
        self.events.pop_front()
    }
}
