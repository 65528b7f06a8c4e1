use common::{config::Config, world::Label};
use game::{
    physics::{BodyId, HeadlessPhysics},
    run::{build_game, rng_from_seed},
    state::WIN_GRAVITY,
};
use glam::Vec2;

fn new_game(seed: u64) -> (game::run::Game, HeadlessPhysics) {
    let config = Config {
        seed: Some(seed),
        ..Config::default()
    };
    let mut physics = HeadlessPhysics::new();
    let game = build_game(&config, &mut rng_from_seed(config.seed), &mut physics)
        .expect("default config should build");
    (game, physics)
}

fn ids(physics: &HeadlessPhysics, label: Label) -> Vec<BodyId> {
    physics
        .bodies()
        .iter()
        .enumerate()
        .filter(|(_, body)| body.label == label)
        .map(|(i, _)| BodyId(i))
        .collect()
}

#[test]
fn reaching_the_goal_releases_walls_and_turns_on_gravity() {
    let (mut game, mut physics) = new_game(3);
    let ball = physics.find(Label::Ball).expect("ball should exist");
    let goal = physics.find(Label::Goal).expect("goal should exist");

    assert_eq!(physics.gravity(), Vec2::ZERO);
    assert!(physics.bodies().iter().all(|b| b.is_static || b.label == Label::Ball));

    physics.report_collision(ball, goal);
    game.state.update(&mut physics);

    assert!(game.state.is_won());
    assert_eq!(physics.gravity(), WIN_GRAVITY);
    for id in ids(&physics, Label::Wall) {
        assert!(!physics.body(id).unwrap().is_static, "wall {:?} still static", id);
    }
    for id in ids(&physics, Label::Boundary) {
        assert!(physics.body(id).unwrap().is_static);
    }
    assert!(physics.body(goal).unwrap().is_static);
}

#[test]
fn touching_walls_does_not_win() {
    let (mut game, mut physics) = new_game(4);
    let ball = physics.find(Label::Ball).expect("ball should exist");

    for wall in ids(&physics, Label::Wall).into_iter().take(5) {
        physics.report_collision(wall, ball);
    }
    game.state.update(&mut physics);

    assert!(!game.state.is_won());
    assert_eq!(physics.gravity(), Vec2::ZERO);
    assert!(physics.bodies().iter().all(|b| b.is_static || b.label == Label::Ball));
}

#[test]
fn repeated_goal_contacts_are_harmless() {
    let (mut game, mut physics) = new_game(5);
    let ball = physics.find(Label::Ball).expect("ball should exist");
    let goal = physics.find(Label::Goal).expect("goal should exist");

    for _ in 0..3 {
        physics.report_collision(goal, ball);
        game.state.update(&mut physics);
    }

    assert!(game.state.is_won());
    assert_eq!(physics.gravity(), WIN_GRAVITY);
    assert_eq!(physics.count(Label::Wall), game.maze.closed_walls().count());
}
