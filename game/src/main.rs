use anyhow::Context;
use common::{config::Config, world::Label};
use game::{physics::HeadlessPhysics, run};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("failed to read maze configuration")?;
    match config.seed {
        Some(seed) => info!("Seed: {}", seed),
        None => info!("No seed set, drawing from OS entropy."),
    }

    let mut rng = run::rng_from_seed(config.seed);
    let mut physics = HeadlessPhysics::new();
    let game = run::build_game(&config, &mut rng, &mut physics)
        .context("failed to generate the maze")?;

    println!("\n{}\n", game.maze);

    info!("  Algorithm: {}", config.algorithm);
    info!("  Grid: {} rows x {} columns", config.rows, config.columns);
    info!("  Open segments: {}", game.maze.open_count());
    info!("  Wall bodies: {}", physics.count(Label::Wall));
    info!("  Total bodies: {}", physics.bodies().len());

    Ok(())
}
