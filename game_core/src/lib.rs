pub mod components;
pub mod config;
pub mod game;
pub mod host;
pub mod params;
pub mod resources;
pub mod systems;

#[cfg(test)]
mod testing;

pub use components::*;
pub use config::*;
pub use game::*;
pub use host::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one deterministic Pong tick
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut ScoreBoard,
    events: &mut Events,
    rng: &mut GameRng,
    keys: &impl Keyboard,
    audio: &mut impl AudioSink,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (key state to paddle intents)
    ingest_inputs(world, keys);

    // 2. Move paddles based on intents
    move_paddles(world, config);

    // 3. Collisions and scoring, then move the ball
    move_ball(world, score, audio, rng, config, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
