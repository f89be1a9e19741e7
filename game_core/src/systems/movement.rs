use hecs::World;

use crate::systems::check_collisions;
use crate::{AudioSink, Ball, Config, Events, GameRng, Paddle, PaddleIntent, Scorer, Side};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.up {
            paddle.move_up(config);
        }
        if intent.down {
            paddle.move_down(config);
        }
    }
}

/// Run collision detection for the ball, then move it
pub fn move_ball(
    world: &mut World,
    scorer: &mut impl Scorer,
    audio: &mut impl AudioSink,
    rng: &mut GameRng,
    config: &Config,
    events: &mut Events,
) {
    // Snapshot the paddles so the ball can be borrowed mutably
    let mut left = None;
    let mut right = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side() {
            Side::Left => left = Some(*paddle),
            Side::Right => right = Some(*paddle),
        }
    }

    let (Some(left), Some(right)) = (left, right) else {
        return;
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        check_collisions(ball, &left, &right, scorer, audio, rng, config, events);
        integrate_ball(ball, config);
    }
}

/// Advance the ball one tick along its direction and angle
pub fn integrate_ball(ball: &mut Ball, config: &Config) {
    ball.pos.x += ball.x_move(config);
    ball.pos.y += ball.y_move(config);
}
