use glam::Vec2;

use crate::systems::{touch_left, touch_right};
use crate::{AudioSink, Ball, Config, Events, GameRng, PaddlePosition, Scorer, Side};

/// Check ball collisions with the field edges and the paddle it is heading toward
///
/// Runs before the ball moves. Goals come first, then top/bottom reflection,
/// then the paddle on the side matching the (possibly just flipped) direction.
#[allow(clippy::too_many_arguments)]
pub fn check_collisions<P: PaddlePosition>(
    ball: &mut Ball,
    left: &P,
    right: &P,
    scorer: &mut impl Scorer,
    audio: &mut impl AudioSink,
    rng: &mut GameRng,
    config: &Config,
    events: &mut Events,
) {
    if ball.pos.x <= config.min_ball_x() {
        touch_left(ball, scorer, audio, rng, config, events);
    }

    if ball.pos.x >= config.max_ball_x() {
        touch_right(ball, scorer, audio, rng, config, events);
    }

    if ball.pos.y <= config.min_ball_y() {
        ball.pos.y = config.min_ball_y();
        ball.turn_angle(audio);
        events.ball_hit_wall = true;
    }

    if ball.pos.y >= config.max_ball_y() {
        ball.pos.y = config.max_ball_y();
        ball.turn_angle(audio);
        events.ball_hit_wall = true;
    }

    let paddle = match ball.direction {
        Side::Left => left,
        Side::Right => right,
    };
    check_paddle(ball, paddle, audio, config, events);
}

/// Bounce the ball off `paddle` if its path crosses the paddle's front edge
/// within the paddle's vertical extent.
pub fn check_paddle(
    ball: &mut Ball,
    paddle: &impl PaddlePosition,
    audio: &mut impl AudioSink,
    config: &Config,
    events: &mut Events,
) {
    let paddle_half_width = config.paddle_width / 2.0;
    let paddle_half_height = config.paddle_height / 2.0;
    let y_move = ball.y_move(config);

    // The prospective point mirrors the vertical step on the left side.
    let (hit_line, next, crossed) = match ball.direction {
        Side::Left => {
            let hit_line = paddle.x() + paddle_half_width;
            let next = Vec2::new(ball.pos.x - config.ball_speed, ball.pos.y - y_move);
            (hit_line, next, next.x < hit_line)
        }
        Side::Right => {
            let hit_line = paddle.x() - paddle_half_width;
            let next = Vec2::new(ball.pos.x + config.ball_speed, ball.pos.y + y_move);
            (hit_line, next, next.x > hit_line)
        }
    };

    if !crossed {
        return;
    }

    let (gradient, intercept) = trajectory(ball.pos, next);
    let target_y = gradient * hit_line + intercept;

    let y_begin = paddle.y() - paddle_half_height;
    let y_end = paddle.y() + paddle_half_height;
    if !(y_begin..=y_end).contains(&target_y) {
        return;
    }

    ball.pos.x = match ball.direction {
        Side::Left => hit_line + config.ball_half_width(),
        Side::Right => hit_line - config.ball_half_width(),
    };
    ball.pos.y = gradient * ball.pos.x + intercept;
    ball.steepen(config.angle_step);
    log::trace!(
        "ball hit {:?} paddle at ({:.1}, {:.1}), angle now {}",
        ball.direction,
        ball.pos.x,
        ball.pos.y,
        ball.angle
    );
    ball.flip_direction(audio);
    events.ball_hit_paddle = true;
}

/// Line through two points as `(gradient, intercept)`. The x values must differ.
fn trajectory(from: Vec2, to: Vec2) -> (f32, f32) {
    let gradient = (from.y - to.y) / (from.x - to.x);
    (gradient, from.y - gradient * from.x)
}
