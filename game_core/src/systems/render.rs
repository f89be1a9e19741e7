//! Draw callbacks for every entity, written against the host [`Canvas`]

use crate::{Ball, Canvas, Config, PaddlePosition, ScoreBoard, Side};

/// Center line, full height
pub fn draw_field(canvas: &mut impl Canvas, config: &Config) {
    let x = config.field_width / 2.0;
    canvas.draw_line(
        x,
        0.0,
        config.foreground,
        x,
        config.field_height,
        config.foreground,
    );
}

pub fn draw_paddle(canvas: &mut impl Canvas, paddle: &impl PaddlePosition, config: &Config) {
    canvas.fill_centered(
        paddle.x(),
        paddle.y(),
        config.paddle_width / 2.0,
        config.paddle_height / 2.0,
        config.foreground,
    );
}

pub fn draw_ball(canvas: &mut impl Canvas, ball: &Ball, config: &Config) {
    canvas.fill_centered(
        ball.pos.x,
        ball.pos.y,
        config.ball_half_width(),
        config.ball_half_height(),
        config.foreground,
    );
}

/// Both tallies centered over their half, plus the flash overlay.
///
/// Each call while flashing uses up one flash frame.
pub fn draw_score(canvas: &mut impl Canvas, score: &mut ScoreBoard, config: &Config) {
    for (side, value) in [(Side::Left, score.left()), (Side::Right, score.right())] {
        let text = value.to_string();
        let x = config.score_x(side) - canvas.text_width(&text) / 2.0;
        canvas.draw_text(&text, x, config.score_y, 1.0, 1.0, config.foreground);
    }

    if score.is_flashing() {
        let (w, h) = (config.field_width, config.field_height);
        canvas.draw_quad(
            0.0,
            0.0,
            config.flash,
            w,
            0.0,
            config.flash,
            0.0,
            h,
            config.flash,
            w,
            h,
            config.flash,
        );
        score.decay_flash();
    }
}
