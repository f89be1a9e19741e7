use crate::{Color, Params, Side};
use glam::Vec2;

/// Game configuration, built once at startup and shared read-only
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_width: f32,
    pub ball_height: f32,
    pub ball_speed: f32,
    pub angle_step: f32,
    pub serve_angle_min: u32,
    pub serve_angle_max: u32,
    pub flash_duration: u32,
    pub score_y: f32,
    pub foreground: Color,
    pub background: Color,
    pub flash: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_width: Params::BALL_WIDTH,
            ball_height: Params::BALL_HEIGHT,
            ball_speed: Params::BALL_SPEED,
            angle_step: Params::ANGLE_STEP,
            serve_angle_min: Params::SERVE_ANGLE_MIN,
            serve_angle_max: Params::SERVE_ANGLE_MAX,
            flash_duration: Params::FLASH_DURATION,
            score_y: Params::SCORE_Y,
            foreground: Color::from_argb(Params::FOREGROUND),
            background: Color::from_argb(Params::BACKGROUND),
            flash: Color::from_argb(Params::FLASH),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's center
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.field_width - self.paddle_inset,
        }
    }

    /// Clamp paddle Y to field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.field_height - half_height)
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    pub fn ball_half_width(&self) -> f32 {
        self.ball_width / 2.0
    }

    pub fn ball_half_height(&self) -> f32 {
        self.ball_height / 2.0
    }

    /// Ball x at or below which the right player scores
    pub fn min_ball_x(&self) -> f32 {
        self.ball_half_width()
    }

    /// Ball x at or above which the left player scores
    pub fn max_ball_x(&self) -> f32 {
        self.field_width - self.ball_half_width()
    }

    pub fn min_ball_y(&self) -> f32 {
        self.ball_half_height()
    }

    pub fn max_ball_y(&self) -> f32 {
        self.field_height - self.ball_half_height()
    }

    /// Horizontal center of a player's score text
    pub fn score_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.field_width / 4.0,
            Side::Right => self.field_width / 4.0 * 3.0,
        }
    }
}
