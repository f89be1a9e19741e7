use glam::Vec2;
use rand::Rng;

use crate::{AudioSink, Config, GameRng, Sound};

/// Left or right half of the field
///
/// Also used as the ball's direction: the side whose paddle it is heading toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Read access to a paddle's position
pub trait PaddlePosition {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    side: Side,
    x: f32,
    y: f32,
}

impl Paddle {
    /// Paddle on `side`, vertically centered
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.field_height / 2.0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn move_up(&mut self, config: &Config) {
        if self.y > config.paddle_height / 2.0 {
            self.y = config.clamp_paddle_y(self.y - config.paddle_speed);
        }
    }

    pub fn move_down(&mut self, config: &Config) {
        if self.y < config.field_height - config.paddle_height / 2.0 {
            self.y = config.clamp_paddle_y(self.y + config.paddle_speed);
        }
    }
}

impl PaddlePosition for Paddle {
    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }
}

/// Keys held for a paddle this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub direction: Side,
    /// Degrees; the sign gives the vertical bias
    pub angle: f32,
}

impl Ball {
    /// Centered ball heading left with a fresh serve angle
    pub fn new(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self {
            pos: config.field_center(),
            direction: Side::Left,
            angle: 0.0,
        };
        ball.center(config, rng);
        ball
    }

    /// Reset to the field center with a new random angle. Direction is left alone.
    pub fn center(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.field_center();
        self.angle = rng
            .0
            .gen_range(config.serve_angle_min..=config.serve_angle_max) as f32;
    }

    /// Vertical displacement per tick
    pub fn y_move(&self, config: &Config) -> f32 {
        self.angle.to_radians().tan() * config.ball_speed
    }

    /// Horizontal displacement per tick
    pub fn x_move(&self, config: &Config) -> f32 {
        match self.direction {
            Side::Left => -config.ball_speed,
            Side::Right => config.ball_speed,
        }
    }

    pub fn flip_direction(&mut self, audio: &mut impl AudioSink) {
        self.direction = self.direction.opposite();
        audio.play(Sound::Hit);
    }

    /// Reflect off the top or bottom wall
    pub fn turn_angle(&mut self, audio: &mut impl AudioSink) {
        self.angle = -self.angle;
        audio.play(Sound::Bounce);
    }

    /// Steepen the angle after a paddle hit, keeping its sign
    pub fn steepen(&mut self, step: f32) {
        if self.angle < 0.0 {
            self.angle -= step;
        } else {
            self.angle += step;
        }
    }
}
