/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 360.0;
    pub const TITLE: &str = "Pong v0.2";

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = Self::FIELD_HEIGHT / 5.0; // 72
    pub const PADDLE_SPEED: f32 = 4.5; // units per tick
    pub const PADDLE_INSET: f32 = 15.0; // distance of paddle center from the side edge

    // Ball
    pub const BALL_WIDTH: f32 = 10.0;
    pub const BALL_HEIGHT: f32 = 10.0;
    pub const BALL_SPEED: f32 = 5.0; // units per tick along x
    pub const ANGLE_STEP: f32 = 10.0; // degrees added on every paddle hit
    pub const SERVE_ANGLE_MIN: u32 = 1;
    pub const SERVE_ANGLE_MAX: u32 = 44;

    // Score
    pub const FLASH_DURATION: u32 = 7; // draw calls
    pub const SCORE_Y: f32 = 10.0;
    pub const FONT_HEIGHT: f32 = Self::FIELD_HEIGHT / 10.0;
    pub const FONT_FACE: &str = "Verdana";

    // Colors (0xAARRGGBB)
    pub const FOREGROUND: u32 = 0xFF31_DE31;
    pub const BACKGROUND: u32 = 0xFF00_0000;
    pub const FLASH: u32 = 0x7FFF_0000;

    /// Seed used when the host does not supply one
    pub const DEFAULT_SEED: u64 = 12345;
}
