use crate::Params;

/// Receives goal notifications from the ball
pub trait Scorer {
    fn score_up_left(&mut self);
    fn score_up_right(&mut self);
}

/// Score tally plus the red flash shown after a goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    left: u32,
    right: u32,
    flash: u32, // draw calls left to show the flash overlay
    flash_duration: u32,
}

impl ScoreBoard {
    pub fn new(flash_duration: u32) -> Self {
        Self {
            flash_duration,
            ..Self::default()
        }
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn flash(&self) -> u32 {
        self.flash
    }

    pub fn is_flashing(&self) -> bool {
        self.flash > 0
    }

    /// Count down one rendered flash frame
    pub fn decay_flash(&mut self) {
        self.flash = self.flash.saturating_sub(1);
    }
}

impl Scorer for ScoreBoard {
    fn score_up_left(&mut self) {
        self.left += 1;
        self.flash = self.flash_duration;
    }

    fn score_up_right(&mut self) {
        self.right += 1;
        self.flash = self.flash_duration;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(Params::DEFAULT_SEED)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}
