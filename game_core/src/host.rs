//! Capabilities the windowing/media host provides to the game
//!
//! The core never talks to a window, a GPU or a sound device directly. The
//! host implements these traits and calls [`crate::Pong::update`] followed by
//! [`crate::Pong::draw`] once per frame.

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from a packed `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

/// Keys the game polls each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Escape,
}

/// Sound effects triggered by the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Direction flip (paddle hit or serve after a goal)
    Hit,
    /// Top or bottom wall reflection
    Bounce,
    /// Ball left the field
    Out,
}

/// What the host should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Close,
}

/// Boolean key-state queries
pub trait Keyboard {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Immediate-mode drawing primitives
pub trait Canvas {
    fn draw_line(&mut self, x0: f32, y0: f32, c0: Color, x1: f32, y1: f32, c1: Color);

    /// Vertices are top-left, top-right, bottom-left, bottom-right
    #[allow(clippy::too_many_arguments)]
    fn draw_quad(
        &mut self,
        x0: f32,
        y0: f32,
        c0: Color,
        x1: f32,
        y1: f32,
        c1: Color,
        x2: f32,
        y2: f32,
        c2: Color,
        x3: f32,
        y3: f32,
        c3: Color,
    );

    fn text_width(&self, text: &str) -> f32;

    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale_x: f32, scale_y: f32, color: Color);

    /// Solid axis-aligned rectangle centered on `(cx, cy)`
    fn fill_centered(&mut self, cx: f32, cy: f32, half_w: f32, half_h: f32, color: Color) {
        self.draw_quad(
            cx - half_w,
            cy - half_h,
            color,
            cx + half_w,
            cy - half_h,
            color,
            cx - half_w,
            cy + half_h,
            color,
            cx + half_w,
            cy + half_h,
            color,
        );
    }
}

/// Fire-and-forget sound playback
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
}

/// Audio sink that drops every sound
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: Sound) {}
}
