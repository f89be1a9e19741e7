//! Test doubles for the host capabilities

use std::collections::HashSet;

use crate::{AudioSink, Canvas, Color, Key, Keyboard, Sound};

/// Records every sound played
#[derive(Debug, Default)]
pub struct SoundLog(pub Vec<Sound>);

impl SoundLog {
    pub fn count(&self, sound: Sound) -> usize {
        self.0.iter().filter(|s| **s == sound).count()
    }
}

impl AudioSink for SoundLog {
    fn play(&mut self, sound: Sound) {
        self.0.push(sound);
    }
}

/// Keyboard with a fixed set of held keys
#[derive(Debug, Default)]
pub struct HeldKeys(pub HashSet<Key>);

impl HeldKeys {
    pub fn with(keys: &[Key]) -> Self {
        Self(keys.iter().copied().collect())
    }
}

impl Keyboard for HeldKeys {
    fn is_key_down(&self, key: Key) -> bool {
        self.0.contains(&key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Line { x0: f32, y0: f32, x1: f32, y1: f32, color: Color },
    Quad { min: (f32, f32), max: (f32, f32), color: Color },
    Text { text: String, x: f32, y: f32, color: Color },
}

/// Canvas that records draw calls; every glyph is 10 units wide
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn quads_colored(&self, color: Color) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Quad { color: q, .. } if *q == color))
            .count()
    }

    pub fn texts(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Text { .. }))
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, x0: f32, y0: f32, c0: Color, x1: f32, y1: f32, _c1: Color) {
        self.calls.push(DrawCall::Line {
            x0,
            y0,
            x1,
            y1,
            color: c0,
        });
    }

    fn draw_quad(
        &mut self,
        x0: f32,
        y0: f32,
        c0: Color,
        _x1: f32,
        _y1: f32,
        _c1: Color,
        _x2: f32,
        _y2: f32,
        _c2: Color,
        x3: f32,
        y3: f32,
        _c3: Color,
    ) {
        self.calls.push(DrawCall::Quad {
            min: (x0, y0),
            max: (x3, y3),
            color: c0,
        });
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _sx: f32, _sy: f32, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            x,
            y,
            color,
        });
    }
}
