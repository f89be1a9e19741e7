//! `AudioSink` over HTML audio elements

use game_core::{AudioSink, Sound};
use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

pub struct WebAudio {
    hit: HtmlAudioElement,
    bounce: HtmlAudioElement,
    out: HtmlAudioElement,
}

fn load(asset_root: &str, file: &str) -> Result<HtmlAudioElement, JsValue> {
    let url = format!("{}/{}", asset_root.trim_end_matches('/'), file);
    let element = HtmlAudioElement::new_with_src(&url)
        .map_err(|e| JsValue::from_str(&format!("Failed to load {}: {:?}", url, e)))?;
    element.set_preload("auto");
    Ok(element)
}

impl WebAudio {
    pub fn load(asset_root: &str) -> Result<Self, JsValue> {
        Ok(Self {
            hit: load(asset_root, "ping.wav")?,
            bounce: load(asset_root, "pong.wav")?,
            out: load(asset_root, "out.wav")?,
        })
    }
}

impl AudioSink for WebAudio {
    fn play(&mut self, sound: Sound) {
        let element = match sound {
            Sound::Hit => &self.hit,
            Sound::Bounce => &self.bounce,
            Sound::Out => &self.out,
        };
        element.set_current_time(0.0);
        // The returned promise is dropped: playback is fire-and-forget.
        if let Err(e) = element.play() {
            log::warn!("could not play {:?}: {:?}", sound, e);
        }
    }
}
