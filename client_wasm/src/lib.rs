//! Browser host for Pong
//!
//! Draws on an HTML canvas with the 2D context, plays sounds through
//! `<audio>` elements and reads DOM keyboard events. The page calls
//! [`PongApp::frame`] from `requestAnimationFrame`.

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod input;

#[cfg(target_arch = "wasm32")]
pub use app::*;

#[cfg(target_arch = "wasm32")]
mod app {
    use game_core::{Config, Flow, Params, Pong};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use crate::audio::WebAudio;
    use crate::canvas::CanvasFrame;
    use crate::input::KeyState;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {}", e)));
        }
    }

    /// Window title for the page
    #[wasm_bindgen]
    pub fn title() -> String {
        Params::TITLE.to_owned()
    }

    /// A running game bound to one canvas
    #[wasm_bindgen]
    pub struct PongApp {
        game: Pong,
        canvas: CanvasFrame,
        audio: WebAudio,
        keys: KeyState,
        closed: bool,
    }

    #[wasm_bindgen]
    impl PongApp {
        /// Size `canvas` to the field and load sounds from `asset_root`
        #[wasm_bindgen(constructor)]
        pub fn new(canvas: HtmlCanvasElement, asset_root: &str) -> Result<PongApp, JsValue> {
            let config = Config::new();
            canvas.set_width(config.field_width as u32);
            canvas.set_height(config.field_height as u32);

            let ctx = canvas
                .get_context("2d")?
                .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| JsValue::from_str("2d context has an unexpected type"))?;

            let frame = CanvasFrame::new(ctx, config.field_width, config.field_height);
            let audio = WebAudio::load(asset_root)?;
            let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;

            Ok(Self {
                game: Pong::new(config, seed),
                canvas: frame,
                audio,
                keys: KeyState::new(),
                closed: false,
            })
        }

        /// Feed a `keydown` event; default browser handling is suppressed for game keys
        pub fn key_down(&mut self, event: &KeyboardEvent) {
            if self.keys.handle_key_down(&event.key()) {
                event.prevent_default();
            }
        }

        pub fn key_up(&mut self, event: &KeyboardEvent) {
            if self.keys.handle_key_up(&event.key()) {
                event.prevent_default();
            }
        }

        /// Forget held keys when the page loses focus
        pub fn blur(&mut self) {
            self.keys.release_all();
        }

        /// One update and one draw. Returns false once the game asked to close.
        pub fn frame(&mut self) -> bool {
            if self.closed {
                return false;
            }

            if self.game.update(&self.keys, &mut self.audio) == Flow::Close {
                self.closed = true;
                return false;
            }

            self.canvas.clear(self.game.config().background);
            self.game.draw(&mut self.canvas);
            true
        }

        #[wasm_bindgen(getter)]
        pub fn score_left(&self) -> u32 {
            self.game.score().left()
        }

        #[wasm_bindgen(getter)]
        pub fn score_right(&self) -> u32 {
            self.game.score().right()
        }
    }
}
