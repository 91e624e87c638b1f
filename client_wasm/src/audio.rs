//! Fire-and-forget sound clips

use game_core::Sound;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

pub struct AudioBank {
    paddle_hit: HtmlAudioElement,
    score: HtmlAudioElement,
    win: HtmlAudioElement,
    game_over: HtmlAudioElement,
}

impl AudioBank {
    pub fn load(base_url: &str) -> Result<Self, JsValue> {
        let clip = |name: &str| HtmlAudioElement::new_with_src(&format!("{base_url}/{name}"));
        Ok(Self {
            paddle_hit: clip("paddle-ball-collision.wav")?,
            score: clip("score.wav")?,
            win: clip("winner.wav")?,
            game_over: clip("game-over.wav")?,
        })
    }

    fn element(&self, sound: Sound) -> &HtmlAudioElement {
        match sound {
            Sound::PaddleHit => &self.paddle_hit,
            Sound::Score => &self.score,
            Sound::Win => &self.win,
            Sound::GameOver => &self.game_over,
        }
    }

    /// Start a clip; playback errors are logged, never propagated
    pub fn play(&self, sound: Sound) {
        if let Err(e) = self.element(sound).play() {
            log::warn!("Failed to play {:?}: {:?}", sound, e);
        }
    }
}
