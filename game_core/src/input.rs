//! Keyboard input handling

use crate::components::Vertical;

/// `KeyboardEvent.key` values that move the paddle
pub const UP_KEYS: [&str; 2] = ["w", "ArrowUp"];
pub const DOWN_KEYS: [&str; 2] = ["s", "ArrowDown"];

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub paddle: Vertical,
    /// Any key went down since the previous frame
    pub key_pressed: bool,
}

/// Maps raw key events to the user's paddle intent
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    intent: Vertical,
    key_pressed: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event
    pub fn key_down(&mut self, key: &str) {
        self.key_pressed = true;
        if UP_KEYS.contains(&key) {
            self.intent = Vertical::Up;
        } else if DOWN_KEYS.contains(&key) {
            self.intent = Vertical::Down;
        }
    }

    /// Handle key up event.
    ///
    /// Releasing any key stops the paddle, even one that was not steering it.
    pub fn key_up(&mut self, _key: &str) {
        self.intent = Vertical::Idle;
    }

    pub fn intent(&self) -> Vertical {
        self.intent
    }

    /// Snapshot for this frame; clears the key-pressed latch
    pub fn take_frame_input(&mut self) -> FrameInput {
        let input = FrameInput {
            paddle: self.intent,
            key_pressed: self.key_pressed,
        };
        self.key_pressed = false;
        input
    }
}
