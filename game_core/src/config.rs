use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_x_offset: f32,
    pub user_paddle_speed: f32,
    pub opponent_paddle_speed: f32,
    pub ball_width: f32,
    pub ball_height: f32,
    pub ball_speed: f32,
    pub serve_margin: f32,
    pub score_to_win: u8,
    pub serve_delay_ms: f64,
    pub restart_delay_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_x_offset: Params::PADDLE_X_OFFSET,
            user_paddle_speed: Params::USER_PADDLE_SPEED,
            opponent_paddle_speed: Params::OPPONENT_PADDLE_SPEED,
            ball_width: Params::BALL_WIDTH,
            ball_height: Params::BALL_HEIGHT,
            ball_speed: Params::BALL_SPEED,
            serve_margin: Params::SERVE_MARGIN,
            score_to_win: Params::SCORE_TO_WIN,
            serve_delay_ms: Params::SERVE_DELAY_MS,
            restart_delay_ms: Params::RESTART_DELAY_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::User => self.paddle_x_offset,
            Side::Opponent => self.field_width - self.paddle_x_offset,
        }
    }

    /// Paddle speed per step for the given side
    pub fn paddle_speed(&self, side: Side) -> f32 {
        match side {
            Side::User => self.user_paddle_speed,
            Side::Opponent => self.opponent_paddle_speed,
        }
    }

    /// Paddle top edge when vertically centred
    pub fn paddle_spawn_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle Y (top edge) to field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        if y <= 0.0 {
            0.0
        } else if y + self.paddle_height >= self.field_height {
            self.field_height - self.paddle_height
        } else {
            y
        }
    }

    /// Ball top-left corner when centred on the field
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.field_width / 2.0 - self.ball_width / 2.0,
            self.field_height / 2.0 - self.ball_height / 2.0,
        )
    }

    /// Half-open vertical range a served ball may start in
    pub fn serve_band(&self) -> (f32, f32) {
        let low = self.serve_margin.min(self.field_height / 2.0);
        let high = (self.field_height - self.serve_margin).max(low + 1.0);
        (low, high)
    }
}
