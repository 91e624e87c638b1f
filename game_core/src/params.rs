/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (canvas units)
    pub const FIELD_WIDTH: f32 = 1220.0;
    pub const FIELD_HEIGHT: f32 = 720.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 67.0;
    pub const PADDLE_X_OFFSET: f32 = 90.0;
    pub const USER_PADDLE_SPEED: f32 = 10.0; // units per step
    pub const OPPONENT_PADDLE_SPEED: f32 = 7.69; // units per step

    // Ball
    pub const BALL_WIDTH: f32 = 16.0;
    pub const BALL_HEIGHT: f32 = 16.0;
    pub const BALL_SPEED: f32 = 9.0; // units per step, vertical is speed / 1.5

    // Serve: ball starts inside [margin, height - margin)
    pub const SERVE_MARGIN: f32 = 200.0;

    // Score
    pub const SCORE_TO_WIN: u8 = 3;

    // Timers
    pub const SERVE_DELAY_MS: f64 = 1000.0;
    pub const RESTART_DELAY_MS: f64 = 3000.0;
}
