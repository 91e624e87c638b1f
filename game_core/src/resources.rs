use crate::components::Side;

/// Time resource for the current step
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now_ms: f64, // Caller-supplied clock, milliseconds
}

impl Time {
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub user: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::User => self.user,
            Side::Opponent => self.opponent,
        }
    }

    pub fn has_winner(&self, score_to_win: u8) -> Option<Side> {
        if self.user == score_to_win {
            Some(Side::User)
        } else if self.opponent == score_to_win {
            Some(Side::Opponent)
        } else {
            None
        }
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
        Self::new(12345)
    }
}

/// Audio cues, one per clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    PaddleHit,
    Score,
    Win,
    GameOver,
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub scored: Option<Side>,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub served: bool,
    pub sounds: Vec<Sound>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scored = None;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.served = false;
        self.sounds.clear();
    }

    pub fn play(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }
}

/// Deadline timer replacing deferred callbacks (serve, restart)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Countdown {
    pub due_at: Option<f64>, // None = unset
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now_ms: f64, delay_ms: f64) {
        self.due_at = Some(now_ms + delay_ms);
    }

    pub fn clear(&mut self) {
        self.due_at = None;
    }

    pub fn is_set(&self) -> bool {
        self.due_at.is_some()
    }

    pub fn is_due(&self, now_ms: f64) -> bool {
        matches!(self.due_at, Some(due) if now_ms >= due)
    }
}

/// Between-round bookkeeping
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundState {
    pub previous_loser: Option<Side>, // Decides serve direction
    pub serve: Countdown,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }
}
