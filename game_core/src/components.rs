use glam::Vec2;

use crate::config::Config;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left paddle, keyboard controlled
    User,
    /// Right paddle, heuristic controlled
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::User => Side::Opponent,
            Side::Opponent => Side::User,
        }
    }
}

/// Vertical movement intent, shared by paddles and the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vertical {
    #[default]
    Idle,
    Up,
    Down,
}

impl Vertical {
    /// -1 = up, 0 = idle, 1 = down
    pub fn sign(self) -> f32 {
        match self {
            Vertical::Idle => 0.0,
            Vertical::Up => -1.0,
            Vertical::Down => 1.0,
        }
    }
}

/// Horizontal movement intent of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizontal {
    #[default]
    Idle,
    Left,
    Right,
}

impl Horizontal {
    /// -1 = left, 0 = idle, 1 = right
    pub fn sign(self) -> f32 {
        match self {
            Horizontal::Idle => 0.0,
            Horizontal::Left => -1.0,
            Horizontal::Right => 1.0,
        }
    }
}

/// Paddle component - represents one side's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // Top-left corner, x fixed per side
    pub size: Vec2, // Width, height
    pub speed: f32, // Units per step
    pub score: u8,
}

impl Paddle {
    pub fn new(side: Side, speed: f32, config: &Config) -> Self {
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), config.paddle_spawn_y()),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            speed,
            score: 0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: Vertical,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,  // Top-left corner
    pub size: Vec2, // Width, height
    pub move_x: Horizontal,
    pub move_y: Vertical,
    pub speed: f32,
}

impl Ball {
    /// Centred, motionless ball waiting to be served
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.ball_spawn(),
            size: Vec2::new(config.ball_width, config.ball_height),
            move_x: Horizontal::Idle,
            move_y: Vertical::Idle,
            speed: config.ball_speed,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.move_x != Horizontal::Idle || self.move_y != Vertical::Idle
    }
}
