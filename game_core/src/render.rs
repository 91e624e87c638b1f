//! Frame drawing against an abstract 2D surface
//!
//! The renderer keeps no per-frame state: every call redraws the whole field
//! from the engine's current entities.

use glam::Vec2;

use crate::components::{Ball, Paddle, Side};
use crate::engine::MatchEngine;
use crate::fsm::MatchPhase;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// Drawing primitives the game needs from a 2D canvas
pub trait Surface {
    type Error;

    fn size(&self) -> Vec2;
    fn clear_rect(&mut self, pos: Vec2, size: Vec2) -> Result<(), Self::Error>;
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) -> Result<(), Self::Error>;
    fn stroke_dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: &[f32],
        color: &str,
    ) -> Result<(), Self::Error>;
    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        font: &str,
        align: TextAlign,
        color: &str,
    ) -> Result<(), Self::Error>;
}

/// Colours, fonts and layout offsets
#[derive(Debug, Clone)]
pub struct Style {
    pub background: String,
    pub paddle_color: String,
    pub ball_color: String,
    pub line_dash: [f32; 2],
    pub line_y_offset: f32,
    pub line_width: f32,
    pub line_color: String,
    pub score_font: String,
    pub score_color: String,
    pub score_x_offset: f32,
    pub score_y: f32,
    pub caption_font: String,
    pub caption_color: String,
    pub caption_y: f32,
    pub banner_size: Vec2,
    pub banner_y_offset: f32, // Box top sits this far above centre
}

impl Default for Style {
    fn default() -> Self {
        let white = "hsl(0, 100%, 100%)".to_string();
        Self {
            background: "hsl(210, 30%, 24%)".to_string(),
            paddle_color: white.clone(),
            ball_color: white.clone(),
            line_dash: [10.0, 25.0],
            line_y_offset: 70.0,
            line_width: 10.0,
            line_color: white.clone(),
            score_font: "40px Courier New".to_string(),
            score_color: white.clone(),
            score_x_offset: 300.0,
            score_y: 80.0,
            caption_font: "25px Courier New".to_string(),
            caption_color: white,
            caption_y: 50.0,
            banner_size: Vec2::new(700.0, 100.0),
            banner_y_offset: 48.0,
        }
    }
}

pub const START_PROMPT: &str = "Press Any Key To Start";
pub const WIN_BANNER: &str = "You Won! :D";
pub const LOSE_BANNER: &str = "Game Over! ;(";

/// Stateless redraw of a match
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    pub style: Style,
}

impl Renderer {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// Draw one frame
    pub fn draw<S: Surface>(&self, engine: &MatchEngine, surface: &mut S) -> Result<(), S::Error> {
        let size = surface.size();
        let style = &self.style;

        surface.clear_rect(Vec2::ZERO, size)?;
        surface.fill_rect(Vec2::ZERO, size, &style.background)?;

        self.draw_paddle(surface, &engine.paddle(Side::User))?;
        self.draw_paddle(surface, &engine.paddle(Side::Opponent))?;
        self.draw_ball(surface, &engine.ball())?;
        self.draw_divider(surface, size)?;
        self.draw_scores(surface, engine, size)?;
        self.draw_score_to_win(surface, engine, size)?;

        match engine.phase() {
            MatchPhase::Idle => self.draw_banner(surface, size, START_PROMPT),
            MatchPhase::Finished => {
                let text = if engine.winner() == Some(Side::User) {
                    WIN_BANNER
                } else {
                    LOSE_BANNER
                };
                self.draw_banner(surface, size, text)
            }
            MatchPhase::Active | MatchPhase::RoundTransition => Ok(()),
        }
    }

    fn draw_paddle<S: Surface>(&self, surface: &mut S, paddle: &Paddle) -> Result<(), S::Error> {
        surface.fill_rect(paddle.pos, paddle.size, &self.style.paddle_color)
    }

    fn draw_ball<S: Surface>(&self, surface: &mut S, ball: &Ball) -> Result<(), S::Error> {
        surface.fill_rect(ball.pos, ball.size, &self.style.ball_color)
    }

    fn draw_divider<S: Surface>(&self, surface: &mut S, size: Vec2) -> Result<(), S::Error> {
        let style = &self.style;
        let x = size.x / 2.0;
        surface.stroke_dashed_line(
            Vec2::new(x, size.y - style.line_y_offset),
            Vec2::new(x, style.line_y_offset),
            style.line_width,
            &style.line_dash,
            &style.line_color,
        )
    }

    fn draw_scores<S: Surface>(
        &self,
        surface: &mut S,
        engine: &MatchEngine,
        size: Vec2,
    ) -> Result<(), S::Error> {
        let style = &self.style;
        let score = engine.score();
        let center = size.x / 2.0;
        surface.fill_text(
            &score.user.to_string(),
            Vec2::new(center - style.score_x_offset, style.score_y),
            &style.score_font,
            TextAlign::Center,
            &style.score_color,
        )?;
        surface.fill_text(
            &score.opponent.to_string(),
            Vec2::new(center + style.score_x_offset, style.score_y),
            &style.score_font,
            TextAlign::Center,
            &style.score_color,
        )
    }

    fn draw_score_to_win<S: Surface>(
        &self,
        surface: &mut S,
        engine: &MatchEngine,
        size: Vec2,
    ) -> Result<(), S::Error> {
        let style = &self.style;
        surface.fill_text(
            &format!("Score to Win: {}", engine.config.score_to_win),
            Vec2::new(size.x / 2.0, style.caption_y),
            &style.caption_font,
            TextAlign::Center,
            &style.caption_color,
        )
    }

    fn draw_banner<S: Surface>(&self, surface: &mut S, size: Vec2, text: &str) -> Result<(), S::Error> {
        let style = &self.style;
        let center = size / 2.0;
        let corner = Vec2::new(
            center.x - style.banner_size.x / 2.0,
            center.y - style.banner_y_offset,
        );
        surface.fill_rect(corner, style.banner_size, &style.background)?;
        surface.fill_text(
            text,
            center,
            &style.score_font,
            TextAlign::Center,
            &style.score_color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, FrameInput};
    use std::convert::Infallible;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear(Vec2, Vec2),
        Rect(Vec2, Vec2, String),
        Line(Vec2, Vec2, f32, Vec<f32>),
        Text(String, Vec2, String),
    }

    struct RecordingSurface {
        size: Vec2,
        calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        fn new() -> Self {
            Self {
                size: Vec2::new(1220.0, 720.0),
                calls: Vec::new(),
            }
        }

        fn texts(&self) -> Vec<String> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Text(t, _, _) => Some(t.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        type Error = Infallible;

        fn size(&self) -> Vec2 {
            self.size
        }

        fn clear_rect(&mut self, pos: Vec2, size: Vec2) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Clear(pos, size));
            Ok(())
        }

        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Rect(pos, size, color.to_string()));
            Ok(())
        }

        fn stroke_dashed_line(
            &mut self,
            from: Vec2,
            to: Vec2,
            width: f32,
            dash: &[f32],
            _color: &str,
        ) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Line(from, to, width, dash.to_vec()));
            Ok(())
        }

        fn fill_text(
            &mut self,
            text: &str,
            pos: Vec2,
            font: &str,
            _align: TextAlign,
            _color: &str,
        ) -> Result<(), Infallible> {
            self.calls
                .push(DrawCall::Text(text.to_string(), pos, font.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_idle_frame_draw_order() {
        let engine = MatchEngine::new(Config::new(), 1);
        let renderer = Renderer::default();
        let mut surface = RecordingSurface::new();

        renderer.draw(&engine, &mut surface).unwrap();

        let style = Style::default();
        let size = Vec2::new(1220.0, 720.0);
        let user = engine.paddle(Side::User);
        let opponent = engine.paddle(Side::Opponent);
        let ball = engine.ball();
        let expected = vec![
            DrawCall::Clear(Vec2::ZERO, size),
            DrawCall::Rect(Vec2::ZERO, size, style.background.clone()),
            DrawCall::Rect(user.pos, user.size, style.paddle_color.clone()),
            DrawCall::Rect(opponent.pos, opponent.size, style.paddle_color.clone()),
            DrawCall::Rect(ball.pos, ball.size, style.ball_color.clone()),
            DrawCall::Line(
                Vec2::new(610.0, 650.0),
                Vec2::new(610.0, 70.0),
                10.0,
                vec![10.0, 25.0],
            ),
            DrawCall::Text("0".into(), Vec2::new(310.0, 80.0), style.score_font.clone()),
            DrawCall::Text("0".into(), Vec2::new(910.0, 80.0), style.score_font.clone()),
            DrawCall::Text(
                "Score to Win: 3".into(),
                Vec2::new(610.0, 50.0),
                style.caption_font.clone(),
            ),
            DrawCall::Rect(
                Vec2::new(260.0, 312.0),
                Vec2::new(700.0, 100.0),
                style.background.clone(),
            ),
            DrawCall::Text(
                START_PROMPT.into(),
                Vec2::new(610.0, 360.0),
                style.score_font.clone(),
            ),
        ];
        assert_eq!(surface.calls, expected);
    }

    #[test]
    fn test_active_frame_has_no_banner() {
        let mut engine = MatchEngine::new(Config::new(), 1);
        engine.update(
            FrameInput {
                key_pressed: true,
                ..Default::default()
            },
            0.0,
        );
        let mut surface = RecordingSurface::new();

        Renderer::default().draw(&engine, &mut surface).unwrap();

        assert_eq!(surface.texts(), vec!["0", "0", "Score to Win: 3"]);
    }

    #[test]
    fn test_finished_frame_shows_result() {
        let mut engine = MatchEngine::new(Config::new(), 1);
        engine.update(
            FrameInput {
                key_pressed: true,
                ..Default::default()
            },
            0.0,
        );
        for (_e, paddle) in engine.world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Opponent {
                paddle.score = 2;
            }
        }
        for (_e, ball) in engine.world.query_mut::<&mut Ball>() {
            ball.pos.x = 0.0;
        }
        engine.update(FrameInput::default(), 16.0);
        let mut surface = RecordingSurface::new();

        Renderer::default().draw(&engine, &mut surface).unwrap();

        let texts = surface.texts();
        assert_eq!(texts.last().map(String::as_str), Some(LOSE_BANNER));
        assert_eq!(texts[1], "3", "Opponent score shown");
    }
}
