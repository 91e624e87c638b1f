use hecs::World;

use crate::fsm::{MatchAction, MatchFsm, MatchPhase};
use crate::input::FrameInput;
use crate::systems::*;
use crate::{
    create_ball, create_paddle, Ball, Config, Countdown, Events, GameRng, Paddle, PaddleIntent,
    RoundState, Score, Side, Sound, Time,
};

/// Outcome of one `MatchEngine::update`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    /// Phase after the step
    pub phase: MatchPhase,
    /// Clips to play, in the order they were triggered
    pub sounds: Vec<Sound>,
    /// Side that won a point this step
    pub scored: Option<Side>,
    /// Set only on the step that ended the match
    pub winner: Option<Side>,
}

/// Owns a whole match: entities, score, timers and phase
pub struct MatchEngine {
    pub world: World,
    pub config: Config,
    pub events: Events,
    pub round: RoundState,
    pub rng: GameRng,
    restart: Countdown,
    fsm: MatchFsm,
    winner: Option<Side>,
}

impl MatchEngine {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        spawn_entities(&mut world, &config);

        Self {
            world,
            config,
            events: Events::new(),
            round: RoundState::new(),
            rng: GameRng::new(seed),
            restart: Countdown::new(),
            fsm: MatchFsm::new(),
            winner: None,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.fsm.state()
    }

    /// Winner of the current match, once finished
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn previous_loser(&self) -> Option<Side> {
        self.round.previous_loser
    }

    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(&self.config))
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
            .unwrap_or_else(|| {
                Paddle::new(side, self.config.paddle_speed(side), &self.config)
            })
    }

    pub fn score(&self) -> Score {
        Score {
            user: self.paddle(Side::User).score,
            opponent: self.paddle(Side::Opponent).score,
        }
    }

    /// Advance the match by one frame
    pub fn update(&mut self, input: FrameInput, now_ms: f64) -> FrameResult {
        self.events.clear();
        let time = Time::new(now_ms);
        let mut finished_now = None;

        self.apply_user_intent(&input);

        if self.phase() == MatchPhase::Idle && input.key_pressed {
            self.fsm.transition(MatchAction::KeyPressed);
            // Opening serve is due immediately
            self.round.serve.start(now_ms, 0.0);
            log::info!("Match started");
        }

        if self.fsm.is_playing() {
            finished_now = self.step(&time);
        } else if self.fsm.is_finished() && self.restart.is_due(now_ms) {
            self.restart_match();
        }

        FrameResult {
            phase: self.phase(),
            sounds: self.events.sounds.clone(),
            scored: self.events.scored,
            winner: finished_now,
        }
    }

    /// One physics step; returns the winner if the match ended on it
    fn step(&mut self, time: &Time) -> Option<Side> {
        let config = &self.config;

        // 1. Ball left the field: score, park a new ball
        check_scoring(
            &mut self.world,
            config,
            time,
            &mut self.round,
            &mut self.events,
        );
        if self.events.scored.is_some() {
            self.fsm.transition(MatchAction::BallExited);
        }

        // 2. Top/bottom reflection
        check_wall_collisions(&mut self.world, config, &mut self.events);

        // 3. Serve once the round timer is due
        serve_ball(
            &mut self.world,
            config,
            time,
            &mut self.round,
            &mut self.rng,
            &mut self.events,
        );
        if self.events.served && self.fsm.can_transition(MatchAction::ServeDue) {
            self.fsm.transition(MatchAction::ServeDue);
        }

        // 4-5. User paddle
        move_user_paddle(&mut self.world, config);

        // 6. Ball
        move_ball(&mut self.world);

        // 7-8. Opponent paddle
        move_opponent_paddle(&mut self.world, config);

        // 9. Paddle bounces
        check_paddle_collisions(&mut self.world, &mut self.events);

        // 10. Win check
        let winner = self.score().has_winner(self.config.score_to_win)?;
        self.fsm.transition(MatchAction::ScoreReached);
        self.winner = Some(winner);
        self.restart
            .start(time.now_ms, self.config.restart_delay_ms);
        self.events.play(match winner {
            Side::User => Sound::Win,
            Side::Opponent => Sound::GameOver,
        });
        log::info!("Match over, {:?} wins ({:?})", winner, self.score());
        Some(winner)
    }

    fn apply_user_intent(&mut self, input: &FrameInput) {
        for (_entity, (paddle, intent)) in self.world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.side == Side::User {
                intent.dir = input.paddle;
            }
        }
    }

    /// Fresh match back in Idle
    fn restart_match(&mut self) {
        self.world.clear();
        spawn_entities(&mut self.world, &self.config);
        self.round = RoundState::new();
        self.restart.clear();
        self.winner = None;
        self.fsm.transition(MatchAction::RestartDue);
        log::info!("Match reset, waiting for a key");
    }
}

fn spawn_entities(world: &mut World, config: &Config) {
    create_paddle(world, Side::User, config);
    create_paddle(world, Side::Opponent, config);
    create_ball(world, Ball::new(config));
}
