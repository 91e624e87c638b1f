use crate::{Ball, Config, Events, Paddle, RoundState, Side, Sound, Time};
use hecs::World;

/// Side that scores if the ball has left through the left or right boundary
fn exited_boundary(ball: &Ball, config: &Config) -> Option<Side> {
    if ball.pos.x <= 0.0 {
        // Conceded by the user
        Some(Side::Opponent)
    } else if ball.pos.x + ball.size.x >= config.field_width {
        Some(Side::User)
    } else {
        None
    }
}

/// Check if ball left the field; award the point and park a fresh ball
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    time: &Time,
    round: &mut RoundState,
    events: &mut Events,
) {
    let mut scorer = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = exited_boundary(ball, config) {
            *ball = Ball::new(config);
            scorer = Some(side);
        }
    }

    let Some(scorer) = scorer else {
        return;
    };

    let mut new_score = 0;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score += 1;
            new_score = paddle.score;
        }
    }

    round.previous_loser = Some(scorer.other());
    round.serve.start(time.now_ms, config.serve_delay_ms);
    events.scored = Some(scorer);

    // The win cue replaces the regular one
    if new_score != config.score_to_win {
        events.play(Sound::Score);
    }

    log::info!("{:?} scored, now at {}", scorer, new_score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Horizontal, Vertical};

    fn setup_world() -> (hecs::World, Config, RoundState, Events) {
        let config = Config::new();
        let mut world = hecs::World::new();
        create_paddle(&mut world, Side::User, &config);
        create_paddle(&mut world, Side::Opponent, &config);
        (world, config, RoundState::new(), Events::new())
    }

    fn moving_ball(config: &Config, x: f32) -> Ball {
        let mut ball = Ball::new(config);
        ball.pos.x = x;
        ball.move_x = Horizontal::Left;
        ball.move_y = Vertical::Down;
        ball
    }

    fn score_of(world: &hecs::World, side: Side) -> u8 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.score)
            .unwrap()
    }

    #[test]
    fn test_opponent_scores_when_ball_exits_left() {
        let (mut world, config, mut round, mut events) = setup_world();
        create_ball(&mut world, moving_ball(&config, 0.0));

        check_scoring(&mut world, &config, &Time::new(2000.0), &mut round, &mut events);

        assert_eq!(score_of(&world, Side::Opponent), 1, "Opponent should score");
        assert_eq!(score_of(&world, Side::User), 0, "User should not score");
        assert_eq!(events.scored, Some(Side::Opponent));
        assert_eq!(round.previous_loser, Some(Side::User));
        assert_eq!(events.sounds, vec![Sound::Score]);
    }

    #[test]
    fn test_user_scores_when_ball_exits_right() {
        let (mut world, config, mut round, mut events) = setup_world();
        let x = config.field_width - config.ball_width;
        create_ball(&mut world, moving_ball(&config, x));

        check_scoring(&mut world, &config, &Time::new(0.0), &mut round, &mut events);

        assert_eq!(score_of(&world, Side::User), 1, "User should score");
        assert_eq!(score_of(&world, Side::Opponent), 0);
        assert_eq!(round.previous_loser, Some(Side::Opponent));
    }

    #[test]
    fn test_ball_resets_and_serve_timer_starts() {
        let (mut world, config, mut round, mut events) = setup_world();
        create_ball(&mut world, moving_ball(&config, -30.0));

        check_scoring(&mut world, &config, &Time::new(4000.0), &mut round, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, config.ball_spawn(), "Ball should be re-centred");
            assert!(!ball.is_moving(), "Ball should wait for the serve");
        }
        assert_eq!(round.serve.due_at, Some(5000.0));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut round, mut events) = setup_world();
        create_ball(&mut world, moving_ball(&config, 1.0));

        check_scoring(&mut world, &config, &Time::new(0.0), &mut round, &mut events);

        assert_eq!(score_of(&world, Side::User), 0);
        assert_eq!(score_of(&world, Side::Opponent), 0);
        assert!(events.scored.is_none());
        assert!(!round.serve.is_set());
        assert!(events.sounds.is_empty());
    }

    #[test]
    fn test_winning_point_suppresses_score_sound() {
        let (mut world, config, mut round, mut events) = setup_world();
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.score = config.score_to_win - 1;
        }
        create_ball(&mut world, moving_ball(&config, 0.0));

        check_scoring(&mut world, &config, &Time::new(0.0), &mut round, &mut events);

        assert_eq!(score_of(&world, Side::Opponent), config.score_to_win);
        assert!(events.sounds.is_empty(), "Win cue is emitted elsewhere");
    }
}
