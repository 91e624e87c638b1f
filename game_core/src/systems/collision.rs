use crate::field::{paddle_bounce_x, paddle_hit_zone};
use crate::{Ball, Config, Events, Horizontal, Paddle, Side, Sound, Vertical};
use hecs::World;

/// Flip vertical direction at the top and bottom edges.
///
/// The ball is not pushed back inside; an overshooting ball is pulled back by
/// the reflected movement on the following steps.
pub fn check_wall_collisions(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 {
            ball.move_y = Vertical::Down;
            events.ball_hit_wall = true;
        }
        if ball.pos.y + ball.size.y >= config.field_height {
            ball.move_y = Vertical::Up;
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off either paddle.
///
/// Both paddles are tested every step, user first, against the ball as left by
/// the previous test.
pub fn check_paddle_collisions(world: &mut World, events: &mut Events) {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| match p.side {
        Side::User => 0,
        Side::Opponent => 1,
    });

    for paddle in paddles {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            if !paddle_hit_zone(&paddle, ball).contains(ball.pos) {
                continue;
            }

            ball.pos.x = paddle_bounce_x(&paddle, ball);
            ball.move_x = match paddle.side {
                Side::User => Horizontal::Right,
                Side::Opponent => Horizontal::Left,
            };
            events.ball_hit_paddle = true;
            events.play(Sound::PaddleHit);
        }
    }
}
