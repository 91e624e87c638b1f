use crate::{Ball, Config, Horizontal, Paddle, Side};
use hecs::World;

/// Track the ball with the opponent paddle, then clamp.
///
/// Full tracking (speed / 1.5) only while the ball is heading right; otherwise
/// it drifts at speed / 4.
pub fn move_opponent_paddle(world: &mut World, config: &Config) {
    let ball_data = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| (ball.pos.y, ball.move_x));

    let Some((ball_y, ball_move_x)) = ball_data else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }

        let step = if ball_move_x == Horizontal::Right {
            paddle.speed / 1.5
        } else {
            paddle.speed / 4.0
        };
        let target = ball_y - paddle.size.y / 2.0;

        if paddle.pos.y > target {
            paddle.pos.y -= step;
        }
        // Re-compared after the first move, so an overshoot is undone
        if paddle.pos.y < target {
            paddle.pos.y += step;
        }
    }

    super::clamp_paddle(world, config, Side::Opponent);
}
