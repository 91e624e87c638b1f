use crate::{Ball, Config, Horizontal, Paddle, PaddleIntent, Side, Vertical};
use hecs::World;

/// Keep a side's paddle inside the field
pub fn clamp_paddle(world: &mut World, config: &Config, side: Side) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
        }
    }
}

/// Apply the user's paddle intent, then clamp
pub fn move_user_paddle(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if paddle.side == Side::User && intent.dir != Vertical::Idle {
            paddle.pos.y += intent.dir.sign() * paddle.speed;
        }
    }
    clamp_paddle(world, config, Side::User);
}

/// Move ball along its current directions
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.move_y != Vertical::Idle {
            ball.pos.y += (ball.speed / 1.5) * ball.move_y.sign();
        }
        if ball.move_x != Horizontal::Idle {
            ball.pos.x += ball.speed * ball.move_x.sign();
        }
    }
}
